use axum::Json;
use utoipa::OpenApi;

use crate::handlers;
use crate::translate::{DetectionRequest, DictionaryRequest, Translation, TranslationRequest};

#[derive(OpenApi)]
#[openapi(
    info(title = "translator-proxy", description = "Proxy for the Microsoft Translator API"),
    paths(handlers::translate, handlers::detect, handlers::dictionary),
    components(schemas(TranslationRequest, DetectionRequest, DictionaryRequest, Translation)),
    tags((name = "translator", description = "Translation, detection and dictionary lookup"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_all_three_endpoints() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        for path in ["/translate", "/detect", "/dictionary"] {
            assert!(paths[path]["post"].is_object(), "missing {}", path);
        }
        assert!(doc["components"]["schemas"]["TranslationRequest"].is_object());
    }
}
