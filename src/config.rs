use serde::{Deserialize, Serialize};
use anyhow::Result;

pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com/";
pub const DEFAULT_REGION: &str = "global";
pub(crate) const DEFAULT_CONFIG_NAME: &str = "translator-proxy";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub translator: TranslatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_region")]
    pub region: String,
    /// Sent as `Ocp-Apim-Subscription-Key`. Left empty when unset; upstream rejects the call.
    #[serde(default, skip_serializing)]
    pub api_key: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

impl Config {
    /// Defaults, then the optional config file, then `TRANSLATOR__*` env vars.
    /// `API_KEY` wins over everything for the subscription key.
    pub fn load(path: &str) -> Result<Self> {
        Self::load_from(path, env_source(), std::env::var("API_KEY").ok())
    }

    fn load_from(path: &str, env: ::config::Environment, api_key: Option<String>) -> Result<Self> {
        let settings = ::config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("translator.endpoint", DEFAULT_ENDPOINT)?
            .set_default("translator.region", DEFAULT_REGION)?
            .add_source(::config::File::with_name(path).required(false))
            .add_source(env)
            .set_override_option("translator.api_key", api_key)?
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }
}

fn env_source() -> ::config::Environment {
    ::config::Environment::with_prefix("TRANSLATOR").separator("__")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            region: default_region(),
            api_key: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;

    /// `TRANSLATOR__*` layer fed from `vars` instead of the process environment.
    fn env_with(vars: &[(&str, &str)]) -> ::config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    fn write_config(contents: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("translator-proxy-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("proxy.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", contents).unwrap();
        (dir, path)
    }

    #[test]
    fn file_values_override_defaults() {
        let (dir, path) = write_config("[server]\nport = 8088\n\n[translator]\nregion = \"westeurope\"");

        let config = Config::load_from(path.to_str().unwrap(), env_with(&[]), None).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.translator.region, "westeurope");
        assert_eq!(config.translator.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.translator.api_key, "");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config =
            Config::load_from("does-not-exist/translator-proxy", env_with(&[]), None).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.translator.region, DEFAULT_REGION);
        assert_eq!(config.translator.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn env_vars_override_file() {
        let (dir, path) = write_config("[server]\nport = 8088\n\n[translator]\nregion = \"westeurope\"");
        let env = env_with(&[
            ("TRANSLATOR__SERVER__PORT", "8089"),
            ("TRANSLATOR__TRANSLATOR__REGION", "westus"),
        ]);

        let config = Config::load_from(path.to_str().unwrap(), env, None).unwrap();
        assert_eq!(config.server.port, 8089);
        assert_eq!(config.translator.region, "westus");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn api_key_override_beats_prefixed_env_var() {
        let env = env_with(&[("TRANSLATOR__TRANSLATOR__API_KEY", "from-prefixed")]);
        let config = Config::load_from(
            "does-not-exist/translator-proxy",
            env,
            Some("from-api-key".to_string()),
        )
        .unwrap();
        assert_eq!(config.translator.api_key, "from-api-key");
    }

    #[test]
    fn prefixed_env_var_sets_key_without_override() {
        let env = env_with(&[("TRANSLATOR__TRANSLATOR__API_KEY", "from-prefixed")]);
        let config = Config::load_from("does-not-exist/translator-proxy", env, None).unwrap();
        assert_eq!(config.translator.api_key, "from-prefixed");
    }

    #[test]
    fn api_key_is_not_serialized() {
        let translator = TranslatorConfig {
            api_key: "secret".to_string(),
            ..TranslatorConfig::default()
        };
        let value = serde_json::to_value(&translator).unwrap();
        assert!(value.get("api_key").is_none());
    }
}
