use std::sync::Arc;

use crate::config::Config;
use crate::translate::{TraceIdGenerator, TranslatorClient, TranslatorInterface, UuidTraceIds};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<dyn TranslatorInterface>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_trace_ids(config, Arc::new(UuidTraceIds))
    }

    pub fn with_trace_ids(config: Config, trace_ids: Arc<dyn TraceIdGenerator>) -> Self {
        let translator = Arc::new(TranslatorClient::new(&config.translator, trace_ids));
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
