pub mod client;
pub mod interface;
pub mod trace_id;

pub use client::TranslatorClient;
pub use interface::{
    DetectionRequest, DictionaryRequest, Translation, TranslationRequest, TranslatorInterface,
};
pub use trace_id::{TraceIdGenerator, UuidTraceIds};
