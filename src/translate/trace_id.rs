use uuid::Uuid;

/// Source of `X-ClientTraceId` values. Called once per outbound request.
pub trait TraceIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUID per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTraceIds;

impl TraceIdGenerator for UuidTraceIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
