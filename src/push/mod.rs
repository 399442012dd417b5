mod fcm;

pub use fcm::FcmClient;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PushError {
    #[error("Push transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Push rejected by gateway (status {status}): {body}")]
    Rejected { status: u16, body: String },
}

/// One send call per notification, fire-and-forget.
///
/// No batching, no retries, no delivery receipts; whether to isolate or
/// propagate a failure is the caller's decision.
#[async_trait]
pub trait PushGateway: Send + Sync {
    async fn send(
        &self,
        token: &str,
        title: &str,
        body: &str,
        data: &HashMap<String, String>,
    ) -> Result<(), PushError>;
}
