// src/provider/mod.rs — Call provider layer

pub mod bolna;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::status::RemoteStatus;
use crate::infra::errors::VoicedialError;

/// Seam to the outbound-call service. The controller only ever talks to
/// this trait, so tests can script the provider without any network.
#[async_trait]
pub trait CallProvider: Send + Sync {
    fn id(&self) -> &str;

    /// Request an outbound call. The provider must return an execution id
    /// for every accepted call.
    async fn start_call(&self, request: StartCall) -> Result<CallAccepted, VoicedialError>;

    /// Look up the current status of a previously accepted call.
    async fn execution_status(&self, execution_id: &str)
        -> Result<ExecutionStatus, VoicedialError>;

    /// Ask the provider to terminate the call. Best-effort: callers may
    /// ignore the outcome.
    async fn stop_call(&self, execution_id: &str) -> Result<(), VoicedialError>;
}

/// Call-creation request (`POST /call`).
#[derive(Debug, Clone, Serialize)]
pub struct StartCall {
    pub agent_id: String,
    pub recipient_phone_number: String,
    pub from_phone_number: String,
    pub user_data: CallUserData,
}

/// Metadata attached to the call for the provider's records.
#[derive(Debug, Clone, Serialize)]
pub struct CallUserData {
    pub agent_name: String,
    pub call_type: String,
    /// RFC 3339 submission timestamp.
    pub timestamp: String,
    /// Sent as the string "true"; the provider treats user_data values as
    /// opaque strings.
    pub demo_mode: String,
}

/// Successful call-creation response.
#[derive(Debug, Clone)]
pub struct CallAccepted {
    pub execution_id: String,
    /// Initial status when the provider reports one (typically `queued`).
    pub status: Option<RemoteStatus>,
}

/// Status-lookup response (`GET /executions/{id}`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExecutionStatus {
    pub status: RemoteStatus,
    /// Authoritative connected duration in seconds, reported at call end.
    pub conversation_time: Option<f64>,
}

impl ExecutionStatus {
    pub fn new(status: RemoteStatus) -> Self {
        Self {
            status,
            conversation_time: None,
        }
    }

    pub fn with_conversation_time(status: RemoteStatus, seconds: f64) -> Self {
        Self {
            status,
            conversation_time: Some(seconds),
        }
    }
}
