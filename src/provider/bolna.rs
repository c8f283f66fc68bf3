// src/provider/bolna.rs — Bolna voice-AI call API client

use async_trait::async_trait;

use super::{CallAccepted, CallProvider, ExecutionStatus, StartCall};
use crate::core::status::RemoteStatus;
use crate::infra::errors::VoicedialError;

pub struct BolnaProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl BolnaProvider {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    fn call_url(&self) -> String {
        format!("{}/call", self.base_url)
    }

    fn execution_url(&self, execution_id: &str) -> String {
        format!("{}/executions/{}", self.base_url, execution_id)
    }

    fn stop_url(&self, execution_id: &str) -> String {
        format!("{}/call/{}/stop", self.base_url, execution_id)
    }

    fn build_call_body(&self, request: &StartCall) -> serde_json::Value {
        serde_json::json!({
            "agent_id": request.agent_id,
            "recipient_phone_number": request.recipient_phone_number,
            "from_phone_number": request.from_phone_number,
            "user_data": {
                "agent_name": request.user_data.agent_name,
                "call_type": request.user_data.call_type,
                "timestamp": request.user_data.timestamp,
                "demo_mode": request.user_data.demo_mode,
            },
        })
    }

    /// Pull a human-readable detail out of an error response body; the
    /// provider uses either an `error` or a `message` field.
    async fn rejection(response: reqwest::Response) -> VoicedialError {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body["error"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .map(str::to_string)
            .unwrap_or(fallback);
        VoicedialError::Provider {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl CallProvider for BolnaProvider {
    fn id(&self) -> &str {
        "bolna"
    }

    async fn start_call(&self, request: StartCall) -> Result<CallAccepted, VoicedialError> {
        let body = self.build_call_body(&request);

        let response = self
            .client
            .post(self.call_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VoicedialError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| VoicedialError::Transport(format!("failed to decode call response: {e}")))?;

        // An accepted call without an execution id cannot be tracked or
        // stopped; treat it as a protocol violation.
        let execution_id = payload["execution_id"]
            .as_str()
            .filter(|id| !id.is_empty())
            .ok_or(VoicedialError::MissingExecutionId)?
            .to_string();

        let status = serde_json::from_value::<RemoteStatus>(payload["status"].clone()).ok();

        Ok(CallAccepted {
            execution_id,
            status,
        })
    }

    async fn execution_status(
        &self,
        execution_id: &str,
    ) -> Result<ExecutionStatus, VoicedialError> {
        let response = self
            .client
            .get(self.execution_url(execution_id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| VoicedialError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        response.json::<ExecutionStatus>().await.map_err(|e| {
            VoicedialError::Transport(format!("failed to decode execution status: {e}"))
        })
    }

    async fn stop_call(&self, execution_id: &str) -> Result<(), VoicedialError> {
        let response = self
            .client
            .post(self.stop_url(execution_id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| VoicedialError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::CallUserData;
    use pretty_assertions::assert_eq;

    fn sample_request() -> StartCall {
        StartCall {
            agent_id: "priya-agent-uuid-001".into(),
            recipient_phone_number: "+919876543210".into(),
            from_phone_number: "+919876543007".into(),
            user_data: CallUserData {
                agent_name: "Priya".into(),
                call_type: "priya".into(),
                timestamp: "2026-08-30T12:00:00+00:00".into(),
                demo_mode: "true".into(),
            },
        }
    }

    #[test]
    fn test_build_call_body() {
        let provider = BolnaProvider::new("https://api.bolna.ai", "dummy-token");
        let body = provider.build_call_body(&sample_request());

        assert_eq!(body["agent_id"], "priya-agent-uuid-001");
        assert_eq!(body["recipient_phone_number"], "+919876543210");
        assert_eq!(body["from_phone_number"], "+919876543007");
        assert_eq!(body["user_data"]["agent_name"], "Priya");
        assert_eq!(body["user_data"]["call_type"], "priya");
        assert_eq!(body["user_data"]["demo_mode"], "true");
        assert_eq!(body["user_data"]["timestamp"], "2026-08-30T12:00:00+00:00");
    }

    #[test]
    fn test_urls() {
        let provider = BolnaProvider::new("https://api.bolna.ai/", "k");
        assert_eq!(provider.call_url(), "https://api.bolna.ai/call");
        assert_eq!(
            provider.execution_url("exec-1"),
            "https://api.bolna.ai/executions/exec-1"
        );
        assert_eq!(
            provider.stop_url("exec-1"),
            "https://api.bolna.ai/call/exec-1/stop"
        );
    }

    #[test]
    fn test_execution_status_decoding() {
        let status: ExecutionStatus =
            serde_json::from_str(r#"{"status": "completed", "conversation_time": 42.7}"#).unwrap();
        assert_eq!(status.status, RemoteStatus::Completed);
        assert_eq!(status.conversation_time, Some(42.7));

        let status: ExecutionStatus = serde_json::from_str(r#"{"status": "ringing"}"#).unwrap();
        assert_eq!(status.status, RemoteStatus::Ringing);
        assert!(status.conversation_time.is_none());
    }
}
