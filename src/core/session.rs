// src/core/session.rs — Transient state of one demo call attempt

use super::agents::AgentKind;
use super::status::{RemoteStatus, UiStatus};

/// Lives only in memory for the duration of one attempt; `Default` is both
/// the freshly constructed and the post-reset state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallSession {
    /// Destination number, whitespace-stripped at submission.
    pub phone_number: String,
    pub agent: Option<AgentKind>,
    /// Set at most once per session, on call acceptance.
    pub execution_id: Option<String>,
    /// Last successfully observed provider status.
    pub remote_status: Option<RemoteStatus>,
    pub ui_status: UiStatus,
    /// Connected time in whole seconds; locally ticked while connected,
    /// overridden by the provider's authoritative duration at call end.
    pub call_duration_secs: u64,
    pub error_message: Option<String>,
}

impl CallSession {
    pub fn is_terminal(&self) -> bool {
        matches!(self.ui_status, UiStatus::Ended | UiStatus::Error)
    }

    pub fn is_active(&self) -> bool {
        matches!(self.ui_status, UiStatus::Calling | UiStatus::Connected)
    }
}

/// Format a duration as `m:ss` for display.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_session_is_idle() {
        let session = CallSession::default();
        assert_eq!(session.ui_status, UiStatus::Idle);
        assert_eq!(session.call_duration_secs, 0);
        assert!(session.execution_id.is_none());
        assert!(session.remote_status.is_none());
        assert!(session.error_message.is_none());
        assert!(!session.is_terminal());
        assert!(!session.is_active());
    }

    #[test]
    fn test_activity_classification() {
        let mut session = CallSession::default();
        session.ui_status = UiStatus::Calling;
        assert!(session.is_active());
        session.ui_status = UiStatus::Connected;
        assert!(session.is_active());
        session.ui_status = UiStatus::Ended;
        assert!(session.is_terminal());
        session.ui_status = UiStatus::Error;
        assert!(session.is_terminal());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(9), "0:09");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
        assert_eq!(format_duration(3601), "60:01");
    }
}
