// src/core/status.rs — Remote call status vocabulary and UI mapping
//
// `UiStatus` is derived from the last successfully observed `RemoteStatus`
// alone; nothing else may move it. The mapping and the terminal set are a
// fixed contract with the renderer.

use serde::Deserialize;

/// Raw call lifecycle status reported by the provider's execution endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemoteStatus {
    Queued,
    Initiated,
    Ringing,
    InProgress,
    CallDisconnected,
    Completed,
    NoAnswer,
    Busy,
    Failed,
    Canceled,
    BalanceLow,
    Stopped,
    Error,
}

/// Coarse five-value status shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiStatus {
    #[default]
    Idle,
    Calling,
    Connected,
    Ended,
    Error,
}

impl RemoteStatus {
    pub fn ui_status(self) -> UiStatus {
        match self {
            RemoteStatus::Queued | RemoteStatus::Initiated | RemoteStatus::Ringing => {
                UiStatus::Calling
            }
            RemoteStatus::InProgress => UiStatus::Connected,
            RemoteStatus::CallDisconnected | RemoteStatus::Completed => UiStatus::Ended,
            RemoteStatus::NoAnswer
            | RemoteStatus::Busy
            | RemoteStatus::BalanceLow
            | RemoteStatus::Failed
            | RemoteStatus::Canceled
            | RemoteStatus::Stopped
            | RemoteStatus::Error => UiStatus::Error,
        }
    }

    /// Whether no further state change is expected for this call.
    pub fn is_terminal(self) -> bool {
        !matches!(
            self,
            RemoteStatus::Queued
                | RemoteStatus::Initiated
                | RemoteStatus::Ringing
                | RemoteStatus::InProgress
        )
    }

    /// Fixed user-readable message for failure statuses; `None` for
    /// statuses that are not surfaced as errors.
    pub fn failure_message(self) -> Option<&'static str> {
        match self {
            RemoteStatus::NoAnswer => Some("The call was not answered"),
            RemoteStatus::Busy => Some("The line was busy"),
            RemoteStatus::BalanceLow => Some("The demo account is out of calling credit"),
            RemoteStatus::Failed => Some("The call could not be completed"),
            RemoteStatus::Canceled => Some("The call was canceled before it connected"),
            RemoteStatus::Stopped => Some("The call was stopped by the provider"),
            RemoteStatus::Error => Some("The call provider reported an internal error"),
            _ => None,
        }
    }
}

impl std::fmt::Display for UiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UiStatus::Idle => "idle",
            UiStatus::Calling => "calling",
            UiStatus::Connected => "connected",
            UiStatus::Ended => "ended",
            UiStatus::Error => "error",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ALL: [RemoteStatus; 13] = [
        RemoteStatus::Queued,
        RemoteStatus::Initiated,
        RemoteStatus::Ringing,
        RemoteStatus::InProgress,
        RemoteStatus::CallDisconnected,
        RemoteStatus::Completed,
        RemoteStatus::NoAnswer,
        RemoteStatus::Busy,
        RemoteStatus::Failed,
        RemoteStatus::Canceled,
        RemoteStatus::BalanceLow,
        RemoteStatus::Stopped,
        RemoteStatus::Error,
    ];

    #[test]
    fn test_mapping_table() {
        assert_eq!(RemoteStatus::Queued.ui_status(), UiStatus::Calling);
        assert_eq!(RemoteStatus::Initiated.ui_status(), UiStatus::Calling);
        assert_eq!(RemoteStatus::Ringing.ui_status(), UiStatus::Calling);
        assert_eq!(RemoteStatus::InProgress.ui_status(), UiStatus::Connected);
        assert_eq!(RemoteStatus::CallDisconnected.ui_status(), UiStatus::Ended);
        assert_eq!(RemoteStatus::Completed.ui_status(), UiStatus::Ended);
        for failure in [
            RemoteStatus::NoAnswer,
            RemoteStatus::Busy,
            RemoteStatus::BalanceLow,
            RemoteStatus::Failed,
            RemoteStatus::Canceled,
            RemoteStatus::Stopped,
            RemoteStatus::Error,
        ] {
            assert_eq!(failure.ui_status(), UiStatus::Error);
        }
    }

    #[test]
    fn test_terminal_set() {
        let non_terminal = [
            RemoteStatus::Queued,
            RemoteStatus::Initiated,
            RemoteStatus::Ringing,
            RemoteStatus::InProgress,
        ];
        for status in ALL {
            assert_eq!(status.is_terminal(), !non_terminal.contains(&status));
        }
    }

    #[test]
    fn test_failure_statuses_have_distinct_messages() {
        let messages: Vec<&str> = ALL.iter().filter_map(|s| s.failure_message()).collect();
        assert_eq!(messages.len(), 7);
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_error_ui_iff_failure_message() {
        for status in ALL {
            assert_eq!(
                status.ui_status() == UiStatus::Error,
                status.failure_message().is_some()
            );
        }
    }

    #[test]
    fn test_wire_names_are_kebab_case() {
        let status: RemoteStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, RemoteStatus::InProgress);
        let status: RemoteStatus = serde_json::from_str("\"call-disconnected\"").unwrap();
        assert_eq!(status, RemoteStatus::CallDisconnected);
        let status: RemoteStatus = serde_json::from_str("\"balance-low\"").unwrap();
        assert_eq!(status, RemoteStatus::BalanceLow);
        assert!(serde_json::from_str::<RemoteStatus>("\"on-hold\"").is_err());
    }
}
