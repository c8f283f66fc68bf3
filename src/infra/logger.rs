// src/infra/logger.rs — Structured logging with tracing
//
// `VOICEDIAL_LOG` takes precedence over `RUST_LOG`; both fall back to the
// default level the binary passes in.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(default_level: &str) {
    let filter = build_filter(
        std::env::var("VOICEDIAL_LOG").ok(),
        std::env::var("RUST_LOG").ok(),
        default_level,
    );

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn build_filter(
    voicedial_log: Option<String>,
    rust_log: Option<String>,
    default_level: &str,
) -> EnvFilter {
    let directives = voicedial_log
        .or(rust_log)
        .unwrap_or_else(|| default_level.to_string());
    EnvFilter::new(directives)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voicedial_log_beats_rust_log() {
        let filter = build_filter(
            Some("voicedial=debug".into()),
            Some("info".into()),
            "warn",
        );
        assert_eq!(filter.to_string(), "voicedial=debug");
    }

    #[test]
    fn test_rust_log_beats_default() {
        let filter = build_filter(None, Some("voicedial=trace".into()), "warn");
        assert_eq!(filter.to_string(), "voicedial=trace");
    }

    #[test]
    fn test_default_level_when_nothing_set() {
        let filter = build_filter(None, None, "warn");
        assert_eq!(filter.to_string(), "warn");
    }
}
