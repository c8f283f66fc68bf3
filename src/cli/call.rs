// src/cli/call.rs — Drive one demo call from the terminal
//
// Status lines go to stderr so stdout stays clean for the final summary.

use std::sync::Arc;

use crate::core::agents::AgentKind;
use crate::core::controller::CallController;
use crate::core::session::{format_duration, CallSession};
use crate::core::status::UiStatus;
use crate::infra::config::Config;
use crate::provider::bolna::BolnaProvider;
use crate::provider::CallProvider;

pub async fn run_call(phone: &str, agent: AgentKind, config: &Config) -> anyhow::Result<()> {
    let resolved = config.provider.resolve();
    let provider: Arc<dyn CallProvider> = Arc::new(BolnaProvider::new(
        resolved.base_url.clone(),
        resolved.api_key.clone(),
    ));
    tracing::debug!("using call provider '{}'", provider.id());
    let controller = CallController::new(provider, resolved);
    let mut updates = controller.subscribe();

    let profile = agent.profile();
    eprintln!("[call] dialing {} as {}", phone, profile.name);

    controller.submit(phone, agent).await?;

    let mut last_status = UiStatus::Idle;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                eprintln!("[call] hanging up");
                // Already-terminal race: nothing left to end.
                let _ = controller.end_call().await;
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let session = updates.borrow_and_update().clone();
                render(&session, &mut last_status);
                if session.is_terminal() {
                    break;
                }
            }
        }
    }

    summarize(&controller.session());
    Ok(())
}

fn render(session: &CallSession, last_status: &mut UiStatus) {
    if session.ui_status != *last_status {
        *last_status = session.ui_status;
        match session.ui_status {
            UiStatus::Calling => eprintln!("[call] calling, waiting for pickup"),
            UiStatus::Connected => eprintln!("[call] connected"),
            UiStatus::Ended => eprintln!("[call] ended"),
            // Detail lands in the summary.
            UiStatus::Error | UiStatus::Idle => {}
        }
    } else if session.ui_status == UiStatus::Connected {
        eprintln!(
            "[call] connected {}",
            format_duration(session.call_duration_secs)
        );
    }
}

fn summarize(session: &CallSession) {
    match session.ui_status {
        UiStatus::Ended => {
            println!(
                "Call completed. Duration: {}",
                format_duration(session.call_duration_secs)
            );
            if let Some(id) = &session.execution_id {
                println!("Execution ID: {id}");
            }
        }
        UiStatus::Error => {
            let message = session
                .error_message
                .as_deref()
                .unwrap_or("Failed to initiate call");
            println!("Call failed: {message}");
        }
        _ => {}
    }
}
