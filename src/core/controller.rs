// src/core/controller.rs — Call session controller
//
// Drives one outbound demo call from submission to a terminal state. Owns
// two named timer handles (status poll, connected-duration tick) and a
// single teardown routine that cancels both unconditionally. The derived
// `UiStatus` only ever changes through `Inner::apply_status`, which applies
// the fixed remote-to-ui mapping in the order responses are received.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use super::agents::AgentKind;
use super::session::CallSession;
use super::status::UiStatus;
use crate::infra::config::ResolvedProvider;
use crate::infra::errors::VoicedialError;
use crate::provider::{CallProvider, CallUserData, ExecutionStatus, StartCall};

pub const POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The two per-session timers. Stopping is idempotent: aborting an absent
/// or already-finished handle is a no-op.
#[derive(Default)]
struct Timers {
    poll: Option<JoinHandle<()>>,
    tick: Option<JoinHandle<()>>,
}

impl Timers {
    fn stop_poll(&mut self) {
        if let Some(handle) = self.poll.take() {
            handle.abort();
        }
    }

    fn stop_tick(&mut self) {
        if let Some(handle) = self.tick.take() {
            handle.abort();
        }
    }

    fn stop_all(&mut self) {
        self.stop_poll();
        self.stop_tick();
    }
}

struct Inner {
    provider: Arc<dyn CallProvider>,
    config: ResolvedProvider,
    state: Mutex<CallSession>,
    timers: Mutex<Timers>,
    updates: watch::Sender<CallSession>,
}

/// Recover from mutex poisoning instead of propagating it; session state
/// stays usable even if a timer task panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl Inner {
    fn publish(&self, session: &CallSession) {
        let _ = self.updates.send(session.clone());
    }

    /// Apply one successfully observed remote status. Returns true when the
    /// status is terminal, telling the poll loop to stop for good.
    fn apply_status(inner: &Arc<Inner>, update: &ExecutionStatus) -> bool {
        let status = update.status;
        let ui = status.ui_status();

        {
            let mut session = lock(&inner.state);
            // A response that raced with a user hangup or reset must not
            // resurrect the session.
            if !session.is_active() {
                return true;
            }
            session.remote_status = Some(status);
            session.ui_status = ui;
            match ui {
                UiStatus::Ended => {
                    if let Some(seconds) = update.conversation_time {
                        session.call_duration_secs = seconds.floor() as u64;
                    }
                }
                UiStatus::Error => {
                    session.error_message = status.failure_message().map(str::to_string);
                }
                _ => {}
            }
            inner.publish(&session);
        }

        let mut timers = lock(&inner.timers);
        if ui == UiStatus::Connected {
            // Idempotent: a repeated in-progress observation must not start
            // a second duration timer.
            if timers.tick.is_none() {
                timers.tick = Some(Self::spawn_tick(inner));
            }
        } else {
            timers.stop_tick();
        }

        status.is_terminal()
    }

    /// One-second duration tick, alive only while the session is connected.
    /// The first increment lands one full second after connecting.
    fn spawn_tick(inner: &Arc<Inner>) -> JoinHandle<()> {
        let inner = Arc::clone(inner);
        tokio::spawn(async move {
            let start = time::Instant::now() + TICK_INTERVAL;
            let mut ticker = time::interval_at(start, TICK_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let mut session = lock(&inner.state);
                if session.ui_status != UiStatus::Connected {
                    break;
                }
                session.call_duration_secs += 1;
                let snapshot = session.clone();
                drop(session);
                let _ = inner.updates.send(snapshot);
            }
        })
    }
}

pub struct CallController {
    inner: Arc<Inner>,
}

impl CallController {
    pub fn new(provider: Arc<dyn CallProvider>, config: ResolvedProvider) -> Self {
        let (updates, _) = watch::channel(CallSession::default());
        Self {
            inner: Arc::new(Inner {
                provider,
                config,
                state: Mutex::new(CallSession::default()),
                timers: Mutex::new(Timers::default()),
                updates,
            }),
        }
    }

    /// Receiver of session snapshots; a new value is published on every
    /// state transition and every duration tick.
    pub fn subscribe(&self) -> watch::Receiver<CallSession> {
        self.inner.updates.subscribe()
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> CallSession {
        lock(&self.inner.state).clone()
    }

    /// Submit a demo call and arm the status poller. The first poll fires
    /// immediately, then every `POLL_INTERVAL` until a terminal status.
    pub async fn submit(
        &self,
        phone_number: &str,
        agent: AgentKind,
    ) -> Result<(), VoicedialError> {
        let phone: String = phone_number.split_whitespace().collect();
        if phone.is_empty() {
            return Err(VoicedialError::EmptyPhoneNumber);
        }
        {
            let session = lock(&self.inner.state);
            if session.is_active() {
                return Err(VoicedialError::CallInProgress);
            }
        }

        let profile = agent.profile();
        let request = StartCall {
            agent_id: self.inner.config.agent_id(agent).to_string(),
            recipient_phone_number: phone.clone(),
            from_phone_number: self.inner.config.from_phone(agent).to_string(),
            user_data: CallUserData {
                agent_name: profile.name.to_string(),
                call_type: profile.call_type.to_string(),
                timestamp: Utc::now().to_rfc3339(),
                demo_mode: "true".to_string(),
            },
        };

        // Fresh session for this attempt; status is already "calling" while
        // the creation request is in flight.
        {
            let mut session = lock(&self.inner.state);
            *session = CallSession {
                phone_number: phone.clone(),
                agent: Some(agent),
                ui_status: UiStatus::Calling,
                ..CallSession::default()
            };
            self.inner.publish(&session);
        }

        tracing::info!(agent = %agent, "placing demo call to {phone}");

        match self.inner.provider.start_call(request).await {
            Ok(accepted) => {
                {
                    let mut session = lock(&self.inner.state);
                    session.execution_id = Some(accepted.execution_id.clone());
                    session.remote_status = accepted.status;
                    session.ui_status = UiStatus::Calling;
                    self.inner.publish(&session);
                }
                self.start_polling(accepted.execution_id);
                Ok(())
            }
            Err(e) => {
                let mut session = lock(&self.inner.state);
                session.ui_status = UiStatus::Error;
                session.error_message = Some(e.to_string());
                self.inner.publish(&session);
                Err(e)
            }
        }
    }

    fn start_polling(&self, execution_id: String) {
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(POLL_INTERVAL);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match inner.provider.execution_status(&execution_id).await {
                    Ok(update) => {
                        if Inner::apply_status(&inner, &update) {
                            break;
                        }
                    }
                    Err(e) => {
                        // Transient: skip this cycle, try again next tick.
                        tracing::debug!("status poll for {execution_id} failed, will retry: {e}");
                    }
                }
            }
        });

        let mut timers = lock(&self.inner.timers);
        timers.stop_poll();
        timers.poll = Some(handle);
    }

    /// User-initiated hangup while calling or connected. The session
    /// commits to "ended" before the provider is told; a failed stop
    /// notification is logged and swallowed.
    pub async fn end_call(&self) -> Result<(), VoicedialError> {
        let execution_id = {
            let mut session = lock(&self.inner.state);
            if !session.is_active() {
                return Err(VoicedialError::NoActiveCall);
            }
            session.ui_status = UiStatus::Ended;
            self.inner.publish(&session);
            session.execution_id.clone()
        };

        lock(&self.inner.timers).stop_all();

        if let Some(id) = execution_id {
            if let Err(e) = self.inner.provider.stop_call(&id).await {
                tracing::warn!("stop notification for {id} failed: {e}");
            }
        }
        Ok(())
    }

    /// Clear the session back to idle. Only valid once the call has reached
    /// a terminal state.
    pub fn reset(&self) -> Result<(), VoicedialError> {
        {
            let session = lock(&self.inner.state);
            if !session.is_terminal() {
                return Err(VoicedialError::ResetMidCall);
            }
        }
        lock(&self.inner.timers).stop_all();

        let mut session = lock(&self.inner.state);
        *session = CallSession::default();
        self.inner.publish(&session);
        Ok(())
    }

    /// Cancel both timers without touching recorded session state. Safe to
    /// call more than once.
    pub fn shutdown(&self) {
        lock(&self.inner.timers).stop_all();
    }
}

impl Drop for CallController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
