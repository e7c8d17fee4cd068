//! Fire-and-forget friendly status notifications.
//!
//! Status text is produced by the status model from a fixed system prompt,
//! then synthesized and played through the [`Announcer`]. Every
//! notification runs as a detached task: best-effort, non-blocking, with
//! failures logged and swallowed so the main generation path is never
//! held up or aborted by a missing voice message.

use std::sync::{Arc, Mutex};
use triptych_core::Turn;
use triptych_error::{NotificationError, NotificationErrorKind, TriptychResult};
use triptych_interface::{Announcer, Playback, TextGenerator};
use tracing::warn;

/// Prompt for the announcement played while the initial set generates.
pub(crate) fn generating_prompt(idea: &str) -> String {
    format!(
        "You are a friendly assistant. Our user wants to generate an app or utility with this idea: {idea}. \
         You have to respond with a friendly message saying that their app is being generated using our services. \
         You can give compliments to the idea and add a story to spend some time. Respond just with a message as a string. \
         Be verbose, friendly, you can also joke to make experience of waiting more fun and engaging!"
    )
}

/// Prompt for the announcement played once the initial set is ready.
pub(crate) fn ready_prompt(idea: &str) -> String {
    format!(
        "You are a friendly assistant. Our user wants to generate an app or utility with this idea: {idea}. \
         We already generated 3 versions of it and you have to respond with a friendly message saying that their apps are ready \
         to be used. Respond just with a message as a string. \
         Be friendly, you can also joke to make experience of waiting more fun and engaging!"
    )
}

/// Prompt for the announcement played while tweak rounds run.
pub(crate) fn tweaking_prompt(idea: &str, tweak: &str) -> String {
    format!(
        "You are a friendly assistant. Our user wants to generate an app or utility with this idea: {idea}. \
         We already generated 3 versions of it, but the user wants to tweak it with this message: {tweak}. \
         You have to respond with a friendly message saying that their apps are being tweaked using our services. \
         You can give compliments to the tweaks and add a story to spend some time. Respond just with a message as a string. \
         Be verbose, friendly, you can also joke to make experience of waiting more fun and engaging!"
    )
}

enum SlotState {
    Idle,
    /// An announcement task is in flight but playback has not started.
    Pending,
    Playing(Playback),
    /// Stop was requested before the playback handle arrived.
    Stopped,
}

/// Holds the playback handle of the current in-progress announcement.
///
/// The announcement task and the orchestrator race: the task fulfils the
/// slot when synthesis finishes, the orchestrator stops it when the work
/// the announcement covers is done. A stop that arrives first silences
/// the playback as soon as it lands.
#[derive(Clone)]
pub(crate) struct StatusSlot {
    inner: Arc<Mutex<SlotState>>,
}

impl StatusSlot {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotState::Idle)),
        }
    }

    fn begin(&self) {
        *self.inner.lock().expect("status slot lock") = SlotState::Pending;
    }

    fn fulfil(&self, playback: Playback) {
        let mut state = self.inner.lock().expect("status slot lock");
        match *state {
            SlotState::Stopped => {
                playback.stop();
                *state = SlotState::Idle;
            }
            _ => *state = SlotState::Playing(playback),
        }
    }

    fn abandon(&self) {
        let mut state = self.inner.lock().expect("status slot lock");
        if matches!(*state, SlotState::Pending) {
            *state = SlotState::Idle;
        }
    }

    /// Stop the current announcement, or arrange for it to be stopped the
    /// moment its playback handle arrives.
    pub(crate) fn stop(&self) {
        let mut state = self.inner.lock().expect("status slot lock");
        match std::mem::replace(&mut *state, SlotState::Idle) {
            SlotState::Playing(playback) => playback.stop(),
            SlotState::Pending => *state = SlotState::Stopped,
            other => *state = other,
        }
    }
}

/// Generate status text with the status model and start playing it.
async fn announce<D, A>(
    driver: &D,
    announcer: &A,
    status_model: &str,
    prompt: &str,
) -> TriptychResult<Playback>
where
    D: TextGenerator,
    A: Announcer,
{
    let status_text = driver
        .complete(&[Turn::system(prompt)], status_model)
        .await
        .map_err(|e| {
            NotificationError::new(NotificationErrorKind::StatusText(e.to_string()))
        })?;
    announcer.speak(&status_text).await
}

/// Spawn a detached announcement task.
///
/// When `slot` is given, the resulting [`Playback`] handle is parked there
/// so the orchestrator can stop the announcement once it is superseded.
pub(crate) fn spawn_announcement<D, A>(
    driver: Arc<D>,
    announcer: Arc<A>,
    status_model: String,
    prompt: String,
    slot: Option<StatusSlot>,
) where
    D: TextGenerator + 'static,
    A: Announcer + 'static,
{
    if let Some(slot) = &slot {
        slot.begin();
    }
    tokio::spawn(async move {
        match announce(driver.as_ref(), announcer.as_ref(), &status_model, &prompt).await {
            Ok(playback) => {
                if let Some(slot) = slot {
                    slot.fulfil(playback);
                }
            }
            Err(e) => {
                if let Some(slot) = slot {
                    slot.abandon();
                }
                warn!(error = %e, "Status notification failed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use triptych_error::{GenerationError, GenerationErrorKind, TriptychErrorKind};

    struct FailingDriver;

    #[async_trait]
    impl TextGenerator for FailingDriver {
        async fn complete(&self, _turns: &[Turn], _model: &str) -> TriptychResult<String> {
            Err(GenerationError::new(GenerationErrorKind::Request(
                "connection reset".to_string(),
            ))
            .into())
        }

        fn provider_name(&self) -> &'static str {
            "failing"
        }
    }

    struct SilentAnnouncer;

    #[async_trait]
    impl Announcer for SilentAnnouncer {
        async fn speak(&self, _text: &str) -> TriptychResult<Playback> {
            Ok(Playback::new(None, Vec::new()))
        }
    }

    #[tokio::test]
    async fn status_text_failure_surfaces_as_a_notification_error() {
        let err = announce(&FailingDriver, &SilentAnnouncer, "status-model", "say hi")
            .await
            .expect_err("driver failure propagates");

        match err.kind() {
            TriptychErrorKind::Notification(notification_err) => {
                assert!(matches!(
                    notification_err.kind,
                    NotificationErrorKind::StatusText(_)
                ));
            }
            other => panic!("unexpected error kind: {other}"),
        }
    }

    #[test]
    fn stop_before_fulfil_silences_late_playback() {
        let slot = StatusSlot::new();
        slot.begin();
        slot.stop();

        let playback = Playback::new(None, vec![1]);
        let signal = playback.stopped();
        slot.fulfil(playback);
        assert!(*signal.borrow());
    }

    #[test]
    fn stop_after_fulfil_stops_playback() {
        let slot = StatusSlot::new();
        slot.begin();

        let playback = Playback::new(None, vec![1]);
        let signal = playback.stopped();
        slot.fulfil(playback);
        assert!(!*signal.borrow());

        slot.stop();
        assert!(*signal.borrow());
    }

    #[test]
    fn stop_on_idle_slot_is_a_no_op() {
        let slot = StatusSlot::new();
        slot.stop();
    }
}
