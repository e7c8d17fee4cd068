//! Playback handles for voice announcements.

use tokio::sync::watch;

/// A handle to an in-progress voice announcement.
///
/// The handle carries the synthesized audio bytes and a stop signal. The
/// presentation layer plays the clip and watches
/// [`stopped`](Playback::stopped) to pause early; the orchestrator calls
/// [`stop`](Playback::stop) when the announcement is superseded.
///
/// # Examples
///
/// ```
/// use triptych_interface::Playback;
///
/// let playback = Playback::new(None, vec![0u8; 16]);
/// let mut signal = playback.stopped();
/// assert!(!*signal.borrow());
///
/// playback.stop();
/// assert!(*signal.borrow_and_update());
/// ```
#[derive(Debug)]
pub struct Playback {
    mime: Option<String>,
    audio: Vec<u8>,
    stop_tx: watch::Sender<bool>,
}

impl Playback {
    /// Create a playback handle for a synthesized clip.
    pub fn new(mime: Option<String>, audio: Vec<u8>) -> Self {
        let (stop_tx, _) = watch::channel(false);
        Self {
            mime,
            audio,
            stop_tx,
        }
    }

    /// MIME type of the audio clip, when the backend reported one.
    pub fn mime(&self) -> Option<&str> {
        self.mime.as_deref()
    }

    /// The synthesized audio bytes.
    pub fn audio(&self) -> &[u8] {
        &self.audio
    }

    /// Signal the player to stop this announcement.
    ///
    /// Safe to call with no subscribed players; late subscribers still
    /// observe the stopped state.
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    /// A receiver that flips to `true` once the announcement is stopped.
    pub fn stopped(&self) -> watch::Receiver<bool> {
        self.stop_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_flips_the_signal() {
        let playback = Playback::new(Some("audio/mpeg".to_string()), vec![1, 2, 3]);
        let signal = playback.stopped();
        assert!(!*signal.borrow());

        playback.stop();
        assert!(*signal.borrow());
        assert_eq!(playback.audio(), &[1, 2, 3]);
        assert_eq!(playback.mime(), Some("audio/mpeg"));
    }

    #[test]
    fn stop_without_receivers_is_a_no_op() {
        let playback = Playback::new(None, Vec::new());
        playback.stop();
        assert!(*playback.stopped().borrow());
    }
}
