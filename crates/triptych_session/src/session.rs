//! The variation session orchestrator.

use crate::generation::DocumentGenerator;
use crate::notify::{self, StatusSlot};
use crate::SessionConfig;
use futures_util::future::join_all;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use triptych_core::{GeneratedDocument, PreviewImage, Transcript, Turn, Variation, Version};
use triptych_error::{
    GenerationError, GenerationErrorKind, SessionError, SessionErrorKind, TriptychResult,
};
use triptych_interface::{Announcer, CaptureBackend, TextGenerator};
use tracing::{debug, instrument, warn};

/// Number of pipelines launched for an initial generation batch.
pub const INITIAL_VARIATIONS: usize = 3;

/// Number of sequential rounds per tweak operation.
pub const TWEAK_ROUNDS: usize = 3;

/// The task-defining system turn fixed at transcript index 0.
const SYSTEM_PROMPT: &str = "You a helpful assistant that writes code to create mini apps/utilities, you do it only using html, css, and javascript in a single HTML file.\n\
Based on the user's request, generate a single HTML file that solves their problem.\n\
Include only HTML where you will put JavaScript inside <script> tag and CSS inside <style> tag. Make sure the HTML structure is semantic and accessible. Do not use browser alerts to interrupt user experience. Any app/utility you create should follow the rules I described before. Do not answer with your own explanations/responses, give me just a html file as a string. Return an error message for any prompts that are off-topic.";

/// Lifecycle state of a session.
///
/// Only one top-level operation may be in flight at a time; both
/// operations mutate the shared transcript, so a busy session rejects a
/// second invocation rather than interleaving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionState {
    /// No operation in flight
    Idle,
    /// An initial-set batch is running
    GeneratingInitial,
    /// Sequential tweak rounds are running
    Tweaking,
}

/// One user's variation session.
///
/// The session owns the append-only [`Transcript`] (single-writer
/// discipline: all appends flow through `&mut self`), the flat variation
/// history, and the selected-variation back-reference. It is generic over
/// the three backend seams so tests can drive it with mocks.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use triptych_backends::{OpenRouterClient, ScreenshotClient, VoiceClient};
/// use triptych_session::{Session, SessionConfig};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut session = Session::new(
///     Arc::new(OpenRouterClient::new()?),
///     Arc::new(ScreenshotClient::new()),
///     Arc::new(VoiceClient::new()),
///     SessionConfig::load()?,
/// );
///
/// let variations = session.generate_initial_set("todo list").await?;
/// println!("{} variations generated", variations.len());
/// # Ok(())
/// # }
/// ```
pub struct Session<G, C, A> {
    driver: Arc<G>,
    capture: Arc<C>,
    announcer: Arc<A>,
    config: SessionConfig,
    transcript: Transcript,
    variations: Vec<Variation>,
    selected: Option<u64>,
    idea: Option<String>,
    next_id: u64,
    state: watch::Sender<SessionState>,
    progress_tx: watch::Sender<u8>,
    status_slot: StatusSlot,
}

/// Guard marking a top-level operation in flight.
///
/// Restores `Idle` and finalizes progress on drop, so the session stays
/// usable even when the caller drops the operation future mid-flight
/// (timeout, `select!`).
struct OpGuard {
    state: watch::Sender<SessionState>,
    progress: watch::Sender<u8>,
}

impl OpGuard {
    fn begin(
        state: &watch::Sender<SessionState>,
        progress: &watch::Sender<u8>,
        entered: SessionState,
    ) -> Self {
        state.send_replace(entered);
        Self {
            state: state.clone(),
            progress: progress.clone(),
        }
    }
}

impl Drop for OpGuard {
    fn drop(&mut self) {
        self.state.send_replace(SessionState::Idle);
        self.progress.send_replace(100);
    }
}

impl<G, C, A> Session<G, C, A>
where
    G: TextGenerator + 'static,
    C: CaptureBackend + 'static,
    A: Announcer + 'static,
{
    /// Create a session with a fresh transcript.
    pub fn new(driver: Arc<G>, capture: Arc<C>, announcer: Arc<A>, config: SessionConfig) -> Self {
        let (progress_tx, _) = watch::channel(0);
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            driver,
            capture,
            announcer,
            config,
            transcript: Transcript::new(SYSTEM_PROMPT),
            variations: Vec::new(),
            selected: None,
            idea: None,
            next_id: 0,
            state,
            progress_tx,
            status_slot: StatusSlot::new(),
        }
    }

    /// All variations produced so far, in creation order.
    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    /// The currently selected variation, if any.
    pub fn selected(&self) -> Option<&Variation> {
        let id = self.selected?;
        self.variations.iter().find(|v| *v.id() == id)
    }

    /// Select a variation by id. Returns `false` when the id is unknown;
    /// the previous selection is kept in that case.
    pub fn select(&mut self, id: u64) -> bool {
        if self.variations.iter().any(|v| *v.id() == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    /// The conversation transcript driving generation.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    /// Whether a top-level operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.state() != SessionState::Idle
    }

    /// Observe lifecycle state transitions of this session.
    pub fn state_changes(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Observe the progress percentage of the in-flight operation.
    pub fn progress(&self) -> watch::Receiver<u8> {
        self.progress_tx.subscribe()
    }

    /// Variations grouped by version, groups ordered by numeric major
    /// version ascending (so v10 groups after v9, not after v1).
    pub fn grouped_by_version(&self) -> Vec<(Version, Vec<&Variation>)> {
        let mut groups: Vec<(Version, Vec<&Variation>)> = Vec::new();
        for variation in &self.variations {
            match groups.iter_mut().find(|(v, _)| v == variation.version()) {
                Some((_, members)) => members.push(variation),
                None => groups.push((variation.version().clone(), vec![variation])),
            }
        }
        groups.sort_by_key(|(version, _)| version.major());
        groups
    }

    /// Generate the initial set of up to 3 variations for an app idea.
    ///
    /// Appends exactly one user turn to the transcript, then launches 3
    /// generation+capture pipelines concurrently over an immutable
    /// transcript snapshot. Results are collected in launch order
    /// regardless of completion timing; a failed pipeline contributes no
    /// variation and partial success is a valid outcome.
    ///
    /// # Errors
    ///
    /// Rejects an empty idea and a busy session. Individual pipeline
    /// failures are recovered locally and never abort the batch.
    #[instrument(skip(self, idea), fields(idea_len = idea.len()))]
    pub async fn generate_initial_set(&mut self, idea: &str) -> TriptychResult<Vec<Variation>> {
        if self.state() != SessionState::Idle {
            return Err(SessionError::new(SessionErrorKind::Busy).into());
        }
        if idea.trim().is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyIdea).into());
        }

        let _guard = OpGuard::begin(
            &self.state,
            &self.progress_tx,
            SessionState::GeneratingInitial,
        );
        self.run_initial(idea).await
    }

    async fn run_initial(&mut self, idea: &str) -> TriptychResult<Vec<Variation>> {
        self.progress_tx.send_replace(0);
        self.idea = Some(idea.to_string());

        // Exactly one turn per batch; the three pipelines share it.
        self.transcript.push(Turn::user(format!("App idea: {idea}")));
        let snapshot = self.transcript.snapshot();

        self.spawn_status(notify::generating_prompt(idea), true);

        let generator = DocumentGenerator::new(
            Arc::clone(&self.driver),
            self.config.document_model.clone(),
        );
        let resolved = Arc::new(AtomicUsize::new(0));

        let pipelines = (0..INITIAL_VARIATIONS).map(|index| {
            let generator = generator.clone();
            let capture = Arc::clone(&self.capture);
            let snapshot = Arc::clone(&snapshot);
            let resolved = Arc::clone(&resolved);
            let progress = self.progress_tx.clone();
            async move {
                let outcome = run_pipeline(&generator, capture.as_ref(), &snapshot, index).await;
                let done = resolved.fetch_add(1, Ordering::Relaxed) + 1;
                progress.send_replace((done * 100 / INITIAL_VARIATIONS) as u8);
                outcome
            }
        });

        // join_all preserves launch order no matter which pipeline
        // resolves first.
        let outcomes = join_all(pipelines).await;

        let mut produced = Vec::new();
        for (index, outcome) in outcomes.into_iter().enumerate() {
            if let Some((document, preview)) = outcome {
                let id = self.allocate_id();
                let variation = Variation::new(
                    id,
                    format!("Variation {}", index + 1),
                    document,
                    preview,
                    Version::initial(),
                );
                self.variations.push(variation.clone());
                produced.push(variation);
            }
        }

        debug!(
            produced = produced.len(),
            launched = INITIAL_VARIATIONS,
            "Initial batch complete"
        );

        if let Some(first) = produced.first() {
            self.selected = Some(*first.id());
            self.status_slot.stop();
            self.spawn_status(notify::ready_prompt(idea), false);
        }

        Ok(produced)
    }

    /// Apply a tweak to the selected variation over 3 sequential rounds.
    ///
    /// Each round appends one user turn, generates against the full
    /// transcript (which includes every earlier round), captures a
    /// preview, and selects the new variation so the history reads in
    /// refinement order. Rounds are strictly sequential; a failed round
    /// halts the remainder while keeping every variation already
    /// produced.
    ///
    /// # Errors
    ///
    /// Rejects a busy session, a missing selection, and empty tweak text.
    /// A generation failure (including a completion with no extractable
    /// markup after the corrective retry) in any round is returned to the
    /// caller.
    #[instrument(skip(self, tweak), fields(tweak_len = tweak.len()))]
    pub async fn apply_tweak(&mut self, tweak: &str) -> TriptychResult<Vec<Variation>> {
        if self.state() != SessionState::Idle {
            return Err(SessionError::new(SessionErrorKind::Busy).into());
        }
        if self.selected().is_none() {
            return Err(SessionError::new(SessionErrorKind::NoSelection).into());
        }
        if tweak.trim().is_empty() {
            return Err(SessionError::new(SessionErrorKind::EmptyTweak).into());
        }

        let _guard = OpGuard::begin(&self.state, &self.progress_tx, SessionState::Tweaking);
        self.run_tweak(tweak).await
    }

    async fn run_tweak(&mut self, tweak: &str) -> TriptychResult<Vec<Variation>> {
        self.progress_tx.send_replace(0);

        let selected = self
            .selected()
            .ok_or_else(|| SessionError::new(SessionErrorKind::NoSelection))?;
        // The base numeral is read once, before any round runs, and is
        // constant across all three rounds.
        let new_major = selected.version().next_major();
        let base_name = selected.name().clone();

        let idea = self.idea.clone().unwrap_or_default();
        self.spawn_status(notify::tweaking_prompt(&idea, tweak), false);

        let generator = DocumentGenerator::new(
            Arc::clone(&self.driver),
            self.config.document_model.clone(),
        );

        let mut produced = Vec::new();
        for round in 0..TWEAK_ROUNDS {
            let prompt = if round == 0 {
                tweak.to_string()
            } else {
                format!("Further improve the app based on this tweak: {tweak}")
            };
            self.transcript.push(Turn::user(prompt));

            let document = generator.generate(self.transcript.turns()).await?;
            if !document.extracted {
                // Later rounds depend on this one; halt here. Variations
                // appended by earlier rounds stay visible.
                return Err(GenerationError::new(GenerationErrorKind::ExtractionFailed {
                    attempts: 2,
                })
                .into());
            }

            let preview = capture_preview(self.capture.as_ref(), &document).await;

            let id = self.allocate_id();
            let variation = Variation::new(
                id,
                format!("Tweaked {} {}", base_name, round + 1),
                document,
                preview,
                Version::tweak(new_major, tweak),
            );
            self.variations.push(variation.clone());
            self.selected = Some(id);
            produced.push(variation);

            self.progress_tx
                .send_replace(((round + 1) * 100 / TWEAK_ROUNDS) as u8);

            // UX pacing between rounds, not a correctness requirement.
            if !self.config.pacing().is_zero() && round + 1 < TWEAK_ROUNDS {
                tokio::time::sleep(self.config.pacing()).await;
            }
        }

        Ok(produced)
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn spawn_status(&self, prompt: String, retain_stop_handle: bool) {
        if !self.config.voice_enabled {
            return;
        }
        notify::spawn_announcement(
            Arc::clone(&self.driver),
            Arc::clone(&self.announcer),
            self.config.status_model.clone(),
            prompt,
            retain_stop_handle.then(|| self.status_slot.clone()),
        );
    }
}

/// One generation+capture pipeline for an initial-set slot.
///
/// Returns `None` when the slot contributes no variation: a backend
/// failure or a completion with no extractable markup after the
/// corrective retry. Capture failure only costs the preview.
async fn run_pipeline<G, C>(
    generator: &DocumentGenerator<G>,
    capture: &C,
    turns: &[Turn],
    index: usize,
) -> Option<(GeneratedDocument, Option<PreviewImage>)>
where
    G: TextGenerator,
    C: CaptureBackend,
{
    let document = match generator.generate(turns).await {
        Ok(document) => document,
        Err(e) => {
            warn!(pipeline = index, error = %e, "Variation pipeline failed");
            return None;
        }
    };

    if !document.extracted {
        warn!(pipeline = index, "No extractable markup, dropping variation slot");
        return None;
    }

    let preview = capture_preview(capture, &document).await;
    Some((document, preview))
}

/// Capture a preview, tolerating failure (preview is cosmetic).
async fn capture_preview<C: CaptureBackend>(
    capture: &C,
    document: &GeneratedDocument,
) -> Option<PreviewImage> {
    match capture.capture(&document.markup).await {
        Ok(image) => Some(image),
        Err(e) => {
            warn!(error = %e, "Preview capture failed, keeping variation without image");
            None
        }
    }
}
