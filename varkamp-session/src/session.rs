use crate::record::SessionRecord;
use crate::{Phase, Progress, SessionConfig, SessionError, SessionResult, SessionState};
use tracing::{debug, info, warn};
use varkamp_puzzle::{AnswerInput, Evaluation, Evaluator, Manifest, PuzzleDefinition, StaticPage};
use varkamp_storage::KeyValueStore;
use varkamp_types::{Clock, Elapsed, SystemClock};

/// The result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub evaluation: Evaluation,
    /// Phase after the submission was applied.
    pub phase: Phase,
    /// Wrong answers on the puzzle now current (0 after advancing).
    pub fail_count: u32,
    /// Whether the current puzzle's hint should be shown.
    pub hint_visible: bool,
}

/// Drives one play-through of a puzzle manifest.
pub struct Session<S, C = SystemClock> {
    manifest: Manifest,
    store: S,
    clock: C,
    config: SessionConfig,
    state: SessionState,
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    /// Creates a session, resuming from `store` if a started record exists.
    ///
    /// A persisted index past the last puzzle resumes as completed. Entries
    /// that had to be repaired are written back.
    pub fn open(manifest: Manifest, mut store: S, clock: C, config: SessionConfig) -> SessionResult<Self> {
        let mut state = SessionState::default();

        if let Some(loaded) = SessionRecord::load(&store, &config, clock.now())? {
            let mut record = loaded.record;
            let mut repaired = loaded.repaired;
            if record.current_index > manifest.len() {
                warn!(
                    "persisted puzzle index {} is past the last puzzle ({}), treating as completed",
                    record.current_index,
                    manifest.len()
                );
                record.current_index = manifest.len();
                repaired = true;
            }
            if repaired {
                record.save(&mut store, &config)?;
            }
            state.started_at = Some(record.start_time);
            state.enter(record.current_index);
            if record.current_index < manifest.len() {
                info!(
                    "Resumed session at puzzle {} of {}",
                    record.current_index + 1,
                    manifest.len()
                );
            } else {
                info!("Resumed completed session ({} puzzles)", manifest.len());
            }
        } else {
            debug!("no started session in store, waiting for start");
        }

        Ok(Self {
            manifest,
            store,
            clock,
            config,
            state,
        })
    }

    /// Starts the session and the clock at the first puzzle.
    pub fn start(&mut self) -> SessionResult<Phase> {
        if self.state.started() {
            return Err(SessionError::AlreadyStarted);
        }
        let record = SessionRecord {
            start_time: self.clock.now(),
            current_index: 0,
        };
        record.save(&mut self.store, &self.config)?;
        self.state.started_at = Some(record.start_time);
        self.state.enter(0);
        info!("Session started with {} puzzles", self.manifest.len());
        Ok(self.phase())
    }

    /// Evaluates `input` against the current puzzle and applies the result.
    ///
    /// Accepted answers advance (or complete the session). Wrong answers
    /// count toward revealing the hint. A prime-minute miss or incomplete
    /// magic-square input changes nothing.
    pub fn submit_answer(&mut self, input: &AnswerInput) -> SessionResult<SubmitOutcome> {
        let index = self.playing_index()?;
        let elapsed_minutes = self.elapsed().whole_minutes();

        let puzzle = &self.manifest.puzzles[index];
        let has_hint = puzzle.visible_hint().is_some();
        let evaluation = Evaluator::new(&self.manifest.valid_names).evaluate(puzzle, input, elapsed_minutes);

        match evaluation {
            Evaluation::Accepted => {
                self.save_index(index + 1)?;
                self.state.enter(index + 1);
                if index + 1 < self.manifest.len() {
                    info!("Puzzle {} solved at {}", index + 1, self.elapsed());
                } else {
                    info!("All {} puzzles solved in {}", self.manifest.len(), self.elapsed());
                }
            }
            Evaluation::Rejected(rejection) if rejection.counts_as_failure() => {
                self.state.fail_count = self.state.fail_count.saturating_add(1);
                if has_hint && self.state.fail_count >= self.config.hint_after_failures {
                    if !self.state.hint_revealed {
                        debug!(index, fail_count = self.state.fail_count, "revealing hint");
                    }
                    self.state.hint_revealed = true;
                }
            }
            Evaluation::Rejected(rejection) => {
                debug!(index, %rejection, "submission not counted");
            }
        }

        Ok(SubmitOutcome {
            evaluation,
            phase: self.phase(),
            fail_count: self.state.fail_count,
            hint_visible: self.state.hint_revealed,
        })
    }

    /// Time since the session started; zero before it starts.
    #[must_use]
    pub fn elapsed(&self) -> Elapsed {
        match self.state.started_at {
            Some(started_at) => self.clock.now().since(started_at),
            None => Elapsed::ZERO,
        }
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn elapsed_time(&self) -> String {
        self.elapsed().to_string()
    }

    /// The puzzle being played.
    pub fn current_puzzle(&self) -> SessionResult<&PuzzleDefinition> {
        let index = self.playing_index()?;
        Ok(&self.manifest.puzzles[index])
    }

    /// Position of the current puzzle, while one is being played.
    #[must_use]
    pub fn progress(&self) -> Option<Progress> {
        match self.phase() {
            Phase::InProgress(index) => Some(Progress {
                position: index + 1,
                total: self.manifest.len(),
            }),
            Phase::NotStarted | Phase::Completed => None,
        }
    }

    /// The current puzzle's hint, once revealed.
    #[must_use]
    pub fn revealed_hint(&self) -> Option<&str> {
        if !self.state.hint_revealed {
            return None;
        }
        self.current_puzzle().ok().and_then(PuzzleDefinition::visible_hint)
    }

    /// A static content page. Locked until the session has started.
    pub fn static_page(&self, key: &str) -> SessionResult<&StaticPage> {
        if !self.state.started() {
            return Err(SessionError::NavigationLocked(key.to_string()));
        }
        self.manifest
            .static_page(key)
            .ok_or_else(|| SessionError::UnknownPage(key.to_string()))
    }

    /// Clears the persisted record and returns to `NotStarted`.
    pub fn reset(&mut self) -> SessionResult<()> {
        SessionRecord::clear(&mut self.store, &self.config)?;
        self.state = SessionState::default();
        info!("Session reset");
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::of(&self.state, self.manifest.len())
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn fail_count(&self) -> u32 {
        self.state.fail_count
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning its store.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    fn playing_index(&self) -> SessionResult<usize> {
        match self.phase() {
            Phase::NotStarted => Err(SessionError::NotStarted),
            Phase::InProgress(index) => Ok(index),
            Phase::Completed => Err(SessionError::SessionComplete),
        }
    }

    /// Persists a move to `current_index`. State is only updated by the
    /// caller once this succeeds.
    fn save_index(&mut self, current_index: usize) -> SessionResult<()> {
        let start_time = self.state.started_at.ok_or(SessionError::NotStarted)?;
        SessionRecord {
            start_time,
            current_index,
        }
        .save(&mut self.store, &self.config)
    }
}
