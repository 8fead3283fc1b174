use rand::Rng;

use crate::{GuessResult, InvalidRange, draw_secret, evaluate};

/// Default upper bound offered when a session is created.
pub const DEFAULT_RANGE_UPPER: u32 = 500;

/// Where a session is in its round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// No round in progress; a new game may be started.
    Idle,
    /// A round is in progress and a guess may be submitted.
    Active,
    /// A guess is in flight; submission is disabled until its result lands.
    AwaitingResult,
}

/// Errors that can prevent a round from starting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum StartError {
    /// The requested range is outside the supported bounds.
    #[display("{_0}")]
    InvalidRange(#[from] InvalidRange),
    /// A guess is still being evaluated.
    #[display("a guess is still being evaluated")]
    GuessInFlight,
}

/// Error returned when a guess is submitted without an active round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no active game")]
pub struct NotActive;

/// A raw guess queued for evaluation.
///
/// Carries the secret and attempt count snapshotted at submission time, so the
/// evaluation never reads shared mutable state. Consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGuess {
    /// Raw user-submitted text.
    pub raw: String,
    /// The secret at submission time.
    pub secret: Option<u32>,
    /// The attempt count at submission time.
    pub attempts: u32,
}

impl PendingGuess {
    /// Scores this guess. See [`evaluate`].
    #[must_use]
    pub fn evaluate(&self) -> GuessResult {
        evaluate(&self.raw, self.secret, self.attempts)
    }
}

/// A single-player guessing session.
///
/// Created idle; [`start`](Self::start) begins a round with a fresh secret,
/// [`submit`](Self::submit) snapshots a guess for evaluation, and
/// [`apply`](Self::apply) folds the result back in. The secret is set exactly
/// while a round is unfinished, and the attempt count resets to zero exactly
/// when a round starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: Option<u32>,
    range_upper: u32,
    attempts: u32,
    phase: Phase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates an idle session with the default range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            secret: None,
            range_upper: DEFAULT_RANGE_UPPER,
            attempts: 0,
            phase: Phase::Idle,
        }
    }

    /// Starts a new round with a fresh secret drawn from `[1, range_upper]`.
    ///
    /// Restarting mid-round is allowed; the previous round is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`StartError::InvalidRange`] if `range_upper` is unsupported,
    /// or [`StartError::GuessInFlight`] while a submitted guess has not been
    /// resolved yet. The interactive surface disables Start in that window,
    /// but the session guards it as well.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        range_upper: u32,
    ) -> Result<(), StartError> {
        if self.phase.is_awaiting_result() {
            return Err(StartError::GuessInFlight);
        }
        let secret = draw_secret(rng, range_upper)?;
        self.secret = Some(secret);
        self.range_upper = range_upper;
        self.attempts = 0;
        self.phase = Phase::Active;
        Ok(())
    }

    /// Snapshots `raw` for evaluation and moves to [`Phase::AwaitingResult`].
    ///
    /// Only one guess can be in flight at a time; submission stays disabled
    /// until the matching result is applied.
    ///
    /// # Errors
    ///
    /// Returns [`NotActive`] unless the session is in [`Phase::Active`].
    pub fn submit(&mut self, raw: &str) -> Result<PendingGuess, NotActive> {
        if !self.phase.is_active() {
            return Err(NotActive);
        }
        self.phase = Phase::AwaitingResult;
        Ok(PendingGuess {
            raw: raw.to_owned(),
            secret: self.secret,
            attempts: self.attempts,
        })
    }

    /// Folds an evaluation result back into the session.
    ///
    /// A correct result ends the round; hints and invalid results re-enable
    /// submission. Results arriving outside [`Phase::AwaitingResult`] are
    /// ignored: they can only be stale left-overs from a round that was
    /// abandoned mid-flight.
    pub fn apply(&mut self, result: &GuessResult) {
        if !self.phase.is_awaiting_result() {
            return;
        }
        match result {
            GuessResult::Correct { attempts } => {
                self.attempts = *attempts;
                self.secret = None;
                self.phase = Phase::Idle;
            }
            GuessResult::TooLow { attempts, .. } | GuessResult::TooHigh { attempts, .. } => {
                self.attempts = *attempts;
                self.phase = Phase::Active;
            }
            GuessResult::Invalid { .. } => {
                self.phase = Phase::Active;
            }
        }
    }

    /// The current secret, if a round is unfinished.
    #[must_use]
    pub fn secret(&self) -> Option<u32> {
        self.secret
    }

    /// The upper bound of the current (or most recent) round's range.
    #[must_use]
    pub fn range_upper(&self) -> u32 {
        self.range_upper
    }

    /// Attempts made in the current (or most recent) round.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}
