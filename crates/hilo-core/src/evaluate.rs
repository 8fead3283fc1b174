use std::{cmp::Ordering, num::IntErrorKind};

/// Why a guess could not be scored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidReason {
    /// No game is active, so there is no secret to compare against.
    #[display("no active game")]
    NoActiveGame,
    /// The input did not parse as an integer.
    #[display("not a number")]
    NotANumber,
    /// An unexpected fault occurred while scoring; carries a diagnostic.
    #[display("processing fault: {_0}")]
    Fault(String),
}

/// Outcome of scoring a single guess against the secret.
///
/// Exactly one case is produced per evaluation. The attempt counts carried by
/// the scored variants are the counts *after* the evaluated guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// The guess matched the secret; the round is over.
    Correct {
        /// Total attempts including this guess.
        attempts: u32,
    },
    /// The guess was below the secret; hint: go higher.
    TooLow {
        /// The guessed value.
        guess: i64,
        /// Total attempts including this guess.
        attempts: u32,
    },
    /// The guess was above the secret; hint: go lower.
    TooHigh {
        /// The guessed value.
        guess: i64,
        /// Total attempts including this guess.
        attempts: u32,
    },
    /// The guess could not be scored; the attempt count is unchanged.
    Invalid {
        /// Why the guess was not scored.
        reason: InvalidReason,
    },
}

impl GuessResult {
    /// The attempt count carried by scored results, `None` for [`GuessResult::Invalid`].
    #[must_use]
    pub fn attempts(&self) -> Option<u32> {
        match self {
            GuessResult::Correct { attempts }
            | GuessResult::TooLow { attempts, .. }
            | GuessResult::TooHigh { attempts, .. } => Some(*attempts),
            GuessResult::Invalid { .. } => None,
        }
    }

    /// Whether this result ends the round.
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessResult::Correct { .. })
    }
}

/// Scores `raw` against `secret`, given `attempts_so_far` prior attempts.
///
/// A missing secret or a parse failure yields [`GuessResult::Invalid`] and
/// leaves the attempt count untouched; every scored comparison counts as one
/// more attempt. Signed input is accepted, so `"-5"` scores as too low rather
/// than failing to parse. Magnitudes beyond the `i64` range still score as a
/// hint in the right direction, with the carried guess saturated.
///
/// # Example
///
/// ```
/// use hilo_core::{GuessResult, evaluate};
///
/// assert_eq!(
///     evaluate("250", Some(300), 0),
///     GuessResult::TooLow { guess: 250, attempts: 1 },
/// );
/// ```
#[must_use]
pub fn evaluate(raw: &str, secret: Option<u32>, attempts_so_far: u32) -> GuessResult {
    let Some(secret) = secret else {
        return GuessResult::Invalid {
            reason: InvalidReason::NoActiveGame,
        };
    };
    let attempts = attempts_so_far + 1;
    let guess = match raw.trim().parse::<i64>() {
        Ok(guess) => guess,
        Err(err) => {
            // Overflow means the magnitude is known even if the value is not.
            return match err.kind() {
                IntErrorKind::PosOverflow => GuessResult::TooHigh {
                    guess: i64::MAX,
                    attempts,
                },
                IntErrorKind::NegOverflow => GuessResult::TooLow {
                    guess: i64::MIN,
                    attempts,
                },
                _ => GuessResult::Invalid {
                    reason: InvalidReason::NotANumber,
                },
            };
        }
    };

    match guess.cmp(&i64::from(secret)) {
        Ordering::Equal => GuessResult::Correct { attempts },
        Ordering::Less => GuessResult::TooLow { guess, attempts },
        Ordering::Greater => GuessResult::TooHigh { guess, attempts },
    }
}
