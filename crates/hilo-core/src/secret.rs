use rand::{Rng, RngExt as _};

/// Maximum supported upper bound for the guessing range.
pub const MAX_RANGE_UPPER: u32 = 100_000;

/// Error returned when a range upper bound is outside the supported bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("range upper bound {range_upper} is outside 1..=100000")]
pub struct InvalidRange {
    /// The rejected upper bound.
    pub range_upper: u32,
}

/// Draws a secret number uniformly from `[1, range_upper]`, inclusive.
///
/// # Errors
///
/// Returns [`InvalidRange`] if `range_upper` is outside `1..=`[`MAX_RANGE_UPPER`].
///
/// # Example
///
/// ```
/// let secret = hilo_core::draw_secret(&mut rand::rng(), 500).unwrap();
/// assert!((1..=500).contains(&secret));
/// ```
pub fn draw_secret<R: Rng + ?Sized>(rng: &mut R, range_upper: u32) -> Result<u32, InvalidRange> {
    if !(1..=MAX_RANGE_UPPER).contains(&range_upper) {
        return Err(InvalidRange { range_upper });
    }
    Ok(rng.random_range(1..=range_upper))
}
