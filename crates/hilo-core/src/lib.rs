//! Core logic for the Hi-Lo number-guessing game.
//!
//! This crate contains everything the game needs except the interactive
//! surface and the background thread that drives it:
//!
//! - [`draw_secret`]: uniform secret selection within a validated range
//! - [`evaluate`]: the single source of truth for win/hint classification
//! - [`GameSession`]: the round lifecycle state machine
//!
//! All of it is synchronous and free of GUI or threading dependencies, so the
//! evaluation contract can be exercised directly by tests.

pub use self::{evaluate::*, secret::*, session::*};

mod evaluate;
mod secret;
mod session;
