//! Desktop application crate for the Hi-Lo number-guessing game.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod processor;
pub mod state;
pub mod ui;
