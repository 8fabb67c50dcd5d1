//! Genjutsu - a terminal security dashboard for Gmail threat monitoring
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod ui;
