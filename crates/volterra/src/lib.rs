//! Volterra core library: configuration, logging, and the terminal shell.
//!
//! The binary in `main.rs` only parses the CLI and dispatches here.

pub mod config;
pub mod logging;
pub mod tui;
