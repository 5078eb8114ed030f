//! Blocking client for the Volterra analysis API.
//!
//! All pricing, portfolio and regime math lives server-side; this crate only
//! moves typed JSON. Callers run requests off the UI thread and surface
//! failures as status messages.

mod client;
mod types;

pub use client::{ApiClient, ApiError};
pub use types::{
    AlertCondition, AlertRule, NewAlert, PaperAccount, Position, Quote, ScannerRow, Sentiment,
    WatchlistEntry,
};
