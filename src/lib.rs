//! Drepana — a demonstration web service for sickle-cell-disease awareness.
//!
//! - `assistant` — keyword-routed chat: classifier, canned responses,
//!   caller-owned conversation logs, in-memory sessions
//! - `content` — the static informational page
//! - `api` — axum HTTP surface and server lifecycle
//! - `smear` — offline placeholder feature reports for image folders

pub mod api;
pub mod assistant;
pub mod config;
pub mod content;
pub mod smear;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a binary entry point. RUST_LOG overrides the
/// app default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
