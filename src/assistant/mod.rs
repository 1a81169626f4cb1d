//! Keyword-routed response engine.
//!
//! Three small pieces, composed per exchange:
//! - `classify` — ordered substring dispatch over [`Topic`]
//! - `responses` — static Topic → canned paragraph table
//! - `conversation` — caller-owned append-only log + `exchange()`
//!
//! `sessions` holds the in-memory per-session store used by the API layer.

pub mod classify;
pub mod conversation;
pub mod responses;
pub mod sessions;
pub mod topic;

pub use classify::classify;
pub use conversation::{exchange, ConversationLog, Exchange, Role, Turn};
pub use responses::response_for;
pub use sessions::SessionStore;
pub use topic::Topic;
