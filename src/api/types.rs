//! Shared state for the API layer.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::error::ApiError;
use crate::assistant::SessionStore;

/// Shared context for all API routes.
///
/// Sessions live in memory only; the single mutex is fine for the
/// one-classify-then-respond-per-request workload.
#[derive(Clone, Default)]
pub struct ApiContext {
    sessions: Arc<Mutex<SessionStore>>,
}

impl ApiContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the session store, mapping a poisoned lock to an API error.
    pub fn sessions(&self) -> Result<MutexGuard<'_, SessionStore>, ApiError> {
        self.sessions
            .lock()
            .map_err(|_| ApiError::Internal("session store lock poisoned".into()))
    }
}
