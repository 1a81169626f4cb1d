use std::collections::HashMap;

use uuid::Uuid;

use super::conversation::ConversationLog;

/// In-memory session store: one [`ConversationLog`] per session id.
///
/// Lives for the duration of the process only. The owner (the API context)
/// wraps it in a mutex; the store itself is plain data.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, ConversationLog>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty session and return its id.
    pub fn create(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, ConversationLog::new());
        id
    }

    /// Borrow a session's log, if the session exists.
    pub fn get(&self, id: Uuid) -> Option<&ConversationLog> {
        self.sessions.get(&id)
    }

    /// Mutably borrow a session's log, if the session exists.
    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut ConversationLog> {
        self.sessions.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
