use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::classify::classify;
use super::responses::response_for;
use super::topic::Topic;

/// Speaker role for one conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Display prefix used by the frontend transcript ("You:" / "Bot:").
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::User => "You:",
            Role::Assistant => "Bot:",
        }
    }
}

/// A single turn: who spoke, what they said, and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

/// Append-only, session-scoped conversation log.
///
/// A caller-owned value rather than ambient state, so independent sessions
/// can be created and tested in isolation. No deletion, no size bound, no
/// persistence beyond the running session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn at the end of the ordered sequence.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn {
            role,
            content: content.into(),
            timestamp: Local::now().naive_local(),
        });
    }

    /// The full ordered sequence, for display.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

/// Outcome of one classify-then-respond cycle.
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    pub topic: Topic,
    pub reply: &'static str,
}

/// Run one exchange against a log: classify the input, look up the canned
/// reply, and append exactly one user turn followed by one assistant turn.
///
/// Empty or whitespace-only input performs no classification and no append;
/// `None` is returned and the log is untouched.
pub fn exchange(log: &mut ConversationLog, input: &str) -> Option<Exchange> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let topic = classify(trimmed);
    let reply = response_for(topic);

    log.append(Role::User, trimmed);
    log.append(Role::Assistant, reply);

    Some(Exchange { topic, reply })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_appends_user_then_assistant() {
        let mut log = ConversationLog::new();
        let out = exchange(&mut log, "What are the symptoms?").unwrap();

        assert_eq!(out.topic, Topic::Symptoms);
        assert!(out.reply.starts_with("Common symptoms of Sickle Cell Disease"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0].role, Role::User);
        assert_eq!(log.turns()[0].content, "What are the symptoms?");
        assert_eq!(log.turns()[1].role, Role::Assistant);
        assert_eq!(log.turns()[1].content, out.reply);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut log = ConversationLog::new();
        assert!(exchange(&mut log, "").is_none());
        assert!(exchange(&mut log, "   \n\t").is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn n_exchanges_alternate_strictly() {
        let mut log = ConversationLog::new();
        let inputs = ["care tips?", "xyzzy", "tell me about travel tips", "diet?"];
        for input in inputs {
            exchange(&mut log, input).unwrap();
        }

        assert_eq!(log.len(), inputs.len() * 2);
        let users = log.turns().iter().filter(|t| t.role == Role::User).count();
        let bots = log
            .turns()
            .iter()
            .filter(|t| t.role == Role::Assistant)
            .count();
        assert_eq!(users, inputs.len());
        assert_eq!(bots, inputs.len());
        for (i, turn) in log.turns().iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(turn.role, expected, "turn {i}");
        }
    }

    #[test]
    fn unmatched_input_gets_fallback_reply() {
        let mut log = ConversationLog::new();
        let out = exchange(&mut log, "xyzzy").unwrap();
        assert_eq!(out.topic, Topic::Unmatched);
        assert!(out.reply.starts_with("I'm here to help with your queries"));
    }

    #[test]
    fn input_is_trimmed_before_append() {
        let mut log = ConversationLog::new();
        exchange(&mut log, "  causes?  ").unwrap();
        assert_eq!(log.turns()[0].content, "causes?");
    }

    #[test]
    fn independent_logs_do_not_interfere() {
        let mut a = ConversationLog::new();
        let mut b = ConversationLog::new();
        exchange(&mut a, "screening info").unwrap();
        assert_eq!(a.len(), 2);
        assert!(b.is_empty());
        exchange(&mut b, "genetics").unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn role_prefixes_match_frontend() {
        assert_eq!(Role::User.prefix(), "You:");
        assert_eq!(Role::Assistant.prefix(), "Bot:");
    }
}
