use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assistant::catalog::CatalogEntry;
use crate::assistant::matcher::{self, Reply};

/// Who said a line in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One line of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonically increasing id, unique within one session.
    pub id: u64,
    /// The sentence shown.
    pub text: String,
    pub sender: Sender,
    /// Card payload for bot messages that present a project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CatalogEntry>,
    /// When the line was recorded.
    pub sent_at: DateTime<Utc>,
}

const OPENING: &str = "Hello! I'm Vision AI. Ask me about premium properties like ‘Pride World City’ or ‘Godrej Greens’.";

/// One user's conversation with the assistant.
///
/// Keeps the full transcript in memory and remembers the most recently
/// presented card, which the booking flows use as their target.
pub struct AssistantSession {
    catalog: Vec<CatalogEntry>,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl AssistantSession {
    /// Start a session over the given catalog, seeded with the opening line.
    pub fn new(catalog: Vec<CatalogEntry>) -> Self {
        let mut session = Self {
            catalog,
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(OPENING.to_string(), Sender::Bot, None);
        session
    }

    /// Record a user line and answer it. Both lines land on the transcript;
    /// the bot's answer is returned.
    pub fn respond(&mut self, input: &str) -> ChatMessage {
        self.push(input.to_string(), Sender::User, None);

        let Reply { text, card } = matcher::match_input(input, &self.catalog);
        self.push(text, Sender::Bot, card)
    }

    /// The card most recently presented by the bot, if any message carried
    /// one. Later cards shadow earlier ones.
    pub fn presented_card(&self) -> Option<&CatalogEntry> {
        self.messages
            .iter()
            .rev()
            .find_map(|message| message.card.as_ref())
    }

    /// Full transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Catalog this session promotes.
    pub fn catalog(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    fn push(&mut self, text: String, sender: Sender, card: Option<CatalogEntry>) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text,
            sender,
            card,
            sent_at: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}
