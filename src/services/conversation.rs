//! Chat transcripts, one per open chatbot widget.
//!
//! DESIGN
//! ======
//! A conversation owns its bot and an ordered transcript seeded with the
//! bot's greeting. Sending is split in two so the caller can wait out the
//! reply latency without holding any lock:
//!
//! 1. `begin` validates the input, appends the user message, and marks the
//!    conversation pending.
//! 2. `complete` appends the bot reply and clears the pending flag.
//!
//! While pending, further input is rejected, matching the disabled input box.
//!
//! Every message refreshes `last_active`; the sweeper drops conversations
//! that have sat idle past the configured limit, so abandoned widgets do
//! not accumulate.

use std::time::{Duration, Instant};

use serde::Serialize;
use uuid::Uuid;

use super::chatbot::{Bot, BotKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("a reply is still pending")]
    ReplyPending,
    #[error("conversation not found: {0}")]
    NotFound(Uuid),
    #[error("conversation {0} belongs to another session")]
    Forbidden(Uuid),
    #[error("learner chat requires a learner session")]
    NotALearner,
}

#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: Uuid,
    bot: Bot,
    /// Session token that opened the conversation, if any.
    owner: Option<String>,
    messages: Vec<ChatMessage>,
    pending: bool,
    last_active: Instant,
}

impl Conversation {
    #[must_use]
    pub fn new(bot: Bot, owner: Option<String>) -> Self {
        let mut conversation = Self {
            id: Uuid::new_v4(),
            bot,
            owner,
            messages: Vec::new(),
            pending: false,
            last_active: Instant::now(),
        };
        let greeting = conversation.bot.greeting();
        conversation.push(greeting, Sender::Bot);
        conversation
    }

    #[must_use]
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    #[must_use]
    pub fn kind(&self) -> BotKind {
        self.bot.kind()
    }

    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Idle for at least `limit` with no reply in flight.
    #[must_use]
    pub fn is_idle(&self, limit: Duration) -> bool {
        !self.pending && self.last_active.elapsed() >= limit
    }

    /// Quick questions, offered only until the first user message.
    #[must_use]
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        if self.messages.len() == 1 { self.bot.suggested_questions() } else { &[] }
    }

    /// Whether `token` may read or write this conversation. Unowned
    /// conversations are open to anyone.
    #[must_use]
    pub fn accessible_by(&self, token: Option<&str>) -> bool {
        match &self.owner {
            None => true,
            Some(owner) => token == Some(owner.as_str()),
        }
    }

    /// Append the user's message and mark a reply as pending.
    ///
    /// # Errors
    ///
    /// [`ChatError::EmptyMessage`] for blank input, [`ChatError::ReplyPending`]
    /// if the previous message has not been answered yet.
    pub fn begin(&mut self, input: &str) -> Result<ChatMessage, ChatError> {
        if input.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.pending {
            return Err(ChatError::ReplyPending);
        }
        self.pending = true;
        Ok(self.push(input.to_owned(), Sender::User))
    }

    /// Append the bot's reply and clear the pending flag.
    pub fn complete(&mut self, text: String) -> ChatMessage {
        self.pending = false;
        self.push(text, Sender::Bot)
    }

    fn push(&mut self, text: String, sender: Sender) -> ChatMessage {
        self.last_active = Instant::now();
        let message = ChatMessage { id: self.messages.len() as u64, text, sender };
        self.messages.push(message.clone());
        message
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
