//! The conversation log and its single-flight state machine.
//!
//! ```text
//! Idle --begin(text)--> Awaiting { pending_id } --resolve(pending_id, terminal)--> Idle
//! ```
//!
//! `begin` appends the user entry and the pending placeholder in one step;
//! `resolve` swaps the placeholder for exactly one terminal entry. Nothing
//! else ever touches the log.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::message::{Message, Role};

/// Errors from applying a resolution to the log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversationError {
    /// No request is outstanding.
    #[error("no request is awaiting a response")]
    NotAwaiting,

    /// The resolution names a pending entry other than the current one.
    #[error("resolution for unknown pending entry {0}")]
    UnknownPending(String),

    /// Only assistant and error entries may replace the pending entry.
    #[error("{0} entries cannot resolve a request")]
    NotTerminal(Role),
}

/// Whether a request is outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConversationState {
    /// No pending entry; submissions are accepted.
    #[default]
    Idle,
    /// Exactly one pending entry, with this id.
    Awaiting { pending_id: String },
}

impl ConversationState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Why `begin` did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The text was empty after trimming.
    Empty,
    /// A request is already outstanding.
    Busy,
}

/// A request that `begin` started and that must later be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    /// Id of the placeholder entry.
    pub pending_id: String,
    /// Trimmed query text to send.
    pub query: String,
}

/// Ordered log of messages plus the request state.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    state: ConversationState,
}

impl Conversation {
    /// An empty conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A conversation seeded with the welcome entry.
    pub fn with_welcome() -> Self {
        Self {
            messages: vec![Message::welcome()],
            state: ConversationState::Idle,
        }
    }

    /// The log, in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn is_awaiting(&self) -> bool {
        !self.state.is_idle()
    }

    /// Start a request for `text`.
    ///
    /// On success the log has gained the user entry and the pending entry and
    /// the state is `Awaiting`. On rejection nothing changed.
    pub fn begin(&mut self, text: &str) -> Result<PendingQuery, Rejection> {
        let query = text.trim();
        if query.is_empty() {
            return Err(Rejection::Empty);
        }
        if self.is_awaiting() {
            debug!("submission rejected, a request is outstanding");
            return Err(Rejection::Busy);
        }

        let user = Message::user(query);
        let pending = Message::pending();
        let pending_id = pending.id().to_owned();

        self.messages.push(user);
        self.messages.push(pending);
        self.state = ConversationState::Awaiting {
            pending_id: pending_id.clone(),
        };
        debug!(%pending_id, "request started");

        Ok(PendingQuery {
            pending_id,
            query: query.to_owned(),
        })
    }

    /// Replace the pending entry `pending_id` with `terminal`.
    ///
    /// Stale or mismatched resolutions are rejected and leave the log as it
    /// was.
    pub fn resolve(
        &mut self,
        pending_id: &str,
        terminal: Message,
    ) -> Result<&Message, ConversationError> {
        let ConversationState::Awaiting { pending_id: current } = &self.state else {
            warn!(%pending_id, "ignoring resolution while idle");
            return Err(ConversationError::NotAwaiting);
        };
        if current != pending_id {
            warn!(%pending_id, %current, "ignoring stale resolution");
            return Err(ConversationError::UnknownPending(pending_id.to_owned()));
        }
        if !terminal.role().is_terminal() {
            return Err(ConversationError::NotTerminal(terminal.role()));
        }

        let position = self
            .messages
            .iter()
            .rposition(|m| m.id() == pending_id)
            .ok_or_else(|| ConversationError::UnknownPending(pending_id.to_owned()))?;
        self.messages.remove(position);
        self.messages.push(terminal);
        self.state = ConversationState::Idle;

        let resolved = &self.messages[self.messages.len() - 1];
        debug!(id = resolved.id(), role = %resolved.role(), "request resolved");
        Ok(resolved)
    }
}
