//! Conversation log entries.
//!
//! A [`Message`] is created once through one of its constructors and never
//! changed afterwards; the log replaces entries, it does not edit them.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::render::render;

/// Title of a successful research answer.
pub const SUMMARY_TITLE: &str = "Research Summary";

/// Title of every error entry.
pub const ERROR_TITLE: &str = "Error";

/// Display label of the pending entry.
pub const PENDING_LABEL: &str = "Processing...";

/// Id of the seeded welcome entry.
pub const WELCOME_ID: &str = "welcome";

/// Title of the seeded welcome entry.
pub const WELCOME_TITLE: &str = "Welcome to BUTDA!";

const WELCOME_TEXT: &str = "I'm your personal news assistant. Tell me what topics you're \
interested in, I'll curate a 3-minute feed. All the news you need.";

const WELCOME_TIMESTAMP: &str = "Just now";

/// Who (or what) produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Rendered answer from the research service.
    Assistant,
    /// Query typed by the user.
    User,
    /// Failure report.
    Error,
    /// Placeholder while a request is outstanding.
    Pending,
}

impl Role {
    /// Lowercase name, also used as the id prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Assistant => "assistant",
            Self::User => "user",
            Self::Error => "error",
            Self::Pending => "pending",
        }
    }

    /// Whether an entry with this role may replace the pending entry.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Assistant | Self::Error)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    id: String,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    body: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    meta: Option<String>,
}

impl Message {
    fn new(role: Role, title: Option<&str>, body: String, timestamp: String) -> Self {
        Self {
            id: format!("{}-{}", role.as_str(), Uuid::new_v4()),
            role,
            title: title.map(str::to_owned),
            body,
            timestamp,
            meta: None,
        }
    }

    /// A user query; the text is stored trimmed.
    pub fn user(text: &str) -> Self {
        Self::new(Role::User, None, text.trim().to_owned(), display_time(Local::now()))
    }

    /// The placeholder shown while a request is outstanding.
    pub fn pending() -> Self {
        Self::new(Role::Pending, None, String::new(), PENDING_LABEL.to_owned())
    }

    /// A research answer. `markup` must already be rendered.
    pub fn assistant(title: &str, markup: String) -> Self {
        Self::new(Role::Assistant, Some(title), markup, display_time(Local::now()))
    }

    /// A failure report carrying plain text.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(
            Role::Error,
            Some(ERROR_TITLE),
            text.into(),
            display_time(Local::now()),
        )
    }

    /// The greeting a fresh interactive conversation starts with.
    pub fn welcome() -> Self {
        Self {
            id: WELCOME_ID.to_owned(),
            role: Role::Assistant,
            title: Some(WELCOME_TITLE.to_owned()),
            body: render(WELCOME_TEXT),
            timestamp: WELCOME_TIMESTAMP.to_owned(),
            meta: None,
        }
    }

    /// Attach a supplementary annotation. Only meaningful before the message
    /// enters a log.
    #[must_use]
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Plain text for user and error entries, sanitized markup for
    /// assistant entries, empty for the pending entry.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn meta(&self) -> Option<&str> {
        self.meta.as_deref()
    }
}

/// Format a wall-clock time the way entries display it, e.g. `3:07 PM`.
pub fn display_time(at: DateTime<Local>) -> String {
    at.format("%-I:%M %p").to_string()
}
