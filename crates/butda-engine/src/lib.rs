//! butda-engine: Headless core of the BUTDA research chat client
//!
//! This crate provides everything below the presentation layer:
//! - Rendering of research summaries to sanitized markup
//! - The conversation log and its single-flight state machine
//! - The research service client and the controller driving it
//! - Session gating and configuration

pub mod client;
pub mod config;
pub mod controller;
pub mod conversation;
pub mod message;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use client::{
    ClientError, HttpResearchClient, ResearchClient, ResearchOutcome, ResearchPayload,
    ResearchResponse,
};
pub use config::{construct_api_url, Config, ConfigError};
pub use controller::{Controller, SubmitStatus};
pub use conversation::{Conversation, ConversationError, ConversationState};
pub use message::{Message, Role};
pub use render::{escape_html, render};
pub use session::{SessionError, SessionProvider, TokenSession};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
