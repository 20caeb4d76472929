//! Session gate.
//!
//! Authentication lives with an external identity provider; the engine only
//! needs to know whether a session exists and how to end it.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;
use tracing::info;

/// Environment variable holding the access token for [`TokenSession`].
pub const ACCESS_TOKEN_ENV: &str = "BUTDA_ACCESS_TOKEN";

/// Session errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// There is no session to act on.
    #[error("not signed in")]
    NotEstablished,
}

/// The identity provider as seen by the controller.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Whether a user session currently exists.
    fn is_established(&self) -> bool;

    /// End the current session.
    async fn terminate(&self) -> Result<(), SessionError>;
}

/// A session backed by a bearer token obtained out of band.
#[derive(Debug, Default)]
pub struct TokenSession {
    token: Mutex<Option<String>>,
}

impl TokenSession {
    /// A session for `token`; blank tokens count as no session.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Mutex::new(token.filter(|t| !t.trim().is_empty())),
        }
    }

    /// A session from the `BUTDA_ACCESS_TOKEN` environment variable.
    pub fn from_env() -> Self {
        Self::new(std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    /// The current token, if the session is established.
    pub fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl SessionProvider for TokenSession {
    fn is_established(&self) -> bool {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    async fn terminate(&self) -> Result<(), SessionError> {
        let dropped = self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match dropped {
            Some(_) => {
                info!("session terminated");
                Ok(())
            }
            None => Err(SessionError::NotEstablished),
        }
    }
}
