//! Conversation controller.
//!
//! Owns the [`Conversation`] and drives at most one research request at a
//! time. [`Controller::submit`] records the query and starts the request on
//! the tokio runtime; [`Controller::resolve_next`] waits for it and swaps the
//! pending entry for the rendered answer or an error entry.

use std::sync::Arc;

use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use crate::client::{ClientError, ResearchClient, ResearchOutcome, ResearchResponse};
use crate::conversation::{Conversation, ConversationState, Rejection};
use crate::message::{Message, SUMMARY_TITLE};
use crate::render::render;
use crate::session::{SessionError, SessionProvider};

/// Result of [`Controller::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// The query was recorded and its request started.
    Sent,
    /// The input was blank; nothing happened.
    Empty,
    /// A request is already outstanding; nothing happened.
    Busy,
    /// There is no session; nothing happened.
    SignedOut,
}

type RequestResult = Result<ResearchResponse, ClientError>;

struct InFlight {
    pending_id: String,
    task: JoinHandle<RequestResult>,
}

/// Drives a conversation against a research service.
pub struct Controller {
    conversation: Conversation,
    client: Arc<dyn ResearchClient>,
    session: Arc<dyn SessionProvider>,
    in_flight: Option<InFlight>,
}

impl Controller {
    pub fn new(
        conversation: Conversation,
        client: Arc<dyn ResearchClient>,
        session: Arc<dyn SessionProvider>,
    ) -> Self {
        Self {
            conversation,
            client,
            session,
            in_flight: None,
        }
    }

    /// The log, in display order.
    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn state(&self) -> &ConversationState {
        self.conversation.state()
    }

    pub fn is_busy(&self) -> bool {
        self.conversation.is_awaiting()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_established()
    }

    /// Submit a query.
    ///
    /// When accepted, the user and pending entries are in the log before this
    /// returns and the request runs on a spawned task. Must be called from
    /// within a tokio runtime.
    pub fn submit(&mut self, text: &str) -> SubmitStatus {
        if text.trim().is_empty() {
            return SubmitStatus::Empty;
        }
        if !self.session.is_established() {
            debug!("submission rejected, no session");
            return SubmitStatus::SignedOut;
        }

        let pending = match self.conversation.begin(text) {
            Ok(pending) => pending,
            Err(Rejection::Empty) => return SubmitStatus::Empty,
            Err(Rejection::Busy) => return SubmitStatus::Busy,
        };

        let client = Arc::clone(&self.client);
        let query = pending.query;
        let task = tokio::spawn(async move { client.research(&query).await });
        self.in_flight = Some(InFlight {
            pending_id: pending.pending_id,
            task,
        });
        SubmitStatus::Sent
    }

    /// Wait for the outstanding request and apply its outcome.
    ///
    /// Returns the terminal entry, or `None` when nothing is outstanding.
    /// Cancel-safe: if this future is dropped before completing, the request
    /// stays outstanding and can still be resolved or cancelled.
    pub async fn resolve_next(&mut self) -> Option<&Message> {
        let in_flight = self.in_flight.as_mut()?;
        let joined = (&mut in_flight.task).await;
        let InFlight { pending_id, .. } = self.in_flight.take()?;
        let result = joined.unwrap_or_else(|err| Err(join_failure(&err)));
        self.finish(&pending_id, result)
    }

    /// Abandon the outstanding request, resolving it as cancelled.
    pub fn cancel(&mut self) -> Option<&Message> {
        let InFlight { pending_id, task } = self.in_flight.take()?;
        task.abort();
        info!(%pending_id, "request cancelled");
        self.finish(&pending_id, Err(ClientError::Cancelled))
    }

    /// End the session through the identity provider.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.session.terminate().await
    }

    fn finish(&mut self, pending_id: &str, result: RequestResult) -> Option<&Message> {
        let terminal = terminal_message(result);
        match self.conversation.resolve(pending_id, terminal) {
            Ok(message) => {
                info!(id = message.id(), role = %message.role(), "request resolved");
                Some(message)
            }
            Err(err) => {
                warn!(error = %err, "dropping resolution");
                None
            }
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if let Some(in_flight) = &self.in_flight {
            in_flight.task.abort();
        }
    }
}

fn join_failure(err: &JoinError) -> ClientError {
    if err.is_cancelled() {
        ClientError::Cancelled
    } else {
        ClientError::TaskFailed(err.to_string())
    }
}

/// The entry that replaces the pending one for a finished request.
fn terminal_message(result: RequestResult) -> Message {
    match result {
        Ok(response) => match response.outcome() {
            ResearchOutcome::Summary(summary) => Message::assistant(SUMMARY_TITLE, render(&summary)),
            ResearchOutcome::Failed(message) => {
                warn!(%message, "research service reported a failure");
                Message::error(message)
            }
        },
        Err(err) => {
            warn!(error = %err, "research request failed");
            Message::error(err.description())
        }
    }
}
