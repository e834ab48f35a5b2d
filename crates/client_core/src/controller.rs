//! Submit/call/render state machine shared by every page.

use std::{
    future::Future,
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::{debug, warn};

use crate::error::{ClientError, ValidationError};

/// Form state for one page: validation, request building and the fixed failure text.
pub trait PageForm {
    type Request: Clone + Send + 'static;
    type Response: Clone + Send + 'static;

    /// Localized message rendered when the call fails; the underlying error is only logged.
    const FAILURE_MESSAGE: &'static str;

    /// Whether every required field is non-blank.
    fn is_ready(&self) -> bool;

    fn to_request(&self) -> Result<Self::Request, ValidationError>;
}

/// Identifies one submission so late completions can be told apart from the current one.
/// Unique per process, so a recreated controller never reuses a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

impl Ticket {
    fn next() -> Self {
        Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone)]
pub struct Submission<R> {
    pub ticket: Ticket,
    pub request: R,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T> {
    Idle { validation: Option<ValidationError> },
    Submitting(Ticket),
    Succeeded(T),
    Failed(&'static str),
}

pub struct SubmitController<F: PageForm> {
    pub form: F,
    phase: Phase<F::Response>,
}

impl<F: PageForm + Default> Default for SubmitController<F> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F: PageForm> SubmitController<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            phase: Phase::Idle { validation: None },
        }
    }

    pub fn phase(&self) -> &Phase<F::Response> {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    /// Mirrors the submit control: disabled while a call is outstanding or input is blank.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.form.is_ready()
    }

    pub fn result(&self) -> Option<&F::Response> {
        match &self.phase {
            Phase::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    /// Validation or failure message, whichever applies. Never set together with a result.
    pub fn error_message(&self) -> Option<&'static str> {
        match &self.phase {
            Phase::Idle {
                validation: Some(err),
            } => Some(err.message),
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Validates the form and, if it passes, moves to `Submitting` with prior output cleared.
    pub fn begin_submit(&mut self) -> Option<Submission<F::Request>> {
        if let Phase::Submitting(ticket) = self.phase {
            debug!(?ticket, "submit ignored while a request is in flight");
            return None;
        }

        match self.form.to_request() {
            Ok(request) => {
                let ticket = Ticket::next();
                self.phase = Phase::Submitting(ticket);
                Some(Submission { ticket, request })
            }
            Err(validation) => {
                self.phase = Phase::Idle {
                    validation: Some(validation),
                };
                None
            }
        }
    }

    /// Applies an outcome. Returns false when the ticket is stale (cancelled or superseded).
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<F::Response, ClientError>,
    ) -> bool {
        if !matches!(self.phase, Phase::Submitting(current) if current == ticket) {
            debug!(?ticket, "discarding outcome for stale submission");
            return false;
        }

        self.phase = match outcome {
            Ok(result) => Phase::Succeeded(result),
            Err(err) => {
                warn!(?ticket, "submission failed: {err}");
                Phase::Failed(F::FAILURE_MESSAGE)
            }
        };
        true
    }

    /// Drops any in-flight submission; its eventual outcome will be discarded.
    pub fn cancel(&mut self) {
        if self.is_submitting() {
            self.phase = Phase::Idle { validation: None };
        }
    }

    /// Runs a full submit cycle against `call`. Returns false if nothing was sent.
    pub async fn submit_with<C, Fut>(&mut self, call: C) -> bool
    where
        C: FnOnce(F::Request) -> Fut,
        Fut: Future<Output = Result<F::Response, ClientError>>,
    {
        let Some(submission) = self.begin_submit() else {
            return false;
        };
        let outcome = call(submission.request).await;
        self.complete(submission.ticket, outcome)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
