//! Events flowing from the backend worker to the UI thread.

use client_core::{ClientError, Ticket};
use shared::protocol::{SimplificationResult, StepGuideResult, TutorResult};

#[derive(Debug)]
pub enum UiEvent {
    BackendReady { base_url: String },
    BackendFailed(String),
    Simplified {
        ticket: Ticket,
        outcome: Result<SimplificationResult, ClientError>,
    },
    GuideCreated {
        ticket: Ticket,
        outcome: Result<StepGuideResult, ClientError>,
    },
    TutorAnswered {
        ticket: Ticket,
        outcome: Result<TutorResult, ClientError>,
    },
}
