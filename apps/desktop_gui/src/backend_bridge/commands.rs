//! Backend commands queued from UI to backend worker.

use client_core::Ticket;
use shared::protocol::{SimplificationRequest, StepGuideRequest, TutorRequest};

use crate::ui::header::Route;

#[derive(Debug)]
pub enum BackendCommand {
    Simplify {
        ticket: Ticket,
        request: SimplificationRequest,
    },
    CreateGuide {
        ticket: Ticket,
        request: StepGuideRequest,
    },
    AskTutor {
        ticket: Ticket,
        request: TutorRequest,
    },
    /// Aborts whatever call the page still has in flight.
    CancelPage(Route),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Simplify { .. } => "simplify",
            BackendCommand::CreateGuide { .. } => "create_guide",
            BackendCommand::AskTutor { .. } => "ask_tutor",
            BackendCommand::CancelPage(_) => "cancel_page",
        }
    }

    /// Page that owns the task spawned for this command.
    pub fn page(&self) -> Route {
        match self {
            BackendCommand::Simplify { .. } => Route::Simplify,
            BackendCommand::CreateGuide { .. } => Route::Steps,
            BackendCommand::AskTutor { .. } => Route::Tutor,
            BackendCommand::CancelPage(route) => *route,
        }
    }
}
