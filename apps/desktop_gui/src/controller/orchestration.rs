//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{PageForm, SubmitController, Ticket};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub const QUEUE_FULL: &str = "Antrian permintaan penuh, silakan coba lagi";
pub const WORKER_DISCONNECTED: &str = "Layanan latar belakang tidak tersedia; mulai ulang aplikasi";

/// Queues `cmd`; on failure writes a user-facing status and returns false.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut Option<String>,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue full");
            *status = Some(QUEUE_FULL.to_string());
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            *status = Some(WORKER_DISCONNECTED.to_string());
            false
        }
    }
}

/// Validates the page form and queues its call. A queue failure rolls the page back to idle.
pub fn submit_page<F: PageForm>(
    controller: &mut SubmitController<F>,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut Option<String>,
    to_command: impl FnOnce(Ticket, F::Request) -> BackendCommand,
) -> bool {
    let Some(submission) = controller.begin_submit() else {
        return false;
    };
    let queued = dispatch_backend_command(
        cmd_tx,
        to_command(submission.ticket, submission.request),
        status,
    );
    if !queued {
        controller.cancel();
    }
    queued
}
