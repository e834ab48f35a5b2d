//! Worker thread owning the tokio runtime; runs one API task per page.

use std::{collections::HashMap, thread};

use client_core::{BuddyTextClient, ClientSettings};
use crossbeam_channel::{Receiver, Sender};
use tokio::task::JoinHandle;

use crate::{
    backend_bridge::commands::BackendCommand, controller::events::UiEvent, ui::header::Route,
};

pub fn spawn_backend_thread(
    settings: ClientSettings,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let client = match BuddyTextClient::new(&settings) {
            Ok(client) => client,
            Err(err) => {
                tracing::error!("failed to build API client: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(err.to_string()));
                return;
            }
        };
        tracing::info!(base_url = %settings.api_base_url, "backend worker ready");
        let _ = ui_tx.try_send(UiEvent::BackendReady {
            base_url: settings.api_base_url.clone(),
        });

        runtime.block_on(run_command_loop(client, cmd_rx, ui_tx));
    })
}

async fn run_command_loop(
    client: BuddyTextClient,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let mut tasks: HashMap<Route, JoinHandle<()>> = HashMap::new();

    while let Ok(cmd) = cmd_rx.recv() {
        tasks.retain(|_, task| !task.is_finished());
        let page = cmd.page();
        if let Some(task) = tasks.remove(&page) {
            tracing::debug!(?page, command = cmd.name(), "aborting in-flight page task");
            task.abort();
        }

        let client = client.clone();
        let ui_tx = ui_tx.clone();
        let task = match cmd {
            BackendCommand::CancelPage(_) => continue,
            BackendCommand::Simplify { ticket, request } => tokio::spawn(async move {
                let outcome = client.simplification.simplify_text(&request).await;
                let _ = ui_tx.send(UiEvent::Simplified { ticket, outcome });
            }),
            BackendCommand::CreateGuide { ticket, request } => tokio::spawn(async move {
                let outcome = client.steps.create_guide(&request).await;
                let _ = ui_tx.send(UiEvent::GuideCreated { ticket, outcome });
            }),
            BackendCommand::AskTutor { ticket, request } => tokio::spawn(async move {
                let outcome = client.tutor.ask_question(&request).await;
                let _ = ui_tx.send(UiEvent::TutorAnswered { ticket, outcome });
            }),
        };
        tasks.insert(page, task);
    }

    for (_, task) in tasks {
        task.abort();
    }
    tracing::debug!("ui command channel closed; backend worker exiting");
}
