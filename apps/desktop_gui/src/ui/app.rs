//! App shell: routing, per-page controllers and backend event intake.

use std::time::Duration;

use client_core::{SimplifyController, StepsController, TutorController};
use crossbeam_channel::{Receiver, Sender};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{
        events::UiEvent,
        orchestration::{dispatch_backend_command, submit_page},
    },
    platform,
    ui::{
        header::{self, Route},
        pages::{self, PageAction},
    },
};

const COPIED: &str = "Teks disalin ke clipboard";
const COPY_FAILED: &str = "Gagal menyalin teks";
const SPEECH_UNAVAILABLE: &str = "Fitur suara tidak tersedia di perangkat ini";

/// Form and result state for the three API pages. Recreated whenever a page is left.
#[derive(Default)]
struct PageStates {
    simplify: SimplifyController,
    tutor: TutorController,
    steps: StepsController,
}

impl PageStates {
    fn is_submitting(&self, route: Route) -> bool {
        match route {
            Route::Home => false,
            Route::Simplify => self.simplify.is_submitting(),
            Route::Tutor => self.tutor.is_submitting(),
            Route::Steps => self.steps.is_submitting(),
        }
    }

    fn reset(&mut self, route: Route) {
        match route {
            Route::Home => {}
            Route::Simplify => self.simplify = SimplifyController::default(),
            Route::Tutor => self.tutor = TutorController::default(),
            Route::Steps => self.steps = StepsController::default(),
        }
    }
}

pub struct BuddyTextApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    route: Route,
    pages: PageStates,
    status: Option<String>,
    speech_locale: String,
}

impl BuddyTextApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        speech_locale: String,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            route: Route::Home,
            pages: PageStates::default(),
            status: None,
            speech_locale,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    /// Leaves the current page: its in-flight call is aborted and its state discarded.
    pub fn navigate(&mut self, target: Route) {
        if target == self.route {
            return;
        }
        let leaving = self.route;
        if self.pages.is_submitting(leaving) {
            dispatch_backend_command(
                &self.cmd_tx,
                BackendCommand::CancelPage(leaving),
                &mut self.status,
            );
        }
        self.pages.reset(leaving);
        self.route = target;
        self.status = None;
        tracing::debug!(from = leaving.path(), to = target.path(), "navigated");
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::BackendReady { base_url } => {
                tracing::info!(%base_url, "backend worker connected");
            }
            UiEvent::BackendFailed(message) => {
                self.status = Some(message);
            }
            UiEvent::Simplified { ticket, outcome } => {
                self.pages.simplify.complete(ticket, outcome);
            }
            UiEvent::GuideCreated { ticket, outcome } => {
                self.pages.steps.complete(ticket, outcome);
            }
            UiEvent::TutorAnswered { ticket, outcome } => {
                self.pages.tutor.complete(ticket, outcome);
            }
        }
    }

    fn handle_action(&mut self, action: PageAction) {
        match action {
            PageAction::Navigate(route) => self.navigate(route),
            PageAction::Submit => self.submit_current_page(),
            PageAction::Copy(text) => {
                self.status = Some(match platform::copy_to_clipboard(&text) {
                    Ok(()) => COPIED.to_string(),
                    Err(err) => {
                        tracing::warn!("clipboard write failed: {err:#}");
                        COPY_FAILED.to_string()
                    }
                });
            }
            PageAction::Speak(text) => {
                if let Err(err) = platform::speak(&text, &self.speech_locale) {
                    tracing::warn!("speech unavailable: {err:#}");
                    self.status = Some(SPEECH_UNAVAILABLE.to_string());
                }
            }
        }
    }

    fn submit_current_page(&mut self) {
        let (cmd_tx, status) = (&self.cmd_tx, &mut self.status);
        match self.route {
            Route::Home => {}
            Route::Simplify => {
                submit_page(&mut self.pages.simplify, cmd_tx, status, |ticket, request| {
                    BackendCommand::Simplify { ticket, request }
                });
            }
            Route::Tutor => {
                submit_page(&mut self.pages.tutor, cmd_tx, status, |ticket, request| {
                    BackendCommand::AskTutor { ticket, request }
                });
            }
            Route::Steps => {
                submit_page(&mut self.pages.steps, cmd_tx, status, |ticket, request| {
                    BackendCommand::CreateGuide { ticket, request }
                });
            }
        }
    }
}

impl eframe::App for BuddyTextApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut action = None;

        egui::TopBottomPanel::top("buddytext_header").show(ctx, |ui| {
            ui.add_space(6.0);
            if let Some(route) = header::show(ui, self.route.path()) {
                action = Some(PageAction::Navigate(route));
            }
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("buddytext_footer").show(ctx, |ui| {
            if let Some(status) = &self.status {
                ui.small(status.as_str());
            }
            header::show_footer(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(860.0);
                    let page_action = match self.route {
                        Route::Home => pages::home::show(ui),
                        Route::Simplify => pages::simplify::show(ui, &mut self.pages.simplify),
                        Route::Tutor => pages::tutor::show(ui, &mut self.pages.tutor),
                        Route::Steps => pages::steps::show(ui, &mut self.pages.steps),
                    };
                    if page_action.is_some() {
                        action = page_action;
                    }
                });
        });

        if let Some(action) = action {
            self.handle_action(action);
        }

        if self.pages.is_submitting(self.route) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::{
        forms::{SIMPLIFY_FAILED, TUTOR_QUESTION_REQUIRED},
        ClientError, TransportError,
    };
    use crossbeam_channel::bounded;
    use serde_json::json;

    fn app() -> (BuddyTextApp, Receiver<BackendCommand>, Sender<UiEvent>) {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        (
            BuddyTextApp::new(cmd_tx, ui_rx, "id-ID".to_string()),
            cmd_rx,
            ui_tx,
        )
    }

    fn network_error() -> ClientError {
        ClientError::Transport(TransportError::Network {
            method: "POST",
            path: "/api/simplify/text".to_string(),
            message: "connection refused".to_string(),
        })
    }

    #[test]
    fn submit_queues_command_and_result_event_settles_page() {
        let (mut app, cmd_rx, ui_tx) = app();
        app.navigate(Route::Simplify);
        app.pages.simplify.form.text = "Pemerintah mengeluarkan peraturan".to_string();

        app.handle_action(PageAction::Submit);
        let ticket = match cmd_rx.try_recv().expect("queued") {
            BackendCommand::Simplify { ticket, request } => {
                assert_eq!(request.text, "Pemerintah mengeluarkan peraturan");
                ticket
            }
            other => panic!("unexpected command: {other:?}"),
        };
        assert!(app.pages.simplify.is_submitting());

        let result = serde_json::from_value(json!({
            "simplified_text": "Pemerintah membuat aturan.",
            "word_count_reduction": 1,
            "processing_time": 0.4,
            "simplification_level": "simple"
        }))
        .expect("decode");
        ui_tx
            .send(UiEvent::Simplified {
                ticket,
                outcome: Ok(result),
            })
            .expect("send");
        app.process_ui_events();

        let shown = app.pages.simplify.result().expect("result");
        assert_eq!(shown.simplified_text, "Pemerintah membuat aturan.");
        assert!(app.pages.simplify.error_message().is_none());
    }

    #[test]
    fn failure_event_shows_fixed_message_and_keeps_input() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.navigate(Route::Simplify);
        app.pages.simplify.form.text = "Investasi".to_string();
        app.handle_action(PageAction::Submit);
        let BackendCommand::Simplify { ticket, .. } = cmd_rx.try_recv().expect("queued") else {
            panic!("expected simplify command");
        };

        app.apply_event(UiEvent::Simplified {
            ticket,
            outcome: Err(network_error()),
        });

        assert_eq!(app.pages.simplify.error_message(), Some(SIMPLIFY_FAILED));
        assert_eq!(app.pages.simplify.form.text, "Investasi");
    }

    #[test]
    fn leaving_a_busy_page_cancels_and_discards_its_state() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.navigate(Route::Simplify);
        app.pages.simplify.form.text = "Investasi".to_string();
        app.handle_action(PageAction::Submit);
        let BackendCommand::Simplify { ticket, .. } = cmd_rx.try_recv().expect("queued") else {
            panic!("expected simplify command");
        };

        app.navigate(Route::Tutor);
        assert!(matches!(
            cmd_rx.try_recv().expect("cancel"),
            BackendCommand::CancelPage(Route::Simplify)
        ));
        assert!(app.pages.simplify.form.text.is_empty());

        app.apply_event(UiEvent::Simplified {
            ticket,
            outcome: Err(network_error()),
        });
        assert!(app.pages.simplify.error_message().is_none());
        assert_eq!(app.route(), Route::Tutor);
    }

    #[test]
    fn idle_page_is_left_without_a_cancel_command() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.navigate(Route::Steps);
        app.pages.steps.form.instruction = "Cara membuat akun email baru".to_string();
        app.navigate(Route::Home);

        assert!(cmd_rx.try_recv().is_err());
        assert!(app.pages.steps.form.instruction.is_empty());
    }

    #[test]
    fn blank_tutor_question_is_rejected_locally() {
        let (mut app, cmd_rx, _ui_tx) = app();
        app.navigate(Route::Tutor);
        app.pages.tutor.form.question = "  ".to_string();
        app.handle_action(PageAction::Submit);

        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(
            app.pages.tutor.error_message(),
            Some(TUTOR_QUESTION_REQUIRED)
        );
    }
}
