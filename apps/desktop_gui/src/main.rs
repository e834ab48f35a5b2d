mod backend_bridge;
mod controller;
mod platform;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use tracing_subscriber::EnvFilter;

use crate::{
    backend_bridge::{commands::BackendCommand, runtime::spawn_backend_thread},
    controller::events::UiEvent,
    ui::BuddyTextApp,
};

#[derive(Parser, Debug)]
#[command(name = "buddytext_gui", about = "BuddyText desktop client")]
struct Args {
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings()
        .with_api_base_url(args.api_url)
        .with_timeout_secs(args.timeout_secs)
        .validated()?;
    let speech_locale = settings.speech_locale.clone();

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    spawn_backend_thread(settings, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BuddyText")
            .with_inner_size([1024.0, 760.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "BuddyText",
        options,
        Box::new(move |_cc| Ok(Box::new(BuddyTextApp::new(cmd_tx, ui_rx, speech_locale)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to start desktop window: {err}"))
}
