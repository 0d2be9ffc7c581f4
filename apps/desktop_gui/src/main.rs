use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::{load_settings, DirectoryClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::DirectoryGuiApp;

#[derive(Parser, Debug)]
#[command(name = "employee-directory-gui")]
struct Args {
    /// Number of employees to fetch.
    #[arg(long)]
    count: Option<usize>,
    /// Base URL of the random user API.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    if let Some(count) = args.count {
        settings.result_count = count;
    }
    let client = DirectoryClient::from_settings(&settings)?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(1024);
    backend_bridge::runtime::launch(Arc::new(client), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Directory")
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    let result_count = settings.result_count;
    eframe::run_native(
        "Employee Directory",
        options,
        Box::new(move |_cc| Ok(Box::new(DirectoryGuiApp::new(cmd_tx, ui_rx, result_count)))),
    )
    .map_err(|err| anyhow!("gui exited with an error: {err}"))
}
