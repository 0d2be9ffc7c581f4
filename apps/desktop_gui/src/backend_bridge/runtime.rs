//! Backend worker: owns the tokio runtime and answers UI commands.

use std::{sync::Arc, thread};

use client_core::EmployeeSource;
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::{commands::BackendCommand, portrait::decode_portrait};
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    source: Arc<dyn EmployeeSource>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::startup(format!(
                    "failed to build runtime: {err}"
                ))));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        while let Ok(cmd) = cmd_rx.recv() {
            let source = Arc::clone(&source);
            let ui_tx = ui_tx.clone();
            runtime.spawn(async move { handle_command(source.as_ref(), cmd, &ui_tx).await });
        }
        tracing::debug!("ui command channel closed; backend worker exiting");
    });
}

pub async fn handle_command(
    source: &dyn EmployeeSource,
    cmd: BackendCommand,
    ui_tx: &Sender<UiEvent>,
) {
    match cmd {
        BackendCommand::FetchEmployees { count } => {
            let event = match source.fetch_employees(count).await {
                Ok(employees) => UiEvent::EmployeesLoaded(employees),
                Err(err) => UiEvent::Error(UiError::from_fetch(UiErrorContext::LoadEmployees, &err)),
            };
            let _ = ui_tx.try_send(event);
        }
        BackendCommand::FetchPortrait { url } => {
            let event = match source.fetch_portrait(&url).await {
                Ok(bytes) => match decode_portrait(&bytes) {
                    Ok(image) => UiEvent::PortraitLoaded { url, image },
                    Err(reason) => UiEvent::PortraitFailed { url, reason },
                },
                Err(err) => UiEvent::PortraitFailed {
                    url,
                    reason: format!("failed to download portrait: {err}"),
                },
            };
            let _ = ui_tx.try_send(event);
        }
    }
}
