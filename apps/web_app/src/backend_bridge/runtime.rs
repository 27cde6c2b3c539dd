//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use info_client::InfoSource;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{FetchFailure, UiEvent};

/// Called after an event is queued so the UI re-renders without polling.
pub type RepaintSignal = Arc<dyn Fn() + Send + Sync>;

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    source: Arc<dyn InfoSource>,
    repaint: RepaintSignal,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                deliver(
                    &ui_tx,
                    &repaint,
                    UiEvent::BackendUnavailable(format!(
                        "backend worker startup failure: failed to build runtime: {err}"
                    )),
                );
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("backend worker ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let source = source.clone();
                let ui_tx = ui_tx.clone();
                let repaint = repaint.clone();
                tokio::spawn(async move {
                    let event = handle_command(source.as_ref(), cmd).await;
                    deliver(&ui_tx, &repaint, event);
                });
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    })
}

pub(crate) async fn handle_command(source: &dyn InfoSource, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::FetchInfo {
            component_id,
            endpoint,
        } => {
            tracing::info!(%component_id, %endpoint, "backend: fetch_info");
            match source.fetch_info(&endpoint).await {
                Ok(response) => UiEvent::InfoLoaded {
                    component_id,
                    info: response.into(),
                },
                Err(err) => {
                    tracing::error!(%component_id, %endpoint, "backend: fetch_info failed: {err}");
                    UiEvent::InfoFailed {
                        component_id,
                        failure: FetchFailure::from(&err),
                    }
                }
            }
        }
    }
}

/// Blocks while the UI queue is full; only a closed queue drops the event.
fn deliver(ui_tx: &Sender<UiEvent>, repaint: &RepaintSignal, event: UiEvent) {
    match ui_tx.send(event) {
        Ok(()) => repaint(),
        // The window is gone; the completion has no one to update.
        Err(_) => {
            tracing::debug!("ui event receiver dropped; discarding backend completion");
        }
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
