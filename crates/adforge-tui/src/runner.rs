//! TUI runner - terminal lifecycle and the main event loop

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use adforge_app::{abort_all, process_message, signals, AppState, GenerationTaskMap, Message};
use adforge_client::GenerationBackend;
use adforge_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits.
///
/// Any generation still in flight when the loop exits is aborted before
/// the terminal is restored.
pub async fn run<B>(mut state: AppState, backend: Arc<B>) -> Result<()>
where
    B: GenerationBackend + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    info!("Terminal initialized, backend at {}", state.endpoints.origin());

    // Unified message channel (background requests, signal handler)
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let tasks: GenerationTaskMap = Arc::new(Mutex::new(HashMap::new()));

    let result = run_loop(
        &mut term,
        &mut state,
        &mut msg_rx,
        &msg_tx,
        &backend,
        &tasks,
    );

    abort_all(&tasks);
    ratatui::restore();
    info!("Terminal restored");

    result
}

fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
    tasks: &GenerationTaskMap,
) -> Result<()>
where
    B: GenerationBackend + Sync + 'static,
{
    while !state.should_quit() {
        // Process external messages (request outcomes, signals)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, backend, tasks);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, backend, tasks);
        }
    }

    Ok(())
}
