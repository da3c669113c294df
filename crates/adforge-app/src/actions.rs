//! Action handlers: UpdateAction dispatch and background task spawning

use std::collections::HashMap;
use std::process::Command;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use adforge_client::GenerationBackend;
use adforge_core::prelude::*;

use crate::message::Message;
use crate::submission::RequestId;
use crate::UpdateAction;

/// In-flight generation tasks, keyed by request id
pub type GenerationTaskMap = Arc<Mutex<HashMap<RequestId, JoinHandle<()>>>>;

/// Execute an action by spawning a background task
pub fn handle_action<B>(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    backend: Arc<B>,
    tasks: GenerationTaskMap,
) where
    B: GenerationBackend + Sync + 'static,
{
    match action {
        UpdateAction::Generate {
            request_id,
            request,
        } => {
            let handle = tokio::spawn(async move {
                let message = match backend.generate(request).await {
                    Ok(result) => Message::GenerationCompleted {
                        request_id,
                        result: Arc::new(result),
                    },
                    Err(error) => Message::GenerationFailed { request_id, error },
                };
                if msg_tx.send(message).await.is_err() {
                    debug!("Event loop gone before generation {} finished", request_id);
                }
            });

            match tasks.lock() {
                Ok(mut guard) => {
                    guard.retain(|_, task| !task.is_finished());
                    guard.insert(request_id, handle);
                }
                Err(e) => warn!("Generation task map poisoned: {}", e),
            }
        }

        UpdateAction::OpenBrowser { url, browser } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url, &browser) {
                    error!("Failed to open {} in browser: {e}", url);
                }
            });
        }
    }
}

/// Abort every generation still running. Their completions are never
/// delivered.
pub fn abort_all(tasks: &GenerationTaskMap) {
    let drained: Vec<(RequestId, JoinHandle<()>)> = match tasks.lock() {
        Ok(mut guard) => guard.drain().collect(),
        Err(e) => {
            warn!("Generation task map poisoned: {}", e);
            return;
        }
    };

    for (request_id, handle) in drained {
        if !handle.is_finished() {
            info!("Aborting generation {}", request_id);
            handle.abort();
        }
    }
}

/// Open a URL in the system browser (cross-platform, fire-and-forget).
///
/// If `browser` is non-empty, uses it as the browser command.
/// Otherwise uses the platform-default browser opener.
pub(crate) fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        Command::new(browser).arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(url).spawn()?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        Command::new("cmd").args(["/C", "start", "", url]).spawn()?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}
