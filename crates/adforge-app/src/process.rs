//! Message processing: runs the TEA update loop and dispatches actions

use std::sync::Arc;

use tokio::sync::mpsc;

use adforge_client::GenerationBackend;

use crate::actions::{handle_action, GenerationTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
    tasks: &GenerationTaskMap,
) where
    B: GenerationBackend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), backend.clone(), tasks.clone());
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use crate::navigation::Route;
    use adforge_client::test_utils::{sample_result, ScriptedBackend};
    use adforge_client::Endpoints;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[tokio::test]
    async fn test_submit_round_trip_lands_on_results() {
        let mut state = AppState::new(
            Settings::default(),
            Endpoints::new("http://localhost:5000").unwrap(),
        );
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_outcome(Ok(sample_result()));
        let tasks: GenerationTaskMap = Arc::new(Mutex::new(HashMap::new()));
        let (tx, mut rx) = mpsc::channel(8);

        for c in "https://acme.example".chars() {
            process_message(
                &mut state,
                Message::Key(InputKey::Char(c)),
                &tx,
                &backend,
                &tasks,
            );
        }
        process_message(
            &mut state,
            Message::Key(InputKey::Enter),
            &tx,
            &backend,
            &tasks,
        );
        assert!(state.submission().unwrap().loading);

        let completion = rx.recv().await.expect("completion message");
        process_message(&mut state, completion, &tx, &backend, &tasks);

        assert_eq!(state.route(), Route::Results);
        assert_eq!(
            backend.requests()[0].website_url.as_deref(),
            Some("https://acme.example")
        );
    }
}
