use std::sync::Arc;

use giongo_core::state::LookupSession;
use giongo_core::types::AppEvent;
use giongo_lang_japanese::JapaneseProcessor;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

pub mod text_input;

use text_input::handle_text_input;

/// Lookup state owned by the event loop
#[derive(Default)]
struct LoopState {
    session: LookupSession,
    load_error: Option<String>,
    input_closed: bool,
}

impl LoopState {
    /// Input is finished and the dictionary has settled one way or the other
    fn done(&self) -> bool {
        self.input_closed && (self.session.is_loaded() || self.load_error.is_some())
    }
}

/// App's main loop
pub async fn event_loop(
    processor: Arc<JapaneseProcessor>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut state = LoopState::default();

    tracing::debug!("Event loop started");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::debug!("Event channel closed");
                    break;
                }
            },
            _ = cancel.cancelled() => {
                tracing::info!("Event loop stopping");
                break;
            }
        };

        handle_event(&mut state, processor.as_ref(), &app_to_ui_tx, event).await?;

        if state.done() {
            break;
        }
    }

    Ok(())
}

async fn handle_event(
    state: &mut LoopState,
    processor: &JapaneseProcessor,
    app_to_ui_tx: &AsyncSender<String>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::DictionaryLoaded(dictionary) => {
            tracing::info!("Dictionary ready with {} headwords", dictionary.len());
            state.session.set_dictionary(dictionary);

            // A query typed while loading was answered with "Loading..."; answer it again
            if !state.session.query().trim().is_empty() {
                handle_text_input(&state.session, processor, app_to_ui_tx).await?;
            }
        }
        AppEvent::DictionaryFailed(message) => {
            app_to_ui_tx
                .send(format!("Failed to load dictionary: {message}\n"))
                .await?;
            state.load_error = Some(message);
        }
        AppEvent::TextInput(text) => {
            tracing::debug!("TextInput received: '{}'", text);
            state.session.set_query(text);

            match &state.load_error {
                Some(message) => {
                    app_to_ui_tx
                        .send(format!("Failed to load dictionary: {message}\n"))
                        .await?;
                }
                None => handle_text_input(&state.session, processor, app_to_ui_tx).await?,
            }
        }
        AppEvent::InputClosed => {
            state.input_closed = true;
            if !state.done() {
                tracing::info!("Input closed, waiting for dictionary");
            }
        }
    }

    Ok(())
}
