use std::io::BufRead;
use std::sync::Arc;
use std::thread::JoinHandle;

use giongo_core::types::AppEvent;
use giongo_dictionary::OnomatopoeiaLoader;
use kanal::AsyncSender;

use crate::state::AppState;

/// Load the configured dictionary off the runtime threads and report the outcome
pub async fn load_dictionary(
    state: Arc<AppState>,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (path, additional) = {
        let config = state.config.read().await;
        (
            config.dictionary.path.clone(),
            config.dictionary.additional_paths.clone(),
        )
    };

    let result = tokio::task::spawn_blocking(move || {
        OnomatopoeiaLoader::load_with_additional(&path, additional.as_slice())
    })
    .await?;

    let event = match result {
        Ok(dict) => AppEvent::DictionaryLoaded(Arc::new(dict)),
        Err(e) => {
            tracing::error!("Failed to load dictionary: {}", e);
            AppEvent::DictionaryFailed(e.to_string())
        }
    };

    if let Err(e) = event_tx.send(event).await {
        tracing::warn!("Event loop gone before dictionary was delivered: {}", e);
    }

    Ok(())
}

/// Forward input lines as [`AppEvent::TextInput`] from a dedicated thread.
///
/// Blocking reads stay off the runtime so shutdown never waits on them.
/// Sends [`AppEvent::InputClosed`] at end of input.
pub fn spawn_line_reader<R>(input: R, event_tx: AsyncSender<AppEvent>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    let tx = event_tx.to_sync();

    std::thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::TextInput(line)).is_err() {
                        tracing::debug!("Event loop gone, input reader stopping");
                        return;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            }
        }

        tracing::debug!("Input closed");
        let _ = tx.send(AppEvent::InputClosed);
    })
}
