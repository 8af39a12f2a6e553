use std::io::BufRead;
use std::sync::Arc;

use giongo_core::types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::AsyncWrite;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{load_dictionary, spawn_line_reader};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<String>, AsyncReceiver<String>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Wire input, dictionary loading, the event loop and output together.
    ///
    /// Each channel end moves into exactly one task so the loops finish once
    /// their producers are gone.
    pub fn spawn_tasks<R, W>(
        &self,
        channels: ChannelSet,
        input: R,
        output: W,
    ) -> JoinSet<anyhow::Result<()>>
    where
        R: BufRead + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let ChannelSet {
            app_to_ui: (app_to_ui_tx, app_to_ui_rx),
            ui_to_app: (ui_to_app_tx, ui_to_app_rx),
        } = channels;

        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.processor.clone(),
            ui_to_app_rx,
            app_to_ui_tx,
            self.cancel_token.child_token(),
        ));

        // UI loop
        tasks.spawn(ui_loop(app_to_ui_rx, output));

        // Dictionary loader
        tasks.spawn(load_dictionary(self.state.clone(), ui_to_app_tx.clone()));

        // Input reader runs on its own thread
        spawn_line_reader(input, ui_to_app_tx);

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
