use std::sync::Arc;

use giongo_config::Config;
use giongo_lang_japanese::JapaneseProcessor;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub processor: Arc<JapaneseProcessor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            processor: Arc::new(JapaneseProcessor::new()),
        }
    }
}
