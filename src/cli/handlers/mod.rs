mod mutate;
mod query;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use std::sync::Arc;

use crate::config::ChirpConfig;
use crate::store::TweetStore;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ChirpConfig,
    pub store: Arc<TweetStore>,
}

impl CommandContext {
    pub fn new(config: ChirpConfig) -> Self {
        let store = if config.store.seed {
            Arc::new(TweetStore::seeded())
        } else {
            Arc::new(TweetStore::new())
        };
        Self { config, store }
    }
}
