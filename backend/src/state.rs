use std::sync::Arc;

use crate::{config::Config, store::DirectoryStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DirectoryStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: DirectoryStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}
