use std::sync::Arc;

use crate::config;
use crate::db::Store;
use crate::push::PushGateway;

/// Shared state built once in `main` and handed to every handler.
///
/// The store and the push gateway sit behind traits so tests can substitute
/// in-memory fakes for Postgres and FCM.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub push: Arc<dyn PushGateway>,
    pub env: config::Config,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, push: Arc<dyn PushGateway>, env: config::Config) -> Self {
        Self { store, push, env }
    }
}
