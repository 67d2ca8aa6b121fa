use zine_core::ArticleStore;

/// Shared request state. The store is immutable after startup, so handlers
/// read it concurrently without locking.
pub struct AppState {
    pub store: ArticleStore,
}

impl AppState {
    pub fn new(store: ArticleStore) -> Self {
        Self { store }
    }
}
