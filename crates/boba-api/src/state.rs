use std::sync::Arc;

use boba_store::RecipeStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Box<dyn RecipeStore>,
}

impl AppStateInner {
    pub fn new(store: impl RecipeStore + 'static) -> AppState {
        Arc::new(Self { store: Box::new(store) })
    }
}
