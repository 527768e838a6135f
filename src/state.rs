use std::sync::Arc;

use crate::services::indicators::DEFAULT_MA_WINDOW;
use crate::store::StockStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StockStore>,
    pub ma_window: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn StockStore>) -> Self {
        Self {
            store,
            ma_window: DEFAULT_MA_WINDOW,
        }
    }

    pub fn with_ma_window(mut self, window: usize) -> Self {
        self.ma_window = window;
        self
    }
}
