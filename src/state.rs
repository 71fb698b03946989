use crate::models::EntryStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<EntryStore>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, store: EntryStore) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(store)),
        }
    }
}
