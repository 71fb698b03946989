use crate::errors::AppError;
use crate::models::EntryStore;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/word_entries.json"))
}

/// A missing file is a fresh install; a corrupt one is logged and treated as
/// empty so the service still starts.
pub async fn load_data(path: &Path) -> EntryStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse entry file: {err}");
                EntryStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => EntryStore::default(),
        Err(err) => {
            error!("failed to read entry file: {err}");
            EntryStore::default()
        }
    }
}

pub async fn persist_data(path: &Path, store: &EntryStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
