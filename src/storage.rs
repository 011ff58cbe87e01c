use crate::errors::AppError;
use crate::models::ActivityStore;
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

pub async fn load_store(path: &Path) -> ActivityStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<ActivityStore>(&bytes) {
            Ok(store) => {
                info!(days = store.days.len(), path = %path.display(), "loaded activity store");
                store
            }
            Err(err) => {
                error!("failed to parse activity store: {err}");
                ActivityStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => ActivityStore::default(),
        Err(err) => {
            error!("failed to read activity store: {err}");
            ActivityStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &ActivityStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
