use crate::errors::AppError;
use crate::models::AppData;
use crate::storage::persist_data;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::error;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            data: Arc::new(Mutex::new(data)),
        }
    }

    pub async fn read<T>(&self, op: impl FnOnce(&AppData) -> T) -> T {
        let data = self.data.lock().await;
        op(&data)
    }

    /// Runs `op` as one transaction: it works on a copy that replaces the
    /// live data only after it has been written to disk.
    pub async fn write<T>(
        &self,
        op: impl FnOnce(&mut AppData) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        self.write_if_changed(|data| op(data).map(|value| (value, true)))
            .await
    }

    /// Like [`AppState::write`], but skips the disk write when `op` reports
    /// that nothing changed.
    pub async fn write_if_changed<T>(
        &self,
        op: impl FnOnce(&mut AppData) -> Result<(T, bool), AppError>,
    ) -> Result<T, AppError> {
        let mut data = self.data.lock().await;
        let mut draft = data.clone();
        let (value, changed) = op(&mut draft)?;
        if !changed {
            return Ok(value);
        }

        if let Err(err) = persist_data(&self.data_path, &draft).await {
            error!("failed to commit transaction: {err}");
            return Err(AppError::integrity("changes could not be saved"));
        }
        *data = draft;
        Ok(value)
    }
}
