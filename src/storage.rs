use crate::errors::AppError;
use crate::models::AppData;
use crate::templates::seed_templates;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, warn};

/// Outcome of reading the store file.
#[derive(Debug)]
pub enum Loaded {
    Missing,
    Corrupt(serde_json::Error),
    Ready(AppData),
}

/// Reads the store. I/O failures other than a missing file are errors.
pub async fn load_data(path: &Path) -> Result<Loaded, AppError> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => Ok(Loaded::Ready(data)),
            Err(err) => Ok(Loaded::Corrupt(err)),
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Loaded::Missing),
        Err(err) => {
            error!("failed to read data file: {err}");
            Err(err.into())
        }
    }
}

pub fn corrupt_path(path: &Path) -> PathBuf {
    path.with_extension("json.corrupt")
}

/// Loads the store and makes sure the template catalogue is present. A file
/// that does not parse is moved to `corrupt_path` before anything is written.
pub async fn open_store(path: &Path) -> Result<AppData, AppError> {
    let mut data = match load_data(path).await? {
        Loaded::Ready(data) => data,
        Loaded::Missing => AppData::default(),
        Loaded::Corrupt(err) => {
            let aside = corrupt_path(path);
            fs::rename(path, &aside).await?;
            warn!(
                kept = %aside.display(),
                "data file did not parse ({err}); starting with an empty store"
            );
            AppData::default()
        }
    };

    let seeded = seed_templates(&mut data);
    if seeded > 0 {
        info!(templates = seeded, "seeded workout templates");
        persist_data(path, &data).await?;
    }
    Ok(data)
}

/// Write-then-rename; the target file is never left half written.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
