use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode store file: {0}")]
    Decode(#[from] serde_json::Error),
}

// Each collection is one JSON blob at a fixed path. There is no schema
// versioning; callers treat a failed load as "no data".

pub fn load_blob<T>(path: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned,
{
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_blob<T>(path: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize,
{
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string(value)?;
    fs::write(path, content)?;
    Ok(())
}

// Missing or malformed blobs fall back to the type's default instead of
// surfacing an error.
pub fn load_or_default<T>(path: &str) -> T
where
    T: DeserializeOwned + Default,
{
    load_blob(path).unwrap_or_default()
}
