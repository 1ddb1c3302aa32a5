//! Collection file I/O
//!
//! Each collection lives in one JSON file. Reads treat a missing file as an
//! empty collection; writes go to a sibling temp file that is renamed over
//! the original, so a failed save leaves the previous contents intact.
//! Errors name the collection they concern.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::BudgetError;

fn storage_error(collection: &str, action: &str, path: &Path, err: impl fmt::Display) -> BudgetError {
    BudgetError::Storage(format!(
        "{} collection: failed to {} {}: {}",
        collection,
        action,
        path.display(),
        err
    ))
}

/// Load a collection file, or the empty value if it does not exist yet
pub fn read_json<T, P>(collection: &str, path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| storage_error(collection, "open", path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| storage_error(collection, "parse", path, e))
}

/// Replace a collection file atomically
pub fn write_json_atomic<T, P>(collection: &str, path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error(collection, "create", parent, e))?;
    }

    // Same directory as the target, so the rename cannot cross filesystems
    let temp_path = path.with_extension("json.tmp");

    let write_temp = || -> Result<(), BudgetError> {
        let file =
            File::create(&temp_path).map_err(|e| storage_error(collection, "create", &temp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_error(collection, "serialize", &temp_path, e))?;
        writer
            .flush()
            .map_err(|e| storage_error(collection, "flush", &temp_path, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| storage_error(collection, "sync", &temp_path, e))
    };

    let result = write_temp().and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| storage_error(collection, "replace", path, e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::trace!(collection, path = %path.display(), "saved collection file");
    Ok(())
}
