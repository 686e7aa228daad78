//! Calibration record persisted as a flat JSON object.
//!
//! The record is keyed `left`, `right`, `up`, `down`; each value is a float or
//! `null`. A missing file is not an error: callers fall back to the wizard.

use super::CalibrationBounds;
use crate::{Error, Result};
use log::{debug, info};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// File-backed calibration record
#[derive(Debug, Clone)]
pub struct CalibrationStore {
    path: PathBuf,
}

impl CalibrationStore {
    /// Store rooted at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Location of the record
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the record, `Ok(None)` if it does not exist
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalibrationLoad`] if the file exists but cannot be read or parsed
    pub fn load(&self) -> Result<Option<CalibrationBounds>> {
        load(&self.path)
    }

    /// Write the record, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalibrationSave`] if serialization or the write fails
    pub fn save(&self, bounds: &CalibrationBounds) -> Result<()> {
        save(&self.path, bounds)
    }
}

/// Load a calibration record from `path`
///
/// # Errors
///
/// Returns [`Error::CalibrationLoad`] if the file exists but cannot be read or parsed
pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<CalibrationBounds>> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No calibration record at {}", path.display());
            return Ok(None);
        }
        Err(e) => {
            return Err(Error::CalibrationLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    let bounds: CalibrationBounds = serde_json::from_str(&content).map_err(|e| Error::CalibrationLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    info!("Loaded calibration from {}: {:?}", path.display(), bounds);
    Ok(Some(bounds))
}

/// Save a calibration record to `path`
///
/// # Errors
///
/// Returns [`Error::CalibrationSave`] if serialization or the write fails
pub fn save<P: AsRef<Path>>(path: P, bounds: &CalibrationBounds) -> Result<()> {
    let path = path.as_ref();
    let save_error = |reason: String| Error::CalibrationSave {
        path: path.to_path_buf(),
        reason,
    };

    let content = serde_json::to_string(bounds).map_err(|e| save_error(e.to_string()))?;
    std::fs::write(path, content).map_err(|e| save_error(e.to_string()))?;

    info!("Saved calibration to {}", path.display());
    Ok(())
}
