//! Best-effort loading of the optional background bitmap
//!
//! The background asset is a regular file on disk, opened fresh for every
//! request. A missing or unreadable file is not an error: the placeholder
//! just renders on a flat color. A file that opens but does not decode as
//! a supported raster format is an error, because it means the deployment
//! shipped a corrupt asset.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use log::warn;

use crate::error::{Error, Result};

/// Load the background bitmap, if one is available.
///
/// Returns `Ok(None)` when the file cannot be opened; the diagnostic is
/// logged here since the caller proceeds as if no background was
/// configured. Decode failures surface as [`Error::DecodeFailed`]. The
/// file handle is released before this function returns on every path.
pub fn load_background(path: &Path) -> Result<Option<DynamicImage>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("background {} unavailable: {}", path.display(), err);
            return Ok(None);
        }
    };

    let bitmap = image::load_from_memory(&bytes)
        .map_err(|err| Error::DecodeFailed(format!("{}: {}", path.display(), err)))?;

    Ok(Some(bitmap))
}
