//! Width/height validation
//!
//! Runs before any color or image work so oversized requests are rejected
//! without paying for a render.

use crate::error::{Error, Result};

/// Largest width or height the service will render
pub const MAX_SIZE: u32 = 4000;

/// Width used when the client requests neither dimension
pub const DEFAULT_SIZE: u32 = 512;

/// Parse and bound the raw width/height query values.
///
/// Absent or unparsable values count as zero; a malformed number is
/// indistinguishable from an omitted one and never produces an error on
/// its own. If both come out zero the width defaults to [`DEFAULT_SIZE`]
/// while the height stays zero (the renderer treats a zero edge as
/// "borrow the other edge"). Either value above [`MAX_SIZE`] fails with
/// [`Error::TooLarge`] carrying both requested values.
pub fn resolve_dimensions(raw_width: Option<&str>, raw_height: Option<&str>) -> Result<(u32, u32)> {
    let mut width = raw_width.and_then(|v| v.parse::<u32>().ok()).unwrap_or(0);
    let height = raw_height.and_then(|v| v.parse::<u32>().ok()).unwrap_or(0);

    if width == 0 && height == 0 {
        width = DEFAULT_SIZE;
    }

    if width > MAX_SIZE || height > MAX_SIZE {
        return Err(Error::TooLarge { width, height });
    }

    Ok((width, height))
}
