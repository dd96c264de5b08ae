//! Hex color resolution
//!
//! Clients name colors as 3- or 6-digit hex codes with an optional `#`
//! prefix. The short form expands by duplicating each digit, so `f80`
//! means `ff8800`. Alpha is always fully opaque.

use image::Rgba;

use crate::error::{Error, Result};

/// Normalize a hex color spec: strip a leading `#` and expand the 3-digit
/// short form. Any length other than 3 or 6 is rejected.
fn normalize_hex(spec: &str) -> Option<String> {
    let spec = spec.strip_prefix('#').unwrap_or(spec);
    match spec.len() {
        6 => Some(spec.to_string()),
        3 => {
            let mut expanded = String::with_capacity(6);
            for ch in spec.chars() {
                expanded.push(ch);
                expanded.push(ch);
            }
            Some(expanded)
        }
        _ => None,
    }
}

/// Resolve a client-supplied color parameter into an opaque RGBA value.
///
/// An empty parameter falls back to `fallback`, which goes through the
/// same validation. The caller is responsible for logging failures.
pub fn resolve_color(param: &str, fallback: &str) -> Result<Rgba<u8>> {
    let spec = if param.is_empty() { fallback } else { param };

    let normalized = normalize_hex(spec).ok_or_else(|| Error::BadColor(spec.to_string()))?;
    let bytes = hex::decode(&normalized).map_err(|_| Error::BadColor(spec.to_string()))?;

    Ok(Rgba([bytes[0], bytes[1], bytes[2], 255]))
}

/// Format a resolved color back into `#rrggbb` form for log output.
pub fn to_hex(color: Rgba<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0[0], color.0[1], color.0[2])
}
