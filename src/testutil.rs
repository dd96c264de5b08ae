//! Helpers shared by unit tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Locate a TTF font on the host, preferring well-known paths and falling
/// back to a scan of the system font directories. Returns `None` on hosts
/// without any TrueType fonts; font-dependent tests skip in that case.
pub fn find_test_font() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("QUAINT_TEST_FONT") {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }

    let known = [
        "/usr/share/fonts/TTF/Roboto-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    for candidate in known {
        let path = PathBuf::from(candidate);
        if path.is_file() {
            return Some(path);
        }
    }

    for root in ["/usr/share/fonts", "/usr/local/share/fonts"] {
        if let Some(found) = scan_for_ttf(Path::new(root), 0) {
            return Some(found);
        }
    }
    None
}

fn scan_for_ttf(dir: &Path, depth: usize) -> Option<PathBuf> {
    if depth > 4 {
        return None;
    }
    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = scan_for_ttf(&path, depth + 1) {
                return Some(found);
            }
        } else if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("ttf")) {
            return Some(path);
        }
    }
    None
}
