//! Shared helpers for the integration suite.

use std::path::PathBuf;
use std::sync::Arc;

use quaint::ServiceConfig;

/// Bind the app on an ephemeral port and return its base URL.
pub async fn spawn_app(config: ServiceConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    let app = quaint::router(Arc::new(config));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{}", addr)
}

/// Config whose background path never exists, so a stray `/tmp/bg.jpg`
/// on the host cannot leak into pixel assertions.
pub fn test_config(font_path: PathBuf) -> ServiceConfig {
    ServiceConfig {
        background_path: scratch_path("no-such-background.jpg"),
        font_path,
        ..ServiceConfig::default()
    }
}

/// Unique path under the system temp dir.
pub fn scratch_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("quaint-it-{}-{}", std::process::id(), name));
    p
}

/// Locate a TTF font on the host. Tests that render skip when none is
/// available rather than fail.
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
        if let Some(found) = scan_for_ttf(std::path::Path::new(root), 0) {
            return Some(found);
        }
    }
    None
}

fn scan_for_ttf(dir: &std::path::Path, depth: usize) -> Option<PathBuf> {
    if depth > 4 {
        return None;
    }
    for entry in std::fs::read_dir(dir).ok()?.flatten() {
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
