//! Quaint placeholder image service
//!
//! An HTTP service that renders placeholder PNGs on demand. A request
//! names the text in the path and optionally picks dimensions and colors
//! via the query string:
//!
//! ```text
//! GET /hello.png?width=640&height=480&fg=f00&bg=00f
//! ```
//!
//! The pipeline is a straight line per request: validate dimensions,
//! resolve the two hex colors, load the optional background bitmap, then
//! rasterize the text and stream the PNG back. Every entity involved is
//! request-scoped; the only process-wide state is the immutable
//! [`ServiceConfig`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use quaint::{router, ServiceConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Arc::new(ServiceConfig::default());
//! let listener = tokio::net::TcpListener::bind(&config.bind).await?;
//! axum::serve(listener, router(config)).await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod background;
pub mod color;
pub mod dimensions;
pub mod render;
pub mod server;

pub use server::router;

#[cfg(test)]
pub(crate) mod testutil;

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
/// Default TTF asset used to rasterize placeholder text
pub const DEFAULT_FONT: &str = "/usr/share/fonts/TTF/Roboto-Bold.ttf";
/// Default background bitmap; rendering proceeds without it when absent
pub const DEFAULT_BACKGROUND: &str = "/tmp/bg.jpg";
/// Default foreground (text) color
pub const DEFAULT_FG: &str = "#969696";
/// Default background fill color
pub const DEFAULT_BG: &str = "#cccccc";

/// Process-wide configuration, fixed at startup and never reloaded.
///
/// Shared read-only across all in-flight requests; nothing here is ever
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to
    pub bind: String,
    /// Path of the optional background bitmap, opened per request
    pub background_path: PathBuf,
    /// Path of the TTF font used for placeholder text
    pub font_path: PathBuf,
    /// Foreground color used when the `fg` parameter is absent
    pub default_fg: String,
    /// Background color used when the `bg` parameter is absent
    pub default_bg: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            background_path: PathBuf::from(DEFAULT_BACKGROUND),
            font_path: PathBuf::from(DEFAULT_FONT),
            default_fg: DEFAULT_FG.to_string(),
            default_bg: DEFAULT_BG.to_string(),
        }
    }
}
