//! Error types for the placeholder service

use thiserror::Error;

/// Result type alias for service operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a placeholder request
///
/// Every variant is terminal for the request it occurred in; nothing is
/// retried. The HTTP layer maps each variant to a status code in
/// `server::serve_image`.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested dimensions exceed the configured maximum
    #[error("requested image too large: {width}x{height}")]
    TooLarge {
        /// Requested width (after numeric parsing)
        width: u32,
        /// Requested height (after numeric parsing)
        height: u32,
    },

    /// A color parameter is not a valid 3- or 6-digit hex code
    #[error("bad hex color format: {0:?}")]
    BadColor(String),

    /// The generator could not be constructed (typically a font problem)
    #[error("could not create generator: {0}")]
    GeneratorConstruction(String),

    /// The background asset exists but is not a decodable raster image
    #[error("background image decode failed: {0}")]
    DecodeFailed(String),

    /// Rasterization or encoding of the placeholder failed
    #[error("rendering failed: {0}")]
    RenderFailed(String),
}
