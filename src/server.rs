//! HTTP surface: router construction and request orchestration
//!
//! One handler invocation per request, no shared mutable state. The only
//! thing requests share is the immutable [`ServiceConfig`] behind an
//! `Arc`; the background asset file is opened independently per request.

use std::io::Cursor;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use image::ImageFormat;
use log::{error, info, warn};
use serde::Deserialize;

use crate::background::load_background;
use crate::color::{resolve_color, to_hex};
use crate::dimensions::resolve_dimensions;
use crate::render::{GeneratorOptions, ImageGenerator};
use crate::ServiceConfig;

/// Raw query parameters, kept as strings so the validation pipeline owns
/// all parsing decisions.
#[derive(Debug, Default, Deserialize)]
pub struct ImageParams {
    width: Option<String>,
    height: Option<String>,
    fg: Option<String>,
    bg: Option<String>,
}

/// Build the service router. The config is fixed for the lifetime of the
/// router and never reloaded.
pub fn router(config: Arc<ServiceConfig>) -> Router {
    Router::new()
        .route("/{name}", get(serve_image))
        .with_state(config)
}

/// Handle `GET /{text}.png`: validate, render, encode, respond.
///
/// The pipeline is a straight line. Dimensions are checked first so
/// oversized requests never reach color resolution or the renderer.
async fn serve_image(
    State(config): State<Arc<ServiceConfig>>,
    Path(name): Path<String>,
    Query(params): Query<ImageParams>,
) -> Response {
    let Some(text) = name.strip_suffix(".png") else {
        return (StatusCode::NOT_FOUND, "Not found\n").into_response();
    };

    let (width, height) =
        match resolve_dimensions(params.width.as_deref(), params.height.as_deref()) {
            Ok(dims) => dims,
            Err(err) => {
                warn!("text={:?} {}", text, err);
                return (StatusCode::PAYLOAD_TOO_LARGE, "Image too large\n").into_response();
            }
        };

    let fg = match resolve_color(params.fg.as_deref().unwrap_or(""), &config.default_fg) {
        Ok(color) => color,
        Err(err) => {
            error!("text={:?} color={:?} {}", text, params.fg, err);
            return (StatusCode::BAD_REQUEST, "Bad value for foreground color\n").into_response();
        }
    };
    let bg = match resolve_color(params.bg.as_deref().unwrap_or(""), &config.default_bg) {
        Ok(color) => color,
        Err(err) => {
            error!("text={:?} color={:?} {}", text, params.bg, err);
            return (StatusCode::BAD_REQUEST, "Bad value for background color\n").into_response();
        }
    };

    let background_image = match load_background(&config.background_path) {
        Ok(bitmap) => bitmap,
        Err(err) => {
            error!("text={:?} width={} height={} {}", text, width, height, err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Background image is corrupt\n")
                .into_response();
        }
    };

    let generator = match ImageGenerator::new(GeneratorOptions {
        ttf_path: config.font_path.clone(),
        margin_ratio: -1.0,
        foreground: fg,
        background: bg,
        background_image,
    }) {
        Ok(generator) => generator,
        Err(err) => {
            error!("text={:?} ttf={} {}", text, config.font_path.display(), err);
            return (StatusCode::BAD_REQUEST, "Could not create generator\n").into_response();
        }
    };

    // A failed render is this request's problem alone; it must never take
    // the process down.
    let canvas = match generator.placeholder(text, width, height) {
        Ok(canvas) => canvas,
        Err(err) => {
            error!("text={:?} width={} height={} {}", text, width, height, err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Rendering failed\n").into_response();
        }
    };

    let mut png = Vec::new();
    if let Err(err) = canvas.write_to(&mut Cursor::new(&mut png), ImageFormat::Png) {
        error!("text={:?} width={} height={} png encode: {}", text, width, height, err);
        return (StatusCode::INTERNAL_SERVER_ERROR, "PNG encoding failed\n").into_response();
    }

    info!(
        "served image width={} height={} foreground={} background={} text={:?}",
        width,
        height,
        to_hex(fg),
        to_hex(bg),
        text
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/png")],
        png,
    )
        .into_response()
}
