//! Placeholder rendering
//!
//! A generator owns a parsed font plus the per-request color and background
//! choices, and rasterizes the requested text onto a canvas. Construction
//! is cheap enough to do once per request and keeps the generator free of
//! shared state.

use std::fs;
use std::path::PathBuf;

use image::{imageops, DynamicImage, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::error::{Error, Result};

/// Reference glyph size used when measuring text before scaling to fit
const MEASURE_PX: f32 = 64.0;

/// Fraction of the canvas height the text block may occupy at most
const MAX_HEIGHT_RATIO: f32 = 0.9;

/// Options for constructing an [`ImageGenerator`]
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// TTF font used for the placeholder text
    pub ttf_path: PathBuf,
    /// Fraction of the canvas width kept clear on each side of the text.
    /// Negative values disable the margin entirely.
    pub margin_ratio: f32,
    /// Text color
    pub foreground: Rgba<u8>,
    /// Canvas fill color, visible wherever no bitmap covers it
    pub background: Rgba<u8>,
    /// Optional bitmap composited over the background color
    pub background_image: Option<DynamicImage>,
}

/// Rasterizes text placeholders onto a canvas
pub struct ImageGenerator {
    font: Font<'static>,
    options: GeneratorOptions,
}

impl ImageGenerator {
    /// Build a generator, loading and parsing the font up front so that a
    /// broken font asset fails here rather than mid-render.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        let data = fs::read(&options.ttf_path).map_err(|err| {
            Error::GeneratorConstruction(format!(
                "read font {}: {}",
                options.ttf_path.display(),
                err
            ))
        })?;
        let font = Font::try_from_vec(data).ok_or_else(|| {
            Error::GeneratorConstruction(format!(
                "font {} is not a usable TTF",
                options.ttf_path.display()
            ))
        })?;

        Ok(Self { font, options })
    }

    /// Rasterize `text` onto a `width` x `height` canvas.
    ///
    /// A zero width or height borrows the other edge, so one-sided
    /// requests come out square. Both edges zero is unrenderable and
    /// fails with [`Error::RenderFailed`].
    pub fn placeholder(&self, text: &str, width: u32, height: u32) -> Result<RgbaImage> {
        let (width, height) = match (width, height) {
            (0, 0) => return Err(Error::RenderFailed("canvas has no area".to_string())),
            (w, 0) => (w, w),
            (0, h) => (h, h),
            (w, h) => (w, h),
        };

        let mut canvas = RgbaImage::from_pixel(width, height, self.options.background);

        if let Some(bitmap) = &self.options.background_image {
            let scaled = bitmap
                .resize_to_fill(width, height, imageops::FilterType::Triangle)
                .to_rgba8();
            imageops::overlay(&mut canvas, &scaled, 0, 0);
        }

        self.draw_centered(&mut canvas, text);
        Ok(canvas)
    }

    /// Draw `text` centered on the canvas, scaled to span the available
    /// width without overflowing the height.
    fn draw_centered(&self, canvas: &mut RgbaImage, text: &str) {
        let (width, height) = canvas.dimensions();

        let margin = if self.options.margin_ratio > 0.0 {
            width as f32 * self.options.margin_ratio
        } else {
            0.0
        };
        let available = (width as f32 - margin * 2.0).max(1.0);

        let measured = self.text_width(text, MEASURE_PX);
        if measured <= 0.0 {
            return;
        }
        let px = (MEASURE_PX * available / measured).min(height as f32 * MAX_HEIGHT_RATIO);
        let scale = Scale::uniform(px);

        let v_metrics = self.font.v_metrics(scale);
        let text_w = self.text_width(text, px);
        let origin_x = (width as f32 - text_w) / 2.0;
        // descent is negative; this centers the ascent..descent block
        let baseline_y = (height as f32 + v_metrics.ascent + v_metrics.descent) / 2.0;

        let fg = self.options.foreground;
        for glyph in self.font.layout(text, scale, point(origin_x, baseline_y)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let x = gx as i32 + bb.min.x;
                let y = gy as i32 + bb.min.y;
                if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                    return;
                }
                let alpha = coverage.clamp(0.0, 1.0);
                if alpha <= 0.0 {
                    return;
                }
                let inv = 1.0 - alpha;
                let dst = canvas.get_pixel_mut(x as u32, y as u32);
                dst.0[0] = (fg.0[0] as f32 * alpha + dst.0[0] as f32 * inv) as u8;
                dst.0[1] = (fg.0[1] as f32 * alpha + dst.0[1] as f32 * inv) as u8;
                dst.0[2] = (fg.0[2] as f32 * alpha + dst.0[2] as f32 * inv) as u8;
                dst.0[3] = 255;
            });
        }
    }

    /// Pixel width of `text` laid out at the given glyph size
    fn text_width(&self, text: &str, px: f32) -> f32 {
        let scale = Scale::uniform(px);
        let v_metrics = self.font.v_metrics(scale);
        let mut width = 0.0f32;
        for glyph in self.font.layout(text, scale, point(0.0, v_metrics.ascent)) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                width = width.max(bb.max.x as f32);
            }
        }
        width
    }
}
