//! Drawing annotation boxes onto an RGB image.
//!
//! [`render`] never touches the caller's image: it draws onto a copy and
//! returns the copy. [`render_in_place`] is the explicit opt-in for drawing
//! straight into a buffer the caller owns.

use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use log::{debug, info};

use crate::error::BoxviewError;
use crate::ir::{AnnotationSet, BBoxXYXY, Pixel};

/// Outline color used when none is given.
pub const DEFAULT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Outline thickness in pixels used when none is given.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// How box outlines are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: Rgb<u8>,
    /// Thickness of the outline. The stroke grows inward from the box edge.
    pub stroke_width: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Draws every annotation onto a copy of `image` in the default style.
///
/// Returns `None` when there is no image. With an image but no annotations,
/// the returned copy is pixel-identical to the input.
pub fn render(image: Option<&RgbImage>, annotations: &AnnotationSet) -> Option<RgbImage> {
    render_with_style(image, annotations, &RenderStyle::default())
}

/// Like [`render`], with an explicit style.
pub fn render_with_style(
    image: Option<&RgbImage>,
    annotations: &AnnotationSet,
    style: &RenderStyle,
) -> Option<RgbImage> {
    let Some(image) = image else {
        debug!("no image loaded; nothing to render");
        return None;
    };

    let mut annotated = image.clone();
    render_in_place(&mut annotated, annotations, style);
    Some(annotated)
}

/// Draws every annotation directly into `image`, in annotation order.
///
/// Later boxes draw over earlier ones. Returns how many boxes were stroked;
/// boxes with non-finite or inverted corners are skipped, and a zero
/// `stroke_width` strokes nothing.
pub fn render_in_place(
    image: &mut RgbImage,
    annotations: &AnnotationSet,
    style: &RenderStyle,
) -> usize {
    if annotations.is_empty() {
        debug!("no annotations; image left unchanged");
        return 0;
    }

    let (width, height) = image.dimensions();
    let mut drawn = 0;

    for annotation in annotations {
        let bbox = annotation.to_pixel_box(width, height);
        debug!("class {} -> {:?}", annotation.class_id, bbox);
        if draw_box(image, &bbox, style) {
            drawn += 1;
        }
    }

    info!(
        "drew {} of {} box(es) on {}x{} image",
        drawn,
        annotations.len(),
        width,
        height
    );
    drawn
}

/// Pixel corners for every annotation, without drawing anything.
pub fn pixel_boxes(annotations: &AnnotationSet, width: u32, height: u32) -> Vec<BBoxXYXY<Pixel>> {
    annotations
        .iter()
        .map(|annotation| annotation.to_pixel_box(width, height))
        .collect()
}

fn draw_box(image: &mut RgbImage, bbox: &BBoxXYXY<Pixel>, style: &RenderStyle) -> bool {
    if !bbox.is_finite() || !bbox.is_ordered() {
        debug!("skipping degenerate box {:?}", bbox);
        return false;
    }
    if style.stroke_width == 0 {
        return false;
    }

    // Saturating float-to-int casts; off-canvas extents are clipped per band.
    let left = bbox.xmin().round() as i64;
    let top = bbox.ymin().round() as i64;
    let right = bbox.xmax().round() as i64;
    let bottom = bbox.ymax().round() as i64;
    let inner = i64::from(style.stroke_width) - 1;

    // The outline is the union of four bands along the box edges, each
    // `stroke_width` pixels deep and never crossing the opposite edge.
    let bands = [
        (left, top, right, top.saturating_add(inner).min(bottom)),
        (left, bottom.saturating_sub(inner).max(top), right, bottom),
        (left, top, left.saturating_add(inner).min(right), bottom),
        (right.saturating_sub(inner).max(left), top, right, bottom),
    ];
    for (x0, y0, x1, y1) in bands {
        fill_clipped(image, x0, y0, x1, y1, style.color);
    }
    true
}

/// Fills the inclusive pixel range `(x0, y0)..=(x1, y1)`, dropping whatever
/// lies outside the image.
fn fill_clipped(image: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    let (width, height) = image.dimensions();
    let max_x = (i64::from(width) - 1).min(i64::from(i32::MAX));
    let max_y = (i64::from(height) - 1).min(i64::from(i32::MAX));

    let (x0, y0) = (x0.max(0), y0.max(0));
    let (x1, y1) = (x1.min(max_x), y1.min(max_y));
    if x0 > x1 || y0 > y1 {
        return;
    }

    let rect = Rect::at(x0 as i32, y0 as i32).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    draw_filled_rect_mut(image, rect, color);
}

/// Parses a color written as six hex digits, with or without a leading `#`.
pub fn parse_color(raw: &str) -> Result<Rgb<u8>, BoxviewError> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BoxviewError::InvalidColor(raw.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| BoxviewError::InvalidColor(raw.to_string()))
    };
    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}
