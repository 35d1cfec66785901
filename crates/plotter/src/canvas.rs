//! Software raster canvas
//!
//! World coordinates are meters in the integrator's heliocentric plane,
//! y up; raster coordinates are pixels, y down. The viewport applies one
//! uniform scale to both axes so spatial geometry is never distorted.

use image::{Rgb, RgbImage};
use nalgebra::Point2;
use trajectory::Histories;

use crate::error::{RenderError, RenderResult};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Fraction of the raster left as margin on every side
const MARGIN_FRACTION: f64 = 0.05;

/// Axis-aligned bounding box over a set of world points.
pub fn bounds<'a, I>(points: I) -> Option<(Point2<f64>, Point2<f64>)>
where
    I: IntoIterator<Item = &'a Point2<f64>>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let (mut min, mut max) = (*first, *first);
    for p in iter {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

/// World→pixel transform with equal aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Pixels per meter, identical for both axes
    scale: f64,
    /// World point mapped to the raster center
    center: Point2<f64>,
    width: u32,
    height: u32,
}

impl Viewport {
    /// Fits the given world bounds into a raster of the given size.
    ///
    /// The scale is the largest uniform factor that keeps both spans inside
    /// the margins; a degenerate box (a single sample) falls back to unit
    /// scale and simply centers the point.
    pub fn fit(min: Point2<f64>, max: Point2<f64>, width: u32, height: u32) -> Self {
        let span_x = max.x - min.x;
        let span_y = max.y - min.y;
        let usable_x = (1.0 - 2.0 * MARGIN_FRACTION) * width as f64;
        let usable_y = (1.0 - 2.0 * MARGIN_FRACTION) * height as f64;

        let scale_x = if span_x > 0.0 { usable_x / span_x } else { f64::INFINITY };
        let scale_y = if span_y > 0.0 { usable_y / span_y } else { f64::INFINITY };
        let mut scale = scale_x.min(scale_y);
        if !scale.is_finite() {
            scale = 1.0;
        }

        Self {
            scale,
            center: Point2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0),
            width,
            height,
        }
    }

    /// Projects a world point to raster coordinates (y flipped).
    pub fn project(&self, p: Point2<f64>) -> (i64, i64) {
        let x = (p.x - self.center.x) * self.scale + self.width as f64 / 2.0;
        let y = self.height as f64 / 2.0 - (p.y - self.center.y) * self.scale;
        (x.round() as i64, y.round() as i64)
    }
}

/// Fits a viewport over every sample of the selected bodies.
///
/// Computed once per render (and once per animation, not per frame), so
/// the view stays fixed while trails grow.
pub fn fit_selection(
    histories: &Histories,
    selection: &[&str],
    size: u32,
) -> RenderResult<Viewport> {
    let points = selection
        .iter()
        .filter_map(|name| histories.get(name))
        .flatten();
    let (min, max) = bounds(points).ok_or(RenderError::NoData)?;
    Ok(Viewport::fit(min, max, size, size))
}

/// A white raster the drawing primitives paint into.
pub struct Canvas {
    image: RgbImage,
    viewport: Viewport,
}

impl Canvas {
    pub fn new(width: u32, height: u32, viewport: Viewport) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, BACKGROUND),
            viewport,
        }
    }

    /// Draws a history as a connected path.
    pub fn draw_polyline(&mut self, points: &[Point2<f64>], color: Rgb<u8>) {
        if let [only] = points {
            let p = self.viewport.project(*only);
            self.set_pixel(p.0, p.1, color);
            return;
        }
        for pair in points.windows(2) {
            let a = self.viewport.project(pair[0]);
            let b = self.viewport.project(pair[1]);
            self.draw_segment(a, b, color);
        }
    }

    /// Filled disc glyph (start-of-path and animation head marker).
    pub fn draw_disc(&mut self, at: Point2<f64>, radius: i64, color: Rgb<u8>) {
        let (cx, cy) = self.viewport.project(at);
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Diagonal cross glyph (end-of-path marker).
    pub fn draw_cross(&mut self, at: Point2<f64>, half: i64, color: Rgb<u8>) {
        let (cx, cy) = self.viewport.project(at);
        self.draw_segment((cx - half, cy - half), (cx + half, cy + half), color);
        self.draw_segment((cx - half, cy + half), (cx + half, cy - half), color);
    }

    /// Bresenham segment between two raster points.
    fn draw_segment(&mut self, (mut x0, mut y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn set_pixel(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, color);
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
