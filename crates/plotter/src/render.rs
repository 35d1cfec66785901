//! Static trajectory view
//!
//! Each selected body's full history becomes a connected path with a disc
//! at the first sample and a cross at the last, colored from the cyclic
//! palette in selection order.

use image::RgbImage;
use std::path::Path;
use tracing::info;
use trajectory::Histories;

use crate::canvas::{fit_selection, Canvas};
use crate::error::RenderResult;
use crate::palette::color_for;

/// Edge length of the serialized static plot, in pixels
pub const STATIC_SIZE: u32 = 3_000;

/// Marker glyph radius for a given raster size, floored so glyphs stay
/// visible on small previews.
pub(crate) fn marker_radius(size: u32) -> i64 {
    (size as i64 / 250).max(3)
}

/// Renders the full trajectories of the selected bodies.
pub fn render_static(
    histories: &Histories,
    selection: &[&str],
    size: u32,
) -> RenderResult<RgbImage> {
    let viewport = fit_selection(histories, selection, size)?;
    let mut canvas = Canvas::new(size, size, viewport);
    let radius = marker_radius(size);

    for (index, name) in selection.iter().enumerate() {
        let Some(history) = histories.get(name) else {
            continue;
        };
        let Some((first, last)) = history.first().zip(history.last()) else {
            continue;
        };

        let color = color_for(index);
        canvas.draw_polyline(history, color);
        canvas.draw_disc(*first, radius, color);
        canvas.draw_cross(*last, radius, color);
    }

    Ok(canvas.into_image())
}

/// Serializes a rendered plot as PNG.
pub fn save_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> RenderResult<()> {
    image.save(path.as_ref())?;
    info!(path = %path.as_ref().display(), "trajectory plot saved");
    Ok(())
}
