//! Frame-indexed animation
//!
//! Every frame is recomputed from scratch by a pure render function: the
//! drawable state for frame `k` is each selected body's history prefix up
//! to `k` plus a head marker. No mutable drawing state survives between
//! frames beyond the raster the host surface retains.

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::info;
use trajectory::Histories;

use crate::canvas::{fit_selection, Canvas, Viewport};
use crate::error::RenderResult;
use crate::palette::color_for;
use crate::render::marker_radius;

/// Edge length of animation frames, in pixels
pub const ANIMATION_SIZE: u32 = 1_000;

/// Frame rate of the serialized GIF. Independent of the interactive
/// playback interval; the two need not match.
pub const GIF_FPS: u32 = 30;

/// Number of frames: the longest selected history. Bodies with shorter
/// histories stop advancing once exhausted; that is not an error.
pub fn frame_count(histories: &Histories, selection: &[&str]) -> usize {
    selection
        .iter()
        .filter_map(|name| histories.get(name))
        .map(|history| history.len())
        .max()
        .unwrap_or(0)
}

/// Renders animation frame `frame`.
///
/// Each body draws the prefix `history[..min(frame + 1, len)]` and a disc
/// at the prefix head, so a body whose history has run out stays frozen at
/// its final sample while longer histories keep growing.
pub fn render_frame(
    histories: &Histories,
    selection: &[&str],
    viewport: Viewport,
    size: u32,
    frame: usize,
) -> RgbImage {
    let mut canvas = Canvas::new(size, size, viewport);
    let radius = marker_radius(size);

    for (index, name) in selection.iter().enumerate() {
        let Some(history) = histories.get(name) else {
            continue;
        };
        if history.is_empty() {
            continue;
        }

        let visible = history.len().min(frame + 1);
        let prefix = &history[..visible];
        let color = color_for(index);

        canvas.draw_polyline(prefix, color);
        canvas.draw_disc(prefix[visible - 1], radius, color);
    }

    canvas.into_image()
}

/// Encodes the full animation as a looping GIF at [`GIF_FPS`].
pub fn save_gif<P: AsRef<Path>>(
    histories: &Histories,
    selection: &[&str],
    path: P,
) -> RenderResult<()> {
    let frames = frame_count(histories, selection);
    let viewport = fit_selection(histories, selection, ANIMATION_SIZE)?;

    let file = File::create(path.as_ref())?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(1_000, GIF_FPS);
    for frame in 0..frames {
        let image = render_frame(histories, selection, viewport, ANIMATION_SIZE, frame);
        let rgba = DynamicImage::ImageRgb8(image).into_rgba8();
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
    }

    info!(
        path = %path.as_ref().display(),
        frames,
        "trajectory animation saved"
    );
    Ok(())
}
