//! Interactive windowed display
//!
//! One single-threaded frame loop per view; closing the window or hitting
//! Escape ends it. There is no cancellation beyond that — stopping the
//! process mid-animation simply stops the loop.

use image::RgbImage;
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};
use trajectory::Histories;

use crate::animate::{frame_count, render_frame};
use crate::canvas::fit_selection;
use crate::error::{RenderError, RenderResult};

/// Edge length of the interactive window, in pixels
pub const WINDOW_SIZE: u32 = 900;

/// Interactive playback frame interval. Independent of the GIF frame
/// rate used for serialization.
const PLAYBACK_INTERVAL: Duration = Duration::from_millis(50);

fn open_window(title: &str, width: u32, height: u32) -> RenderResult<Window> {
    let mut window = Window::new(
        title,
        width as usize,
        height as usize,
        WindowOptions::default(),
    )
    .map_err(|e| RenderError::Window(e.to_string()))?;
    window.set_target_fps(60);
    Ok(window)
}

/// Packs an RGB raster into the 0RGB u32 framebuffer minifb expects.
fn to_framebuffer(image: &RgbImage) -> Vec<u32> {
    image
        .pixels()
        .map(|p| (u32::from(p[0]) << 16) | (u32::from(p[1]) << 8) | u32::from(p[2]))
        .collect()
}

/// Shows a static plot until the window is closed.
pub fn display_static(image: &RgbImage, title: &str) -> RenderResult<()> {
    let (width, height) = image.dimensions();
    let buffer = to_framebuffer(image);
    let mut window = open_window(title, width, height)?;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        window
            .update_with_buffer(&buffer, width as usize, height as usize)
            .map_err(|e| RenderError::Window(e.to_string()))?;
    }
    Ok(())
}

/// Plays the animation in a window, looping, advancing one frame per
/// playback interval.
pub fn display_animation(
    histories: &Histories,
    selection: &[&str],
    title: &str,
) -> RenderResult<()> {
    let frames = frame_count(histories, selection);
    if frames == 0 {
        return Err(RenderError::NoData);
    }
    let viewport = fit_selection(histories, selection, WINDOW_SIZE)?;

    let size = WINDOW_SIZE as usize;
    let mut window = open_window(title, WINDOW_SIZE, WINDOW_SIZE)?;
    let mut frame = 0usize;
    let mut buffer = to_framebuffer(&render_frame(
        histories, selection, viewport, WINDOW_SIZE, frame,
    ));
    let mut last_advance = Instant::now();

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if last_advance.elapsed() >= PLAYBACK_INTERVAL {
            frame = (frame + 1) % frames;
            buffer = to_framebuffer(&render_frame(
                histories, selection, viewport, WINDOW_SIZE, frame,
            ));
            last_advance = Instant::now();
        }
        window
            .update_with_buffer(&buffer, size, size)
            .map_err(|e| RenderError::Window(e.to_string()))?;
    }
    Ok(())
}
