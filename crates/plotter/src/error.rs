//! Error types for rendering

use thiserror::Error;

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    /// The selection resolved to zero position samples.
    #[error("nothing to render: selection has no position samples")]
    NoData,

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("window error: {0}")]
    Window(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
