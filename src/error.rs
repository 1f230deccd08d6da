use thiserror::Error;

/// Errors from the conversion pipeline.
///
/// Decode failures (corrupt or missing input files) are not handled
/// internally; they propagate to the operator through `main`.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to decode input image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
