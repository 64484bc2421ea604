use std::path::PathBuf;

/// Errors that can occur while sampling an image border.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image has no border pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}
