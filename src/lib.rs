//! Reports the dominant color along an image's outer border.

pub mod analyze;
pub mod border;
pub mod error;
pub mod report;
pub mod test_image_gen;

pub use analyze::{BorderColorStats, BorderSample, analyze, analyze_image, analyze_rgb, sample};
pub use error::AnalyzeError;
