use std::path::PathBuf;
use thiserror::Error;

/// The main error type for boxview operations.
#[derive(Debug, Error)]
pub enum BoxviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image to {}: {source}", path.display())]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Annotation file {} is not valid UTF-8: {source}", path.display())]
    AnnotationNotUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Failed to parse annotation line {line}: {message}")]
    LabelParse { line: usize, message: String },

    #[error("Failed to serialize report: {0}")]
    ReportJson(#[source] serde_json::Error),

    #[error("Invalid color '{0}'; expected six hex digits like ff0000")]
    InvalidColor(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
