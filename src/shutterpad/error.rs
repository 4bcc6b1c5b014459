use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("capture cancelled before an image was produced")]
    CaptureCancelled,

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("no photo at index {0}")]
    NoSuchPhoto(usize),

    #[error("invalid input: {0}")]
    Input(String),

    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
