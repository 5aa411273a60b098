use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Record out of range: offset {offset:#x} + length {length} exceeds image size {image_size:#x}"
    )]
    Range {
        offset: usize,
        length: usize,
        image_size: usize,
    },

    #[error("Record length mismatch: {len_a} vs {len_b}")]
    LengthMismatch { len_a: usize, len_b: usize },

    #[error("Invalid field table: {0}")]
    InvalidFieldTable(String),

    #[error("Part count must be at least 1")]
    InvalidPartCount,

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if this error came from an out-of-bounds record request
    pub fn is_range(&self) -> bool {
        matches!(self, Error::Range { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
