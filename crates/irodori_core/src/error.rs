use thiserror::Error;

/// A hex color string that does not name an sRGB color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color {0:?}: expected #RRGGBB")]
    InvalidHex(String),
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("bucket error: {0}")]
    Bucket(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
