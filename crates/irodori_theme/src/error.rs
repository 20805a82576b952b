use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("malformed seed color {0:?}: expected #RGB or #RRGGBB")]
    MalformedSeed(String),

    #[error("invalid theme name {0:?}: must start with a letter and contain only letters and digits")]
    InvalidThemeName(String),

    #[error("unknown theme type {0:?}: expected css, tailwindcss or unocss")]
    UnknownFormat(String),

    #[error("preset template: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error("generated preset is not valid TypeScript: {0}")]
    Syntax(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ThemeError {
    /// True when the caller supplied bad input, as opposed to an internal failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ThemeError::MalformedSeed(_)
                | ThemeError::InvalidThemeName(_)
                | ThemeError::UnknownFormat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
