use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The seed was neither an integer nor a string.
    #[error("The seed value must be an integer or string, got {0}")]
    InvalidSeed(String),

    /// No color family covers the hue.
    #[error("Color not found for hue {0}")]
    ColorFamilyNotFound(f64),

    /// A custom dictionary table is malformed.
    #[error("Invalid dictionary: {0}")]
    InvalidDictionary(String),

    /// The options document could not be read.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions(err.to_string())
    }
}
