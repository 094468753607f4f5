use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid plate pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("failed to initialize recognizer (language '{lang}', data at {data_path})")]
    RecognizerInit { data_path: String, lang: String },

    #[error("unable to read image: {0}")]
    Image(String),

    #[error("recognizer returned text that is not valid UTF-8")]
    Text,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
