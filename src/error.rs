use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("failed to fetch tickets: {0}")]
    FetchFailure(String),

    #[error("user '{user_id}' not found")]
    DanglingReference { user_id: String },

    #[error("invalid {key} '{value}', expected one of: {expected}")]
    InvalidConfiguration {
        key: String,
        value: String,
        expected: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl BoardError {
    /// Build an `InvalidConfiguration` error for an unrecognized enum value
    pub fn invalid_configuration(key: &str, value: &str, expected: &[&str]) -> Self {
        BoardError::InvalidConfiguration {
            key: key.to_string(),
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }

    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, BoardError::FetchFailure(_))
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
