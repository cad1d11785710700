use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("Invalid JSON in response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Request error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("WordCloudError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for CloudError {
    fn from(error: std::io::Error) -> Self {
        CloudError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for CloudError {
    fn from(error: reqwest::Error) -> Self {
        CloudError::Reqwest(Box::new(error))
    }
}
