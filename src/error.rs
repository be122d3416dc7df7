use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    #[error("Request to {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed dataset: {0}")]
    Malformed(String),

    #[error("Leaf \"{name}\" has invalid value {value}")]
    InvalidValue { name: String, value: f64 },

    #[error("{categories} categories exceed the palette of {palette} colors")]
    PaletteExhausted { categories: usize, palette: usize },

    #[error("Invalid dataset configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ChartError>;
