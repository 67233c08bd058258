#[derive(Debug, thiserror::Error)]
pub enum PricedexError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Cards file not found: {} -- run fetch-cards first", .0.display())]
    CardsFileMissing(std::path::PathBuf),

    #[error("Invalid card {0}: {1}")]
    InvalidCard(String, String),
}

pub type Result<T> = std::result::Result<T, PricedexError>;
