#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog url")]
    Url(#[from] url::ParseError),
    #[error("Catalog url cannot take path segments: {0}")]
    BaseUrl(String),
    #[error("Catalog request failed")]
    Request(#[from] reqwest::Error),
    #[error("Catalog responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("Catalog response has an unexpected shape")]
    Decode(#[from] serde_json::Error),
}
