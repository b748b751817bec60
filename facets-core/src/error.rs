use thiserror::Error;

pub type Result<T> = std::result::Result<T, FacetsError>;

#[derive(Error, Debug)]
pub enum FacetsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema validation failed:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("Validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Unknown filter category: {0}")]
    UnknownCategory(String),

    #[error("Invalid filter '{0}', expected 'category=value'")]
    MalformedFilter(String),
}
