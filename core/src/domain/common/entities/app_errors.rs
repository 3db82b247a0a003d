use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Failed to read image: {0}")]
    ImageRead(String),

    #[error("Failed to stage image: {0}")]
    ImageWrite(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedMediaType(String),

    #[error("Uploaded file is empty")]
    EmptyUpload,

    #[error("File too large")]
    FileTooLarge,

    #[error("Recipe prompt template unavailable: {0}")]
    TemplateUnavailable(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Invalid input")]
    Invalid,

    #[error("Internal server error")]
    InternalServerError,
}
