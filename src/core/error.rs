use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Error de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error de generación: {0}")]
    Generation(String),

    #[error("Error de plantilla: {0}")]
    Template(String),

    #[error("Error de validación: {0}")]
    Validation(String),

    #[error("Error de configuración: {0}")]
    Config(String),

    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
