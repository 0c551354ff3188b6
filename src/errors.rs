// ABOUTME: Error types for the pitch-deck application
// ABOUTME: Separates an unavailable renderer from every other build or save failure

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("{renderer} renderer not available")]
    RendererUnavailable { renderer: String, hint: String },

    #[error("Failed to write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("PPTX packaging error: {0}")]
    Package(String),

    #[error("Invalid slide content: {0}")]
    Validation(String),
}

impl DeckError {
    /// Installation hint shown to the operator, if this failure has one.
    pub fn hint(&self) -> Option<&str> {
        match self {
            DeckError::RendererUnavailable { hint, .. } => Some(hint),
            _ => None,
        }
    }
}

#[cfg(feature = "pptx")]
impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::Package(format!("ZIP operation failed: {}", err))
    }
}

impl From<std::fmt::Error> for DeckError {
    fn from(err: std::fmt::Error) -> Self {
        DeckError::Package(format!("XML formatting failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
