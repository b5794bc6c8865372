//! SLD writer errors.

use thiserror::Error;

pub type SldResult<T> = Result<T, SldError>;

#[derive(Debug, Error)]
pub enum SldError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Document has no NamedLayer")]
    MissingNamedLayer,
}
