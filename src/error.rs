use thiserror::Error;

/// Failure modes of a single extraction run.
///
/// Transport failures on either fetch map to `Network`; everything the
/// pipeline does not anticipate (spreadsheet parsing, CSV encoding,
/// filesystem) is folded into `Unexpected` with the library message.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to fetch the page. Status code: {0}")]
    Fetch(u16),

    #[error("No download URL found in the JavaScript.")]
    LinkNotFound,

    #[error("No sheet containing '{0}' found.")]
    SheetNotFound(String),

    #[error("Network error occurred: {0}")]
    Network(#[from] reqwest::Error),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl From<calamine::XlsxError> for ExtractError {
    fn from(err: calamine::XlsxError) -> Self {
        ExtractError::Unexpected(err.to_string())
    }
}

impl From<csv::Error> for ExtractError {
    fn from(err: csv::Error) -> Self {
        ExtractError::Unexpected(err.to_string())
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(err: std::io::Error) -> Self {
        ExtractError::Unexpected(err.to_string())
    }
}

impl From<url::ParseError> for ExtractError {
    fn from(err: url::ParseError) -> Self {
        ExtractError::Unexpected(err.to_string())
    }
}
