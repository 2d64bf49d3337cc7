use thiserror::Error;

/// vCard parsing errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Parse error: {0}")]
    ParseError(#[from] crate::rfc::vcard::ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
