/// Failures reported by an external lookup source (BIN metadata service, logo CDN).
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// These never reach API callers of the resolver: the strategy chain logs them
/// and moves on to the next source.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("lookup.network")]
    Network,
    #[error("lookup.status_{0}")]
    Status(u16),
    #[error("lookup.malformed_response")]
    MalformedResponse,
    #[error("lookup.not_an_image")]
    NotAnImage,
}

impl LookupError {
    pub fn network() -> Self {
        LookupError::Network
    }
    pub fn status(code: u16) -> Self {
        LookupError::Status(code)
    }
    pub fn malformed_response() -> Self {
        LookupError::MalformedResponse
    }
    pub fn not_an_image() -> Self {
        LookupError::NotAnImage
    }
}
