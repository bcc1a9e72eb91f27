/// Errors of the non-total logo operations (logo proxy, BIN metadata lookup).
#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("logo.invalid_identifier")]
    InvalidIdentifier,
    #[error("logo.not_found")]
    NotFound,
    #[error("logo.upstream_unavailable")]
    Upstream(#[from] crate::domain::errors::LookupError),
    #[error("bin.invalid")]
    InvalidBin,
    #[error("bin.not_found")]
    BinNotFound,
}
