use std::time::Duration;

use reqwest::{Client, StatusCode};

use business::domain::errors::LookupError;

pub const USER_AGENT: &str = concat!("bank-logo-api/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by every lookup adapter.
///
/// `timeout` bounds each outbound request, so a resolution chain can take at
/// most the sum of its sources' timeouts.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// HTTP client bound to one third-party base URL.
#[derive(Clone)]
pub struct LookupClient {
    pub client: Client,
    pub base_url: String,
}

impl LookupClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Returns `{base_url}/{segment}`.
    pub fn endpoint(&self, segment: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), segment)
    }
}

/// `Ok(true)` on 2xx, `Ok(false)` on 404, `Err` for any other status.
pub fn check_status(status: StatusCode) -> Result<bool, LookupError> {
    if status.is_success() {
        Ok(true)
    } else if status == StatusCode::NOT_FOUND {
        Ok(false)
    } else {
        Err(LookupError::status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_client_with_timeout() {
        assert!(build_http_client(Duration::from_secs(3)).is_ok());
    }

    #[test]
    fn should_join_base_url_and_segment() {
        let client = LookupClient::new(Client::new(), "https://lookup.binlist.net/");
        assert_eq!(client.endpoint("411111"), "https://lookup.binlist.net/411111");

        let client = LookupClient::new(Client::new(), "https://logo.clearbit.com");
        assert_eq!(client.endpoint("cimb.com"), "https://logo.clearbit.com/cimb.com");
    }

    #[test]
    fn should_classify_statuses() {
        assert_eq!(check_status(StatusCode::OK), Ok(true));
        assert_eq!(check_status(StatusCode::NO_CONTENT), Ok(true));
        assert_eq!(check_status(StatusCode::NOT_FOUND), Ok(false));
        assert_eq!(
            check_status(StatusCode::TOO_MANY_REQUESTS),
            Err(LookupError::Status(429))
        );
        assert_eq!(
            check_status(StatusCode::BAD_GATEWAY),
            Err(LookupError::Status(502))
        );
    }
}
