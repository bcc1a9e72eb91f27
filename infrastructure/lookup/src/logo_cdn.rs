use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use business::domain::errors::LookupError;
use business::domain::logo::model::{LogoImage, LogoRef};
use business::domain::logo::services::DomainLogoSource;

use crate::client::{LookupClient, check_status};

const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// True for `image/*` media types (parameters ignored).
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|media| media.trim().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false)
}

/// `DomainLogoSource` over a logo CDN serving `GET {base_url}/{domain}`.
pub struct HttpDomainLogoSource {
    client: LookupClient,
}

impl HttpDomainLogoSource {
    pub fn new(client: LookupClient) -> Self {
        Self { client }
    }

    fn content_type(response: &reqwest::Response) -> Option<String> {
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    }
}

#[async_trait]
impl DomainLogoSource for HttpDomainLogoSource {
    async fn probe(&self, domain: &str) -> Result<Option<LogoRef>, LookupError> {
        let url = self.client.endpoint(domain);

        let response = self
            .client
            .client
            .head(&url)
            .send()
            .await
            .map_err(|_| LookupError::network())?;

        if !check_status(response.status())? {
            return Ok(None);
        }

        match Self::content_type(&response) {
            Some(content_type) if is_image_content_type(&content_type) => {
                Ok(Some(LogoRef::new(url)))
            }
            _ => Err(LookupError::not_an_image()),
        }
    }

    async fn fetch(&self, domain: &str) -> Result<Option<LogoImage>, LookupError> {
        let response = self
            .client
            .client
            .get(self.client.endpoint(domain))
            .send()
            .await
            .map_err(|_| LookupError::network())?;

        if !check_status(response.status())? {
            return Ok(None);
        }

        let content_type =
            Self::content_type(&response).unwrap_or_else(|| DEFAULT_IMAGE_TYPE.to_string());
        if !is_image_content_type(&content_type) {
            return Err(LookupError::not_an_image());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|_| LookupError::network())?;

        Ok(Some(LogoImage {
            bytes: bytes.to_vec(),
            content_type,
        }))
    }
}
