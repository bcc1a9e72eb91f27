use std::sync::Arc;

use poem::http::{StatusCode, header};
use poem::web::{Data, Json, Path};
use poem::{IntoResponse, Response, handler};

use business::domain::logo::use_cases::fetch_domain_logo::{
    FetchDomainLogoParams, FetchDomainLogoUseCase,
};

use crate::api::error::IntoErrorResponse;

/// Logos are keyed by domain and rarely change.
pub const LOGO_CACHE_CONTROL: &str = "public, max-age=604800, immutable";

/// Streams the CDN image for a domain or bank identifier.
///
/// Lives outside the OpenAPI service because the content type is whatever
/// the CDN returned.
#[handler]
pub async fn logo_proxy(
    Path(identifier): Path<String>,
    use_case: Data<&Arc<dyn FetchDomainLogoUseCase>>,
) -> Response {
    match use_case
        .execute(FetchDomainLogoParams { identifier })
        .await
    {
        Ok(image) => Response::builder()
            .status(StatusCode::OK)
            .content_type(image.content_type)
            .header(header::CACHE_CONTROL, LOGO_CACHE_CONTROL)
            .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")
            .body(image.bytes),
        Err(err) => {
            let (status, json) = err.into_error_response();
            (status, Json(json.0)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::LookupError;
    use business::domain::logo::errors::LogoError;
    use business::domain::logo::model::LogoImage;
    use mockall::mock;
    use poem::test::TestClient;
    use poem::{Endpoint, EndpointExt, Route, get};
    use serde_json::json;

    mock! {
        pub FetchLogo {}

        #[async_trait]
        impl FetchDomainLogoUseCase for FetchLogo {
            async fn execute(&self, params: FetchDomainLogoParams) -> Result<LogoImage, LogoError>;
        }
    }

    fn client(use_case: MockFetchLogo) -> TestClient<impl Endpoint> {
        let use_case: Arc<dyn FetchDomainLogoUseCase> = Arc::new(use_case);
        TestClient::new(Route::new().at("/logos/:domain", get(logo_proxy).data(use_case)))
    }

    #[tokio::test]
    async fn should_stream_logo_with_cache_headers() {
        let mut use_case = MockFetchLogo::new();
        use_case
            .expect_execute()
            .withf(|params: &FetchDomainLogoParams| params.identifier == "chase.com")
            .times(1)
            .returning(|_| {
                Ok(LogoImage {
                    bytes: b"<svg/>".to_vec(),
                    content_type: "image/svg+xml".to_string(),
                })
            });

        let resp = client(use_case).get("/logos/chase.com").send().await;

        resp.assert_status_is_ok();
        resp.assert_content_type("image/svg+xml");
        resp.assert_header("cache-control", LOGO_CACHE_CONTROL);
        resp.assert_header("access-control-allow-origin", "*");
        resp.assert_bytes(b"<svg/>".to_vec()).await;
    }

    #[tokio::test]
    async fn should_answer_not_found_as_json() {
        let mut use_case = MockFetchLogo::new();
        use_case
            .expect_execute()
            .returning(|_| Err(LogoError::NotFound));

        let resp = client(use_case).get("/logos/unknownbank.com").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({ "name": "NotFound", "message": "logo.not_found" }))
            .await;
    }

    #[tokio::test]
    async fn should_answer_bad_gateway_when_cdn_fails() {
        let mut use_case = MockFetchLogo::new();
        use_case
            .expect_execute()
            .returning(|_| Err(LogoError::Upstream(LookupError::Status(500))));

        let resp = client(use_case).get("/logos/chase.com").send().await;

        resp.assert_status(StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn should_reject_invalid_identifier() {
        let mut use_case = MockFetchLogo::new();
        use_case
            .expect_execute()
            .returning(|_| Err(LogoError::InvalidIdentifier));

        let resp = client(use_case).get("/logos/%20").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }
}
