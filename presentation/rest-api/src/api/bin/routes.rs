use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::logo::use_cases::lookup_bin::{LookupBinParams, LookupBinUseCase};

use crate::api::bin::dto::BinResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct BinApi {
    lookup_use_case: Arc<dyn LookupBinUseCase>,
}

impl BinApi {
    pub fn new(lookup_use_case: Arc<dyn LookupBinUseCase>) -> Self {
        Self { lookup_use_case }
    }
}

#[OpenApi]
impl BinApi {
    /// Look up issuer metadata for a BIN
    ///
    /// Accepts 6 to 8 digits. Sources are tried in order and the first one
    /// that knows the BIN answers.
    #[oai(path = "/bins/:bin", method = "get", tag = "ApiTags::Bins")]
    async fn lookup_bin(&self, bin: Path<String>) -> LookupBinResponse {
        match self
            .lookup_use_case
            .execute(LookupBinParams { bin: bin.0 })
            .await
        {
            Ok(details) => LookupBinResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => LookupBinResponse::BadRequest(json),
                    404 => LookupBinResponse::NotFound(json),
                    _ => LookupBinResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum LookupBinResponse {
    #[oai(status = 200)]
    Ok(Json<BinResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::LookupError;
    use business::domain::logo::errors::LogoError;
    use business::domain::logo::model::BankRecord;
    use business::domain::logo::use_cases::lookup_bin::BinDetails;
    use business::domain::logo::value_objects::Bin;
    use mockall::mock;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    mock! {
        pub Lookup {}

        #[async_trait]
        impl LookupBinUseCase for Lookup {
            async fn execute(&self, params: LookupBinParams) -> Result<BinDetails, LogoError>;
        }
    }

    fn client(lookup: MockLookup) -> TestClient<Route> {
        let service = OpenApiService::new(BinApi::new(Arc::new(lookup)), "Bank Logo API", "test");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_return_bin_details() {
        let mut lookup = MockLookup::new();
        lookup
            .expect_execute()
            .withf(|params: &LookupBinParams| params.bin == "526471")
            .times(1)
            .returning(|params| {
                Ok(BinDetails {
                    bin: Bin::parse(&params.bin).unwrap(),
                    record: BankRecord {
                        bank_name: Some("CIMB Bank Berhad".to_string()),
                        bank_domain: Some("cimb.com".to_string()),
                        country_code: Some("MY".to_string()),
                        logo: None,
                    },
                })
            });

        let resp = client(lookup).get("/bins/526471").send().await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({
            "bin": "526471",
            "bankName": "CIMB Bank Berhad",
            "bankDomain": "cimb.com",
            "countryCode": "MY",
            "logo": null
        }))
        .await;
    }

    #[tokio::test]
    async fn should_map_lookup_errors_to_statuses() {
        let cases = [
            (LogoError::InvalidBin, StatusCode::BAD_REQUEST, "bin.invalid"),
            (LogoError::BinNotFound, StatusCode::NOT_FOUND, "bin.not_found"),
            (
                LogoError::Upstream(LookupError::Network),
                StatusCode::BAD_GATEWAY,
                "logo.upstream_unavailable",
            ),
        ];

        for (error, status, message) in cases {
            let mut lookup = MockLookup::new();
            lookup
                .expect_execute()
                .times(1)
                .return_once(move |_| Err(error));

            let resp = client(lookup).get("/bins/411111").send().await;

            resp.assert_status(status);
            let body = resp.json().await;
            body.value().object().get("message").assert_string(message);
        }
    }
}
