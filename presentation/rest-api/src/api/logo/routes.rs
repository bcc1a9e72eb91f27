use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::logo::use_cases::resolve_batch::{
    ResolveBatchParams, ResolveLogosBatchUseCase,
};
use business::domain::logo::use_cases::resolve_by_card::{
    ResolveByCardParams, ResolveLogoByCardUseCase,
};
use business::domain::logo::use_cases::resolve_by_name::{
    ResolveByNameParams, ResolveLogoByNameUseCase,
};

use crate::api::error::ErrorResponse;
use crate::api::logo::dto::{BatchLogoRequest, BatchLogoResponse, LogoResponse};
use crate::api::tags::ApiTags;

pub struct LogoApi {
    by_card_use_case: Arc<dyn ResolveLogoByCardUseCase>,
    by_name_use_case: Arc<dyn ResolveLogoByNameUseCase>,
    batch_use_case: Arc<dyn ResolveLogosBatchUseCase>,
    batch_max_size: usize,
}

impl LogoApi {
    pub fn new(
        by_card_use_case: Arc<dyn ResolveLogoByCardUseCase>,
        by_name_use_case: Arc<dyn ResolveLogoByNameUseCase>,
        batch_use_case: Arc<dyn ResolveLogosBatchUseCase>,
        batch_max_size: usize,
    ) -> Self {
        Self {
            by_card_use_case,
            by_name_use_case,
            batch_use_case,
            batch_max_size,
        }
    }
}

/// Bank logo resolution API
///
/// Resolves issuer logos from card numbers and bank names. Resolution never
/// fails: unknown cards give `null`, unknown names give a generated badge.
#[OpenApi]
impl LogoApi {
    /// Resolve a logo from a card number
    ///
    /// Only the first six digits are used. A missing or too short number
    /// yields `{ "logo": null }`.
    #[oai(path = "/bank-logo", method = "get", tag = "ApiTags::Logos")]
    async fn logo_by_card(&self, card: Query<Option<String>>) -> Json<LogoResponse> {
        let logo = match card.0 {
            Some(card_number) if !card_number.trim().is_empty() => {
                self.by_card_use_case
                    .execute(ResolveByCardParams { card_number })
                    .await
            }
            _ => None,
        };

        Json(logo.into())
    }

    /// Resolve a logo from a bank name
    ///
    /// `existing` is returned unchanged when it already looks like a logo
    /// (absolute URL, `data:` URI or site-relative path).
    #[oai(path = "/bank-logo/by-name", method = "get", tag = "ApiTags::Logos")]
    async fn logo_by_name(
        &self,
        name: Query<String>,
        existing: Query<Option<String>>,
    ) -> Json<LogoResponse> {
        let logo = self
            .by_name_use_case
            .execute(ResolveByNameParams {
                bank_name: name.0,
                existing_logo: existing.0,
            })
            .await;

        Json(logo.into())
    }

    /// Resolve logos for many banks
    ///
    /// Results keep the request order.
    #[oai(path = "/bank-logos/batch", method = "post", tag = "ApiTags::Logos")]
    async fn resolve_batch(&self, body: Json<BatchLogoRequest>) -> ResolveBatchResponse {
        let banks = body.0.banks;

        if banks.is_empty() {
            return ResolveBatchResponse::BadRequest(Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "logo.batch_empty".to_string(),
            }));
        }
        if banks.len() > self.batch_max_size {
            return ResolveBatchResponse::BadRequest(Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "logo.batch_too_large".to_string(),
            }));
        }

        let params = ResolveBatchParams {
            banks: banks.into_iter().map(|bank| bank.into()).collect(),
        };
        let results = self.batch_use_case.execute(params).await;

        ResolveBatchResponse::Ok(Json(BatchLogoResponse {
            results: results.into_iter().map(|r| r.into()).collect(),
        }))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResolveBatchResponse {
    #[oai(status = 200)]
    Ok(Json<BatchLogoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
