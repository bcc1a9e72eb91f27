use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::logo::model::LogoRef;
use business::domain::logo::use_cases::resolve_batch::ResolvedBankLogo;
use business::domain::logo::use_cases::resolve_by_name::ResolveByNameParams;

/// A resolved logo: an absolute URL, a `data:` URI or a site-relative path.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct LogoResponse {
    pub logo: Option<String>,
}

impl From<Option<LogoRef>> for LogoResponse {
    fn from(logo: Option<LogoRef>) -> Self {
        Self {
            logo: logo.map(LogoRef::into_inner),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct BankLogoRequest {
    pub name: String,
    /// Logo already stored for the bank; returned as-is when recognizable
    pub existing_logo: Option<String>,
}

impl From<BankLogoRequest> for ResolveByNameParams {
    fn from(request: BankLogoRequest) -> Self {
        Self {
            bank_name: request.name,
            existing_logo: request.existing_logo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BatchLogoRequest {
    pub banks: Vec<BankLogoRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BankLogoResult {
    pub name: String,
    pub logo: Option<String>,
}

impl From<ResolvedBankLogo> for BankLogoResult {
    fn from(resolved: ResolvedBankLogo) -> Self {
        Self {
            name: resolved.bank_name,
            logo: resolved.logo.map(LogoRef::into_inner),
        }
    }
}

/// Results in the same order as the request.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct BatchLogoResponse {
    pub results: Vec<BankLogoResult>,
}
