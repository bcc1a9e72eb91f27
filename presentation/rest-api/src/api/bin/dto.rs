use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::logo::use_cases::lookup_bin::BinDetails;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct BinResponse {
    pub bin: String,
    pub bank_name: Option<String>,
    pub bank_domain: Option<String>,
    /// ISO 3166-1 alpha-2, upper case
    pub country_code: Option<String>,
    /// Logo published by the BIN service, if any
    pub logo: Option<String>,
}

impl From<BinDetails> for BinResponse {
    fn from(details: BinDetails) -> Self {
        Self {
            bin: details.bin.as_str().to_string(),
            bank_name: details.record.bank_name,
            bank_domain: details.record.bank_domain,
            country_code: details.record.country_code,
            logo: details.record.logo,
        }
    }
}
