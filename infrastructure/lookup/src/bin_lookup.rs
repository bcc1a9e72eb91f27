use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::LookupError;
use business::domain::logo::model::BankRecord;
use business::domain::logo::services::BinMetadataSource;
use business::domain::logo::value_objects::Bin;

use crate::client::{LookupClient, check_status};

/// Union of the response shapes returned by the supported BIN services.
///
/// binlist: `{ bank: { name, url }, country: { alpha2 } }`
/// neverpayforads: `{ issuer: { logo }, bank: { logo }, data: { bank_logo } }`
#[derive(Debug, Default, Deserialize)]
struct BinLookupResponse {
    bank: Option<BankSection>,
    issuer: Option<BankSection>,
    data: Option<DataSection>,
    country: Option<CountryField>,
}

#[derive(Debug, Default, Deserialize)]
struct BankSection {
    name: Option<String>,
    logo: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct DataSection {
    bank_name: Option<String>,
    bank_logo: Option<String>,
    bank_url: Option<String>,
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountryField {
    Object { alpha2: Option<String> },
    Code(String),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Bare lower-case host of a bank website, with or without scheme.
pub fn host_of(website: &str) -> Option<String> {
    let website = website.trim();
    if website.is_empty() {
        return None;
    }

    let with_scheme = if website.contains("://") {
        website.to_string()
    } else {
        format!("https://{}", website)
    };

    let url = url::Url::parse(&with_scheme).ok()?;
    let host = url.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if !host.contains('.') {
        return None;
    }
    Some(host.to_string())
}

impl BinLookupResponse {
    fn into_record(self) -> BankRecord {
        let bank = self.bank.unwrap_or_default();
        let issuer = self.issuer.unwrap_or_default();
        let data = self.data.unwrap_or_default();

        let country_code = match self.country {
            Some(CountryField::Object { alpha2 }) => non_empty(alpha2),
            Some(CountryField::Code(code)) => non_empty(Some(code)),
            None => None,
        }
        .or(non_empty(data.country_code))
        .map(|code| code.to_uppercase());

        let bank_domain = non_empty(bank.url)
            .or(non_empty(issuer.url))
            .or(non_empty(data.bank_url))
            .and_then(|website| host_of(&website));

        BankRecord {
            bank_name: non_empty(bank.name)
                .or(non_empty(issuer.name))
                .or(non_empty(data.bank_name)),
            bank_domain,
            country_code,
            logo: non_empty(issuer.logo)
                .or(non_empty(bank.logo))
                .or(non_empty(data.bank_logo)),
        }
    }
}

/// Parses a BIN service response body. `None` when it carries nothing usable.
pub fn parse_bin_response(body: &str) -> Result<Option<BankRecord>, LookupError> {
    let parsed: BinLookupResponse =
        serde_json::from_str(body).map_err(|_| LookupError::malformed_response())?;
    let record = parsed.into_record();

    if record.is_empty() {
        Ok(None)
    } else {
        Ok(Some(record))
    }
}

/// `BinMetadataSource` over `GET {base_url}/{bin}`.
pub struct HttpBinLookup {
    client: LookupClient,
    accept_version: Option<&'static str>,
}

impl HttpBinLookup {
    pub fn new(client: LookupClient) -> Self {
        Self {
            client,
            accept_version: None,
        }
    }

    /// binlist.net answers with its current schema only when asked for version 3.
    pub fn binlist(client: LookupClient) -> Self {
        Self {
            client,
            accept_version: Some("3"),
        }
    }
}

#[async_trait]
impl BinMetadataSource for HttpBinLookup {
    async fn lookup(&self, bin: &Bin) -> Result<Option<BankRecord>, LookupError> {
        let mut request = self
            .client
            .client
            .get(self.client.endpoint(bin.as_str()))
            .header("Accept", "application/json");
        if let Some(version) = self.accept_version {
            request = request.header("Accept-Version", version);
        }

        let response = request.send().await.map_err(|_| LookupError::network())?;

        if !check_status(response.status())? {
            return Ok(None);
        }

        let body = response.text().await.map_err(|_| LookupError::network())?;

        parse_bin_response(&body)
    }
}
