use serde::{Deserialize, Serialize};

/// The form a logo reference takes when handed to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoRefKind {
    /// `http(s)://` image URL.
    Url,
    /// `data:` URI with the image inlined.
    InlineData,
    /// Absolute path served by the dashboard itself (`/logos/chase.png`).
    AbsolutePath,
}

impl std::fmt::Display for LogoRefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoRefKind::Url => write!(f, "url"),
            LogoRefKind::InlineData => write!(f, "inline_data"),
            LogoRefKind::AbsolutePath => write!(f, "absolute_path"),
        }
    }
}

/// A displayable logo reference: URL, inline image data or absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoRef(String);

impl LogoRef {
    /// Wraps a value produced by a trusted source (lookup service, CDN, placeholder).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Accepts `raw` only when it is one of the recognized reference forms.
    /// Surrounding whitespace is ignored for classification; the value is
    /// kept exactly as given.
    pub fn recognize(raw: &str) -> Option<Self> {
        Self::classify(raw.trim()).map(|_| Self(raw.to_string()))
    }

    /// Classifies a string into a [`LogoRefKind`], if it is one.
    pub fn classify(raw: &str) -> Option<LogoRefKind> {
        if raw.starts_with("data:") {
            return Some(LogoRefKind::InlineData);
        }
        // "//host/x.png" is protocol-relative, not a local path
        if raw.starts_with('/') && !raw.starts_with("//") {
            return Some(LogoRefKind::AbsolutePath);
        }
        match url::Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
                Some(LogoRefKind::Url)
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<LogoRefKind> {
        Self::classify(self.0.trim())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for LogoRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issuer metadata returned by a BIN lookup service. Consumed, not owned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BankRecord {
    pub bank_name: Option<String>,
    /// Bare host of the issuer's website, e.g. `chase.com`.
    pub bank_domain: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub country_code: Option<String>,
    pub logo: Option<String>,
}

impl BankRecord {
    /// True when the record carries nothing usable.
    pub fn is_empty(&self) -> bool {
        self.bank_name.is_none()
            && self.bank_domain.is_none()
            && self.country_code.is_none()
            && self.logo.is_none()
    }
}

/// Raw image returned by the logo CDN, forwarded by the logo proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}
