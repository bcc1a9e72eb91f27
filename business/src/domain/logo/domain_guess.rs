use once_cell::sync::Lazy;
use regex::Regex;

use super::value_objects::{compact_bank_name, normalize_bank_name};

/// Known institutions, matched as whole-word substrings of the normalized
/// bank name.
///
/// Order matters: the first matching entry wins, so more specific names come
/// before names they contain.
const KNOWN_INSTITUTIONS: &[(&str, &str)] = &[
    ("bank of america", "bankofamerica.com"),
    ("bank of china", "boc.cn"),
    ("american express", "americanexpress.com"),
    ("capital one", "capitalone.com"),
    ("wells fargo", "wellsfargo.com"),
    ("jpmorgan", "chase.com"),
    ("chase", "chase.com"),
    ("citibank", "citi.com"),
    ("citigroup", "citi.com"),
    ("us bank", "usbank.com"),
    ("pnc", "pnc.com"),
    ("td bank", "td.com"),
    ("royal bank of canada", "rbc.com"),
    ("scotiabank", "scotiabank.com"),
    ("hsbc", "hsbc.com"),
    ("barclays", "barclays.co.uk"),
    ("lloyds", "lloydsbank.com"),
    ("natwest", "natwest.com"),
    ("santander", "santander.com"),
    ("bbva", "bbva.com"),
    ("caixabank", "caixabank.com"),
    ("bnp paribas", "bnpparibas.com"),
    ("societe generale", "societegenerale.com"),
    ("société générale", "societegenerale.com"),
    ("credit agricole", "credit-agricole.com"),
    ("deutsche bank", "db.com"),
    ("commerzbank", "commerzbank.com"),
    ("unicredit", "unicreditgroup.eu"),
    ("intesa sanpaolo", "intesasanpaolo.com"),
    ("sberbank", "sberbank.ru"),
    ("tinkoff", "tbank.ru"),
    ("cimb", "cimb.com"),
    ("maybank", "maybank.com"),
    ("malayan banking", "maybank.com"),
    ("public bank", "pbebank.com"),
    ("rhb", "rhbgroup.com"),
    ("hong leong", "hlb.com.my"),
    ("ambank", "ambank.com.my"),
    ("bank islam", "bankislam.com"),
    ("dbs", "dbs.com"),
    ("ocbc", "ocbc.com"),
    ("united overseas bank", "uobgroup.com"),
    ("uob", "uobgroup.com"),
    ("bank central asia", "bca.co.id"),
    ("mandiri", "bankmandiri.co.id"),
    ("bank rakyat indonesia", "bri.co.id"),
    ("kasikorn", "kasikornbank.com"),
    ("bangkok bank", "bangkokbank.com"),
    ("icici", "icicibank.com"),
    ("hdfc", "hdfcbank.com"),
    ("state bank of india", "sbi.co.in"),
    ("mizuho", "mizuhogroup.com"),
    ("mufg", "mufg.jp"),
    ("sumitomo mitsui", "smbc.co.jp"),
    ("commonwealth bank", "commbank.com.au"),
    ("westpac", "westpac.com.au"),
    ("anz", "anz.com"),
    ("australia and new zealand", "anz.com"),
    ("standard chartered", "sc.com"),
    ("revolut", "revolut.com"),
    ("monzo", "monzo.com"),
];

/// Words that never identify an institution on their own.
const GENERIC_WORDS: &[&str] = &[
    "the", "and", "bank", "banco", "banque", "bancorp", "berhad", "bhd", "ltd", "plc", "inc",
    "group", "national",
];

/// Suffix patterns applied to the first significant word, in probe order.
const HEURISTIC_PATTERNS: &[&str] = &["{}.com", "{}bank.com", "{}.net"];

static DOMAIN_PATTERN: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,63}$").ok()
});

/// Looks up the static institution table. Pure function of the input.
pub fn match_known_domain(bank_name: &str) -> Option<&'static str> {
    let normalized = normalize_bank_name(bank_name);
    if normalized.is_empty() {
        return None;
    }

    let padded = format!(" {} ", normalized);
    KNOWN_INSTITUTIONS
        .iter()
        .find(|(needle, _)| padded.contains(&format!(" {} ", needle)))
        .map(|(_, domain)| *domain)
}

/// First word longer than two characters that is not a generic banking term.
///
/// Falls back to the first word longer than two characters when every word
/// is generic ("National Bank" -> "national").
pub fn first_significant_word(bank_name: &str) -> Option<String> {
    let normalized = normalize_bank_name(bank_name);
    let long_words: Vec<&str> = normalized
        .split(' ')
        .filter(|w| w.chars().count() > 2)
        .collect();

    long_words
        .iter()
        .find(|w| !GENERIC_WORDS.contains(*w))
        .or_else(|| long_words.first())
        .map(|w| w.to_string())
}

/// Candidate domains guessed from the name, in probe order, without duplicates.
pub fn heuristic_domains(bank_name: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    if let Some(word) = first_significant_word(bank_name) {
        for pattern in HEURISTIC_PATTERNS {
            candidates.push(pattern.replace("{}", &word));
        }
    }

    let compact = compact_bank_name(bank_name);
    if !compact.is_empty() {
        candidates.push(format!("{}.com", compact));
    }

    let mut seen = std::collections::HashSet::new();
    candidates.retain(|domain| is_valid_domain(domain) && seen.insert(domain.clone()));
    candidates
}

/// True for lower-case ASCII host names such as `cimb.com` or `hlb.com.my`.
pub fn is_valid_domain(candidate: &str) -> bool {
    candidate.len() <= 253
        && DOMAIN_PATTERN
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(candidate))
}

/// Maps a logo proxy identifier to a domain.
///
/// A valid domain is used as is. Anything else is treated as a bank name:
/// the institution table first, then `{compact name}.com`.
pub fn domain_for_identifier(identifier: &str) -> Option<String> {
    let lowered = identifier.trim().to_lowercase();
    let host = lowered.strip_prefix("www.").unwrap_or(&lowered);
    if is_valid_domain(host) {
        return Some(host.to_string());
    }

    if let Some(domain) = match_known_domain(identifier) {
        return Some(domain.to_string());
    }

    let compact = compact_bank_name(identifier);
    let guess = format!("{}.com", compact);
    if compact.is_empty() || !is_valid_domain(&guess) {
        return None;
    }
    Some(guess)
}
