use serde::{Deserialize, Serialize};

/// Number of leading digits used as the cache key for card lookups.
pub const BIN_LENGTH: usize = 6;
const MAX_BIN_LENGTH: usize = 8;

/// Bank Identification Number: the leading digits of a payment card number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bin(String);

impl Bin {
    /// Derives the BIN from a raw card number.
    ///
    /// Non-digit characters are ignored and the first six digits are kept.
    /// Returns `None` when fewer than six digits are present.
    pub fn from_card_number(card_number: &str) -> Option<Self> {
        let digits: String = card_number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(BIN_LENGTH)
            .collect();

        if digits.len() < BIN_LENGTH {
            return None;
        }

        Some(Self(digits))
    }

    /// Parses a BIN supplied on its own (6 to 8 digits).
    ///
    /// Spaces and dashes are accepted as formatting; any other non-digit
    /// character rejects the input.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut digits = String::with_capacity(MAX_BIN_LENGTH);
        for c in raw.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' => continue,
                _ => return None,
            }
        }

        if (BIN_LENGTH..=MAX_BIN_LENGTH).contains(&digits.len()) {
            Some(Self(digits))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Bin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Convenience wrapper over [`Bin::from_card_number`] returning the digits.
pub fn extract_bin(card_number: &str) -> Option<String> {
    Bin::from_card_number(card_number).map(|bin| bin.0)
}

/// Normalizes a bank name for cache keys and domain matching.
///
/// Lower-cases, drops anything that is neither alphanumeric nor whitespace,
/// and collapses runs of whitespace into single spaces.
pub fn normalize_bank_name(bank_name: &str) -> String {
    let kept: String = bank_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized bank name with the spaces removed ("Chase Bank" -> "chasebank").
pub fn compact_bank_name(bank_name: &str) -> String {
    normalize_bank_name(bank_name).replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_extract_first_six_digits_from_formatted_card() {
        assert_eq!(
            extract_bin("4111 1111 1111 1111"),
            Some("411111".to_string())
        );
        assert_eq!(
            extract_bin("5500-0000-0000-0004"),
            Some("550000".to_string())
        );
    }

    #[test]
    fn should_return_none_when_card_has_fewer_than_six_digits() {
        assert_eq!(Bin::from_card_number(""), None);
        assert_eq!(Bin::from_card_number("41 11 1"), None);
        assert_eq!(Bin::from_card_number("abcdefgh"), None);
    }

    #[test]
    fn should_parse_standalone_bin_of_six_to_eight_digits() {
        assert_eq!(Bin::parse("411111").map(|b| b.to_string()), Some("411111".into()));
        assert_eq!(Bin::parse("4111 1111").map(|b| b.to_string()), Some("41111111".into()));
        assert!(Bin::parse("41111").is_none());
        assert!(Bin::parse("411111111").is_none());
        assert!(Bin::parse("41111a").is_none());
    }

    #[test]
    fn should_normalize_bank_name() {
        assert_eq!(normalize_bank_name("  CIMB   Bank, Berhad! "), "cimb bank berhad");
        assert_eq!(normalize_bank_name("U.S. Bank"), "us bank");
        assert_eq!(normalize_bank_name("Société Générale"), "société générale");
        assert_eq!(normalize_bank_name("***"), "");
    }

    #[test]
    fn should_compact_bank_name() {
        assert_eq!(compact_bank_name("Chase Bank"), "chasebank");
    }

    proptest! {
        #[test]
        fn short_digit_sequences_never_yield_a_bin(s in "[^0-9]*([0-9][^0-9]*){0,5}") {
            prop_assert!(Bin::from_card_number(&s).is_none());
        }

        #[test]
        fn bin_is_first_six_digits_of_any_long_number(digits in "[0-9]{6,19}", sep in "[ -]?") {
            let formatted: String = digits
                .chars()
                .flat_map(|c| std::iter::once(c).chain(sep.chars()))
                .collect();
            let bin = Bin::from_card_number(&formatted);
            prop_assert_eq!(bin.map(|b| b.to_string()), Some(digits[..6].to_string()));
        }
    }
}
