use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

use super::model::LogoRef;
use super::value_objects::normalize_bank_name;

/// Background colors for generated placeholders.
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899", "#14b8a6",
];

const SIZE: u32 = 96;
const CORNER_RADIUS: u32 = 12;
const FONT_SIZE: u32 = 32;

/// Upper-cased first alphanumeric character of up to the first two words.
///
/// Returns `"?"` when no word has an alphanumeric character.
pub fn initials(bank_name: &str) -> String {
    let letters: String = bank_name
        .split_whitespace()
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Palette entry picked from a digest of the normalized name.
pub fn background_color(bank_name: &str) -> &'static str {
    let digest = Sha256::digest(normalize_bank_name(bank_name).as_bytes());
    PALETTE[usize::from(digest[0]) % PALETTE.len()]
}

/// Builds the deterministic initials-on-color placeholder as an inline SVG
/// `data:` URI. Same name, same image.
pub fn make_fallback_logo(bank_name: &str) -> LogoRef {
    let svg = format!(
        concat!(
            r#"<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">"#,
            r#"<rect width="{size}" height="{size}" fill="{color}" rx="{radius}"/>"#,
            r#"<text x="{center}" y="{center}" font-family="Arial, sans-serif" font-size="{font}" "#,
            r#"font-weight="bold" fill="white" text-anchor="middle" dominant-baseline="central">"#,
            r#"{initials}</text></svg>"#
        ),
        size = SIZE,
        center = SIZE / 2,
        radius = CORNER_RADIUS,
        font = FONT_SIZE,
        color = background_color(bank_name),
        initials = initials(bank_name),
    );

    LogoRef::new(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logo::model::LogoRefKind;

    fn decode_svg(logo: &LogoRef) -> String {
        let encoded = logo
            .as_str()
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("placeholder is an svg data uri");
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn should_take_initials_of_first_two_words() {
        assert_eq!(initials("Unknown Bank"), "UB");
        assert_eq!(initials("cimb bank berhad"), "CB");
        assert_eq!(initials("Monzo"), "M");
        assert_eq!(initials("(M) Public Bank"), "MP");
    }

    #[test]
    fn should_keep_one_character_per_word_when_upper_casing_expands() {
        assert_eq!(initials("ßank ǆemal"), "SǄ");
        assert_eq!(initials("ﬁrst ﬂoor"), "FF");
        assert_eq!(initials("ßank ǆemal").chars().count(), 2);
    }

    #[test]
    fn should_fall_back_to_question_mark_without_letters() {
        assert_eq!(initials("*** ---"), "?");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn should_pick_color_from_palette_deterministically() {
        let color = background_color("Unknown Bank");
        assert!(PALETTE.contains(&color));
        assert_eq!(background_color("Unknown Bank"), color);
        assert_eq!(background_color("  UNKNOWN bank "), color);
    }

    #[test]
    fn should_generate_same_placeholder_for_same_name() {
        let first = make_fallback_logo("Unknown Bank");
        let second = make_fallback_logo("Unknown Bank");

        assert_eq!(first, second);
        assert_eq!(first.kind(), Some(LogoRefKind::InlineData));
    }

    #[test]
    fn should_embed_initials_and_color_in_svg() {
        let logo = make_fallback_logo("Unknown Bank");
        let svg = decode_svg(&logo);

        assert!(svg.starts_with("<svg width=\"96\" height=\"96\""));
        assert!(svg.contains(&format!("fill=\"{}\"", background_color("Unknown Bank"))));
        assert!(svg.contains(">UB</text>"));
    }

    #[test]
    fn should_spread_names_over_palette() {
        let names = [
            "Alpha Bank",
            "Beta Credit",
            "Gamma Savings",
            "Delta Trust",
            "Epsilon Finance",
            "Zeta Union",
            "Eta Capital",
            "Theta Mutual",
            "Iota Bancorp",
            "Kappa Lending",
        ];
        let distinct: std::collections::HashSet<_> =
            names.iter().map(|n| background_color(n)).collect();
        assert!(distinct.len() > 1);
    }
}
