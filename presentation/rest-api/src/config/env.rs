use std::env;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("config.invalid_value: {name}={value}")]
    InvalidValue { name: String, value: String },
}

/// Reads `name`, falling back to `default` when unset or blank.
pub fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Reads `name` as a strictly positive number.
pub fn positive_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    parse_positive(name, env::var(name).ok(), default)
}

fn parse_positive<T>(name: &str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(default),
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: raw,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_when_unset_or_blank() {
        assert_eq!(parse_positive("BATCH_CONCURRENCY", None, 10usize), Ok(10));
        assert_eq!(
            parse_positive("BATCH_CONCURRENCY", Some("  ".to_string()), 10usize),
            Ok(10)
        );
    }

    #[test]
    fn should_parse_trimmed_value() {
        assert_eq!(
            parse_positive("LOOKUP_TIMEOUT_SECS", Some(" 3 ".to_string()), 10u64),
            Ok(3)
        );
    }

    #[test]
    fn should_reject_zero_and_garbage() {
        assert_eq!(
            parse_positive("BATCH_CONCURRENCY", Some("0".to_string()), 10usize),
            Err(ConfigError::InvalidValue {
                name: "BATCH_CONCURRENCY".to_string(),
                value: "0".to_string(),
            })
        );
        assert!(parse_positive("BATCH_MAX_SIZE", Some("-5".to_string()), 500usize).is_err());
        assert!(parse_positive("LOOKUP_TIMEOUT_SECS", Some("ten".to_string()), 10u64).is_err());
    }
}
