use crate::error::UnrecognizedToken;
use std::str::FromStr;

pub const TRUTHY_TOKENS: &[&str] = &["1", "true", "yes", "on", "y", "t", "enable", "enabled"];
pub const FALSY_TOKENS: &[&str] = &["0", "false", "no", "off", "n", "f", "disable", "disabled"];

/// A boolean parsed from one of the whitelisted tokens.
///
/// Matching ignores ASCII case and surrounding whitespace. Anything outside
/// `TRUTHY_TOKENS` and `FALSY_TOKENS`, including the empty string, is rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EnvBool(pub bool);

impl FromStr for EnvBool {
    type Err = UnrecognizedToken;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        if TRUTHY_TOKENS.contains(&normalized.as_str()) {
            Ok(EnvBool(true))
        } else if FALSY_TOKENS.contains(&normalized.as_str()) {
            Ok(EnvBool(false))
        } else {
            Err(UnrecognizedToken {
                token: value.to_string(),
            })
        }
    }
}

impl From<EnvBool> for bool {
    fn from(value: EnvBool) -> Self {
        value.0
    }
}

pub fn parse_bool(value: &str) -> Option<bool> {
    value.parse::<EnvBool>().ok().map(bool::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_every_whitelisted_token() {
        for token in TRUTHY_TOKENS {
            assert_eq!(parse_bool(token), Some(true), "{token:?} should be truthy");
        }
        for token in FALSY_TOKENS {
            assert_eq!(parse_bool(token), Some(false), "{token:?} should be falsy");
        }
    }

    #[test]
    fn ignores_case_and_surrounding_whitespace() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("  Yes\n"), Some(true));
        assert_eq!(parse_bool("FALSE"), Some(false));
        assert_eq!(parse_bool("\tOff "), Some(false));
    }

    #[test]
    fn rejects_tokens_outside_the_whitelist() {
        for token in ["", "   ", "maybe", "banana", "2", "-1", "truee", "nope"] {
            assert_eq!(parse_bool(token), None, "{token:?} should be rejected");
        }
    }

    #[test]
    fn error_keeps_the_raw_token() {
        let err = " Maybe ".parse::<EnvBool>().unwrap_err();
        assert_eq!(err.token, " Maybe ");
        assert_eq!(err.to_string(), "unrecognized boolean token \" Maybe \"");
    }

    #[test]
    fn token_lists_are_disjoint() {
        for token in TRUTHY_TOKENS {
            assert!(!FALSY_TOKENS.contains(token), "{token:?} is in both lists");
        }
    }
}
