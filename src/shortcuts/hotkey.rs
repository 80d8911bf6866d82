use crate::utils::ItcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single key pressed together with Alt (Option on macOS).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hotkey {
    key: String,
}

impl Hotkey {
    /// Parse `Alt+<key>` (modifier is case-insensitive, `Option` also accepted) or a bare key.
    pub fn parse(input: &str) -> Result<Self, ItcError> {
        let trimmed = input.trim();
        let key = match trimmed.split_once('+') {
            Some((modifier, key)) if !modifier.is_empty() => {
                let modifier = modifier.trim();
                if !modifier.eq_ignore_ascii_case("alt") && !modifier.eq_ignore_ascii_case("option")
                {
                    return Err(ItcError::InvalidHotkey(format!(
                        "unsupported modifier '{}' in '{}'",
                        modifier, input
                    )));
                }
                key.trim()
            }
            _ => trimmed,
        };

        Self::from_key(key).ok_or_else(|| {
            ItcError::InvalidHotkey(format!("'{}' must name exactly one key", input))
        })
    }

    /// Build from the character a key press produced; `None` unless it is one visible char.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() && !c.is_control() => {
                let mut lower = c.to_lowercase();
                let key = match (lower.next(), lower.next()) {
                    (Some(l), None) => l,
                    _ => c,
                };
                Some(Self {
                    key: key.to_string(),
                })
            }
            _ => None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Some lowercase letters uppercase to several chars (ß -> SS); keep those as-is
        let upper = self.key.to_uppercase();
        if upper.chars().count() == 1 {
            write!(f, "Alt+{}", upper)
        } else {
            write!(f, "Alt+{}", self.key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = ItcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Hotkey {
    type Error = ItcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Hotkey> for String {
    fn from(value: Hotkey) -> Self {
        value.to_string()
    }
}
