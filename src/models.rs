// src/models.rs
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// bcrypt work factor WordPress uses for its user table.
pub const WORDPRESS_COST: u32 = 10;

// Result of a single hash request. Discarded once displayed.
#[derive(Debug, Clone, Serialize)]
pub struct HashRecord {
    #[serde(skip_serializing)]
    pub plaintext_input: String,
    #[serde(rename = "hash")]
    pub hash_output: String,
    pub cost_factor: u32,
}

/// The bcrypt prefix revision written in front of the cost.
///
/// All three produce the same digest for the same salt; WordPress (through
/// PHP's `password_hash`) writes `$2y$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HashVariant {
    #[serde(rename = "2a")]
    TwoA,
    #[serde(rename = "2b")]
    TwoB,
    #[default]
    #[serde(rename = "2y")]
    TwoY,
}

impl HashVariant {
    pub fn prefix(&self) -> &'static str {
        match self {
            HashVariant::TwoA => "2a",
            HashVariant::TwoB => "2b",
            HashVariant::TwoY => "2y",
        }
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for HashVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('$').to_lowercase().as_str() {
            "2a" => Ok(HashVariant::TwoA),
            "2b" => Ok(HashVariant::TwoB),
            "2y" => Ok(HashVariant::TwoY),
            other => Err(format!("unknown bcrypt variant '{}' (expected 2a, 2b or 2y)", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn alphabet(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Digits => "0123456789",
            CharacterClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase (A-Z)",
            CharacterClass::Lowercase => "Lowercase (a-z)",
            CharacterClass::Digits => "Numbers (0-9)",
            CharacterClass::Symbols => "Symbols (!@#$...)",
        }
    }
}

// Password generation request, built from the current selections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordSpec {
    pub length: usize,
    pub classes: BTreeSet<CharacterClass>,
}

impl PasswordSpec {
    pub fn new(length: usize, classes: impl IntoIterator<Item = CharacterClass>) -> Self {
        Self {
            length,
            classes: classes.into_iter().collect(),
        }
    }

    /// Selected alphabets concatenated in upper, lower, digits, symbols order.
    pub fn alphabet(&self) -> Vec<char> {
        // BTreeSet iterates in declaration order of the enum
        self.classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

impl Default for PasswordSpec {
    fn default() -> Self {
        Self::new(16, CharacterClass::ALL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLevel::Weak => write!(f, "Weak password"),
            StrengthLevel::Medium => write!(f, "Medium password"),
            StrengthLevel::Strong => write!(f, "Strong password"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub level: StrengthLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

// Everything that survives between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_follows_class_order_regardless_of_insertion() {
        let spec = PasswordSpec::new(4, [CharacterClass::Digits, CharacterClass::Uppercase]);
        let alphabet: String = spec.alphabet().into_iter().collect();
        assert_eq!(alphabet, "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    }

    #[test]
    fn symbol_set_matches_page() {
        assert_eq!(CharacterClass::Symbols.alphabet().len(), 26);
        let spec = PasswordSpec::default();
        assert_eq!(spec.alphabet().len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn variant_parses_with_or_without_dollar() {
        assert_eq!("2y".parse::<HashVariant>(), Ok(HashVariant::TwoY));
        assert_eq!("$2B".parse::<HashVariant>(), Ok(HashVariant::TwoB));
        assert!("2x".parse::<HashVariant>().is_err());
    }

    #[test]
    fn preferences_serialize_theme_lowercase() {
        let prefs = Preferences { theme: Theme::Light };
        assert_eq!(serde_json::to_string(&prefs).unwrap(), r#"{"theme":"light"}"#);
        let parsed: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.theme, Theme::Dark);
    }

    #[test]
    fn hash_record_never_serializes_plaintext() {
        let record = HashRecord {
            plaintext_input: "secret".into(),
            hash_output: "$2y$10$abc".into(),
            cost_factor: WORDPRESS_COST,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("\"hash\""));
    }
}
