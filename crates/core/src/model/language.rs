use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language code: {0}")]
pub struct LanguageError(pub String);

/// Display languages offered by the platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Pa,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Pa];

    /// Wire and storage code (`en`, `hi`, `pa`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Pa => "pa",
        }
    }

    /// Short label shown on the language switcher, in the language itself.
    #[must_use]
    pub fn native_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "हि",
            Language::Pa => "ਪਾ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "pa" => Ok(Language::Pa),
            other => Err(LanguageError(other.to_string())),
        }
    }
}

/// Text with per-language variants.
///
/// English is mandatory; Hindi and Punjabi are optional and fall back to
/// English when missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    en: String,
    hi: Option<String>,
    pa: Option<String>,
}

impl LocalizedText {
    #[must_use]
    pub fn new(en: impl Into<String>, hi: Option<String>, pa: Option<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.filter(|value| !value.trim().is_empty()),
            pa: pa.filter(|value| !value.trim().is_empty()),
        }
    }

    /// English-only text.
    #[must_use]
    pub fn english(en: impl Into<String>) -> Self {
        Self::new(en, None, None)
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Hi => self.hi.as_deref().unwrap_or(&self.en),
            Language::Pa => self.pa.as_deref().unwrap_or(&self.en),
        }
    }

    /// Returns true if a dedicated variant exists for `language`.
    #[must_use]
    pub fn has(&self, language: Language) -> bool {
        match language {
            Language::En => true,
            Language::Hi => self.hi.is_some(),
            Language::Pa => self.pa.is_some(),
        }
    }
}
