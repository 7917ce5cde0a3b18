//! Core type definitions shared across the analysis engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Languages with a bound hyphenation dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// American English (`en-us` patterns).
    #[default]
    #[serde(rename = "EN")]
    English,
    /// German, 1996 orthography (`de-1996` patterns).
    #[serde(rename = "DE")]
    German,
}

impl Language {
    /// Returns all supported languages in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::English, Self::German]
    }

    /// Returns the short language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "EN",
            Self::German => "DE",
        }
    }

    /// Returns the human-readable name of this language.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::German => "German",
        }
    }

    /// Cycle to the next language (editor language toggle).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::English => Self::German,
            Self::German => Self::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Self::English),
            "de" | "de-de" | "german" | "deutsch" => Ok(Self::German),
            _ => Err(Error::UnsupportedLanguage(s.to_string())),
        }
    }
}

/// Classification of a single token within a content line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A run of whitespace, kept only so the line can be reproduced.
    Whitespace,
    /// Anything else: words, punctuation, zero-length split artifacts.
    Word,
}
