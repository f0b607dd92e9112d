//! Save language byte.

use std::fmt;
use std::str::FromStr;

use crate::error::HeaderError;

/// Language a save was written in, as stored in the directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Language {
    /// Japanese.
    Japanese = 0,
    /// English.
    English = 1,
    /// French.
    French = 2,
    /// German.
    German = 3,
    /// Spanish.
    Spanish = 4,
    /// Italian.
    Italian = 5,
}

impl Language {
    /// All languages in byte order.
    pub const ALL: [Language; 6] = [
        Language::Japanese,
        Language::English,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Italian,
    ];

    /// Name used by Saturn save tools (`"Francais"`, `"Deutsch"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Language::Japanese => "Japanese",
            Language::English => "English",
            Language::French => "Francais",
            Language::German => "Deutsch",
            Language::Spanish => "Espanol",
            Language::Italian => "Italiano",
        }
    }

    /// Raw byte value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Language {
    type Error = HeaderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Language::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(HeaderError::UnknownLanguage { value })
    }
}

impl FromStr for Language {
    type Err = HeaderError;

    /// Accepts the tool spellings and English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "japanese" => Ok(Language::Japanese),
            "english" => Ok(Language::English),
            "francais" | "french" => Ok(Language::French),
            "deutsch" | "german" => Ok(Language::German),
            "espanol" | "spanish" => Ok(Language::Spanish),
            "italiano" | "italian" => Ok(Language::Italian),
            _ => Err(HeaderError::UnknownLanguageName {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
