use serde::{Deserialize, Serialize};

/// Languages recognized by the application.
///
/// The set is fixed; codes are short ISO 639-1 identifiers and never contain
/// the `:` used as the cache key delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Pa,
    Bn,
    Ta,
    Te,
    Mr,
    Gu,
    Fr,
}

impl Language {
    /// The language code sent over the wire (e.g. "en", "hi").
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Pa => "pa",
            Self::Bn => "bn",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Mr => "mr",
            Self::Gu => "gu",
            Self::Fr => "fr",
        }
    }

    /// Parse a language code. Returns `None` for codes outside the fixed set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "hi" => Some(Self::Hi),
            "pa" => Some(Self::Pa),
            "bn" => Some(Self::Bn),
            "ta" => Some(Self::Ta),
            "te" => Some(Self::Te),
            "mr" => Some(Self::Mr),
            "gu" => Some(Self::Gu),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    /// Native display name for language pickers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::Pa => "ਪੰਜਾਬੀ",
            Self::Bn => "বাংলা",
            Self::Ta => "தமிழ்",
            Self::Te => "తెలుగు",
            Self::Mr => "मराठी",
            Self::Gu => "ગુજરાતી",
            Self::Fr => "Français",
        }
    }

    /// All supported languages, in picker order.
    pub fn all() -> &'static [Language] {
        &[
            Self::En,
            Self::Hi,
            Self::Pa,
            Self::Bn,
            Self::Ta,
            Self::Te,
            Self::Mr,
            Self::Gu,
            Self::Fr,
        ]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_codes_never_contain_delimiter() {
        for lang in Language::all() {
            assert!(!lang.code().contains(':'));
        }
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        let json = serde_json::to_string(&Language::Hi).unwrap();
        assert_eq!(json, "\"hi\"");
        let lang: Language = serde_json::from_str("\"pa\"").unwrap();
        assert_eq!(lang, Language::Pa);
    }
}
