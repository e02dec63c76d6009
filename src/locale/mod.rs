//! Etiquetas localizadas de los documentos.
//!
//! Las tablas son estáticas: idioma exacto → inglés → la propia clave.

mod translations;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use translations::{ARABIC, ENGLISH, TURKISH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
    Turkish,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Arabic, Language::Turkish];

    /// Acepta el nombre del idioma o su código ISO, sin distinguir mayúsculas.
    pub fn parse(selector: &str) -> Option<Language> {
        match selector.trim().to_lowercase().as_str() {
            "english" | "en" => Some(Language::English),
            "arabic" | "ar" => Some(Language::Arabic),
            "turkish" | "tr" => Some(Language::Turkish),
            _ => None,
        }
    }

    /// Como `parse`, pero cae en inglés ante un selector desconocido.
    pub fn from_selector(selector: &str) -> Language {
        Language::parse(selector).unwrap_or_else(|| {
            tracing::warn!("Idioma desconocido '{}', usando inglés", selector);
            Language::English
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::Turkish => "Turkish",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::Turkish => "tr",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }

    fn table(&self) -> &'static translations::Table {
        match self {
            Language::English => &*ENGLISH,
            Language::Arabic => &*ARABIC,
            Language::Turkish => &*TURKISH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Cualquier selector que no sea texto también cae en inglés.
        Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(raw)) => Language::from_selector(&raw),
            None => Language::English,
            Some(other) => {
                tracing::warn!("Selector de idioma no válido {}, usando inglés", other);
                Language::English
            }
        })
    }
}

/// Busca `key` para el selector de idioma dado. Nunca falla.
pub fn lookup(key: &str, language: &str) -> String {
    let language = Language::parse(language).unwrap_or_default();
    Translator::new(language).t(key)
}

/// Traductor ligado a un idioma, para búsquedas repetidas.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Translator { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: &str) -> String {
        self.language
            .table()
            .get(key)
            .or_else(|| ENGLISH.get(key))
            .map(|label| label.to_string())
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse_is_case_insensitive() {
        assert_eq!(Language::parse("ARABIC"), Some(Language::Arabic));
        assert_eq!(Language::parse("Turkish"), Some(Language::Turkish));
        assert_eq!(Language::parse("tr"), Some(Language::Turkish));
        assert_eq!(Language::parse("elvish"), None);
        assert_eq!(Language::from_selector("elvish"), Language::English);
    }

    #[test]
    fn test_lookup_exact_language() {
        assert_eq!(lookup("proposal.title", "turkish"), "Seyahat Teklifi");
        assert_eq!(lookup("proposal.title", "english"), "Travel Proposal");
    }

    #[test]
    fn test_lookup_unknown_key_returns_key() {
        assert_eq!(lookup("nonexistent.key", "elvish"), "nonexistent.key");
        assert_eq!(lookup("nonexistent.key", "arabic"), "nonexistent.key");
    }

    #[test]
    fn test_lookup_unknown_language_uses_english() {
        assert_eq!(lookup("common.not_available", "klingon"), "N/A");
    }

    #[test]
    fn test_every_key_has_english_label() {
        for language in Language::ALL {
            for key in language.table().keys() {
                assert!(ENGLISH.contains_key(key), "{} missing in English table", key);
            }
        }
    }

    #[test]
    fn test_language_deserializes_with_fallback() {
        let lang: Language = serde_json::from_str("\"Arabic\"").unwrap();
        assert_eq!(lang, Language::Arabic);
        let lang: Language = serde_json::from_str("\"french\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_non_string_selector_falls_back_to_english() {
        for raw in ["null", "7", "true", "[\"ar\"]", "{\"code\": \"tr\"}"] {
            let lang: Language = serde_json::from_str(raw).unwrap();
            assert_eq!(lang, Language::English, "selector {}", raw);
        }
    }
}
