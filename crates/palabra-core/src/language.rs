//! Language identification for translate requests.
//!
//! Direction resolution is a fixed heuristic, not linguistic analysis:
//! a text counts as Spanish if it carries a Spanish diacritic or one of
//! a small list of common Spanish words, otherwise English. The guess is
//! a pure function over the input text so callers can swap it out
//! without touching the rest of the service.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PalabraError;

/// Languages a word pair can be stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Es,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Es => "es",
            Lang::En => "en",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = PalabraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Lang::Es),
            "en" => Ok(Lang::En),
            other => Err(PalabraError::Validation(format!(
                "Invalid language: {} (expected es or en)",
                other
            ))),
        }
    }
}

/// Requested translation direction.
///
/// Only the two literal forms force a source language; anything else,
/// including an absent value, falls back to automatic detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    EsEn,
    EnEs,
    Auto,
}

impl Direction {
    /// Parse an optional direction value. Unknown values mean `Auto`.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("es-en") => Direction::EsEn,
            Some("en-es") => Direction::EnEs,
            _ => Direction::Auto,
        }
    }

    /// The source language this direction forces, if any.
    pub fn source_lang(&self) -> Option<Lang> {
        match self {
            Direction::EsEn => Some(Lang::Es),
            Direction::EnEs => Some(Lang::En),
            Direction::Auto => None,
        }
    }
}

// Any Spanish diacritic, or one of the fixed word list as a whole word,
// either case.
static SPANISH_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[áéíóúñü]|\b(?:el|la|de|y|no|sí|hola|gracias)\b")
        .expect("Spanish marker pattern is valid")
});

/// Guess the source language of `text`.
///
/// Returns [`Lang::Es`] when the text contains a Spanish diacritic
/// (`á é í ó ú ñ ü`, either case) or one of `el, la, de, y, no, sí,
/// hola, gracias` as a whole word (either case). Returns [`Lang::En`]
/// otherwise, including for empty input.
pub fn guess_lang(text: &str) -> Lang {
    if SPANISH_MARKERS.is_match(text) {
        Lang::Es
    } else {
        Lang::En
    }
}

/// Resolve the lookup language for a translate request: a forced
/// direction wins, otherwise the text is inspected.
pub fn resolve_source_lang(direction: Direction, text: &str) -> Lang {
    direction.source_lang().unwrap_or_else(|| guess_lang(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_round_trip() {
        assert_eq!("es".parse::<Lang>().expect("es parses"), Lang::Es);
        assert_eq!("en".parse::<Lang>().expect("en parses"), Lang::En);
        assert_eq!(Lang::Es.to_string(), "es");
        assert_eq!(Lang::En.as_str(), "en");
        assert!("fr".parse::<Lang>().is_err());
        assert!("ES".parse::<Lang>().is_err());
    }

    #[test]
    fn test_lang_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Lang::Es).expect("serializes"),
            "\"es\""
        );
        let lang: Lang = serde_json::from_str("\"en\"").expect("deserializes");
        assert_eq!(lang, Lang::En);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse(Some("es-en")), Direction::EsEn);
        assert_eq!(Direction::parse(Some("en-es")), Direction::EnEs);
        assert_eq!(Direction::parse(Some("auto")), Direction::Auto);
        assert_eq!(Direction::parse(Some("en->es")), Direction::Auto);
        assert_eq!(Direction::parse(None), Direction::Auto);
    }

    #[test]
    fn test_guess_lang_stop_words() {
        assert_eq!(guess_lang("hola"), Lang::Es);
        assert_eq!(guess_lang("gracias por todo"), Lang::Es);
        assert_eq!(guess_lang("la casa"), Lang::Es);
        assert_eq!(guess_lang("EL gato"), Lang::Es);
        assert_eq!(guess_lang("hola!"), Lang::Es);
    }

    #[test]
    fn test_guess_lang_diacritics() {
        assert_eq!(guess_lang("adiós"), Lang::Es);
        assert_eq!(guess_lang("Él"), Lang::Es);
        assert_eq!(guess_lang("mañana"), Lang::Es);
        assert_eq!(guess_lang("pingüino"), Lang::Es);
    }

    #[test]
    fn test_guess_lang_defaults_to_english() {
        assert_eq!(guess_lang("house"), Lang::En);
        assert_eq!(guess_lang("si"), Lang::En);
        assert_eq!(guess_lang(""), Lang::En);
        // Embedded fragments are not whole words.
        assert_eq!(guess_lang("happy"), Lang::En);
        assert_eq!(guess_lang("caramelo"), Lang::En);
        assert_eq!(guess_lang("noise"), Lang::En);
    }

    #[test]
    fn test_resolve_source_lang() {
        assert_eq!(resolve_source_lang(Direction::EnEs, "sí"), Lang::En);
        assert_eq!(resolve_source_lang(Direction::EsEn, "house"), Lang::Es);
        assert_eq!(resolve_source_lang(Direction::Auto, "hola"), Lang::Es);
        assert_eq!(resolve_source_lang(Direction::Auto, "house"), Lang::En);
    }
}
