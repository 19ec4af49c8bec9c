//! Localization for Brisa.
//!
//! Each language ships as a TOML table embedded in the binary; strings are
//! addressed by dotted identifiers (`weather.cloud_cover.label`). Lookups
//! fall back per key to the fallback language, and to an empty string if
//! the key is absent there too. Only a missing or unparseable fallback
//! table is fatal.

use thiserror::Error;
use toml::{Table, Value};

/// Language every lookup falls back to.
pub const FALLBACK_LANG: &str = "en";

/// Key under which a language file declares its own display name.
const SELF_LANGUAGE_KEY: &str = "self.language";

/// All shipped languages, code to TOML source.
const LANGUAGES: &[(&str, &str)] = &[
    ("en", include_str!("../languages/en.toml")),
    ("es", include_str!("../languages/es.toml")),
];

#[derive(Debug, Error)]
pub enum LanguageError {
    #[error("no fallback language available")]
    MissingFallback,

    #[error("malformed language file {code:?}: {source}")]
    Malformed {
        code: String,
        source: toml::de::Error,
    },
}

/// Code and display name of every shipped language, in shipping order.
pub fn language_map() -> Vec<(String, String)> {
    LANGUAGES
        .iter()
        .filter_map(|(code, source)| {
            let table: Table = toml::from_str(source).ok()?;
            let name = lookup(&table, SELF_LANGUAGE_KEY)?;
            Some(((*code).to_string(), name.to_string()))
        })
        .collect()
}

/// Resolves dotted identifiers against a main language with a fallback.
#[derive(Debug, Clone)]
pub struct Localizer {
    main: Option<Table>,
    main_code: String,
    fallback: Table,
}

impl Localizer {
    /// Install `main` as the active language. An unknown code is
    /// tolerated with a warning; a missing or unparseable fallback table
    /// is a startup-fatal error.
    pub fn install(main: &str) -> Result<Self, LanguageError> {
        let fallback_src = LANGUAGES
            .iter()
            .find(|(code, _)| *code == FALLBACK_LANG)
            .map(|(_, source)| *source)
            .ok_or(LanguageError::MissingFallback)?;

        let fallback: Table =
            toml::from_str(fallback_src).map_err(|source| LanguageError::Malformed {
                code: FALLBACK_LANG.to_string(),
                source,
            })?;

        let main_table = LANGUAGES
            .iter()
            .find(|(code, _)| *code == main)
            .and_then(|(code, source)| match toml::from_str::<Table>(source) {
                Ok(table) => Some(table),
                Err(err) => {
                    tracing::warn!(code, %err, "language file is malformed, using fallback");
                    None
                }
            });

        if main_table.is_none() && main != FALLBACK_LANG {
            tracing::warn!(
                requested = main,
                fallback = FALLBACK_LANG,
                "requested language is not available, falling back"
            );
        }

        Ok(Self {
            main: main_table,
            main_code: main.to_string(),
            fallback,
        })
    }

    /// Code of the language lookups are served from first.
    pub fn main_code(&self) -> &str {
        &self.main_code
    }

    /// Whether `identifier` resolves in the main language itself,
    /// without consulting the fallback.
    pub fn has(&self, identifier: &str) -> bool {
        self.main
            .as_ref()
            .is_some_and(|main| lookup(main, identifier).is_some())
    }

    /// Localized value of `identifier`, falling back per key and finally
    /// to an empty string. Never fails.
    pub fn get(&self, identifier: &str) -> String {
        if let Some(main) = &self.main {
            if let Some(text) = lookup(main, identifier) {
                return text.to_string();
            }
            tracing::warn!(
                identifier,
                lang = self.main_code,
                "no translation in main language, falling back"
            );
        }

        match lookup(&self.fallback, identifier) {
            Some(text) => text.to_string(),
            None => {
                tracing::error!(identifier, "no translation available, using empty string");
                String::new()
            }
        }
    }
}

/// Walks `identifier` segment by segment; only a string leaf counts as a
/// translation.
fn lookup<'a>(table: &'a Table, identifier: &str) -> Option<&'a str> {
    let mut current = table;
    let mut segments = identifier.split('.').peekable();

    while let Some(segment) = segments.next() {
        let value = current.get(segment)?;

        if segments.peek().is_none() {
            return value.as_str();
        }

        match value {
            Value::Table(next) => current = next,
            _ => return None,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn every_shipped_language_parses_and_names_itself() {
        let map = language_map();
        assert_eq!(map.len(), LANGUAGES.len());
        assert!(map.iter().any(|(code, name)| code == "en" && name == "English"));
        assert!(map.iter().any(|(code, name)| code == "es" && name == "Español"));
    }

    #[test]
    fn dotted_lookup_resolves_nested_keys() {
        let localizer = Localizer::install("en").unwrap();
        assert_eq!(localizer.get("weather.cloud_cover.overcast"), "Overcast");
        assert_eq!(localizer.get("app.yes"), "Yes");
    }

    #[test]
    fn main_language_takes_precedence() {
        let localizer = Localizer::install("es").unwrap();
        assert_eq!(localizer.get("app.yes"), "Sí");
    }

    #[test]
    fn unknown_language_falls_back_entirely() {
        let localizer = Localizer::install("xx").unwrap();
        assert_eq!(localizer.main_code(), "xx");
        assert_eq!(localizer.get("app.no"), "No");
    }

    #[test]
    fn missing_key_degrades_to_empty_string() {
        let localizer = Localizer::install("en").unwrap();
        assert_eq!(localizer.get("weather.not_a_real_key"), "");
        assert_eq!(localizer.get("nor.is.this"), "");
    }

    #[test]
    fn table_leaf_is_not_a_translation() {
        let localizer = Localizer::install("en").unwrap();
        // "weather.cloud_cover" is a table, not a string.
        assert_eq!(localizer.get("weather.cloud_cover"), "");
    }
}
