use std::collections::HashMap;

/// Locale codes with embedded translation tables
pub const SUPPORTED_LOCALES: &[&str] = &["ar", "es", "hi", "zh"];

/// Localized term lookup injected into rendering.
///
/// English terms are built in; for the supported locales an embedded
/// locale-keyed JSON table overrides them key by key. Unknown locale codes
/// and missing keys fall back to English.
pub struct Localizer {
    locale: String,
    terms: HashMap<String, String>,
}

fn english_terms() -> HashMap<String, String> {
    [
        ("title", "Title"),
        ("username", "Username"),
        ("contributions", "Contributions"),
        ("loading", "Loading..."),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn embedded_table(locale: &str) -> Option<&'static str> {
    match locale {
        "ar" => Some(include_str!("../locales/contributor-cards.ar.json")),
        "es" => Some(include_str!("../locales/contributor-cards.es.json")),
        "hi" => Some(include_str!("../locales/contributor-cards.hi.json")),
        "zh" => Some(include_str!("../locales/contributor-cards.zh.json")),
        _ => None,
    }
}

impl Localizer {
    /// English-only localizer (the default)
    pub fn english() -> Self {
        Self {
            locale: "en".to_string(),
            terms: english_terms(),
        }
    }

    /// Localizer for the given code, falling back to English when the code
    /// is unknown or a key is untranslated
    pub fn for_locale(code: &str) -> Self {
        let mut terms = english_terms();

        if let Some(raw) = embedded_table(code) {
            // Tables ship inside the binary; a parse failure here is a
            // packaging bug, but we still degrade to English rather than die.
            if let Ok(table) = serde_json::from_str::<HashMap<String, String>>(raw) {
                terms.extend(table);
            }
        }

        Self {
            locale: code.to_string(),
            terms,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a term, falling back to the key itself if nothing matches
    pub fn term<'a>(&'a self, key: &'a str) -> &'a str {
        self.terms.get(key).map(String::as_str).unwrap_or(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_terms_are_built_in() {
        let l = Localizer::english();
        assert_eq!(l.term("username"), "Username");
        assert_eq!(l.term("loading"), "Loading...");
    }

    #[test]
    fn every_supported_locale_parses_and_translates_the_title() {
        for code in SUPPORTED_LOCALES {
            let l = Localizer::for_locale(code);
            assert_eq!(l.locale(), *code);
            assert_ne!(l.term("title"), "Title", "locale {} missing title", code);
        }
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let l = Localizer::for_locale("tlh");
        assert_eq!(l.term("title"), "Title");
        assert_eq!(l.term("contributions"), "Contributions");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key_itself() {
        let l = Localizer::english();
        assert_eq!(l.term("nonexistent"), "nonexistent");
    }
}
