//! End-to-end runs over the embedded data set.

mod cyrillic;
mod latin;

use crate::{transliterate, TranslitConfig};

pub(super) fn convert(language: &str, source: &str) -> String {
    let config = TranslitConfig::builtin().unwrap();
    let language = config.language(language).unwrap();
    transliterate(&config, source, language).unwrap()
}

#[test]
fn every_language_passes_neutral_text_through() {
    let config = TranslitConfig::builtin().unwrap();
    for language in config.languages() {
        let out = transliterate(&config, "1984, 42 % (ok?)", language).unwrap();
        assert_eq!(out, "1984, 42 % (ok?)", "language {}", language.id);
    }
}

#[test]
fn menu_order_follows_languages_file() {
    let config = TranslitConfig::builtin().unwrap();
    assert_eq!(config.language_by_index(1).unwrap().id, "russian");
    let ids: Vec<&str> = config.languages().iter().map(|l| l.id.as_str()).collect();
    assert!(ids.contains(&"polish"));
    assert!(ids.contains(&"serbian"));
}
