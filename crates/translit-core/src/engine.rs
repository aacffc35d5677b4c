//! Greedy longest-match transliteration.
//!
//! The scan walks the source left to right. At each position it tries token
//! lengths from the global maximum down to 1 and commits the first hit;
//! positions with no hit at any length are copied verbatim. Nothing before
//! the cursor is ever revisited.

use tracing::{debug, debug_span};

use crate::case::{apply_casing, CaseError};
use crate::config::{BuildError, TranslitConfig};
use crate::disambiguate;
use crate::language::{LanguageDescriptor, Script};
use crate::mapping::MappingError;

#[derive(Debug, thiserror::Error)]
pub enum TranslitError {
    #[error(transparent)]
    Config(#[from] BuildError),
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// A committed match: the re-cased replacement and how many source units
/// it consumed.
struct Match {
    text: String,
    len: usize,
}

/// Transliterate `source` for `language` using the tables in `config`.
pub fn transliterate(
    config: &TranslitConfig,
    source: &str,
    language: &LanguageDescriptor,
) -> Result<String, TranslitError> {
    config.validate_language(language)?;

    let units: Vec<char> = source.chars().collect();
    let _span = debug_span!(
        "transliterate",
        language = language.id.as_str(),
        units = units.len()
    )
    .entered();

    let mut output = String::with_capacity(source.len());
    let mut index = 0;
    let mut matches = 0usize;
    while index < units.len() {
        match longest_match(config, &units, index, language)? {
            Some(m) => {
                output.push_str(&m.text);
                index += m.len;
                matches += 1;
            }
            None => {
                output.push(units[index]);
                index += 1;
            }
        }
    }

    debug!(matches, output_bytes = output.len());
    Ok(output)
}

fn longest_match(
    config: &TranslitConfig,
    units: &[char],
    index: usize,
    language: &LanguageDescriptor,
) -> Result<Option<Match>, TranslitError> {
    let store = config.store();
    let cases = config.cases();
    // Lengths past the end of the text clip to what remains.
    let longest = store.max_token_length().min(units.len() - index);

    for len in (1..=longest).rev() {
        let original: String = units[index..index + len].iter().collect();
        let key = cases.to_lowercase(&original);

        let hit = match language.script {
            Script::Cyrillic => store.lookup(Script::Cyrillic, len, Some(language.id.as_str()), &key)?,
            // Latin text is only respelled by language tables, never a default.
            Script::Latin => store.lookup_specific(Script::Latin, len, &language.id, &key)?,
        };
        let Some(raw) = hit else {
            continue;
        };

        let resolved = disambiguate::resolve(raw, index, len, units, cases, config.vowels());
        let text = apply_casing(cases, config.scenarios(), &original, resolved)?;
        return Ok(Some(Match { text, len }));
    }
    Ok(None)
}
