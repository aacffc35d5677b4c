//! Cyrillic/Latin transliteration for Slavic languages.
//!
//! The engine lives in `translit-core`; this crate re-exports it and owns
//! process-level setup such as tracing.

pub mod trace_init;

pub use translit_core::{
    case, config, data, disambiguate, engine, language, mapping, rows, settings,
};
pub use translit_core::{
    transliterate, BuildError, ConfigBuilder, DataSet, LanguageDescriptor, Script,
    TranslitConfig, TranslitError,
};
