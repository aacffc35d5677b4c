pub mod case;
pub mod config;
pub mod data;
pub mod disambiguate;
pub mod engine;
pub mod language;
pub mod mapping;
pub mod rows;
pub mod settings;

#[cfg(test)]
mod tests;

pub use config::{BuildError, ConfigBuilder, TranslitConfig};
pub use data::DataSet;
pub use engine::{transliterate, TranslitError};
pub use language::{LanguageDescriptor, Script};
