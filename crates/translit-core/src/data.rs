//! Row sources, either embedded in the crate or read from a directory.

use std::fs;
use std::path::Path;

use crate::config::BuildError;

/// File names shared by the embedded data and external data directories.
pub mod files {
    pub const CYRILLIC_DEFAULT: &str = "cyrillic_default.txt";
    pub const CYRILLIC_SPECIFIC: &str = "language_specific_cyrillic.txt";
    pub const LATIN_SPECIFIC: &str = "language_specific_latin.txt";
    pub const UPPER_LOWER: &str = "uppercase_lowercase.txt";
    pub const CASE_SCENARIOS: &str = "case_scenarios.txt";
    pub const VOWELS: &str = "vowels.txt";
    pub const LANGUAGES: &str = "languages.txt";
}

/// Raw contents of the seven row sources.
#[derive(Debug, Clone)]
pub struct DataSet {
    pub cyrillic_default: String,
    pub cyrillic_specific: String,
    pub latin_specific: String,
    pub upper_lower: String,
    pub case_scenarios: String,
    pub vowels: String,
    pub languages: String,
}

impl DataSet {
    pub fn builtin() -> Self {
        Self {
            cyrillic_default: include_str!("../data/cyrillic_default.txt").to_string(),
            cyrillic_specific: include_str!("../data/language_specific_cyrillic.txt").to_string(),
            latin_specific: include_str!("../data/language_specific_latin.txt").to_string(),
            upper_lower: include_str!("../data/uppercase_lowercase.txt").to_string(),
            case_scenarios: include_str!("../data/case_scenarios.txt").to_string(),
            vowels: include_str!("../data/vowels.txt").to_string(),
            languages: include_str!("../data/languages.txt").to_string(),
        }
    }

    /// Read all sources from `dir`. Every file must exist.
    pub fn from_dir(dir: &Path) -> Result<Self, BuildError> {
        let read = |name: &str| {
            let path = dir.join(name);
            fs::read_to_string(&path).map_err(|source| BuildError::Io { path, source })
        };
        Ok(Self {
            cyrillic_default: read(files::CYRILLIC_DEFAULT)?,
            cyrillic_specific: read(files::CYRILLIC_SPECIFIC)?,
            latin_specific: read(files::LATIN_SPECIFIC)?,
            upper_lower: read(files::UPPER_LOWER)?,
            case_scenarios: read(files::CASE_SCENARIOS)?,
            vowels: read(files::VOWELS)?,
            languages: read(files::LANGUAGES)?,
        })
    }

    /// Write all sources into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: &Path) -> std::io::Result<()> {
        fs::create_dir_all(dir)?;
        for (name, content) in [
            (files::CYRILLIC_DEFAULT, &self.cyrillic_default),
            (files::CYRILLIC_SPECIFIC, &self.cyrillic_specific),
            (files::LATIN_SPECIFIC, &self.latin_specific),
            (files::UPPER_LOWER, &self.upper_lower),
            (files::CASE_SCENARIOS, &self.case_scenarios),
            (files::VOWELS, &self.vowels),
            (files::LANGUAGES, &self.languages),
        ] {
            fs::write(dir.join(name), content)?;
        }
        Ok(())
    }
}
