//! The immutable configuration object handed to the engine.
//!
//! All tables are assembled once through [`ConfigBuilder`] and are read-only
//! afterwards; the engine borrows a `&TranslitConfig` for every call.

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::{debug, debug_span};

use crate::case::{CaseError, CaseScenario, CaseTable, CaseTransform, ScenarioTable};
use crate::data::DataSet;
use crate::disambiguate::VowelSet;
use crate::language::{LanguageDescriptor, Script};
use crate::mapping::{MappingError, MappingRow, MappingStore};
use crate::rows::{self, RowError};

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Row(#[from] RowError),
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error(transparent)]
    Mapping(#[from] MappingError),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("vowel list is empty")]
    NoVowels,
    #[error("no languages configured")]
    NoLanguages,
    #[error("language {0:?} declared twice")]
    DuplicateLanguage(String),
    #[error("{script} mapping rows reference undeclared language {language:?}")]
    UndeclaredLanguage { script: Script, language: String },
    #[error("unknown language {0:?}")]
    UnknownLanguage(String),
}

#[derive(Debug, Clone)]
pub struct TranslitConfig {
    cases: CaseTable,
    scenarios: ScenarioTable,
    store: MappingStore,
    vowels: VowelSet,
    languages: Vec<LanguageDescriptor>,
}

impl TranslitConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration from the data files embedded in this crate.
    pub fn builtin() -> Result<Self, BuildError> {
        Self::from_data_set(&DataSet::builtin())
    }

    pub fn from_data_set(data: &DataSet) -> Result<Self, BuildError> {
        ConfigBuilder::from_data_set(data)?.build()
    }

    pub fn cases(&self) -> &CaseTable {
        &self.cases
    }

    pub fn scenarios(&self) -> &ScenarioTable {
        &self.scenarios
    }

    pub fn store(&self) -> &MappingStore {
        &self.store
    }

    pub fn vowels(&self) -> &VowelSet {
        &self.vowels
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn language(&self, id: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|l| l.id == id)
    }

    /// 1-based position, as presented in the selection menu.
    pub fn language_by_index(&self, choice: usize) -> Option<&LanguageDescriptor> {
        choice.checked_sub(1).and_then(|i| self.languages.get(i))
    }

    /// Reject descriptors this configuration was not built with.
    pub fn validate_language(&self, language: &LanguageDescriptor) -> Result<(), BuildError> {
        match self.language(&language.id) {
            Some(known) if known == language => Ok(()),
            _ => Err(BuildError::UnknownLanguage(language.id.clone())),
        }
    }
}

/// Collects row data; [`build`](ConfigBuilder::build) validates everything at
/// once and produces the immutable [`TranslitConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    case_pairs: Vec<(char, char)>,
    scenarios: Vec<(CaseScenario, CaseTransform)>,
    mappings: Vec<(Script, MappingRow)>,
    vowels: Vec<char>,
    languages: Vec<LanguageDescriptor>,
}

impl ConfigBuilder {
    /// Parse every row source of `data`.
    pub fn from_data_set(data: &DataSet) -> Result<Self, BuildError> {
        use crate::data::files;

        let builder = Self::default()
            .case_pairs(rows::parse_case_pairs(files::UPPER_LOWER, &data.upper_lower)?)
            .scenarios(rows::parse_scenarios(files::CASE_SCENARIOS, &data.case_scenarios)?)
            .mappings(
                Script::Cyrillic,
                rows::parse_default_rows(files::CYRILLIC_DEFAULT, &data.cyrillic_default)?,
            )
            .mappings(
                Script::Cyrillic,
                rows::parse_language_rows(files::CYRILLIC_SPECIFIC, &data.cyrillic_specific)?,
            )
            .mappings(
                Script::Latin,
                rows::parse_language_rows(files::LATIN_SPECIFIC, &data.latin_specific)?,
            )
            .vowels(rows::parse_vowels(files::VOWELS, &data.vowels)?)
            .languages(rows::parse_languages(files::LANGUAGES, &data.languages)?);
        Ok(builder)
    }

    pub fn case_pairs(mut self, pairs: impl IntoIterator<Item = (char, char)>) -> Self {
        self.case_pairs.extend(pairs);
        self
    }

    pub fn scenarios(
        mut self,
        rows: impl IntoIterator<Item = (CaseScenario, CaseTransform)>,
    ) -> Self {
        self.scenarios.extend(rows);
        self
    }

    pub fn mapping(mut self, script: Script, row: MappingRow) -> Self {
        self.mappings.push((script, row));
        self
    }

    pub fn mappings(mut self, script: Script, rows: impl IntoIterator<Item = MappingRow>) -> Self {
        self.mappings.extend(rows.into_iter().map(|r| (script, r)));
        self
    }

    pub fn vowels(mut self, vowels: impl IntoIterator<Item = char>) -> Self {
        self.vowels.extend(vowels);
        self
    }

    pub fn language(mut self, language: LanguageDescriptor) -> Self {
        self.languages.push(language);
        self
    }

    pub fn languages(mut self, languages: impl IntoIterator<Item = LanguageDescriptor>) -> Self {
        self.languages.extend(languages);
        self
    }

    pub fn build(self) -> Result<TranslitConfig, BuildError> {
        let _span = debug_span!("build_config").entered();

        let cases = CaseTable::from_pairs(self.case_pairs)?;
        let scenarios = ScenarioTable::from_rows(self.scenarios)?;

        if self.vowels.is_empty() {
            return Err(BuildError::NoVowels);
        }
        let vowels = VowelSet::new(self.vowels);

        if self.languages.is_empty() {
            return Err(BuildError::NoLanguages);
        }
        let mut declared = HashSet::new();
        for language in &self.languages {
            if !declared.insert(language.id.as_str()) {
                return Err(BuildError::DuplicateLanguage(language.id.clone()));
            }
        }
        for (script, row) in &self.mappings {
            if let Some(language) = row.languages.iter().find(|l| !declared.contains(l.as_str())) {
                return Err(BuildError::UndeclaredLanguage {
                    script: *script,
                    language: language.clone(),
                });
            }
        }

        let store = {
            let _span = debug_span!("build_mapping_store", rows = self.mappings.len()).entered();
            let mut store = MappingStore::builder(&cases);
            for (script, row) in self.mappings {
                store = store.rows(script, [row])?;
            }
            store.build()
        };

        debug!(
            case_pairs = cases.len(),
            vowels = vowels.len(),
            languages = self.languages.len()
        );
        Ok(TranslitConfig {
            cases,
            scenarios,
            store,
            vowels,
            languages: self.languages,
        })
    }
}
