//! Substitution tables for both scripts, indexed by token length.

mod table;

use tracing::debug;

use crate::case::CaseTable;
use crate::language::Script;

pub use table::ScriptTables;
use table::Insert;

/// One mapping row: `from to [lang...]`. No languages means the row belongs
/// to the script default table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub from: String,
    pub to: String,
    pub languages: Vec<String>,
}

impl MappingRow {
    pub fn default_entry(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            languages: Vec::new(),
        }
    }

    pub fn for_languages<I, S>(from: impl Into<String>, to: impl Into<String>, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            from: from.into(),
            to: to.into(),
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("{script} mapping with empty source token (target {to:?})")]
    EmptyFrom { script: Script, to: String },
    #[error("{script} mapping for {from:?} has an empty replacement")]
    EmptyTo { script: Script, from: String },
    #[error("duplicate {script} default mapping for {from:?}")]
    DuplicateDefault { script: Script, from: String },
    #[error("duplicate {script} mapping for {from:?} in language {language}")]
    DuplicateLanguage {
        script: Script,
        language: String,
        from: String,
    },
    #[error("token length must be at least 1")]
    ZeroLength,
}

/// Read-only tables for both scripts plus the global scan bound.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    cyrillic: ScriptTables,
    latin: ScriptTables,
    max_token_length: usize,
}

impl MappingStore {
    pub fn builder(cases: &CaseTable) -> MappingStoreBuilder<'_> {
        MappingStoreBuilder {
            cases,
            store: MappingStore::default(),
        }
    }

    pub fn tables(&self, script: Script) -> &ScriptTables {
        match script {
            Script::Cyrillic => &self.cyrillic,
            Script::Latin => &self.latin,
        }
    }

    /// Look up a lowercased token: language table first, then the script
    /// default. Lengths never registered simply miss.
    pub fn lookup(
        &self,
        script: Script,
        length: usize,
        language: Option<&str>,
        token: &str,
    ) -> Result<Option<&str>, MappingError> {
        if length == 0 {
            return Err(MappingError::ZeroLength);
        }
        Ok(self.tables(script).lookup(length, language, token))
    }

    /// Like [`lookup`](Self::lookup) but never falls back to the default table.
    pub fn lookup_specific(
        &self,
        script: Script,
        length: usize,
        language: &str,
        token: &str,
    ) -> Result<Option<&str>, MappingError> {
        if length == 0 {
            return Err(MappingError::ZeroLength);
        }
        Ok(self.tables(script).lookup_specific(length, language, token))
    }

    /// Longest token across both scripts; bounds the scan window.
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }
}

pub struct MappingStoreBuilder<'a> {
    cases: &'a CaseTable,
    store: MappingStore,
}

impl MappingStoreBuilder<'_> {
    /// Register rows for `script`. Source tokens are lowercased through the
    /// case table before they are stored.
    pub fn rows<I>(mut self, script: Script, rows: I) -> Result<Self, MappingError>
    where
        I: IntoIterator<Item = MappingRow>,
    {
        for row in rows {
            self.insert(script, row)?;
        }
        Ok(self)
    }

    fn insert(&mut self, script: Script, row: MappingRow) -> Result<(), MappingError> {
        if row.from.is_empty() {
            return Err(MappingError::EmptyFrom { script, to: row.to });
        }
        if row.to.is_empty() {
            return Err(MappingError::EmptyTo {
                script,
                from: row.from,
            });
        }

        let from = self.cases.to_lowercase(&row.from);
        let length = from.chars().count();
        let tables = match script {
            Script::Cyrillic => &mut self.store.cyrillic,
            Script::Latin => &mut self.store.latin,
        };

        if row.languages.is_empty() {
            if tables.insert_default(length, from.clone(), row.to) == Insert::Duplicate {
                return Err(MappingError::DuplicateDefault { script, from });
            }
        } else {
            for language in &row.languages {
                if tables.insert_language(length, language, from.clone(), row.to.clone())
                    == Insert::Duplicate
                {
                    return Err(MappingError::DuplicateLanguage {
                        script,
                        language: language.clone(),
                        from,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn build(self) -> MappingStore {
        let mut store = self.store;
        store.max_token_length = store
            .cyrillic
            .max_token_length()
            .max(store.latin.max_token_length());
        debug!(
            cyrillic_default = store.cyrillic.default_count(),
            cyrillic_specific = store.cyrillic.language_count(),
            latin_specific = store.latin.language_count(),
            max_token_length = store.max_token_length
        );
        store
    }
}
