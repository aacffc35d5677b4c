use std::collections::{BTreeMap, HashMap};

/// Tables for one token length: the script default plus per-language overrides.
#[derive(Debug, Clone, Default)]
struct LengthTables {
    defaults: HashMap<String, String>,
    by_language: HashMap<String, HashMap<String, String>>,
}

/// All substitution tables of one script, indexed by token length in units.
///
/// Keys are stored in lowercase canonical form; callers lowercase before
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct ScriptTables {
    by_length: BTreeMap<usize, LengthTables>,
}

/// Outcome of inserting a row; `Duplicate` leaves the existing entry in place.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Insert {
    Added,
    Duplicate,
}

impl ScriptTables {
    pub(super) fn insert_default(&mut self, length: usize, from: String, to: String) -> Insert {
        let table = &mut self.by_length.entry(length).or_default().defaults;
        if table.contains_key(&from) {
            return Insert::Duplicate;
        }
        table.insert(from, to);
        Insert::Added
    }

    pub(super) fn insert_language(
        &mut self,
        length: usize,
        language: &str,
        from: String,
        to: String,
    ) -> Insert {
        let table = self
            .by_length
            .entry(length)
            .or_default()
            .by_language
            .entry(language.to_string())
            .or_default();
        if table.contains_key(&from) {
            return Insert::Duplicate;
        }
        table.insert(from, to);
        Insert::Added
    }

    pub fn lookup_default(&self, length: usize, token: &str) -> Option<&str> {
        self.by_length
            .get(&length)?
            .defaults
            .get(token)
            .map(String::as_str)
    }

    pub fn lookup_specific(&self, length: usize, language: &str, token: &str) -> Option<&str> {
        self.by_length
            .get(&length)?
            .by_language
            .get(language)?
            .get(token)
            .map(String::as_str)
    }

    /// Language-specific entry first, then the script default.
    pub fn lookup(&self, length: usize, language: Option<&str>, token: &str) -> Option<&str> {
        language
            .and_then(|lang| self.lookup_specific(length, lang, token))
            .or_else(|| self.lookup_default(length, token))
    }

    /// Longest registered token length, 0 when empty.
    pub fn max_token_length(&self) -> usize {
        self.by_length
            .iter()
            .rev()
            .find(|(_, t)| !t.defaults.is_empty() || t.by_language.values().any(|m| !m.is_empty()))
            .map_or(0, |(len, _)| *len)
    }

    pub fn default_count(&self) -> usize {
        self.by_length.values().map(|t| t.defaults.len()).sum()
    }

    pub fn language_count(&self) -> usize {
        self.by_length
            .values()
            .flat_map(|t| t.by_language.values())
            .map(HashMap::len)
            .sum()
    }

    /// Languages that own at least one entry.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = self
            .by_length
            .values()
            .flat_map(|t| t.by_language.keys().map(String::as_str))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.into_iter()
    }
}
