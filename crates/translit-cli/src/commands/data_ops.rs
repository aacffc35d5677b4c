use std::path::Path;

use serde::Serialize;

use translit_engine::{settings, DataSet, LanguageDescriptor, Script, TranslitConfig};

use super::load_config;

#[derive(Debug, Serialize)]
pub struct LanguageEntry<'a> {
    pub choice: usize,
    #[serde(flatten)]
    pub language: &'a LanguageDescriptor,
}

/// Row counts of a built configuration.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub languages: usize,
    pub case_pairs: usize,
    pub vowels: usize,
    pub cyrillic_defaults: usize,
    pub cyrillic_language_rows: usize,
    pub latin_language_rows: usize,
    pub max_token_length: usize,
    /// Languages owning at least one Cyrillic row.
    pub cyrillic_row_languages: Vec<String>,
    pub latin_row_languages: Vec<String>,
}

pub fn language_entries(config: &TranslitConfig) -> Vec<LanguageEntry<'_>> {
    config
        .languages()
        .iter()
        .enumerate()
        .map(|(i, language)| LanguageEntry {
            choice: i + 1,
            language,
        })
        .collect()
}

pub fn summarize(config: &TranslitConfig) -> TableSummary {
    let store = config.store();
    let cyrillic = store.tables(Script::Cyrillic);
    let latin = store.tables(Script::Latin);
    TableSummary {
        languages: config.languages().len(),
        case_pairs: config.cases().len(),
        vowels: config.vowels().len(),
        cyrillic_defaults: cyrillic.default_count(),
        cyrillic_language_rows: cyrillic.language_count(),
        latin_language_rows: latin.language_count(),
        max_token_length: store.max_token_length(),
        cyrillic_row_languages: cyrillic.languages().map(str::to_string).collect(),
        latin_row_languages: latin.languages().map(str::to_string).collect(),
    }
}

pub fn languages_cmd(data_dir: Option<&str>, json: bool) {
    let config = die!(load_config(data_dir.map(Path::new)), "Error loading tables: {}");
    let entries = language_entries(&config);
    if json {
        let out = die!(serde_json::to_string_pretty(&entries), "Error: {}");
        println!("{out}");
        return;
    }
    for entry in &entries {
        println!(
            "{:>2}  {:<12} {:<9} {}",
            entry.choice, entry.language.id, entry.language.script, entry.language.description
        );
    }
}

pub fn validate_cmd(dir: &str) {
    let config = die!(load_config(Some(Path::new(dir))), "Error: {}");
    let s = summarize(&config);
    println!(
        "OK: {} languages, {} case pairs, {} vowels, cyrillic {} default + {} language rows, \
         latin {} language rows, max token length {}",
        s.languages,
        s.case_pairs,
        s.vowels,
        s.cyrillic_defaults,
        s.cyrillic_language_rows,
        s.latin_language_rows,
        s.max_token_length
    );
    println!("  cyrillic rows: {}", s.cyrillic_row_languages.join(", "));
    println!("  latin rows: {}", s.latin_row_languages.join(", "));
}

pub fn data_export(dir: &str) {
    die!(
        DataSet::builtin().write_to_dir(Path::new(dir)),
        "Error writing {dir}: {}"
    );
    println!("Wrote builtin tables to {dir}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(std::fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    let data = s
        .data
        .dir
        .as_ref()
        .map_or_else(|| "builtin".to_string(), |d| d.display().to_string());
    println!(
        "OK: data={data}, io.input={}, io.output={}",
        s.io.input.display(),
        s.io.output.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_numbered_in_file_order() {
        let config = TranslitConfig::builtin().unwrap();
        let entries = language_entries(&config);
        assert_eq!(entries[0].choice, 1);
        assert_eq!(entries[0].language.id, "russian");
        assert_eq!(entries.last().unwrap().choice, config.languages().len());
    }

    #[test]
    fn entry_json_is_flat() {
        let config = TranslitConfig::builtin().unwrap();
        let entries = language_entries(&config);
        let value = serde_json::to_value(&entries[0]).unwrap();
        assert_eq!(value["choice"], 1);
        assert_eq!(value["id"], "russian");
        assert_eq!(value["script"], "cyrillic");
    }

    #[test]
    fn exported_tables_validate_with_same_counts() {
        let dir = tempfile::tempdir().unwrap();
        DataSet::builtin().write_to_dir(dir.path()).unwrap();
        let loaded = load_config(Some(dir.path())).unwrap();
        let builtin = TranslitConfig::builtin().unwrap();
        assert_eq!(summarize(&loaded), summarize(&builtin));
        assert!(summarize(&loaded).latin_language_rows > 0);
    }

    #[test]
    fn summary_lists_languages_owning_rows() {
        let s = summarize(&TranslitConfig::builtin().unwrap());
        assert!(s.cyrillic_row_languages.contains(&"serbian".to_string()));
        assert!(!s.cyrillic_row_languages.contains(&"polish".to_string()));
        assert_eq!(s.latin_row_languages, ["croatian", "czech", "polish", "slovak"]);
    }

    #[test]
    fn broken_directory_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        DataSet::builtin().write_to_dir(dir.path()).unwrap();
        std::fs::write(dir.path().join("vowels.txt"), "").unwrap();
        assert!(load_config(Some(dir.path())).is_err());
    }
}
