//! Compile-time sanity checks for the embedded data.
//!
//! Full validation (duplicates, scenario coverage, declared languages) happens
//! when a configuration is built; this only catches files that could never
//! load.

const ROW_FILES: &[(&str, usize, Option<usize>)] = &[
    // (file, minimum fields, exact fields)
    ("data/cyrillic_default.txt", 2, Some(2)),
    ("data/language_specific_cyrillic.txt", 3, None),
    ("data/language_specific_latin.txt", 3, None),
    ("data/uppercase_lowercase.txt", 2, Some(2)),
    ("data/case_scenarios.txt", 4, Some(4)),
    ("data/vowels.txt", 1, Some(1)),
    ("data/languages.txt", 3, None),
];

const SCENARIO_COUNT: usize = 12;

fn main() {
    println!("cargo:rerun-if-changed=src/default_settings.toml");
    let settings = read("src/default_settings.toml");
    if toml::from_str::<toml::Table>(&settings).is_err() {
        panic!("src/default_settings.toml contains invalid TOML");
    }

    for &(path, min, exact) in ROW_FILES {
        println!("cargo:rerun-if-changed={path}");
        let rows = check_rows(path, &read(path), min, exact);
        if path.ends_with("case_scenarios.txt") && rows != SCENARIO_COUNT {
            panic!("{path}: expected {SCENARIO_COUNT} scenario rows, found {rows}");
        }
    }
}

fn read(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {path}: {e}"))
}

/// Returns the number of data rows.
fn check_rows(path: &str, content: &str, min: usize, exact: Option<usize>) -> usize {
    let mut rows = 0;
    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields = line.split_whitespace().count();
        let bad = match exact {
            Some(n) => fields != n,
            None => fields < min,
        };
        if bad {
            panic!("{path}:{}: unexpected field count {fields}", i + 1);
        }
        rows += 1;
    }
    if rows == 0 {
        panic!("{path} has no rows");
    }
    rows
}
