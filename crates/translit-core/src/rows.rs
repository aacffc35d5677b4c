//! Parsers for the whitespace-separated row sources.
//!
//! Every source shares the same line handling: blank lines and lines starting
//! with `#` are skipped, fields are split on whitespace. `label` names the
//! source in error messages (usually the file name).

use crate::case::{CaseScenario, CaseTransform, CaseType, LengthClass};
use crate::language::{LanguageDescriptor, Script};
use crate::mapping::MappingRow;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    #[error("{label}:{line}: expected {expected} fields, found {found}")]
    FieldCount {
        label: String,
        line: usize,
        expected: &'static str,
        found: usize,
    },
    #[error("{label}:{line}: {field:?} must be a single character")]
    NotSingleUnit {
        label: String,
        line: usize,
        field: String,
    },
    #[error("{label}:{line}: unknown {kind} {value:?}")]
    UnknownKeyword {
        label: String,
        line: usize,
        kind: &'static str,
        value: String,
    },
}

/// Non-empty, non-comment lines as `(1-based line number, fields)`.
fn fields(content: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| (n, line.split_whitespace().collect()))
}

fn single_unit(label: &str, line: usize, field: &str) -> Result<char, RowError> {
    let mut units = field.chars();
    match (units.next(), units.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(RowError::NotSingleUnit {
            label: label.to_string(),
            line,
            field: field.to_string(),
        }),
    }
}

fn keyword<T>(
    label: &str,
    line: usize,
    kind: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, RowError> {
    parse(value).ok_or_else(|| RowError::UnknownKeyword {
        label: label.to_string(),
        line,
        kind,
        value: value.to_string(),
    })
}

fn field_count(label: &str, line: usize, expected: &'static str, found: usize) -> RowError {
    RowError::FieldCount {
        label: label.to_string(),
        line,
        expected,
        found,
    }
}

/// Default mapping rows: `from to`.
pub fn parse_default_rows(label: &str, content: &str) -> Result<Vec<MappingRow>, RowError> {
    fields(content)
        .map(|(line, f)| match f.as_slice() {
            [from, to] => Ok(MappingRow::default_entry(*from, *to)),
            _ => Err(field_count(label, line, "2", f.len())),
        })
        .collect()
}

/// Language-specific rows: `from to lang1 [lang2 ...]`.
pub fn parse_language_rows(label: &str, content: &str) -> Result<Vec<MappingRow>, RowError> {
    fields(content)
        .map(|(line, f)| match f.as_slice() {
            [from, to, langs @ ..] if !langs.is_empty() => {
                Ok(MappingRow::for_languages(*from, *to, langs.iter().copied()))
            }
            _ => Err(field_count(label, line, "3 or more", f.len())),
        })
        .collect()
}

/// Case pair rows: `UPPER lower`.
pub fn parse_case_pairs(label: &str, content: &str) -> Result<Vec<(char, char)>, RowError> {
    fields(content)
        .map(|(line, f)| match f.as_slice() {
            [upper, lower] => Ok((
                single_unit(label, line, upper)?,
                single_unit(label, line, lower)?,
            )),
            _ => Err(field_count(label, line, "2", f.len())),
        })
        .collect()
}

/// Case scenario rows: `original mapped case transform`, e.g.
/// `single multiple uppercase sentence`.
pub fn parse_scenarios(
    label: &str,
    content: &str,
) -> Result<Vec<(CaseScenario, CaseTransform)>, RowError> {
    fields(content)
        .map(|(line, f)| match f.as_slice() {
            [original, mapped, case, transform] => {
                let scenario = CaseScenario::new(
                    keyword(label, line, "length class", original, LengthClass::parse)?,
                    keyword(label, line, "length class", mapped, LengthClass::parse)?,
                    keyword(label, line, "case type", case, CaseType::parse)?,
                );
                let transform = keyword(label, line, "transform", transform, CaseTransform::parse)?;
                Ok((scenario, transform))
            }
            _ => Err(field_count(label, line, "4", f.len())),
        })
        .collect()
}

/// Vowel rows: one lowercase unit per line.
pub fn parse_vowels(label: &str, content: &str) -> Result<Vec<char>, RowError> {
    fields(content)
        .map(|(line, f)| match f.as_slice() {
            [vowel] => single_unit(label, line, vowel),
            _ => Err(field_count(label, line, "1", f.len())),
        })
        .collect()
}

/// Language choice rows: `id script description words...`.
pub fn parse_languages(label: &str, content: &str) -> Result<Vec<LanguageDescriptor>, RowError> {
    fields(content)
        .map(|(line, f)| match f.as_slice() {
            [id, script, description @ ..] if !description.is_empty() => {
                let script = keyword(label, line, "script", script, Script::parse)?;
                Ok(LanguageDescriptor::new(*id, script, description.join(" ")))
            }
            _ => Err(field_count(label, line, "3 or more", f.len())),
        })
        .collect()
}
