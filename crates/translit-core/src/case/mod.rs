//! Letter case handling for transliteration.
//!
//! Case information is carried by an explicit pair table rather than
//! `char::to_lowercase`, so only letters of the configured alphabets take
//! part in case transforms. Everything else (digits, punctuation, whitespace,
//! modifier letters) is case-neutral and passes through unchanged.

mod classify;
mod restore;
mod scenario;

use std::collections::HashMap;

pub use classify::{CaseType, LengthClass, UnitCase};
pub use restore::apply_casing;
pub use scenario::{CaseScenario, CaseTransform, ScenarioTable};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    #[error("cannot classify or case an empty token")]
    EmptyToken,
    #[error("case pair table is empty")]
    NoPairs,
    #[error("duplicate case pair for {0:?}")]
    DuplicatePair(char),
    #[error("duplicate case scenario: {0}")]
    DuplicateScenario(CaseScenario),
    #[error("no casing transform registered for scenario {0}")]
    MissingScenario(CaseScenario),
}

/// Bidirectional 1:1 mapping between upper- and lowercase letters.
#[derive(Debug, Clone, Default)]
pub struct CaseTable {
    upper_to_lower: HashMap<char, char>,
    lower_to_upper: HashMap<char, char>,
}

impl CaseTable {
    /// Build from `(uppercase, lowercase)` pairs.
    ///
    /// A letter appearing twice on the same side is rejected, since it would
    /// make the mapping ambiguous in one direction.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, CaseError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut table = Self::default();
        for (upper, lower) in pairs {
            if table.upper_to_lower.insert(upper, lower).is_some() {
                return Err(CaseError::DuplicatePair(upper));
            }
            if table.lower_to_upper.insert(lower, upper).is_some() {
                return Err(CaseError::DuplicatePair(lower));
            }
        }
        if table.upper_to_lower.is_empty() {
            return Err(CaseError::NoPairs);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.upper_to_lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper_to_lower.is_empty()
    }

    pub fn lower_unit(&self, unit: char) -> char {
        self.upper_to_lower.get(&unit).copied().unwrap_or(unit)
    }

    pub fn upper_unit(&self, unit: char) -> char {
        self.lower_to_upper.get(&unit).copied().unwrap_or(unit)
    }

    pub fn to_lowercase(&self, token: &str) -> String {
        token.chars().map(|c| self.lower_unit(c)).collect()
    }

    pub fn to_uppercase(&self, token: &str) -> String {
        token.chars().map(|c| self.upper_unit(c)).collect()
    }

    /// Uppercase the first unit and lowercase the rest.
    pub fn to_sentence_case(&self, token: &str) -> Result<String, CaseError> {
        let mut units = token.chars();
        let first = units.next().ok_or(CaseError::EmptyToken)?;
        let mut out = String::with_capacity(token.len());
        out.push(self.upper_unit(first));
        out.extend(units.map(|c| self.lower_unit(c)));
        Ok(out)
    }

    pub fn apply(&self, transform: CaseTransform, token: &str) -> Result<String, CaseError> {
        match transform {
            CaseTransform::Lowercase => Ok(self.to_lowercase(token)),
            CaseTransform::Uppercase => Ok(self.to_uppercase(token)),
            CaseTransform::Sentence => self.to_sentence_case(token),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) use super::scenario::tests::standard_rows;

    pub(crate) fn sample_table() -> CaseTable {
        CaseTable::from_pairs([
            ('A', 'a'),
            ('C', 'c'),
            ('Z', 'z'),
            ('Č', 'č'),
            ('J', 'j'),
            ('L', 'l'),
            ('Л', 'л'),
            ('Ь', 'ь'),
            ('О', 'о'),
        ])
        .unwrap()
    }

    #[test]
    fn unit_transforms_use_pairs_only() {
        let t = sample_table();
        assert_eq!(t.lower_unit('Č'), 'č');
        assert_eq!(t.upper_unit('л'), 'Л');
        // 'B' is not in the table and stays as-is
        assert_eq!(t.lower_unit('B'), 'B');
        assert_eq!(t.upper_unit('7'), '7');
    }

    #[test]
    fn token_transforms() {
        let t = sample_table();
        assert_eq!(t.to_lowercase("ČAJ 1"), "čaj 1");
        assert_eq!(t.to_uppercase("lj"), "LJ");
        assert_eq!(t.to_sentence_case("lJ").unwrap(), "Lj");
        assert_eq!(t.to_sentence_case("č").unwrap(), "Č");
    }

    #[test]
    fn sentence_case_of_empty_is_an_error() {
        let t = sample_table();
        assert_eq!(t.to_sentence_case(""), Err(CaseError::EmptyToken));
    }

    #[test]
    fn duplicate_pair_rejected() {
        let err = CaseTable::from_pairs([('A', 'a'), ('A', 'b')]).unwrap_err();
        assert_eq!(err, CaseError::DuplicatePair('A'));
        let err = CaseTable::from_pairs([('A', 'a'), ('B', 'a')]).unwrap_err();
        assert_eq!(err, CaseError::DuplicatePair('a'));
    }

    #[test]
    fn empty_table_rejected() {
        let err = CaseTable::from_pairs(std::iter::empty()).unwrap_err();
        assert_eq!(err, CaseError::NoPairs);
    }

    proptest! {
        #[test]
        fn lowercase_is_idempotent(s in "[aAcCzZčČjJ0-9 .,лЛьЬ]{0,16}") {
            let t = sample_table();
            let once = t.to_lowercase(&s);
            prop_assert_eq!(t.to_lowercase(&once), once);
        }

        #[test]
        fn uppercase_is_idempotent(s in "[aAcCzZčČjJ0-9 .,лЛьЬ]{0,16}") {
            let t = sample_table();
            let once = t.to_uppercase(&s);
            prop_assert_eq!(t.to_uppercase(&once), once);
        }

        #[test]
        fn neutral_text_is_untouched(s in "[0-9 .,!?-]{0,16}") {
            let t = sample_table();
            prop_assert_eq!(t.to_lowercase(&s), s.clone());
            prop_assert_eq!(t.to_uppercase(&s), s);
        }
    }
}
