//! Context-sensitive replacement for the soft sign.
//!
//! The soft sign is rendered as `j` when a plain vowel follows it ("шофьор" ->
//! "šofjor") and as a modifier apostrophe everywhere else ("день" ->
//! "denʼ"). Mapping tables request this by using [`SOFT_SIGN_SENTINEL`] as
//! the replacement.

use std::collections::HashSet;

use crate::case::CaseTable;

/// Reserved replacement spelling resolved by [`resolve`].
pub const SOFT_SIGN_SENTINEL: &str = "<ь>";
pub const BEFORE_VOWEL: &str = "j";
pub const OTHERWISE: &str = "ʼ";

/// Lowercase units that count as vowels for the following-unit check.
#[derive(Debug, Clone, Default)]
pub struct VowelSet {
    units: HashSet<char>,
}

impl VowelSet {
    pub fn new<I: IntoIterator<Item = char>>(units: I) -> Self {
        Self {
            units: units.into_iter().collect(),
        }
    }

    pub fn contains(&self, unit: char) -> bool {
        self.units.contains(&unit)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Resolve `raw` for a match of `matched_len` units at `index` in `source`.
///
/// Anything other than the sentinel is returned unchanged.
pub fn resolve<'a>(
    raw: &'a str,
    index: usize,
    matched_len: usize,
    source: &[char],
    cases: &CaseTable,
    vowels: &VowelSet,
) -> &'a str {
    if raw != SOFT_SIGN_SENTINEL {
        return raw;
    }
    match source.get(index + matched_len) {
        Some(&next) if vowels.contains(cases.lower_unit(next)) => BEFORE_VOWEL,
        _ => OTHERWISE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CaseTable, VowelSet) {
        let cases = CaseTable::from_pairs([('О', 'о'), ('А', 'а'), ('Л', 'л'), ('Ь', 'ь')]).unwrap();
        let vowels = VowelSet::new(['а', 'о', 'е']);
        (cases, vowels)
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn vowel_follows() {
        let (cases, vowels) = setup();
        let src = chars("шофьор");
        assert_eq!(resolve(SOFT_SIGN_SENTINEL, 3, 1, &src, &cases, &vowels), "j");
    }

    #[test]
    fn uppercase_vowel_follows() {
        let (cases, vowels) = setup();
        let src = chars("ШОФЬОР");
        assert_eq!(resolve(SOFT_SIGN_SENTINEL, 3, 1, &src, &cases, &vowels), "j");
    }

    #[test]
    fn iotated_vowel_is_not_in_the_set() {
        let (cases, vowels) = setup();
        let src = chars("статья");
        assert_eq!(resolve(SOFT_SIGN_SENTINEL, 4, 1, &src, &cases, &vowels), "ʼ");
    }

    #[test]
    fn consonant_follows() {
        let (cases, vowels) = setup();
        let src = chars("льн");
        assert_eq!(resolve(SOFT_SIGN_SENTINEL, 1, 1, &src, &cases, &vowels), "ʼ");
    }

    #[test]
    fn end_of_text() {
        let (cases, vowels) = setup();
        let src = chars("соль");
        assert_eq!(resolve(SOFT_SIGN_SENTINEL, 3, 1, &src, &cases, &vowels), "ʼ");
    }

    #[test]
    fn uses_true_match_length() {
        let (cases, vowels) = setup();
        // two-unit match "ль" at 0; the unit after it is 'а'
        let src = chars("льа");
        assert_eq!(resolve(SOFT_SIGN_SENTINEL, 0, 2, &src, &cases, &vowels), "j");
        let src = chars("ль");
        assert_eq!(resolve(SOFT_SIGN_SENTINEL, 0, 2, &src, &cases, &vowels), "ʼ");
    }

    #[test]
    fn other_replacements_pass_through() {
        let (cases, vowels) = setup();
        let src = chars("ла");
        assert_eq!(resolve("l", 0, 1, &src, &cases, &vowels), "l");
    }
}
