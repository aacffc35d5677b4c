use std::fmt;

use super::{CaseError, CaseTable};

/// Case of a single unit, by membership in the pair table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCase {
    Lower,
    Upper,
    Neither,
}

/// Casing pattern of a token's leading units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    Lowercase,
    Uppercase,
    /// First unit uppercase, second lowercase ("Lj", "Cz").
    Sentence,
}

impl CaseType {
    pub const ALL: [CaseType; 3] = [CaseType::Lowercase, CaseType::Uppercase, CaseType::Sentence];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::Lowercase),
            "uppercase" => Some(Self::Uppercase),
            "sentence" => Some(Self::Sentence),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Sentence => "sentence",
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthClass {
    Single,
    Multiple,
}

impl LengthClass {
    pub const ALL: [LengthClass; 2] = [LengthClass::Single, LengthClass::Multiple];

    /// `Single` for exactly one unit, `Multiple` otherwise.
    pub fn of(token: &str) -> Self {
        let mut units = token.chars();
        match (units.next(), units.next()) {
            (Some(_), None) => Self::Single,
            _ => Self::Multiple,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "multiple" => Some(Self::Multiple),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl fmt::Display for LengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CaseTable {
    pub fn classify_unit(&self, unit: char) -> UnitCase {
        if self.upper_to_lower.contains_key(&unit) {
            UnitCase::Upper
        } else if self.lower_to_upper.contains_key(&unit) {
            UnitCase::Lower
        } else {
            UnitCase::Neither
        }
    }

    /// Classify a token by its first two units.
    ///
    /// A lone unit is uppercase or lowercase; case-neutral units count as
    /// lowercase. Units past the second are never inspected.
    pub fn classify_token(&self, token: &str) -> Result<CaseType, CaseError> {
        let mut units = token.chars();
        let first = units.next().ok_or(CaseError::EmptyToken)?;
        let first_upper = self.classify_unit(first) == UnitCase::Upper;
        let Some(second) = units.next() else {
            return Ok(if first_upper {
                CaseType::Uppercase
            } else {
                CaseType::Lowercase
            });
        };
        let second_upper = self.classify_unit(second) == UnitCase::Upper;

        Ok(match (first_upper, second_upper) {
            (true, true) => CaseType::Uppercase,
            (true, false) => CaseType::Sentence,
            (false, false) => CaseType::Lowercase,
            // lower followed by upper does not occur in well-formed words
            (false, true) => CaseType::Lowercase,
        })
    }
}
