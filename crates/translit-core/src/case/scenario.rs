use std::collections::HashMap;
use std::fmt;

use super::{CaseError, CaseType, LengthClass};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseTransform {
    Lowercase,
    Uppercase,
    Sentence,
}

impl CaseTransform {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::Lowercase),
            "uppercase" => Some(Self::Uppercase),
            "sentence" => Some(Self::Sentence),
            _ => None,
        }
    }
}

/// Key selecting a casing transform: length classes of the matched source
/// token and of its replacement, plus the source token's case type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CaseScenario {
    pub original: LengthClass,
    pub mapped: LengthClass,
    pub case: CaseType,
}

impl CaseScenario {
    pub fn new(original: LengthClass, mapped: LengthClass, case: CaseType) -> Self {
        Self {
            original,
            mapped,
            case,
        }
    }

    /// Every reachable key (2 x 2 x 3).
    pub fn all() -> impl Iterator<Item = CaseScenario> {
        LengthClass::ALL.into_iter().flat_map(|original| {
            LengthClass::ALL.into_iter().flat_map(move |mapped| {
                CaseType::ALL
                    .into_iter()
                    .map(move |case| CaseScenario::new(original, mapped, case))
            })
        })
    }
}

impl fmt::Display for CaseScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.original, self.mapped, self.case)
    }
}

/// Complete scenario -> transform table.
///
/// Construction fails unless all twelve scenarios are registered, so lookups
/// on a built table always hit.
#[derive(Debug, Clone)]
pub struct ScenarioTable {
    transforms: HashMap<CaseScenario, CaseTransform>,
}

impl ScenarioTable {
    pub fn from_rows<I>(rows: I) -> Result<Self, CaseError>
    where
        I: IntoIterator<Item = (CaseScenario, CaseTransform)>,
    {
        let mut transforms = HashMap::new();
        for (scenario, transform) in rows {
            if transforms.insert(scenario, transform).is_some() {
                return Err(CaseError::DuplicateScenario(scenario));
            }
        }
        if let Some(missing) = CaseScenario::all().find(|s| !transforms.contains_key(s)) {
            return Err(CaseError::MissingScenario(missing));
        }
        Ok(Self { transforms })
    }

    pub fn transform_for(&self, scenario: CaseScenario) -> Result<CaseTransform, CaseError> {
        self.transforms
            .get(&scenario)
            .copied()
            .ok_or(CaseError::MissingScenario(scenario))
    }
}
