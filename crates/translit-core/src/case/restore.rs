use super::{CaseError, CaseScenario, CaseTable, LengthClass, ScenarioTable};

/// Re-case `mapped` after the casing of the `original` source token.
///
/// The raw table spelling of `mapped` does not matter; only the original
/// token's case type and both length classes decide the result.
pub fn apply_casing(
    cases: &CaseTable,
    scenarios: &ScenarioTable,
    original: &str,
    mapped: &str,
) -> Result<String, CaseError> {
    let scenario = CaseScenario::new(
        LengthClass::of(original),
        LengthClass::of(mapped),
        cases.classify_token(original)?,
    );
    let transform = scenarios.transform_for(scenario)?;
    cases.apply(transform, mapped)
}
