//! Building the wire request from validated form values.

use serde::Serialize;

use crate::ValidatedRequest;

/// Canonical variable symbol of the sequence formula.
pub const VARIABLE: char = 'k';

/// JSON body for `POST /calculate`. Field names are the wire contract
/// expected by the server and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationRequest {
    pub formula: String,
    pub lower_limit: u32,
    pub upper_limit: u32,
}

/// Fold every ASCII case variant of [`VARIABLE`] to its canonical lowercase
/// form, leaving all other characters untouched. Idempotent.
pub fn normalize_variable(formula: &str) -> String {
    formula
        .chars()
        .map(|c| if c.eq_ignore_ascii_case(&VARIABLE) { VARIABLE } else { c })
        .collect()
}

/// Turn validated form values into the serializable request body.
pub fn build_request(valid: &ValidatedRequest) -> CalculationRequest {
    CalculationRequest {
        formula: normalize_variable(&valid.formula),
        lower_limit: valid.lower_limit,
        upper_limit: valid.upper_limit,
    }
}
