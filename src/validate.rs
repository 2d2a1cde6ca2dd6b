//! Field validation for the calculator form.
//!
//! Two entry points: [`validate_form`] runs the full rule chain on a
//! submission attempt (first failure wins), and [`live_marks`] classifies
//! each field independently so the UI can mark inputs while the user types.

use std::fmt;

use crate::{FormInput, ValidatedRequest};

/// One of the three form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LowerLimit,
    UpperLimit,
    Formula,
}

/// A rejected submission: the message shown to the user plus the fields
/// that should be marked invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub fields: Vec<Field>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Live-feedback classification of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    /// Nothing typed yet; no marker shown.
    #[default]
    Neutral,
    Valid,
    Invalid,
}

/// Per-field marks, recomputed on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMarks {
    pub lower_limit: Mark,
    pub upper_limit: Mark,
    pub formula: Mark,
}

impl FieldMarks {
    pub fn set(&mut self, field: Field, mark: Mark) {
        match field {
            Field::LowerLimit => self.lower_limit = mark,
            Field::UpperLimit => self.upper_limit = mark,
            Field::Formula => self.formula = mark,
        }
    }
}

/// Parse a limit field as a positive integer. Rejects zero.
fn parse_limit(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

/// Validate the whole form for submission. Rules are applied in order and
/// the first failing rule produces the error:
///
/// 1. every field must be non-empty;
/// 2. both limits must parse as integers >= 1;
/// 3. the lower limit must not exceed the upper limit;
/// 4. the formula must not trim to the empty string.
pub fn validate_form(input: &FormInput) -> Result<ValidatedRequest, ValidationError> {
    if input.lower_limit.is_empty() || input.upper_limit.is_empty() || input.formula.is_empty() {
        return Err(ValidationError {
            message: "All fields are required".to_string(),
            fields: vec![Field::LowerLimit, Field::UpperLimit, Field::Formula],
        });
    }

    let (m, n) = match (parse_limit(&input.lower_limit), parse_limit(&input.upper_limit)) {
        (Some(m), Some(n)) => (m, n),
        _ => {
            return Err(ValidationError {
                message: "Limits must be positive integers".to_string(),
                fields: vec![Field::LowerLimit, Field::UpperLimit],
            });
        }
    };

    if m > n {
        return Err(ValidationError {
            message: format!(
                "The lower limit ({}) must be less than or equal to the upper limit ({})",
                m, n
            ),
            fields: vec![Field::LowerLimit, Field::UpperLimit],
        });
    }

    let formula = input.formula.trim();
    if formula.is_empty() {
        return Err(ValidationError {
            message: "The formula must not be empty".to_string(),
            fields: vec![Field::Formula],
        });
    }

    Ok(ValidatedRequest {
        formula: formula.to_string(),
        lower_limit: m,
        upper_limit: n,
    })
}

/// Classify each field independently for live feedback.
///
/// Empty fields stay [`Mark::Neutral`]. A limit is valid when it parses as
/// an integer >= 1; when both limits parse, the ordering rule is re-checked
/// and an inverted range marks both limit fields invalid.
pub fn live_marks(input: &FormInput) -> FieldMarks {
    let mut marks = FieldMarks::default();

    let lower = if input.lower_limit.is_empty() {
        None
    } else {
        let parsed = parse_limit(&input.lower_limit);
        marks.lower_limit = if parsed.is_some() { Mark::Valid } else { Mark::Invalid };
        parsed
    };
    let upper = if input.upper_limit.is_empty() {
        None
    } else {
        let parsed = parse_limit(&input.upper_limit);
        marks.upper_limit = if parsed.is_some() { Mark::Valid } else { Mark::Invalid };
        parsed
    };

    if let (Some(m), Some(n)) = (lower, upper) {
        if m > n {
            marks.lower_limit = Mark::Invalid;
            marks.upper_limit = Mark::Invalid;
        }
    }

    if !input.formula.is_empty() {
        marks.formula = if input.formula.trim().is_empty() {
            Mark::Invalid
        } else {
            Mark::Valid
        };
    }

    marks
}
