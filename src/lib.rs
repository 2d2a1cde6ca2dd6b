//! Core logic for the sequence calculator client.
//!
//! Everything in this library is platform-neutral: validation, request
//! building, response decoding, rendering, and the submission state machine
//! all operate on plain data so they can be tested natively. The Yew binary
//! in `main.rs` is the only place that touches the DOM.

pub mod client;
pub mod controller;
pub mod presets;
pub mod render;
pub mod request;
pub mod response;
pub mod validate;

pub use client::{interpret_response, post_calculation, CalculationOutcome, RequestError};
pub use controller::{FormController, Phase, Submission};
pub use presets::{pick_preset, Preset, PRESETS};
pub use render::{render_result, ResultView, TermsView, PLACEHOLDER};
pub use request::{build_request, normalize_variable, CalculationRequest, VARIABLE};
pub use response::{CalculationReply, CalculationResult, Term};
pub use validate::{live_marks, validate_form, Field, FieldMarks, Mark, ValidationError};

/// Raw, untrusted text as typed into the three form fields.
///
/// Owned by the controller and re-read on every action; nothing here is
/// parsed or trimmed until validation runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub lower_limit: String,
    pub upper_limit: String,
    pub formula: String,
}

/// Form values that passed validation.
///
/// Invariant: both limits are at least 1, `lower_limit <= upper_limit`, and
/// the formula is non-empty after trimming. Built fresh for each submission
/// attempt and discarded once the request is on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub formula: String,
    pub lower_limit: u32,
    pub upper_limit: u32,
}
