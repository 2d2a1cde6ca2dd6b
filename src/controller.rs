//! The form controller: owns the form state and drives the submission
//! state machine.
//!
//! The controller never performs I/O. `submit` hands back a [`Submission`]
//! describing the request to send; the caller performs the network call and
//! reports back through `resolve`. Each submission carries a monotonically
//! increasing sequence number, and `resolve` drops any response that is not
//! for the latest in-flight submission, so a slow first request can never
//! overwrite the result of a newer one.

use log::debug;
use rand::Rng;

use crate::client::{CalculationOutcome, RequestError};
use crate::presets::pick_preset;
use crate::render::{render_result, ResultView};
use crate::request::{build_request, CalculationRequest};
use crate::validate::{live_marks, validate_form, FieldMarks, Mark};
use crate::{Field, FormInput};

/// Where the controller is in the submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting { seq: u64 },
    Rendered,
    Errored,
}

/// A validated request ready to be sent, tagged with its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub seq: u64,
    pub request: CalculationRequest,
}

/// Owns the form fields, field marks, result view, and transient highlight.
#[derive(Debug)]
pub struct FormController {
    input: FormInput,
    marks: FieldMarks,
    phase: Phase,
    view: ResultView,
    highlight: bool,
    next_seq: u64,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        FormController {
            input: FormInput::default(),
            marks: FieldMarks::default(),
            phase: Phase::Idle,
            view: ResultView::Placeholder,
            highlight: false,
            next_seq: 0,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn marks(&self) -> FieldMarks {
        self.marks
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Whether the result area should carry the transient highlight class.
    pub fn highlight(&self) -> bool {
        self.highlight
    }

    /// Store an edited field value and recompute the live marks. A terminal
    /// phase (Rendered or Errored) returns to Idle; the displayed result is
    /// left in place until the next submission replaces it.
    pub fn edit_field(&mut self, field: Field, value: String) {
        match field {
            Field::LowerLimit => self.input.lower_limit = value,
            Field::UpperLimit => self.input.upper_limit = value,
            Field::Formula => self.input.formula = value,
        }
        self.marks = live_marks(&self.input);
        if matches!(self.phase, Phase::Rendered | Phase::Errored) {
            self.phase = Phase::Idle;
        }
    }

    /// Validate the current input and start a submission cycle.
    ///
    /// On validation failure the offending fields are marked invalid, the
    /// message is shown in the error region, and no submission is produced.
    /// Submitting while a request is in flight supersedes it: the older
    /// response will be discarded by [`FormController::resolve`].
    pub fn submit(&mut self) -> Option<Submission> {
        match validate_form(&self.input) {
            Ok(valid) => {
                self.next_seq += 1;
                let seq = self.next_seq;
                self.phase = Phase::Submitting { seq };
                Some(Submission {
                    seq,
                    request: build_request(&valid),
                })
            }
            Err(err) => {
                for field in &err.fields {
                    self.marks.set(*field, Mark::Invalid);
                }
                self.view = ResultView::Failure(err.message);
                self.highlight = false;
                self.phase = Phase::Errored;
                None
            }
        }
    }

    /// Apply the outcome of the network call for submission `seq`.
    ///
    /// Responses for anything but the latest in-flight submission are
    /// dropped, including responses arriving after a reset.
    pub fn resolve(&mut self, seq: u64, outcome: Result<CalculationOutcome, RequestError>) {
        match self.phase {
            Phase::Submitting { seq: current } if current == seq => {}
            _ => {
                debug!("dropping response for superseded submission {}", seq);
                return;
            }
        }

        match outcome {
            Ok(CalculationOutcome::Computed(result)) => {
                self.view = ResultView::Terms(render_result(&result));
                self.highlight = true;
                self.phase = Phase::Rendered;
            }
            Ok(CalculationOutcome::Rejected(message)) => {
                self.view = ResultView::Failure(message);
                self.highlight = false;
                self.phase = Phase::Errored;
            }
            Err(err) => {
                self.view = ResultView::Failure(format!("Calculation failed: {}", err));
                self.highlight = false;
                self.phase = Phase::Errored;
            }
        }
    }

    /// Clear the form, the marks, and the result area back to the
    /// placeholder. An in-flight request is not cancelled; its response is
    /// dropped when it arrives.
    pub fn reset(&mut self) {
        self.input = FormInput::default();
        self.marks = FieldMarks::default();
        self.view = ResultView::Placeholder;
        self.highlight = false;
        self.phase = Phase::Idle;
    }

    /// Fill the form from a randomly picked preset and submit it through
    /// the normal pipeline. Presets always validate, so this returns a
    /// submission unless the table were ever emptied.
    pub fn load_example<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Submission> {
        let preset = pick_preset(rng);
        self.input = preset.to_form_input();
        self.marks = live_marks(&self.input);
        self.submit()
    }

    /// Plain-text rendition of the current result (term lines, sum line,
    /// product line, newline separated) for the clipboard. `None` unless a
    /// result is currently displayed.
    pub fn export_text(&self) -> Option<String> {
        let ResultView::Terms(view) = &self.view else {
            return None;
        };
        let mut lines: Vec<&str> = view.term_lines.iter().map(String::as_str).collect();
        lines.push(&view.sum_line);
        lines.push(&view.product_line);
        Some(lines.join("\n"))
    }

    /// Clear the transient highlight once its display window has elapsed.
    pub fn expire_highlight(&mut self) {
        self.highlight = false;
    }
}
