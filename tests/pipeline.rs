//! End-to-end pipeline test over the platform-neutral core: fill the form,
//! submit, interpret a canned server reply, resolve the controller, and
//! export the rendered result. No network and no DOM involved.

use sequence_calc::{
    interpret_response, CalculationOutcome, Field, FormController, Phase, RequestError, ResultView,
};

#[test]
fn manual_submission_round_trip() {
    let mut controller = FormController::new();
    controller.edit_field(Field::LowerLimit, "1".to_string());
    controller.edit_field(Field::UpperLimit, "2".to_string());
    controller.edit_field(Field::Formula, "1/K".to_string());

    let submission = controller.submit().expect("valid form must submit");
    let body = serde_json::to_string(&submission.request).unwrap();
    assert!(body.contains("\"formula\":\"1/k\""));

    // What the real server answers for 1/k over [1, 2], third tuple element
    // included.
    let reply = r#"{
        "terms": [[1, 1.0, "1"], [2, 0.5, "1/2"]],
        "suma": 1.5,
        "multiplicacion": 0.5
    }"#;
    let outcome = interpret_response(200, reply).unwrap();
    controller.resolve(submission.seq, Ok(outcome));

    assert_eq!(controller.phase(), Phase::Rendered);
    assert_eq!(
        controller.export_text().unwrap(),
        "term k=1: 1.0000\nterm k=2: 0.5000\nSum = 1.5000\nProduct = 5.0000e-1"
    );
}

#[test]
fn server_rejection_round_trip() {
    let mut controller = FormController::new();
    controller.edit_field(Field::LowerLimit, "1".to_string());
    controller.edit_field(Field::UpperLimit, "5".to_string());
    controller.edit_field(Field::Formula, "1//k".to_string());

    let submission = controller.submit().expect("locally valid form");
    let outcome = interpret_response(400, r#"{"error": "invalid formula"}"#).unwrap();
    assert_eq!(
        outcome,
        CalculationOutcome::Rejected("invalid formula".to_string())
    );

    controller.resolve(submission.seq, Ok(outcome));
    assert_eq!(
        *controller.view(),
        ResultView::Failure("invalid formula".to_string())
    );
    assert_eq!(controller.export_text(), None);
}

#[test]
fn transport_failure_round_trip() {
    let mut controller = FormController::new();
    controller.edit_field(Field::LowerLimit, "1".to_string());
    controller.edit_field(Field::UpperLimit, "5".to_string());
    controller.edit_field(Field::Formula, "k".to_string());

    let submission = controller.submit().unwrap();
    let outcome = interpret_response(503, "Service Unavailable");
    assert!(matches!(outcome, Err(RequestError::Status(503))));
    controller.resolve(submission.seq, outcome);

    let ResultView::Failure(message) = controller.view() else {
        panic!("expected failure view");
    };
    assert!(message.starts_with("Calculation failed:"));
    assert!(message.contains("503"));
}

#[test]
fn invalid_form_never_produces_a_request() {
    let mut controller = FormController::new();
    controller.edit_field(Field::LowerLimit, "10".to_string());
    controller.edit_field(Field::UpperLimit, "3".to_string());
    controller.edit_field(Field::Formula, "1/k".to_string());

    assert!(controller.submit().is_none());
    assert_eq!(controller.phase(), Phase::Errored);

    controller.reset();
    assert_eq!(*controller.view(), ResultView::Placeholder);
    assert!(controller.input().formula.is_empty());
}
