//! Yew application for the sequence calculator.
//!
//! The [`FormController`] owns all form and result state; this binary only
//! translates DOM events into controller calls and the controller's view
//! description back into markup. Re-renders are driven by bumping a version
//! counter after every mutation.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::error;
use sequence_calc::{post_calculation, Field, FormController, Phase, Submission};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

mod components;
mod config;

use components::{mark_class, render_error, render_results};
use config::{CALCULATE_PATH, HIGHLIGHT_MS};

/// Trigger a re-render after mutating the controller.
fn bump_version(version: &UseStateHandle<usize>) {
    version.set(version.wrapping_add(1));
}

/// Absolute endpoint URL for the calculation request.
fn calculate_endpoint() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{}{}", origin, CALCULATE_PATH))
        .unwrap_or_else(|| CALCULATE_PATH.to_string())
}

/// Best-effort description of a JS exception for the log.
fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Write the exported result to the system clipboard. Failures are logged
/// and otherwise ignored.
async fn copy_to_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&text);
    if let Err(err) = JsFuture::from(promise).await {
        error!("clipboard write failed: {}", describe_js_error(&err));
    }
}

/// Drive one submission to completion: POST the request, resolve the
/// controller with the outcome, and schedule the highlight expiry when a
/// result was rendered.
fn start_submission(
    controller: Rc<RefCell<FormController>>,
    version: UseStateHandle<usize>,
    highlight_timer: UseStateHandle<Option<Timeout>>,
    submission: Submission,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = post_calculation(&calculate_endpoint(), &submission.request).await;
        controller.borrow_mut().resolve(submission.seq, outcome);
        bump_version(&version);

        if controller.borrow().highlight() {
            let controller = controller.clone();
            let version = version.clone();
            let handle = Timeout::new(HIGHLIGHT_MS, move || {
                controller.borrow_mut().expire_highlight();
                bump_version(&version);
            });
            highlight_timer.set(Some(handle));
        }
    });
}

/// Primary application component wiring the controller into the DOM.
#[function_component(App)]
fn app() -> Html {
    let controller = use_mut_ref(FormController::new);
    let version = use_state(|| 0usize);
    // Holding the handle keeps the pending expiry alive; replacing it
    // cancels the previous one.
    let highlight_timer = use_state(|| None::<Timeout>);

    // Read under version so every bump re-renders.
    let _ = *version;
    let (input, marks, view, highlight, phase) = {
        let c = controller.borrow();
        (
            c.input().clone(),
            c.marks(),
            c.view().clone(),
            c.highlight(),
            c.phase(),
        )
    };
    let submitting = matches!(phase, Phase::Submitting { .. });

    let on_edit = |field: Field| {
        let controller = controller.clone();
        let version = version.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            controller.borrow_mut().edit_field(field, target.value());
            bump_version(&version);
        })
    };
    let lower_oninput = on_edit(Field::LowerLimit);
    let upper_oninput = on_edit(Field::UpperLimit);
    let formula_oninput = on_edit(Field::Formula);

    let on_calculate = {
        let controller = controller.clone();
        let version = version.clone();
        let highlight_timer = highlight_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let submission = controller.borrow_mut().submit();
            bump_version(&version);
            if let Some(submission) = submission {
                start_submission(
                    controller.clone(),
                    version.clone(),
                    highlight_timer.clone(),
                    submission,
                );
            }
        })
    };

    let on_load_example = {
        let controller = controller.clone();
        let version = version.clone();
        let highlight_timer = highlight_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let submission = controller.borrow_mut().load_example(&mut rand::rng());
            bump_version(&version);
            if let Some(submission) = submission {
                start_submission(
                    controller.clone(),
                    version.clone(),
                    highlight_timer.clone(),
                    submission,
                );
            }
        })
    };

    let on_reset = {
        let controller = controller.clone();
        let version = version.clone();
        Callback::from(move |_: MouseEvent| {
            controller.borrow_mut().reset();
            bump_version(&version);
        })
    };

    let on_export = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(text) = controller.borrow().export_text() {
                wasm_bindgen_futures::spawn_local(copy_to_clipboard(text));
            }
        })
    };

    html! {
        <div class="container">
            <h1>{ "Sequence Calculator" }</h1>

            <div class="form-group">
                <label for="formula">{ "Formula in k:" }</label>
                <input
                    type="text"
                    id="formula"
                    placeholder="e.g. 1/k, k^2, 2*k + 1"
                    value={input.formula.clone()}
                    class={mark_class(marks.formula)}
                    oninput={formula_oninput}
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="lower_limit">{ "Lower limit (m):" }</label>
                    <input
                        type="number"
                        id="lower_limit"
                        min="1"
                        value={input.lower_limit.clone()}
                        class={mark_class(marks.lower_limit)}
                        oninput={lower_oninput}
                    />
                </div>
                <div class="form-group">
                    <label for="upper_limit">{ "Upper limit (n):" }</label>
                    <input
                        type="number"
                        id="upper_limit"
                        min="1"
                        value={input.upper_limit.clone()}
                        class={mark_class(marks.upper_limit)}
                        oninput={upper_oninput}
                    />
                </div>
            </div>

            <div class="button-row">
                <button class="btn-primary" onclick={on_calculate}>
                    { if submitting { "Calculating…" } else { "Calculate" } }
                </button>
                <button class="btn-secondary" onclick={on_load_example}>{ "Load example" }</button>
                <button class="btn-secondary" onclick={on_reset}>{ "Reset" }</button>
                <button class="btn-secondary" onclick={on_export}>{ "Copy result" }</button>
            </div>

            { render_error(&view) }
            { render_results(&view, highlight) }
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the Yew app.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
