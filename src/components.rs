//! Stateless Yew view functions for the calculator UI.
//!
//! Everything here renders from plain data (the controller's view
//! description and field marks); no component owns state.

use sequence_calc::{Mark, ResultView, PLACEHOLDER};
use yew::prelude::*;

/// CSS class for an input field given its live-validation mark.
pub fn mark_class(mark: Mark) -> &'static str {
    match mark {
        Mark::Neutral => "",
        Mark::Valid => "valid",
        Mark::Invalid => "invalid",
    }
}

/// Render the dedicated error region. Hidden unless the view is a failure.
pub fn render_error(view: &ResultView) -> Html {
    match view {
        ResultView::Failure(message) => html! {
            <div class="error-container">
                <p class="error-message">{ message }</p>
            </div>
        },
        _ => html! {},
    }
}

/// Render the result area: placeholder, term list with sum and product
/// lines, or nothing at all when an error is displayed instead.
pub fn render_results(view: &ResultView, highlight: bool) -> Html {
    let container_class = if highlight {
        "result-container highlight"
    } else {
        "result-container"
    };

    match view {
        ResultView::Placeholder => html! {
            <div class={container_class}>
                <ul class="result-list">
                    <li>{ PLACEHOLDER }</li>
                </ul>
            </div>
        },
        ResultView::Terms(terms) => html! {
            <div class={container_class}>
                <ul class="result-list">
                    { terms.term_lines.iter().map(|line| html! {
                        <li>{ line }</li>
                    }).collect::<Html>() }
                </ul>
                <p class="sum-line">{ &terms.sum_line }</p>
                <p class="product-line">{ &terms.product_line }</p>
            </div>
        },
        ResultView::Failure(_) => html! {
            <div class={container_class}>
                <ul class="result-list"></ul>
            </div>
        },
    }
}
