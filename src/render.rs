//! Pure rendering of calculation results into a view description.
//!
//! No DOM types here: the controller owns a [`ResultView`] and the UI layer
//! translates it into markup. Re-rendering the same payload always yields
//! the same view.

use crate::response::CalculationResult;

/// Copy shown in the result area before the first calculation and after a
/// reset.
pub const PLACEHOLDER: &str = "Enter a formula and limits to compute the sequence";

/// Formatted lines for a successful calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermsView {
    /// One line per term, in evaluation order.
    pub term_lines: Vec<String>,
    pub sum_line: String,
    pub product_line: String,
}

/// What the result area currently displays. Error and result content are
/// mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Placeholder,
    Terms(TermsView),
    Failure(String),
}

/// Format a calculation result for display: term values and the sum to four
/// decimal places, the product in exponential notation with four fractional
/// digits.
pub fn render_result(result: &CalculationResult) -> TermsView {
    TermsView {
        term_lines: result
            .terms
            .iter()
            .map(|t| format!("term k={}: {:.4}", t.index, t.value))
            .collect(),
        sum_line: format!("Sum = {:.4}", result.sum),
        product_line: format!("Product = {:.4e}", result.product),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Term;

    #[test]
    fn formats_terms_sum_and_product() {
        let result = CalculationResult {
            terms: vec![
                Term { index: 1, value: 0.5 },
                Term { index: 2, value: 0.25 },
            ],
            sum: 0.75,
            product: 0.125,
        };
        let view = render_result(&result);
        assert_eq!(view.term_lines, vec!["term k=1: 0.5000", "term k=2: 0.2500"]);
        assert_eq!(view.sum_line, "Sum = 0.7500");
        assert_eq!(view.product_line, "Product = 1.2500e-1");
    }

    #[test]
    fn product_uses_exponential_notation_for_large_values() {
        let result = CalculationResult {
            terms: vec![Term { index: 1, value: 720.0 }],
            sum: 720.0,
            product: 720.0,
        };
        let view = render_result(&result);
        assert_eq!(view.product_line, "Product = 7.2000e2");
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = CalculationResult {
            terms: vec![Term { index: 4, value: 2.0 }],
            sum: 2.0,
            product: 2.0,
        };
        assert_eq!(render_result(&result), render_result(&result));
    }

    #[test]
    fn empty_term_list_renders_no_lines() {
        let result = CalculationResult {
            terms: vec![],
            sum: 0.0,
            product: 1.0,
        };
        assert!(render_result(&result).term_lines.is_empty());
    }
}
