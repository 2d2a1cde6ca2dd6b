//! Wire response types for `POST /calculate`.
//!
//! The success payload uses the server's literal field names (`terms`,
//! `suma`, `multiplicacion`); the domain-error payload is `{ "error": ... }`
//! and may arrive with any HTTP status.

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One evaluated point of the sequence.
///
/// On the wire a term is an array `[index, value, ...]`; the server appends
/// the substituted symbolic expression as a third element, which the client
/// accepts and ignores along with anything after it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub index: i64,
    pub value: f64,
}

impl<'de> Deserialize<'de> for Term {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TermVisitor;

        impl<'de> Visitor<'de> for TermVisitor {
            type Value = Term;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array [index, value, ...]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Term, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let index = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let value = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Term { index, value })
            }
        }

        deserializer.deserialize_seq(TermVisitor)
    }
}

/// A successful calculation: the terms in evaluation order plus their
/// aggregate sum and product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalculationResult {
    pub terms: Vec<Term>,
    #[serde(rename = "suma")]
    pub sum: f64,
    #[serde(rename = "multiplicacion")]
    pub product: f64,
}

/// Either shape the server can answer with. Variants are tried in order, so
/// a payload carrying an `error` field is treated as a rejection even if it
/// also carries data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CalculationReply {
    Rejected { error: String },
    Computed(CalculationResult),
}
