//! Display formatting helpers.
//!
//! Rupee amounts format through [`panther_core::Amount`]'s `Display`;
//! the helpers here cover dosage strings shown on product detail pages.

use std::fmt::Write as _;

/// Format a gram dosage, e.g. `5 g` / `2.5 g`.
#[must_use]
pub fn format_grams(value: f64) -> String {
    let mut out = String::new();
    if (value.fract()).abs() < f64::EPSILON {
        let _ = write!(out, "{value:.0} g");
    } else {
        let _ = write!(out, "{value} g");
    }
    out
}

/// Format a milligram dosage, e.g. `250 mg`.
#[must_use]
pub fn format_mg(value: u32) -> String {
    format!("{value} mg")
}
