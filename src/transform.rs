//! Attribute value formatting shared by the markup and the document.

use std::fmt::{self, Display};

/// One step of an SVG `transform` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate(f64, f64),
    Rotate(f64),
    Scale(f64),
}

impl Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Translate(x, y) => write!(f, "translate({} {})", fmt_num(*x), fmt_num(*y)),
            Transform::Rotate(deg) => write!(f, "rotate({})", fmt_num(*deg)),
            Transform::Scale(s) => write!(f, "scale({})", fmt_num(*s)),
        }
    }
}

/// Joins transform steps into an attribute value, applied left to right as
/// SVG reads them.
pub fn transform_list(steps: &[Transform]) -> String {
    steps
        .iter()
        .map(|step| step.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
