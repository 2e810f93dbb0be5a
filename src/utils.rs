//! Pure helpers behind the `/average` and `/reverse` endpoints.

use thiserror::Error;

/// A well-typed argument that the helper cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidArgument {
    pub message: String,
}

impl InvalidArgument {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Arithmetic mean of `numbers`.
///
/// Returns `InvalidArgument` when `numbers` is empty or the mean is not a
/// finite number (non-finite input, or a sum that overflows `f64`).
///
/// ```
/// use ci_demo_api::utils::calculate_average;
///
/// assert_eq!(calculate_average(&[10.0, 20.0, 30.0]), Ok(20.0));
/// assert!(calculate_average(&[]).is_err());
/// ```
pub fn calculate_average(numbers: &[f64]) -> Result<f64, InvalidArgument> {
    if numbers.is_empty() {
        return Err(InvalidArgument::new("Numbers list must not be empty"));
    }
    let sum: f64 = numbers.iter().sum();
    let average = sum / numbers.len() as f64;
    if !average.is_finite() {
        return Err(InvalidArgument::new("Average is not a finite number"));
    }
    Ok(average)
}

/// Reverse `text` by Unicode scalar value.
///
/// Each `char` keeps its encoding, so the result is always valid UTF-8, but
/// grapheme clusters made of several scalars (combining marks, ZWJ emoji)
/// come out with their parts in reverse order.
///
/// ```
/// use ci_demo_api::utils::reverse_string;
///
/// assert_eq!(reverse_string("FastAPI"), "IPAtsaF");
/// ```
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}
