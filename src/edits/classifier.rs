//! Edit classification.
//!
//! Labels a replacement pair as stylistic or substantive. Two fixed
//! indicator lists are consulted first, stylistic winning when both
//! match; anything else falls through to a frequency-threshold rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Words that mark a replacement as stylistic.
pub const STYLISTIC_INDICATORS: &[&str] = &["and", "is", "the", "a"];

/// Words that mark a replacement as substantive.
pub const SUBSTANTIVE_INDICATORS: &[&str] = &["optimize", "strategic", "platform", "innovative"];

/// Frequency threshold applied when no indicator list matches.
pub const DEFAULT_FREQUENCY_THRESHOLD: u32 = 3;

/// The nature of a recorded edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditType {
    /// Wording or phrasing change with no shift in meaning.
    Stylistic,
    /// Change that shifts meaning or introduces domain vocabulary.
    Substantive,
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditType::Stylistic => write!(f, "stylistic"),
            EditType::Substantive => write!(f, "substantive"),
        }
    }
}

/// Classify an `(old, new)` replacement pair.
///
/// Indicator membership is case-insensitive and checked in order,
/// stylistic first, then substantive. Pairs matching neither list fall
/// back on the frequency threshold: stylistic below
/// [`DEFAULT_FREQUENCY_THRESHOLD`], substantive otherwise. A `None`
/// threshold means the default.
pub fn classify_edit(old_word: &str, new_word: &str, frequency_threshold: Option<u32>) -> EditType {
    let threshold = frequency_threshold.unwrap_or(DEFAULT_FREQUENCY_THRESHOLD);
    let old = old_word.to_lowercase();
    let new = new_word.to_lowercase();

    if STYLISTIC_INDICATORS.contains(&old.as_str()) || STYLISTIC_INDICATORS.contains(&new.as_str())
    {
        EditType::Stylistic
    } else if SUBSTANTIVE_INDICATORS.contains(&old.as_str())
        || SUBSTANTIVE_INDICATORS.contains(&new.as_str())
    {
        EditType::Substantive
    } else if threshold < DEFAULT_FREQUENCY_THRESHOLD {
        EditType::Stylistic
    } else {
        EditType::Substantive
    }
}
