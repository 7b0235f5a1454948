//! Edit pattern extraction and classification.
//!
//! The extractor aligns an original draft with its approved revision
//! and reports word-level changes; the classifier labels each
//! replacement pair as stylistic or substantive.

pub mod classifier;
pub mod extractor;

pub use classifier::{classify_edit, EditType, DEFAULT_FREQUENCY_THRESHOLD};
pub use extractor::{identify_edit_patterns, EditChanges};
