//! Per-client perspective profiles.
//!
//! A [`PerspectiveProfile`] records the tone, vocabulary, and recurring
//! edit patterns learned for one client. Profiles are mutated through
//! the agent's feedback path and persisted wholesale as one
//! pretty-printed JSON document per client.

pub mod storage;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::edits::EditType;
use crate::utilities::errors::ProfileError;

/// A recurring edit pattern observed in a client's feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerspectivePattern {
    /// Exact pattern text, e.g. `replaces 'product' with 'platform'`.
    pub pattern: String,
    /// Number of feedback cycles in which this pattern was observed.
    pub frequency: u32,
    /// Classification recorded when the pattern was first observed.
    #[serde(rename = "type")]
    pub pattern_type: EditType,
}

/// Evolving record of one client's writing-style preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerspectiveProfile {
    /// Opaque client identifier; immutable after creation.
    pub client_id: String,
    /// Preferred tone, empty until the first detected tone arrives.
    #[serde(default)]
    pub style_tone: String,
    /// Distinct preferred words in first-seen order.
    #[serde(default)]
    pub preferred_vocab: Vec<String>,
    /// Recurring edit patterns, at most one record per pattern text.
    #[serde(default)]
    pub perspective_patterns: Vec<PerspectivePattern>,
    /// Refreshed on every pattern or tone mutation.
    pub last_updated: DateTime<Utc>,
}

impl PerspectiveProfile {
    /// Create an empty profile for the given client.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            style_tone: String::new(),
            preferred_vocab: Vec::new(),
            perspective_patterns: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    /// Record an observed edit pattern.
    ///
    /// If a record with the same pattern text exists its frequency is
    /// incremented and its recorded type kept; otherwise a new record is
    /// appended with frequency 1. Always refreshes `last_updated`.
    pub fn update_pattern(&mut self, pattern_text: impl Into<String>, pattern_type: EditType) {
        let pattern_text = pattern_text.into();
        match self
            .perspective_patterns
            .iter_mut()
            .find(|record| record.pattern == pattern_text)
        {
            Some(record) => record.frequency += 1,
            None => self.perspective_patterns.push(PerspectivePattern {
                pattern: pattern_text,
                frequency: 1,
                pattern_type,
            }),
        }
        self.touch();
    }

    /// Add a word to the preferred vocabulary if it is not already there.
    pub fn update_vocab(&mut self, new_word: &str) {
        if !self.preferred_vocab.iter().any(|word| word == new_word) {
            self.preferred_vocab.push(new_word.to_string());
        }
    }

    /// Overwrite the preferred tone.
    ///
    /// Empty tones and tones equal to the current value are ignored;
    /// `last_updated` is refreshed only when the tone actually changes.
    pub fn update_tone(&mut self, tone: &str) {
        if !tone.is_empty() && tone != self.style_tone {
            self.style_tone = tone.to_string();
            self.touch();
        }
    }

    /// Refresh `last_updated` to the current time.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    /// File name this profile persists under: `profile_<client_id>.json`.
    pub fn file_name(&self) -> String {
        format!("profile_{}.json", self.client_id)
    }

    /// Write the profile as a pretty-printed JSON document under
    /// `directory`, overwriting any existing file.
    ///
    /// Creates the directory if it does not exist. Returns the written
    /// path.
    pub fn persist(&self, directory: &Path) -> Result<PathBuf, ProfileError> {
        fs::create_dir_all(directory).map_err(|source| ProfileError::Write {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = directory.join(self.file_name());
        let document =
            serde_json::to_string_pretty(self).map_err(|source| ProfileError::Serialize {
                client_id: self.client_id.clone(),
                source,
            })?;
        fs::write(&path, document).map_err(|source| ProfileError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Read a previously persisted profile back from `directory`.
    ///
    /// Returns `Ok(None)` if no document exists for the client.
    pub fn load(directory: &Path, client_id: &str) -> Result<Option<Self>, ProfileError> {
        let path = directory.join(format!("profile_{}.json", client_id));
        if !path.exists() {
            return Ok(None);
        }
        let document = fs::read_to_string(&path).map_err(|source| ProfileError::Read {
            path: path.clone(),
            source,
        })?;
        let profile = serde_json::from_str(&document)
            .map_err(|source| ProfileError::Parse { path, source })?;
        Ok(Some(profile))
    }
}
