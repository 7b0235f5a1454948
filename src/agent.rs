//! Adaptive perspective learning agent.
//!
//! Orchestrates client registration, profile-steered generation, and
//! the feedback loop that evolves a client's perspective profile: diff
//! the approved revision against the original draft, classify each
//! replacement, fold the results into the profile, detect the approved
//! text's tone, and persist the updated profile.

use std::path::PathBuf;
use std::sync::Arc;

use crate::edits::{classify_edit, identify_edit_patterns, EditType, DEFAULT_FREQUENCY_THRESHOLD};
use crate::profile::storage::{InMemoryProfileStore, ProfileStore};
use crate::profile::PerspectiveProfile;
use crate::service::GenerationService;
use crate::utilities::errors::AgentError;
use crate::utilities::paths::profile_storage_dir;

/// Agent that learns each client's writing-style preferences from
/// editorial feedback.
///
/// Holds the generation service and profile store behind shared
/// handles, so clones are cheap and operate on the same state.
#[derive(Debug, Clone)]
pub struct AdaptivePerspectiveAgent {
    /// External generation service.
    service: Arc<dyn GenerationService>,
    /// Registry of client profiles.
    store: Arc<dyn ProfileStore>,
    /// Directory profile documents are persisted under.
    profile_dir: PathBuf,
    /// Frequency threshold passed to edit classification.
    frequency_threshold: u32,
}

impl AdaptivePerspectiveAgent {
    /// Create an agent with the default in-memory store, the configured
    /// profile directory, and the default classification threshold.
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self::builder(service).build()
    }

    /// Create a builder for configuring an agent.
    pub fn builder(service: Arc<dyn GenerationService>) -> AdaptivePerspectiveAgentBuilder {
        AdaptivePerspectiveAgentBuilder {
            service,
            store: None,
            profile_dir: None,
            frequency_threshold: DEFAULT_FREQUENCY_THRESHOLD,
        }
    }

    /// Register a client, creating a fresh empty profile.
    ///
    /// Re-registration silently replaces any prior profile for the id.
    pub fn register_client(&self, client_id: impl Into<String>) -> Result<(), AgentError> {
        let client_id = client_id.into();
        log::debug!("Registering client '{}'", client_id);
        self.store.put(PerspectiveProfile::new(client_id))?;
        Ok(())
    }

    /// Generate content for a client, steered by their profile.
    ///
    /// An unknown client id is not an error here: the service is called
    /// with an absent profile and degrades to neutral defaults.
    pub fn generate_with_profile(
        &self,
        client_id: &str,
        prompt: &str,
    ) -> Result<String, AgentError> {
        let profile = self.store.get(client_id)?;
        Ok(self.service.generate_content(prompt, profile.as_ref())?)
    }

    /// Learn from an approved revision of a generated draft.
    ///
    /// Extracts word-level edit patterns between `original` and
    /// `approved`, records each replacement on the client's profile
    /// (substantive replacements also extend the vocabulary), updates
    /// the profile's tone from the approved text, and persists the
    /// profile, overwriting its prior document.
    ///
    /// Fails with [`AgentError::ClientNotRegistered`] before any file
    /// write if the client has no profile.
    pub fn learn_from_feedback(
        &self,
        client_id: &str,
        original: &str,
        approved: &str,
    ) -> Result<(), AgentError> {
        let mut profile =
            self.store
                .get(client_id)?
                .ok_or_else(|| AgentError::ClientNotRegistered {
                    client_id: client_id.to_string(),
                })?;

        let changes = identify_edit_patterns(original, approved);
        log::info!("Detected changes for client '{}': {:?}", client_id, changes);

        for (old_word, new_word) in &changes.replacements {
            let pattern_type = classify_edit(old_word, new_word, Some(self.frequency_threshold));
            profile.update_pattern(
                format!("replaces '{}' with '{}'", old_word, new_word),
                pattern_type,
            );
            if pattern_type == EditType::Substantive {
                profile.update_vocab(new_word);
            }
        }

        let tone = self.service.detect_tone(approved)?;
        profile.update_tone(&tone);
        profile.touch();

        self.store.put(profile.clone())?;
        profile.persist(&self.profile_dir)?;
        Ok(())
    }

    /// Fetch a copy of a client's stored profile, if any.
    pub fn profile(&self, client_id: &str) -> Result<Option<PerspectiveProfile>, AgentError> {
        Ok(self.store.get(client_id)?)
    }
}

/// Builder for [`AdaptivePerspectiveAgent`].
pub struct AdaptivePerspectiveAgentBuilder {
    service: Arc<dyn GenerationService>,
    store: Option<Arc<dyn ProfileStore>>,
    profile_dir: Option<PathBuf>,
    frequency_threshold: u32,
}

impl AdaptivePerspectiveAgentBuilder {
    pub fn store(mut self, store: Arc<dyn ProfileStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn profile_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.profile_dir = Some(dir.into());
        self
    }

    pub fn frequency_threshold(mut self, threshold: u32) -> Self {
        self.frequency_threshold = threshold;
        self
    }

    pub fn build(self) -> AdaptivePerspectiveAgent {
        AdaptivePerspectiveAgent {
            service: self.service,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(InMemoryProfileStore::new())),
            profile_dir: self.profile_dir.unwrap_or_else(profile_storage_dir),
            frequency_threshold: self.frequency_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    use tempfile::tempdir;

    use crate::utilities::errors::ServiceError;

    /// Scripted in-process service for driving the feedback loop.
    #[derive(Debug)]
    struct ScriptedService {
        generated: String,
        tone: String,
        /// Prompts seen by `generate_content`, with profile presence.
        prompts: Mutex<Vec<(String, bool)>>,
    }

    impl ScriptedService {
        fn new(generated: &str, tone: &str) -> Self {
            Self {
                generated: generated.to_string(),
                tone: tone.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl GenerationService for ScriptedService {
        fn generate_content(
            &self,
            prompt: &str,
            profile: Option<&PerspectiveProfile>,
        ) -> Result<String, ServiceError> {
            self.prompts
                .lock()
                .unwrap()
                .push((prompt.to_string(), profile.is_some()));
            Ok(self.generated.clone())
        }

        fn detect_tone(&self, _text: &str) -> Result<String, ServiceError> {
            Ok(self.tone.clone())
        }
    }

    fn agent_with(service: Arc<dyn GenerationService>, dir: &Path) -> AdaptivePerspectiveAgent {
        AdaptivePerspectiveAgent::builder(service)
            .profile_dir(dir)
            .build()
    }

    #[test]
    fn test_register_then_generate_passes_profile() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = agent_with(service.clone(), dir.path());

        agent.register_client("acme-001").unwrap();
        let generated = agent
            .generate_with_profile("acme-001", "Our product is great.")
            .unwrap();
        assert_eq!(generated, "A draft.");

        let prompts = service.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].0, "Our product is great.");
        assert!(prompts[0].1, "registered client should carry a profile");
    }

    #[test]
    fn test_generate_for_unknown_client_passes_no_profile() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = agent_with(service.clone(), dir.path());

        agent.generate_with_profile("ghost", "Hello.").unwrap();

        let prompts = service.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(!prompts[0].1);
    }

    #[test]
    fn test_learn_from_feedback_updates_and_persists_profile() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = agent_with(service, dir.path());

        agent.register_client("acme-001").unwrap();
        agent
            .learn_from_feedback(
                "acme-001",
                "Our product is great.",
                "Our platform is innovative.",
            )
            .unwrap();

        let profile = agent.profile("acme-001").unwrap().unwrap();
        assert_eq!(profile.style_tone, "confident");
        assert_eq!(profile.preferred_vocab, vec!["platform", "innovative."]);
        assert_eq!(profile.perspective_patterns.len(), 2);
        assert_eq!(
            profile.perspective_patterns[0].pattern,
            "replaces 'product' with 'platform'"
        );
        assert_eq!(profile.perspective_patterns[0].frequency, 1);
        assert_eq!(
            profile.perspective_patterns[0].pattern_type,
            EditType::Substantive
        );
        assert_eq!(
            profile.perspective_patterns[1].pattern,
            "replaces 'great.' with 'innovative.'"
        );

        // One document per client, reflecting the stored state.
        let persisted = PerspectiveProfile::load(dir.path(), "acme-001")
            .unwrap()
            .unwrap();
        assert_eq!(persisted.style_tone, "confident");
        assert_eq!(persisted.preferred_vocab, profile.preferred_vocab);
    }

    #[test]
    fn test_repeated_feedback_increments_pattern_frequency() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = agent_with(service, dir.path());

        agent.register_client("acme-001").unwrap();
        for _ in 0..2 {
            agent
                .learn_from_feedback(
                    "acme-001",
                    "Our product is great.",
                    "Our platform is innovative.",
                )
                .unwrap();
        }

        let profile = agent.profile("acme-001").unwrap().unwrap();
        assert_eq!(profile.perspective_patterns.len(), 2);
        assert_eq!(profile.perspective_patterns[0].frequency, 2);
        assert_eq!(profile.perspective_patterns[1].frequency, 2);
        // Vocabulary stays distinct across cycles.
        assert_eq!(profile.preferred_vocab.len(), 2);
    }

    #[test]
    fn test_feedback_for_unregistered_client_fails_without_file_write() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = agent_with(service, dir.path());

        let err = agent
            .learn_from_feedback("ghost", "original", "approved")
            .unwrap_err();
        assert!(matches!(
            err,
            AgentError::ClientNotRegistered { ref client_id } if client_id == "ghost"
        ));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_reregistration_replaces_profile() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = agent_with(service, dir.path());

        agent.register_client("acme-001").unwrap();
        agent
            .learn_from_feedback(
                "acme-001",
                "Our product is great.",
                "Our platform is innovative.",
            )
            .unwrap();
        agent.register_client("acme-001").unwrap();

        let profile = agent.profile("acme-001").unwrap().unwrap();
        assert!(profile.style_tone.is_empty());
        assert!(profile.perspective_patterns.is_empty());
    }

    #[test]
    fn test_stylistic_replacements_do_not_extend_vocabulary() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = agent_with(service, dir.path());

        agent.register_client("acme-001").unwrap();
        // "the" to "a" matches the stylistic indicator set.
        agent
            .learn_from_feedback("acme-001", "Ship the product.", "Ship a product.")
            .unwrap();

        let profile = agent.profile("acme-001").unwrap().unwrap();
        assert_eq!(profile.perspective_patterns.len(), 1);
        assert_eq!(
            profile.perspective_patterns[0].pattern_type,
            EditType::Stylistic
        );
        assert!(profile.preferred_vocab.is_empty());
    }

    #[test]
    fn test_configured_threshold_reaches_the_classifier() {
        let dir = tempdir().unwrap();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = AdaptivePerspectiveAgent::builder(service)
            .profile_dir(dir.path())
            .frequency_threshold(2)
            .build();

        agent.register_client("acme-001").unwrap();
        // Neither word is an indicator; a threshold below the default
        // flips the fallback to stylistic and keeps the vocabulary empty.
        agent
            .learn_from_feedback("acme-001", "It was good.", "It was fine.")
            .unwrap();

        let profile = agent.profile("acme-001").unwrap().unwrap();
        assert_eq!(
            profile.perspective_patterns[0].pattern_type,
            EditType::Stylistic
        );
        assert!(profile.preferred_vocab.is_empty());
    }

    #[test]
    fn test_custom_store_is_shared() {
        let dir = tempdir().unwrap();
        let store = InMemoryProfileStore::new();
        let service = Arc::new(ScriptedService::new("A draft.", "confident"));
        let agent = AdaptivePerspectiveAgent::builder(service)
            .store(Arc::new(store.clone()))
            .profile_dir(dir.path())
            .build();

        agent.register_client("acme-001").unwrap();
        assert!(store.contains("acme-001").unwrap());
    }
}
