//! # APLS - Adaptive Perspective Learning System
//!
//! An adaptive agent that learns a client's writing-style preferences
//! by diffing generated drafts against human-approved revisions,
//! classifying the edits, and evolving a per-client perspective profile
//! that steers future generation requests.
//!
//! The crate is organized leaf-first:
//!
//! - [`edits`] - word-level edit extraction and classification
//! - [`profile`] - the perspective profile, its store, and persistence
//! - [`service`] - the generation service trait and the OpenAI adapter
//! - [`agent`] - the orchestrating agent
//! - [`utilities`] - error taxonomy, paths, and prompt builders

pub mod agent;
pub mod edits;
pub mod profile;
pub mod service;
pub mod utilities;

pub use agent::AdaptivePerspectiveAgent;
pub use edits::{classify_edit, identify_edit_patterns, EditChanges, EditType};
pub use profile::storage::{InMemoryProfileStore, ProfileStore};
pub use profile::{PerspectivePattern, PerspectiveProfile};
pub use service::{GenerationService, OpenAIService};
pub use utilities::errors::{AgentError, ProfileError, ServiceError};

/// Library version.
pub const VERSION: &str = "0.1.0";
