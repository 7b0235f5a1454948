//! Shared utilities: error taxonomy, storage paths, and prompt builders.

pub mod errors;
pub mod paths;
pub mod prompts;

pub use errors::{AgentError, ProfileError, ServiceError};
