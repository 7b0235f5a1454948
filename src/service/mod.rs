//! Generation service adapters.
//!
//! [`GenerationService`] is the seam between the agent and an external
//! text-generation API: one call produces profile-steered content, the
//! other names the dominant tone of a text. The synchronous methods are
//! the required surface; implementations with an async transport expose
//! it through the `a`-prefixed variants and block on them in the sync
//! entry points.

pub mod openai;

use std::fmt;

use async_trait::async_trait;

use crate::profile::PerspectiveProfile;
use crate::utilities::errors::ServiceError;

pub use openai::OpenAIService;

/// External text-generation service.
#[async_trait]
pub trait GenerationService: Send + Sync + fmt::Debug {
    /// Generate content for `prompt`, steered by the client profile.
    ///
    /// An absent profile, or one with an empty tone, degrades to a
    /// neutral style directive. Blocks until the service responds or
    /// fails; errors propagate to the caller unchanged.
    fn generate_content(
        &self,
        prompt: &str,
        profile: Option<&PerspectiveProfile>,
    ) -> Result<String, ServiceError>;

    /// Name the dominant tone of `text` in a single lowercase word.
    fn detect_tone(&self, text: &str) -> Result<String, ServiceError>;

    /// Async variant of [`generate_content`](Self::generate_content).
    ///
    /// Implementations without an async transport keep the default,
    /// which reports [`ServiceError::AsyncNotSupported`].
    async fn agenerate_content(
        &self,
        prompt: &str,
        profile: Option<&PerspectiveProfile>,
    ) -> Result<String, ServiceError> {
        let _ = (prompt, profile);
        Err(ServiceError::AsyncNotSupported)
    }

    /// Async variant of [`detect_tone`](Self::detect_tone).
    async fn adetect_tone(&self, text: &str) -> Result<String, ServiceError> {
        let _ = text;
        Err(ServiceError::AsyncNotSupported)
    }
}
