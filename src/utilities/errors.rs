//! Error types for the perspective learning system.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the generation service adapter.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No API key was configured or found in the environment.
    #[error("Generation service API key not set; set OPENAI_API_KEY or pass a key explicitly")]
    MissingApiKey,

    /// The HTTP request itself failed (connect, TLS, body read).
    #[error("Generation service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Generation service error ({status}): {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body did not carry the expected content.
    #[error("Malformed generation service response: {detail}")]
    MalformedResponse { detail: String },

    /// The service does not implement the async call variants.
    #[error("Async generation is not supported by this service")]
    AsyncNotSupported,

    /// The blocking entry point could not start its runtime.
    #[error("Failed to start blocking runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Errors from reading or writing persisted profile documents.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Writing the profile document failed.
    #[error("Failed to write profile to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading a persisted profile document failed.
    #[error("Failed to read profile from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serializing the profile to JSON failed.
    #[error("Failed to serialize profile for client {client_id}: {source}")]
    Serialize {
        client_id: String,
        source: serde_json::Error,
    },

    /// A persisted profile document could not be parsed.
    #[error("Failed to parse profile at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors surfaced by the adaptive agent.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Feedback was submitted for a client that was never registered.
    #[error("Client not registered: {client_id}")]
    ClientNotRegistered { client_id: String },

    /// The generation service failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Persisting or loading a profile document failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The profile store failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
