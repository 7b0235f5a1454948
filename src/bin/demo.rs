//! Adaptive perspective learning demo binary.
//!
//! Registers a client, generates a draft, feeds back a human-approved
//! revision, and prints the evolved profile as indented JSON.
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY` - Generation service credential (required)
//! - `APLS_STORAGE_DIR` - Profile directory (default: current directory)
//! - `RUST_LOG` - Log filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin demo
//! ```

use std::sync::Arc;

use apls::{AdaptivePerspectiveAgent, OpenAIService};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let service = Arc::new(OpenAIService::default());
    let agent = AdaptivePerspectiveAgent::new(service);

    let client_id = "acme-001";
    agent.register_client(client_id)?;

    let prompt = "Our product is great.";
    let generated = agent.generate_with_profile(client_id, prompt)?;
    println!("Generated Draft:\n{}", generated);

    // Simulated human-approved revision of the generated draft.
    let approved_version = "Our platform is innovative.";
    agent.learn_from_feedback(client_id, prompt, approved_version)?;

    let profile = agent
        .profile(client_id)?
        .expect("profile exists after feedback");
    println!("\nUpdated Client Profile:");
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}
