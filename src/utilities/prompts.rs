//! Prompt construction for the generation service.
//!
//! The exact wording of these prompts is part of the system's external
//! contract with the generation service.

use crate::profile::PerspectiveProfile;

/// Tone used when a client has no profile or an empty tone.
pub const NEUTRAL_TONE: &str = "neutral";

/// Build the system instruction that steers generation toward a
/// client's tone and vocabulary.
///
/// An absent profile, or one with an empty tone, degrades to the
/// neutral directive; the vocabulary list is comma-joined and may be
/// empty.
pub fn style_directive(profile: Option<&PerspectiveProfile>) -> String {
    let tone = profile
        .map(|p| p.style_tone.as_str())
        .filter(|tone| !tone.is_empty())
        .unwrap_or(NEUTRAL_TONE);
    let vocabulary = profile
        .map(|p| p.preferred_vocab.join(", "))
        .unwrap_or_default();
    format!(
        "Generate content in a '{}' tone using client vocabulary: {}.",
        tone, vocabulary
    )
}

/// Build the probe that asks the service to name a text's dominant tone
/// in a single word.
pub fn tone_probe(text: &str) -> String {
    format!(
        "What is the tone of the following sentence? Respond with a single word tone: '{}'",
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_directive_without_profile_is_neutral() {
        assert_eq!(
            style_directive(None),
            "Generate content in a 'neutral' tone using client vocabulary: ."
        );
    }

    #[test]
    fn test_style_directive_with_empty_tone_is_neutral() {
        let profile = PerspectiveProfile::new("acme-001");
        assert_eq!(
            style_directive(Some(&profile)),
            "Generate content in a 'neutral' tone using client vocabulary: ."
        );
    }

    #[test]
    fn test_style_directive_embeds_tone_and_vocabulary() {
        let mut profile = PerspectiveProfile::new("acme-001");
        profile.update_tone("confident");
        profile.update_vocab("platform");
        profile.update_vocab("innovative.");
        assert_eq!(
            style_directive(Some(&profile)),
            "Generate content in a 'confident' tone using client vocabulary: platform, innovative.."
        );
    }

    #[test]
    fn test_tone_probe_embeds_text() {
        assert_eq!(
            tone_probe("Our platform is innovative."),
            "What is the tone of the following sentence? Respond with a single word tone: 'Our platform is innovative.'"
        );
    }
}
