//! Idea and script generation helpers.
//!
//! Each helper builds one prompt, makes one provider call, and post-processes
//! the reply. All language understanding is delegated to the providers.

use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use futures::StreamExt;

/// Number of ideas returned per topic.
const IDEA_COUNT: usize = 4;

/// Token limit and temperature for script generation.
const SCRIPT_MAX_TOKENS: i32 = 3000;
const SCRIPT_TEMPERATURE: f32 = 1.0;

/// Generate exactly four one-line video ideas for a topic.
///
/// The provider reply is split into lines, cleaned of bullet characters, and
/// padded with placeholder ideas when it comes up short.
pub async fn generate_ideas(
    provider: &dyn TextProvider,
    topic: &str,
) -> Result<Vec<String>, ProviderError> {
    let prompt = format!(
        "Create four YouTube script ideas about {}. Each idea must be on one line only.",
        topic
    );

    let reply = provider
        .generate(&prompt, &GenerationParams::default())
        .await?;

    let mut ideas = clean_idea_lines(&reply);

    // Pad with placeholders when the model returns fewer than four lines.
    // The 1-based index continues from the count of real ideas.
    while ideas.len() < IDEA_COUNT {
        ideas.push(format!("Example idea {} for {}", ideas.len() + 1, topic));
    }
    ideas.truncate(IDEA_COUNT);

    Ok(ideas)
}

/// Split a provider reply into idea lines.
///
/// Whitespace-only lines are dropped; surviving lines are trimmed of
/// surrounding `-`, `•`, and space characters. A line consisting solely of
/// bullet characters survives as an empty entry.
fn clean_idea_lines(reply: &str) -> Vec<String> {
    reply
        .trim()
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim_matches(|c: char| c == '-' || c == '•' || c == ' ')
                .to_string()
        })
        .collect()
}

/// Generate a full video script for a chosen idea.
///
/// The provider is invoked in streaming mode; fragments are concatenated in
/// arrival order and the result is whitespace-trimmed. The length and content
/// constraints in the prompt are instructions to the model, not guarantees.
pub async fn generate_script(
    provider: &dyn TextProvider,
    idea: &str,
) -> Result<String, ProviderError> {
    let prompt = format!(
        "Write a YouTube script for {}. \
         Include an engaging title at the top. \
         The script must be emotional, story-driven, under 3000 characters, \
         and contain no music cues, brackets, or scene descriptions.",
        idea
    );

    let params = GenerationParams {
        temperature: Some(SCRIPT_TEMPERATURE),
        max_tokens: Some(SCRIPT_MAX_TOKENS),
    };

    let mut stream = provider.generate_stream(&prompt, &params).await?;

    let mut script = String::new();
    while let Some(fragment) = stream.next().await {
        script.push_str(&fragment?);
    }

    Ok(script.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;

    #[tokio::test]
    async fn ideas_are_cleaned_and_padded() {
        let provider = MockTextProvider::with_reply("- Idea A\n• Idea B\n\nIdea C");

        let ideas = generate_ideas(&provider, "space travel").await.unwrap();

        assert_eq!(
            ideas,
            vec![
                "Idea A",
                "Idea B",
                "Idea C",
                "Example idea 4 for space travel",
            ]
        );
    }

    #[tokio::test]
    async fn empty_reply_yields_four_placeholders() {
        let provider = MockTextProvider::with_reply("");

        let ideas = generate_ideas(&provider, "cooking").await.unwrap();

        assert_eq!(
            ideas,
            vec![
                "Example idea 1 for cooking",
                "Example idea 2 for cooking",
                "Example idea 3 for cooking",
                "Example idea 4 for cooking",
            ]
        );
    }

    #[tokio::test]
    async fn long_replies_are_truncated_to_four() {
        let reply = (1..=10)
            .map(|n| format!("Idea {}", n))
            .collect::<Vec<_>>()
            .join("\n");
        let provider = MockTextProvider::with_reply(reply);

        let ideas = generate_ideas(&provider, "history").await.unwrap();

        assert_eq!(ideas, vec!["Idea 1", "Idea 2", "Idea 3", "Idea 4"]);
    }

    #[tokio::test]
    async fn single_line_pads_from_index_two() {
        let provider = MockTextProvider::with_reply("Only one idea");

        let ideas = generate_ideas(&provider, "gardening").await.unwrap();

        assert_eq!(ideas[0], "Only one idea");
        assert_eq!(ideas[1], "Example idea 2 for gardening");
        assert_eq!(ideas[3], "Example idea 4 for gardening");
    }

    #[tokio::test]
    async fn bullet_only_line_survives_as_empty_entry() {
        let provider = MockTextProvider::with_reply("First\n---\nSecond");

        let ideas = generate_ideas(&provider, "music").await.unwrap();

        assert_eq!(ideas[0], "First");
        assert_eq!(ideas[1], "");
        assert_eq!(ideas[2], "Second");
        assert_eq!(ideas[3], "Example idea 4 for music");
    }

    #[tokio::test]
    async fn idea_errors_propagate() {
        let provider = MockTextProvider::failing();

        let result = generate_ideas(&provider, "space travel").await;

        assert!(matches!(result, Err(ProviderError::ApiError(_))));
    }

    #[tokio::test]
    async fn script_concatenates_fragments_in_order() {
        let provider =
            MockTextProvider::with_fragments(vec!["The Day", " Everything", " Changed"]);

        let script = generate_script(&provider, "a comeback story").await.unwrap();

        assert_eq!(script, "The Day Everything Changed");
    }

    #[tokio::test]
    async fn script_is_whitespace_trimmed() {
        let provider = MockTextProvider::with_fragments(vec!["  Title\n", "Body text\n\n"]);

        let script = generate_script(&provider, "an idea").await.unwrap();

        assert_eq!(script, "Title\nBody text");
    }

    #[tokio::test]
    async fn mid_stream_errors_abort_the_script() {
        let provider = MockTextProvider::with_fragments_then_error(vec!["A partial", " script"]);

        let result = generate_script(&provider, "an idea").await;

        assert!(matches!(result, Err(ProviderError::NetworkError(_))));
    }

    #[tokio::test]
    async fn script_errors_propagate() {
        let provider = MockTextProvider::failing();

        let result = generate_script(&provider, "an idea").await;

        assert!(matches!(result, Err(ProviderError::ApiError(_))));
    }

    #[test]
    fn clean_strips_bullets_and_drops_blank_lines() {
        let lines = clean_idea_lines("  - First idea \n\n   \n• Second idea\nThird");

        assert_eq!(lines, vec!["First idea", "Second idea", "Third"]);
    }
}
