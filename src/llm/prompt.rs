//! Prompt builder for number phrasing and whole-text rewriting.
//!
//! [`PromptBuilder`] is pure formatting: it turns a (number, context) pair
//! or an (original text, answer records) pair into a [`ChatRequest`].  No
//! I/O happens here, so the wording can be tested without a service.

use crate::config::LlmConfig;
use crate::llm::client::ChatRequest;

// ---------------------------------------------------------------------------
// System instructions
// ---------------------------------------------------------------------------

const PHRASE_SYSTEM: &str = "You are a linguist and a helpful assistant.";

const REWRITE_SYSTEM: &str = "\
You are a linguist preparing text for a speech synthesizer.
You rewrite text exactly, changing nothing except how numbers are written.";

// ---------------------------------------------------------------------------
// Few-shot examples
// ---------------------------------------------------------------------------

const PHRASE_EXAMPLES: &str = "
Examples:
Number: \"100\", Context: \"The price is $ 100 , and\" -> one hundred dollars
Number: \"3\", Context: \"I bought 3 items on\" -> three
Number: \"2024-05-08\", Context: \"items on 2024-05-08 .\" -> the eighth of May, twenty twenty-four
Number: \"10.05.2025\", Context: \"meeting on 10.05.2025 at\" -> the tenth of May, twenty twenty-five
Number: \"30C\", Context: \"temperature reached 30C today\" -> thirty degrees Celsius
Number: \"200\", Context: \"top speed is 200 km / h\" -> two hundred
Number: \"3.5\", Context: \"weighs 3.5 kg\" -> three point five
";

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds the per-number phrase request and the final rewrite request.
///
/// # Example
/// ```rust
/// use speech_numbers::config::LlmConfig;
/// use speech_numbers::llm::PromptBuilder;
///
/// let builder = PromptBuilder::from_config(&LlmConfig::default());
/// let request = builder.phrase_request("100", "The price is $ 100 , and");
/// assert!(request.user.contains("Number: \"100\""));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    temperature: f32,
    phrase_max_tokens: u32,
    rewrite_max_tokens: u32,
}

impl PromptBuilder {
    pub fn new(temperature: f32, phrase_max_tokens: u32, rewrite_max_tokens: u32) -> Self {
        Self {
            temperature,
            phrase_max_tokens,
            rewrite_max_tokens,
        }
    }

    /// Take sampling parameters from the LLM settings.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            config.temperature,
            config.phrase_max_tokens,
            config.rewrite_max_tokens,
        )
    }

    /// Ask for the spoken form of `number` as used in `context`.
    pub fn phrase_request(&self, number: &str, context: &str) -> ChatRequest {
        let mut user = String::with_capacity(1024);
        user.push_str(
            "Write how the number below should be read aloud by a speech synthesizer.\n\
             Use the context to decide whether it is a date, a price, a quantity, \
             a time or a measurement, and include the unit or currency when the \
             context gives one.\n\
             Reply with ONLY the spoken phrase: no extra words, no quotes, no punctuation.\n",
        );
        user.push_str(PHRASE_EXAMPLES);
        user.push_str(&format!(
            "\nNumber: \"{number}\", Context: \"{context}\" ->"
        ));

        ChatRequest {
            system: PHRASE_SYSTEM.to_string(),
            user,
            max_tokens: self.phrase_max_tokens,
            temperature: self.temperature,
        }
    }

    /// Ask for `text` with every number replaced by its spoken phrase.
    ///
    /// `answers` are the rendered `Number: …, Context: …, Answer: …` records
    /// from the phrasing stage, one per line.
    pub fn rewrite_request(&self, text: &str, answers: &[String]) -> ChatRequest {
        let mut user = String::with_capacity(text.len() * 2 + 512);
        user.push_str(
            "Rewrite the original text below so that every number is replaced, in place, \
             by its spoken-language form.\n\
             Use the spoken forms listed under \"Numbers\".\n\
             Keep all other words and punctuation exactly as they are.\n\
             Do not add a greeting, an explanation or any commentary. \
             Stop after the rewritten text.\n",
        );
        user.push_str("\nOriginal text:\n");
        user.push_str(text);
        user.push_str("\n\nNumbers:\n");
        for answer in answers {
            user.push_str(answer);
            user.push('\n');
        }
        user.push_str("\nRewritten text:\n");

        ChatRequest {
            system: REWRITE_SYSTEM.to_string(),
            user,
            max_tokens: self.rewrite_max_tokens,
            temperature: self.temperature,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PromptBuilder {
        PromptBuilder::new(0.5, 40, 800)
    }

    #[test]
    fn phrase_request_embeds_number_and_context() {
        let req = builder().phrase_request("2024-05-08", "items on 2024-05-08 .");

        assert_eq!(req.system, PHRASE_SYSTEM);
        assert!(req
            .user
            .ends_with("Number: \"2024-05-08\", Context: \"items on 2024-05-08 .\" ->"));
    }

    #[test]
    fn phrase_request_carries_examples_and_rules() {
        let req = builder().phrase_request("3", "I bought 3 items");

        assert!(req.user.contains("Examples:"));
        assert!(req.user.contains("one hundred dollars"));
        assert!(req.user.contains("date, a price, a quantity"));
        assert!(req.user.contains("Reply with ONLY the spoken phrase"));
    }

    #[test]
    fn phrase_request_uses_phrase_budget() {
        let req = builder().phrase_request("3", "I bought 3 items");
        assert_eq!(req.max_tokens, 40);
        assert_eq!(req.temperature, 0.5);
    }

    #[test]
    fn phrase_request_is_deterministic() {
        let b = builder();
        assert_eq!(b.phrase_request("7", "a 7 b"), b.phrase_request("7", "a 7 b"));
    }

    #[test]
    fn rewrite_request_lists_every_answer_after_the_text() {
        let answers = vec![
            "Number: 100, Context: price is $ 100 , and, Answer: one hundred dollars".to_string(),
            "Number: 3, Context: I bought 3 items, Answer: three".to_string(),
        ];
        let text = "The price is $100, and I bought 3 items.";
        let req = builder().rewrite_request(text, &answers);

        let text_at = req.user.find(text).expect("original text present");
        let first_at = req.user.find(&answers[0]).expect("first answer present");
        let second_at = req.user.find(&answers[1]).expect("second answer present");
        assert!(text_at < first_at && first_at < second_at);
        assert!(req.user.trim_end().ends_with("Rewritten text:"));
    }

    #[test]
    fn rewrite_request_forbids_commentary() {
        let req = builder().rewrite_request("It costs 5.", &[]);

        assert_eq!(req.system, REWRITE_SYSTEM);
        assert!(req.user.contains("Do not add a greeting"));
        assert!(req.user.contains("Stop after the rewritten text."));
        assert_eq!(req.max_tokens, 800);
    }

    #[test]
    fn from_config_copies_sampling_parameters() {
        let config = LlmConfig::default();
        let req = PromptBuilder::from_config(&config).phrase_request("1", "1");

        assert_eq!(req.max_tokens, config.phrase_max_tokens);
        assert_eq!(req.temperature, config.temperature);
    }
}
