//! OpenAI-compatible document classifier
//!
//! Sends a segment's text to a chat completion endpoint and parses the
//! response against the closed category set. Every failure path degrades to
//! `Category::Uncategorized` so classification never aborts a run.

use crate::classify::{Category, Classifier};
use crate::config::ClassifierConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs, Stop,
};
use async_openai::{Client, config::OpenAIConfig};

/// Classifier backed by an OpenAI-compatible chat completion API
pub struct OpenAiClassifier {
    client: Client<OpenAIConfig>,
    model: String,
    max_input_chars: usize,
}

impl OpenAiClassifier {
    /// Create a classifier from config plus a resolved API key
    pub fn new(config: &ClassifierConfig, api_key: &str) -> Self {
        let openai_config = if let Some(base_url) = &config.base_url {
            OpenAIConfig::new()
                .with_api_key(api_key)
                .with_api_base(base_url)
        } else {
            OpenAIConfig::new().with_api_key(api_key)
        };

        Self {
            client: Client::with_config(openai_config),
            model: config.model.clone(),
            max_input_chars: config.max_input_chars,
        }
    }

    fn build_prompt(&self, text: &str) -> String {
        let category_list = Category::ALL
            .iter()
            .map(|c| format!("- {}", c))
            .collect::<Vec<_>>()
            .join("\n");

        // Long segments are capped; the opening pages carry the title and
        // letterhead that identify the document type
        let text = truncate_chars(text, self.max_input_chars);

        format!(
            "You are an assistant that classifies documents into one of the following categories:\n\
             {}\n\n\
             Read the document text below and provide the most appropriate category from the list above. \
             Respond only with the category name.\n\n\
             Document Text:\n{}",
            category_list, text
        )
    }

    async fn request_category(&self, text: &str) -> std::result::Result<Category, String> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: ChatCompletionRequestSystemMessageContent::Text(
                    "You are an intelligent assistant.".to_string(),
                ),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: ChatCompletionRequestUserMessageContent::Text(self.build_prompt(text)),
                name: None,
            }),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(10u32)
            .temperature(0.0)
            .stop(Stop::String("\n".to_string()))
            .build()
            .map_err(|e| e.to_string())?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| e.to_string())?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| "no content in chat response".to_string())?;

        let label = content.trim();
        label
            .parse::<Category>()
            .map_err(|_| format!("unexpected category returned: {}", label))
    }
}

impl Classifier for OpenAiClassifier {
    async fn classify(&self, text: &str) -> Category {
        match self.request_category(text).await {
            Ok(category) => category,
            Err(e) => {
                log::warn!("Classification degraded to Uncategorized: {}", e);
                Category::Uncategorized
            }
        }
    }
}

/// Truncate at a char boundary without splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClassifierConfig;

    #[test]
    fn test_prompt_lists_all_categories() {
        let classifier = OpenAiClassifier::new(&ClassifierConfig::default(), "test-key");
        let prompt = classifier.build_prompt("some document text");

        for category in Category::ALL {
            assert!(prompt.contains(category.as_str()));
        }
        assert!(prompt.contains("some document text"));
        assert!(!prompt.contains("Uncategorized"));
    }

    #[test]
    fn test_prompt_truncates_long_text() {
        let config = ClassifierConfig {
            max_input_chars: 100,
            ..Default::default()
        };
        let classifier = OpenAiClassifier::new(&config, "test-key");
        let long_text = "x".repeat(10_000);
        let prompt = classifier.build_prompt(&long_text);

        assert!(prompt.len() < 1_000);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 5), "");
    }
}
