// src/categorizer/mod.rs
// Categorization pipeline: detect -> prompt -> categorize -> translate -> assemble.
//
// Only the categorization call can fail the pipeline. Language detection and
// path translation degrade to safe defaults instead of surfacing errors.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::language::{detect_language, LanguageCode};
use crate::llm::{CompletionProvider, LlmError, CATEGORIZE_MAX_TOKENS, TRANSLATE_MAX_TOKENS};
use crate::prompt::{build_categorization_prompt, build_translation_prompt, PromptContent};

/// Title used when a folder path yields no usable segments.
const FALLBACK_TITLE: &str = "Imported Content";

/// Immutable input to one categorization run.
#[derive(Debug, Clone)]
pub struct ContentInput {
    pub caption: String,
    pub hashtags: Vec<String>,
    pub keywords: Vec<String>,
    pub url: Option<String>,
    pub user_language: LanguageCode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizationResult {
    /// Final path, possibly translated into the user's language.
    pub folder_path: String,
    /// Path as returned by the categorization call, before translation.
    pub original_path: String,
    pub detected_language: LanguageCode,
    pub user_language: LanguageCode,
    /// Path segments, trimmed, empties dropped.
    pub keywords: Vec<String>,
    /// Last path segment.
    pub title: String,
}

pub struct Categorizer {
    provider: Arc<dyn CompletionProvider>,
}

impl Categorizer {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Run the full pipeline for one post.
    ///
    /// Translation only runs when the user wants a non-English language that
    /// differs from the detected content language; its failures never fail
    /// the request.
    pub async fn categorize(
        &self,
        input: &ContentInput,
    ) -> Result<CategorizationResult, LlmError> {
        let combined = combined_text(input);
        let detected = detect_language(&combined);

        info!(
            detected = detected.as_str(),
            user = input.user_language.as_str(),
            sample = %combined.chars().take(100).collect::<String>(),
            "language detection"
        );

        let content = PromptContent::new(
            &input.caption,
            &input.hashtags,
            &input.keywords,
            input.url.as_deref(),
        );
        let prompt = build_categorization_prompt(detected, &content, input.user_language);

        let original_path = self
            .provider
            .complete(&prompt, CATEGORIZE_MAX_TOKENS)
            .await?
            .trim()
            .to_string();
        if original_path.is_empty() {
            return Err(LlmError::MalformedResponse);
        }

        let translated_path = if input.user_language != LanguageCode::En
            && detected != input.user_language
        {
            self.translate_path(&original_path, input.user_language).await
        } else {
            original_path.clone()
        };

        let result = assemble(&original_path, &translated_path, detected, input.user_language);
        info!(
            folder_path = %result.folder_path,
            detected = result.detected_language.as_str(),
            "categorization complete"
        );
        Ok(result)
    }

    /// Translate a folder path, best-effort. No-op for English targets and
    /// empty paths; any failure falls back to the original path unchanged.
    pub async fn translate_path(&self, folder_path: &str, target: LanguageCode) -> String {
        if target == LanguageCode::En || folder_path.is_empty() {
            return folder_path.to_string();
        }

        let prompt = build_translation_prompt(folder_path, target);
        match self.provider.complete(&prompt, TRANSLATE_MAX_TOKENS).await {
            Ok(translated) if !translated.trim().is_empty() => translated.trim().to_string(),
            Ok(_) => folder_path.to_string(),
            Err(err) => {
                warn!(
                    error = %err,
                    target = target.as_str(),
                    "path translation failed, keeping original path"
                );
                folder_path.to_string()
            }
        }
    }
}

fn combined_text(input: &ContentInput) -> String {
    let mut parts = Vec::with_capacity(1 + input.hashtags.len() + input.keywords.len());
    parts.push(input.caption.clone());
    parts.extend(input.hashtags.iter().cloned());
    parts.extend(input.keywords.iter().cloned());
    parts.join(" ")
}

/// Derive keywords and title from the final path and package the result.
/// Pure function, no LLM calls.
pub fn assemble(
    original_path: &str,
    translated_path: &str,
    detected_language: LanguageCode,
    user_language: LanguageCode,
) -> CategorizationResult {
    let keywords: Vec<String> = translated_path
        .split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    let title = keywords
        .last()
        .cloned()
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    CategorizationResult {
        folder_path: translated_path.to_string(),
        original_path: original_path.to_string(),
        detected_language,
        user_language,
        keywords,
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_splits_and_trims_segments() {
        let result = assemble(
            "Recipes/Desserts/Chocolate Cake",
            " Recipes / Desserts / Chocolate Cake ",
            LanguageCode::En,
            LanguageCode::En,
        );
        assert_eq!(result.keywords, vec!["Recipes", "Desserts", "Chocolate Cake"]);
        assert_eq!(result.title, "Chocolate Cake");
    }

    #[test]
    fn test_assemble_single_segment() {
        let result = assemble("Recipes", "Recipes", LanguageCode::En, LanguageCode::En);
        assert_eq!(result.keywords, vec!["Recipes"]);
        assert_eq!(result.title, "Recipes");
    }

    #[test]
    fn test_assemble_drops_empty_segments() {
        let result = assemble("a/b/", "a/b/", LanguageCode::En, LanguageCode::En);
        assert_eq!(result.keywords, vec!["a", "b"]);
        assert_eq!(result.title, "b");
    }

    #[test]
    fn test_assemble_fallback_title() {
        let result = assemble("  ", " / ", LanguageCode::En, LanguageCode::En);
        assert!(result.keywords.is_empty());
        assert_eq!(result.title, "Imported Content");
    }

    #[test]
    fn test_assemble_is_idempotent_on_same_path() {
        let first = assemble("a/b", "a/b", LanguageCode::Es, LanguageCode::Fr);
        let second = assemble("a/b", "a/b", LanguageCode::Es, LanguageCode::Fr);
        assert_eq!(first.keywords, second.keywords);
        assert_eq!(first.title, second.title);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = assemble("Recipes", "Recipes", LanguageCode::Es, LanguageCode::Fr);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["folderPath"], "Recipes");
        assert_eq!(json["originalPath"], "Recipes");
        assert_eq!(json["detectedLanguage"], "es");
        assert_eq!(json["userLanguage"], "fr");
        assert_eq!(json["title"], "Recipes");
    }
}
