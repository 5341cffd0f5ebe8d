// tests/categorize_pipeline.rs
// Full-pipeline tests with a scripted completion provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use sortiq::categorizer::{Categorizer, ContentInput};
use sortiq::language::LanguageCode;
use sortiq::llm::{CompletionProvider, LlmError};

/// Returns canned replies in order and records every prompt it receives.
struct ScriptedProvider {
    replies: Mutex<Vec<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(&self, prompt: &str, _max_output_tokens: u32) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            panic!("unexpected LLM call:\n{prompt}");
        }
        replies.remove(0)
    }
}

fn upstream_error(status: u16) -> LlmError {
    LlmError::Upstream {
        status: reqwest::StatusCode::from_u16(status).unwrap(),
        body: "provider error".to_string(),
    }
}

fn english_input(user_language: LanguageCode) -> ContentInput {
    ContentInput {
        caption: "Delicious chocolate cake recipe with step by step baking instructions"
            .to_string(),
        hashtags: vec!["dessert".to_string(), "baking".to_string()],
        keywords: vec![],
        url: Some("https://example.com/post/1".to_string()),
        user_language,
    }
}

fn spanish_input(user_language: LanguageCode) -> ContentInput {
    ContentInput {
        caption: "Receta deliciosa de pastel de chocolate para el postre, con instrucciones fáciles para hornear en casa"
            .to_string(),
        hashtags: vec!["postre".to_string(), "recetas".to_string()],
        keywords: vec![],
        url: None,
        user_language,
    }
}

#[tokio::test]
async fn english_post_for_english_user_skips_translation() {
    let provider = ScriptedProvider::new(vec![Ok("Recipes/Desserts/Chocolate Cake".to_string())]);
    let categorizer = Categorizer::new(provider.clone());

    let result = categorizer
        .categorize(&english_input(LanguageCode::En))
        .await
        .unwrap();

    assert_eq!(result.detected_language, LanguageCode::En);
    assert_eq!(result.folder_path, "Recipes/Desserts/Chocolate Cake");
    assert_eq!(result.original_path, result.folder_path);
    assert_eq!(result.keywords, vec!["Recipes", "Desserts", "Chocolate Cake"]);
    assert_eq!(result.title, "Chocolate Cake");
    // One call only: categorization, no translation.
    assert_eq!(provider.prompts().len(), 1);
}

#[tokio::test]
async fn spanish_post_for_french_user_is_translated() {
    let provider = ScriptedProvider::new(vec![
        Ok("Recetas/Postres/Pastel de Chocolate".to_string()),
        Ok("Recettes/Desserts/Gâteau au Chocolat".to_string()),
    ]);
    let categorizer = Categorizer::new(provider.clone());

    let result = categorizer
        .categorize(&spanish_input(LanguageCode::Fr))
        .await
        .unwrap();

    assert_eq!(result.detected_language, LanguageCode::Es);
    assert_eq!(result.original_path, "Recetas/Postres/Pastel de Chocolate");
    assert_eq!(result.folder_path, "Recettes/Desserts/Gâteau au Chocolat");
    assert_eq!(result.title, "Gâteau au Chocolat");

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 2);
    // Spanish template for Spanish content, with a French output instruction.
    assert!(prompts[0].contains("experto en categorización"));
    assert!(prompts[0].contains("idioma French"));
    assert!(prompts[1].contains("Translate the following folder path to French"));
}

#[tokio::test]
async fn spanish_post_for_spanish_user_skips_translation() {
    let provider = ScriptedProvider::new(vec![Ok("Recetas/Postres".to_string())]);
    let categorizer = Categorizer::new(provider.clone());

    let result = categorizer
        .categorize(&spanish_input(LanguageCode::Es))
        .await
        .unwrap();

    assert_eq!(result.detected_language, LanguageCode::Es);
    assert_eq!(result.original_path, result.folder_path);
    assert_eq!(provider.prompts().len(), 1);
}

#[tokio::test]
async fn upstream_error_propagates() {
    let provider = ScriptedProvider::new(vec![Err(upstream_error(500))]);
    let categorizer = Categorizer::new(provider.clone());

    let result = categorizer.categorize(&english_input(LanguageCode::En)).await;

    assert!(matches!(result, Err(LlmError::Upstream { .. })));
    // No retry.
    assert_eq!(provider.prompts().len(), 1);
}

#[tokio::test]
async fn empty_completion_is_malformed() {
    let provider = ScriptedProvider::new(vec![Ok("   ".to_string())]);
    let categorizer = Categorizer::new(provider.clone());

    let result = categorizer.categorize(&english_input(LanguageCode::En)).await;

    assert!(matches!(result, Err(LlmError::MalformedResponse)));
    assert_eq!(provider.prompts().len(), 1);
}

#[tokio::test]
async fn single_segment_path_is_tolerated() {
    let provider = ScriptedProvider::new(vec![Ok("Recipes".to_string())]);
    let categorizer = Categorizer::new(provider);

    let result = categorizer
        .categorize(&english_input(LanguageCode::En))
        .await
        .unwrap();

    assert_eq!(result.keywords, vec!["Recipes"]);
    assert_eq!(result.title, "Recipes");
}

#[tokio::test]
async fn translation_failure_falls_back_to_original_path() {
    let provider = ScriptedProvider::new(vec![
        Ok("Recetas/Postres".to_string()),
        Err(upstream_error(503)),
    ]);
    let categorizer = Categorizer::new(provider.clone());

    let result = categorizer
        .categorize(&spanish_input(LanguageCode::Fr))
        .await
        .unwrap();

    // Degrade, don't fail: the untranslated path comes back.
    assert_eq!(result.folder_path, "Recetas/Postres");
    assert_eq!(result.original_path, "Recetas/Postres");
    assert_eq!(provider.prompts().len(), 2);
}

#[tokio::test]
async fn empty_translation_falls_back_to_original_path() {
    let provider = ScriptedProvider::new(vec![
        Ok("Recetas/Postres".to_string()),
        Ok("  ".to_string()),
    ]);
    let categorizer = Categorizer::new(provider);

    let result = categorizer
        .categorize(&spanish_input(LanguageCode::Fr))
        .await
        .unwrap();

    assert_eq!(result.folder_path, "Recetas/Postres");
}

#[tokio::test]
async fn translate_path_is_a_noop_for_english_target() {
    // Provider with no scripted replies: any call would panic.
    let provider = ScriptedProvider::new(vec![]);
    let categorizer = Categorizer::new(provider.clone());

    let translated = categorizer
        .translate_path("Recipes/Desserts", LanguageCode::En)
        .await;

    assert_eq!(translated, "Recipes/Desserts");
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn short_caption_defaults_to_english_template() {
    let provider = ScriptedProvider::new(vec![Ok("Memes".to_string())]);
    let categorizer = Categorizer::new(provider.clone());

    let input = ContentInput {
        caption: "lol".to_string(),
        hashtags: vec![],
        keywords: vec![],
        url: None,
        user_language: LanguageCode::En,
    };
    let result = categorizer.categorize(&input).await.unwrap();

    assert_eq!(result.detected_language, LanguageCode::En);
    assert!(provider.prompts()[0].contains("content categorization expert"));
}
