// src/api/http/categorize.rs

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::categorizer::{CategorizationResult, ContentInput};
use crate::language::LanguageCode;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizeRequest {
    pub caption: Option<String>,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub user_language: LanguageCode,
}

/// POST /api/categorize
///
/// Caption is required; hashtags, keywords, url, and userLanguage are
/// optional. Categorization failures map to 500 with the provider's message
/// in `details`.
pub async fn categorize_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CategorizeRequest>,
) -> Result<Json<CategorizationResult>, ApiError> {
    let caption = request
        .caption
        .filter(|caption| !caption.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Missing required field: caption"))?;

    let input = ContentInput {
        caption,
        hashtags: request.hashtags,
        keywords: request.keywords,
        url: request.url,
        user_language: request.user_language,
    };

    let result = state.categorizer.categorize(&input).await?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: CategorizeRequest =
            serde_json::from_str(r#"{"caption":"hello world"}"#).unwrap();
        assert_eq!(request.caption.as_deref(), Some("hello world"));
        assert!(request.hashtags.is_empty());
        assert!(request.keywords.is_empty());
        assert!(request.url.is_none());
        assert_eq!(request.user_language, LanguageCode::En);
    }

    #[test]
    fn test_request_parses_user_language() {
        let request: CategorizeRequest =
            serde_json::from_str(r#"{"caption":"hola","userLanguage":"fr"}"#).unwrap();
        assert_eq!(request.user_language, LanguageCode::Fr);
    }
}
