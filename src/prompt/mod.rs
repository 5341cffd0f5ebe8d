// src/prompt/mod.rs
// Prompt templates for categorization and translation.
//
// Templates are keyed by the DETECTED content language; the user's preferred
// language only controls the output-language instruction inside the prompt
// (and, later, whether a translation pass runs). Languages without a template
// of their own render with the English one.

use crate::language::LanguageCode;

/// Parent categories offered to the model as guidance. Advisory only:
/// responses are never validated against this list.
pub const PARENT_CATEGORIES: [&str; 17] = [
    "Recipes",
    "Restaurants",
    "Music",
    "Fitness",
    "Travel",
    "Fashion",
    "Beauty",
    "Home",
    "Learning",
    "Wellness",
    "Finance",
    "Tech",
    "Memes",
    "Inspiration",
    "Pets",
    "DIY",
    "Events",
];

/// Content fields rendered into a categorization prompt.
#[derive(Debug, Clone)]
pub struct PromptContent {
    caption: String,
    hashtags: String,
    keywords: String,
    url: String,
}

impl PromptContent {
    pub fn new(caption: &str, hashtags: &[String], keywords: &[String], url: Option<&str>) -> Self {
        Self {
            caption: caption.to_string(),
            hashtags: hashtags.join(", "),
            keywords: keywords.join(", "),
            url: url.unwrap_or_default().to_string(),
        }
    }
}

/// Select and render the categorization prompt for the detected language.
pub fn build_categorization_prompt(
    detected: LanguageCode,
    content: &PromptContent,
    user_language: LanguageCode,
) -> String {
    match detected {
        LanguageCode::Es => es_template(content, user_language),
        LanguageCode::Fr => fr_template(content, user_language),
        LanguageCode::De => de_template(content, user_language),
        LanguageCode::Ja => ja_template(content, user_language),
        _ => en_template(content, user_language),
    }
}

/// Render the translation-only prompt for an already-categorized path.
pub fn build_translation_prompt(folder_path: &str, target: LanguageCode) -> String {
    format!(
        "Translate the following folder path to {} language. Keep the same structure with \"/\" separators. Only respond with the translated path, no other text.\n\nFolder path to translate: {}",
        target.display_name(),
        folder_path
    )
}

fn output_language_note(
    template_language: LanguageCode,
    user_language: LanguageCode,
    text: &str,
) -> String {
    if user_language != template_language {
        text.replace("{language}", user_language.display_name())
    } else {
        String::new()
    }
}

fn en_template(content: &PromptContent, user_language: LanguageCode) -> String {
    let note = output_language_note(
        LanguageCode::En,
        user_language,
        "IMPORTANT: Respond with folder names in {language} language.",
    );
    format!(
        r#"You are a content categorization expert. Based on the following social media post content, suggest a folder path using the format "parent/child/grandchild" where:
- Parent is a high-level category (e.g., {examples})
- Child is a more specific subcategory
- Grandchild is the most specific category

{note}

Content to categorize:
Caption: {caption}
Hashtags: {hashtags}
Keywords: {keywords}
URL: {url}

Please respond with ONLY the folder path in the format "parent/child/grandchild". No other text."#,
        examples = PARENT_CATEGORIES[..3].join(", "),
        note = note,
        caption = content.caption,
        hashtags = content.hashtags,
        keywords = content.keywords,
        url = content.url,
    )
}

fn es_template(content: &PromptContent, user_language: LanguageCode) -> String {
    let note = output_language_note(
        LanguageCode::Es,
        user_language,
        "IMPORTANTE: Responde con nombres de carpetas en idioma {language}.",
    );
    format!(
        r#"Eres un experto en categorización de contenido. Basándote en el siguiente contenido de redes sociales, sugiere una ruta de carpeta usando el formato "padre/hijo/nieto" donde:
- Padre es una categoría de alto nivel (ej: Recetas, Restaurantes, Música)
- Hijo es una subcategoría más específica
- Nieto es la categoría más específica

{note}

Contenido a categorizar:
Descripción: {caption}
Hashtags: {hashtags}
Palabras clave: {keywords}
URL: {url}

Por favor responde SOLO con la ruta de carpeta en formato "padre/hijo/nieto". Sin otro texto."#,
        note = note,
        caption = content.caption,
        hashtags = content.hashtags,
        keywords = content.keywords,
        url = content.url,
    )
}

fn fr_template(content: &PromptContent, user_language: LanguageCode) -> String {
    let note = output_language_note(
        LanguageCode::Fr,
        user_language,
        "IMPORTANT: Répondez avec des noms de dossiers en langue {language}.",
    );
    format!(
        r#"Vous êtes un expert en catégorisation de contenu. Basé sur le contenu de réseaux sociaux suivant, suggérez un chemin de dossier utilisant le format "parent/enfant/petit-enfant" où:
- Parent est une catégorie de haut niveau (ex: Recettes, Restaurants, Musique)
- Enfant est une sous-catégorie plus spécifique
- Petit-enfant est la catégorie la plus spécifique

{note}

Contenu à catégoriser:
Légende: {caption}
Hashtags: {hashtags}
Mots-clés: {keywords}
URL: {url}

Veuillez répondre SEULEMENT avec le chemin de dossier au format "parent/enfant/petit-enfant". Aucun autre texte."#,
        note = note,
        caption = content.caption,
        hashtags = content.hashtags,
        keywords = content.keywords,
        url = content.url,
    )
}

fn de_template(content: &PromptContent, user_language: LanguageCode) -> String {
    let note = output_language_note(
        LanguageCode::De,
        user_language,
        "WICHTIG: Antworten Sie mit Ordnernamen in {language} Sprache.",
    );
    format!(
        r#"Sie sind ein Experte für Inhaltskategorisierung. Basierend auf dem folgenden Social-Media-Inhalt, schlagen Sie einen Ordnerpfad im Format "Eltern/Kind/Enkel" vor, wobei:
- Eltern ist eine übergeordnete Kategorie (z.B. Rezepte, Restaurants, Musik)
- Kind ist eine spezifischere Unterkategorie
- Enkel ist die spezifischste Kategorie

{note}

Zu kategorisierender Inhalt:
Beschriftung: {caption}
Hashtags: {hashtags}
Schlüsselwörter: {keywords}
URL: {url}

Bitte antworten Sie NUR mit dem Ordnerpfad im Format "Eltern/Kind/Enkel". Kein anderer Text."#,
        note = note,
        caption = content.caption,
        hashtags = content.hashtags,
        keywords = content.keywords,
        url = content.url,
    )
}

fn ja_template(content: &PromptContent, user_language: LanguageCode) -> String {
    let note = output_language_note(
        LanguageCode::Ja,
        user_language,
        "重要：{language}言語でフォルダ名を回答してください。",
    );
    format!(
        r#"あなたはコンテンツ分類の専門家です。以下のソーシャルメディア投稿内容に基づいて、「親/子/孫」の形式でフォルダパスを提案してください：
- 親は高レベルカテゴリ（例：レシピ、レストラン、音楽）
- 子はより具体的なサブカテゴリ
- 孫は最も具体的なカテゴリ

{note}

分類するコンテンツ:
キャプション: {caption}
ハッシュタグ: {hashtags}
キーワード: {keywords}
URL: {url}

「親/子/孫」形式のフォルダパスのみで回答してください。他のテキストは不要です。"#,
        note = note,
        caption = content.caption,
        hashtags = content.hashtags,
        keywords = content.keywords,
        url = content.url,
    )
}
