// src/language/mod.rs
// Language detection and the supported-language table.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Combined text shorter than this is too little signal for statistical
/// detection; we default to English instead of guessing.
const MIN_DETECTION_LEN: usize = 10;

/// The languages the categorizer knows how to prompt and translate for.
/// Anything outside this set normalizes to `En`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ja,
    Ko,
    Zh,
    Ar,
    Hi,
    Ru,
    Nl,
    Sv,
    No,
    Da,
    Pl,
    Tr,
    Th,
    Vi,
}

impl LanguageCode {
    /// Parse an ISO 639-1 code. Unknown or unsupported codes normalize to `En`.
    pub fn parse(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" => LanguageCode::En,
            "es" => LanguageCode::Es,
            "fr" => LanguageCode::Fr,
            "de" => LanguageCode::De,
            "it" => LanguageCode::It,
            "pt" => LanguageCode::Pt,
            "ja" => LanguageCode::Ja,
            "ko" => LanguageCode::Ko,
            "zh" => LanguageCode::Zh,
            "ar" => LanguageCode::Ar,
            "hi" => LanguageCode::Hi,
            "ru" => LanguageCode::Ru,
            "nl" => LanguageCode::Nl,
            "sv" => LanguageCode::Sv,
            "no" => LanguageCode::No,
            "da" => LanguageCode::Da,
            "pl" => LanguageCode::Pl,
            "tr" => LanguageCode::Tr,
            "th" => LanguageCode::Th,
            "vi" => LanguageCode::Vi,
            _ => LanguageCode::En,
        }
    }

    /// Map an ISO 639-3-style detector code to the supported subset.
    fn from_iso639_3(code: &str) -> Option<Self> {
        let lang = match code {
            "eng" => LanguageCode::En,
            "spa" => LanguageCode::Es,
            "fra" => LanguageCode::Fr,
            "deu" => LanguageCode::De,
            "ita" => LanguageCode::It,
            "por" => LanguageCode::Pt,
            "jpn" => LanguageCode::Ja,
            "kor" => LanguageCode::Ko,
            "cmn" => LanguageCode::Zh,
            "ara" | "arb" => LanguageCode::Ar,
            "hin" => LanguageCode::Hi,
            "rus" => LanguageCode::Ru,
            "nld" => LanguageCode::Nl,
            "swe" => LanguageCode::Sv,
            "nob" | "nor" => LanguageCode::No,
            "dan" => LanguageCode::Da,
            "pol" => LanguageCode::Pl,
            "tur" => LanguageCode::Tr,
            "tha" => LanguageCode::Th,
            "vie" => LanguageCode::Vi,
            _ => return None,
        };
        Some(lang)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Es => "es",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::It => "it",
            LanguageCode::Pt => "pt",
            LanguageCode::Ja => "ja",
            LanguageCode::Ko => "ko",
            LanguageCode::Zh => "zh",
            LanguageCode::Ar => "ar",
            LanguageCode::Hi => "hi",
            LanguageCode::Ru => "ru",
            LanguageCode::Nl => "nl",
            LanguageCode::Sv => "sv",
            LanguageCode::No => "no",
            LanguageCode::Da => "da",
            LanguageCode::Pl => "pl",
            LanguageCode::Tr => "tr",
            LanguageCode::Th => "th",
            LanguageCode::Vi => "vi",
        }
    }

    /// English name of the language, used when instructing the model which
    /// language to answer in.
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Es => "Spanish",
            LanguageCode::Fr => "French",
            LanguageCode::De => "German",
            LanguageCode::It => "Italian",
            LanguageCode::Pt => "Portuguese",
            LanguageCode::Ja => "Japanese",
            LanguageCode::Ko => "Korean",
            LanguageCode::Zh => "Chinese",
            LanguageCode::Ar => "Arabic",
            LanguageCode::Hi => "Hindi",
            LanguageCode::Ru => "Russian",
            LanguageCode::Nl => "Dutch",
            LanguageCode::Sv => "Swedish",
            LanguageCode::No => "Norwegian",
            LanguageCode::Da => "Danish",
            LanguageCode::Pl => "Polish",
            LanguageCode::Tr => "Turkish",
            LanguageCode::Th => "Thai",
            LanguageCode::Vi => "Vietnamese",
        }
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        LanguageCode::En
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(LanguageCode::parse(&code))
    }
}

/// Detect the content language from free text.
///
/// Never fails: short input, detection failure, or an unsupported language
/// all come back as `En`.
pub fn detect_language(text: &str) -> LanguageCode {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_DETECTION_LEN {
        return LanguageCode::En;
    }

    match whatlang::detect(trimmed) {
        Some(info) => {
            let code = info.lang().code();
            let mapped = LanguageCode::from_iso639_3(code).unwrap_or(LanguageCode::En);
            debug!(detector_code = code, language = mapped.as_str(), "language detected");
            mapped
        }
        None => LanguageCode::En,
    }
}
