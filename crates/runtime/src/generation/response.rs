//! Parsing of generator responses.
//!
//! Meant for service-backed [`WordGenerator`](crate::WordGenerator)
//! implementations that receive the pair as JSON.

use serde::Deserialize;

use party_core::WordPair;

use crate::api::GenerationError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPair {
    secret_word: String,
    #[serde(default)]
    hint_word: Option<String>,
    category: String,
}

/// Parses a JSON object `{secretWord, hintWord?, category}` into a pair.
///
/// Fields are trimmed. A missing or null hint becomes empty.
pub fn parse_word_pair(json: &str) -> Result<WordPair, GenerationError> {
    if json.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }

    let raw: RawPair = serde_json::from_str(json)
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    let pair = WordPair::new(
        raw.secret_word,
        raw.hint_word.unwrap_or_default(),
        raw.category,
    )
    .trimmed();

    if pair.secret_word.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "secretWord is empty".into(),
        ));
    }

    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_fields() {
        let pair = parse_word_pair(
            r#"{"secretWord":" Leuchtturm ","hintWord":" Navigation","category":"Orte "}"#,
        )
        .unwrap();
        assert_eq!(pair, WordPair::new("Leuchtturm", "Navigation", "Orte"));
    }

    #[test]
    fn missing_hint_is_empty() {
        let pair = parse_word_pair(r#"{"secretWord":"Mond","category":"Natur"}"#).unwrap();
        assert_eq!(pair.hint_word, "");

        let pair =
            parse_word_pair(r#"{"secretWord":"Mond","hintWord":null,"category":"Natur"}"#).unwrap();
        assert!(!pair.has_hint());
    }

    #[test]
    fn blank_body_is_empty_response() {
        assert_eq!(parse_word_pair("  \n"), Err(GenerationError::EmptyResponse));
    }

    #[test]
    fn rejects_missing_category_and_blank_secret() {
        assert!(matches!(
            parse_word_pair(r#"{"secretWord":"Mond"}"#),
            Err(GenerationError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_word_pair(r#"{"secretWord":"  ","category":"Natur"}"#),
            Err(GenerationError::MalformedResponse(_))
        ));
    }
}
