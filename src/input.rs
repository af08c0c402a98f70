//! Input shapes and the request envelope shared by document-level endpoints.

use serde::Serialize;

use crate::error::GlossaError;

/// Text payload accepted by document-level endpoints.
///
/// Exactly one shape is chosen per call. Supplying pre-tokenized input
/// disables sentence segmentation and tokenization server-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInput {
    /// Raw document text; the server segments and tokenizes it.
    Text(String),
    /// Pre-segmented sentences; the server tokenizes each one.
    Sentences(Vec<String>),
    /// Pre-tokenized sentences, one token list per sentence.
    Tokens(Vec<Vec<String>>),
}

impl From<&str> for TextInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TextInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for TextInput {
    fn from(sentences: Vec<String>) -> Self {
        Self::Sentences(sentences)
    }
}

impl From<&[&str]> for TextInput {
    fn from(sentences: &[&str]) -> Self {
        Self::Sentences(sentences.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<Vec<String>>> for TextInput {
    fn from(tokens: Vec<Vec<String>>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<&[Vec<String>]> for TextInput {
    fn from(tokens: &[Vec<String>]) -> Self {
        Self::Tokens(tokens.to_vec())
    }
}

/// The `text` field of a request envelope: a whole document or a list of
/// pre-segmented sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextField {
    /// Raw document text.
    Single(String),
    /// One string per sentence.
    Many(Vec<String>),
}

/// Request envelope for endpoints that operate on a whole document.
///
/// Every field is independently optional; absent fields are omitted from
/// the JSON body rather than serialized as null. [`ParseRequest::validate`]
/// rejects disallowed combinations before any network call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseRequest {
    /// Raw text or pre-segmented sentences. Mutually exclusive with `tokens`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextField>,
    /// Pre-tokenized sentences. Mutually exclusive with `text`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Vec<String>>>,
    /// Allow list of task names to run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<String>>,
    /// Deny list of task names to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tasks: Option<Vec<String>>,
    /// Speaker per sentence, parallel to `tokens`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speakers: Option<Vec<String>>,
    /// Document language hint, e.g. `"zh"` or `"mul"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ParseRequest {
    /// Build an envelope carrying just the text payload.
    pub fn from_input(input: TextInput) -> Self {
        match input {
            TextInput::Text(text) => Self {
                text: Some(TextField::Single(text)),
                ..Self::default()
            },
            TextInput::Sentences(sentences) => Self {
                text: Some(TextField::Many(sentences)),
                ..Self::default()
            },
            TextInput::Tokens(tokens) => Self {
                tokens: Some(tokens),
                ..Self::default()
            },
        }
    }

    /// Check the envelope for disallowed field combinations.
    ///
    /// Enforced here, before any request is made:
    /// - exactly one of `text` and `tokens` is present;
    /// - `speakers` requires `tokens` and must have one entry per sentence.
    pub fn validate(&self) -> Result<(), GlossaError> {
        match (&self.text, &self.tokens) {
            (Some(_), Some(_)) => {
                return Err(GlossaError::Validation(
                    "supply either text or tokens, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(GlossaError::Validation(
                    "one of text or tokens is required".to_string(),
                ))
            }
            _ => {}
        }
        if let Some(speakers) = &self.speakers {
            let tokens = self.tokens.as_ref().ok_or_else(|| {
                GlossaError::Validation(
                    "speakers require pre-tokenized input".to_string(),
                )
            })?;
            if speakers.len() != tokens.len() {
                return Err(GlossaError::Validation(format!(
                    "speakers length {} does not match sentence count {}",
                    speakers.len(),
                    tokens.len()
                )));
            }
        }
        Ok(())
    }
}

impl From<TextInput> for ParseRequest {
    fn from(input: TextInput) -> Self {
        Self::from_input(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_conversions() {
        assert_eq!(
            TextInput::from("单句文本。"),
            TextInput::Text("单句文本。".to_string())
        );
        assert_eq!(
            TextInput::from(vec!["第一句。".to_string(), "第二句。".to_string()]),
            TextInput::Sentences(vec!["第一句。".to_string(), "第二句。".to_string()])
        );
        assert_eq!(
            TextInput::from(vec![vec!["商品".to_string(), "和".to_string()]]),
            TextInput::Tokens(vec![vec!["商品".to_string(), "和".to_string()]])
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let request = ParseRequest::from_input(TextInput::from("商品和服务"));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"text": "商品和服务"}));

        let request = ParseRequest::from_input(TextInput::Tokens(vec![vec![
            "商品".to_string(),
            "和".to_string(),
            "服务".to_string(),
        ]]));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"tokens": [["商品", "和", "服务"]]}));
    }

    #[test]
    fn test_sentence_list_serializes_as_array() {
        let request = ParseRequest::from_input(TextInput::Sentences(vec![
            "第一句。".to_string(),
            "第二句。".to_string(),
        ]));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"text": ["第一句。", "第二句。"]}));
    }

    #[test]
    fn test_request_construction_is_deterministic() {
        let build = || {
            let mut request = ParseRequest::from_input(TextInput::from("商品和服务"));
            request.tasks = Some(vec!["tok/fine".to_string(), "pos".to_string()]);
            request.language = Some("zh".to_string());
            serde_json::to_string(&request).unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_rejects_text_and_tokens_together() {
        let mut request = ParseRequest::from_input(TextInput::from("商品和服务"));
        request.tokens = Some(vec![vec!["商品".to_string()]]);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, GlossaError::Validation(_)));
    }

    #[test]
    fn test_rejects_empty_envelope() {
        let err = ParseRequest::default().validate().unwrap_err();
        assert!(matches!(err, GlossaError::Validation(_)));
    }

    #[test]
    fn test_rejects_speakers_without_tokens() {
        let mut request = ParseRequest::from_input(TextInput::from("商品和服务"));
        request.speakers = Some(vec!["甲".to_string()]);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, GlossaError::Validation(_)));
    }

    #[test]
    fn test_rejects_mismatched_speakers() {
        let mut request = ParseRequest::from_input(TextInput::Tokens(vec![
            vec!["我".to_string(), "姐".to_string()],
            vec!["我".to_string()],
        ]));
        request.speakers = Some(vec!["张三".to_string()]);
        let err = request.validate().unwrap_err();
        assert!(matches!(err, GlossaError::Validation(_)));

        request.speakers = Some(vec!["张三".to_string(), "张三".to_string()]);
        assert!(request.validate().is_ok());
    }
}
