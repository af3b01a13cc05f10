use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/v1/chat`. Only a JSON object is a valid payload.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub input_text: Option<String>,
}

impl ChatRequest {
    pub fn from_object(body: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(body))
    }

    /// The input text, if present and non-empty.
    pub fn input(&self) -> Option<&str> {
        self.input_text.as_deref().filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

impl ChatResponse {
    pub const NO_DATA: &'static str = "No data";

    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    pub fn no_data() -> Self {
        Self::new(Self::NO_DATA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_requires_non_empty_text() {
        let parse = |raw: &str| {
            let body: Map<String, Value> = serde_json::from_str(raw).unwrap();
            ChatRequest::from_object(body).unwrap()
        };

        assert_eq!(parse(r#"{"input_text": "hi"}"#).input(), Some("hi"));
        assert_eq!(parse(r#"{"input_text": ""}"#).input(), None);
        assert_eq!(parse(r#"{"input_text": null}"#).input(), None);
        assert_eq!(parse(r#"{"other": 1}"#).input(), None);
    }

    #[test]
    fn test_non_string_input_is_rejected() {
        let body: Map<String, Value> = serde_json::from_str(r#"{"input_text": 42}"#).unwrap();
        assert!(ChatRequest::from_object(body).is_err());
    }

    #[test]
    fn test_array_body_is_not_an_object() {
        assert!(serde_json::from_str::<Map<String, Value>>(r#"["What is Rust?"]"#).is_err());
    }
}
