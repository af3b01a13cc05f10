/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.7,
            top_p: 0.5,
        }
    }
}

/// Text produced by the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    text: String,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Whitespace-only output carries no answer.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
