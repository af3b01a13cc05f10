/// Keywords whose presence in a query turns on search augmentation.
pub const TRIGGER_KEYWORDS: [&str; 2] = ["Dev Squad", "CSU"];

/// The text actually sent to the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// The user's query, forwarded untouched.
    Passthrough(String),
    /// Retrieved context and the original question under the instruction template.
    Augmented { context: String, question: String },
}

impl Prompt {
    pub fn passthrough(text: impl Into<String>) -> Self {
        Self::Passthrough(text.into())
    }

    pub fn augmented(context: impl Into<String>, question: impl Into<String>) -> Self {
        Self::Augmented {
            context: context.into(),
            question: question.into(),
        }
    }

    pub fn is_augmented(&self) -> bool {
        matches!(self, Self::Augmented { .. })
    }

    pub fn render(&self) -> String {
        match self {
            Self::Passthrough(text) => text.clone(),
            Self::Augmented { context, question } => format!(
                "Using the following text from an Azure Cognitive Search query: '{context}', \
                 please generate a well-informed and human-like answer for the question: \
                 '{question}'. If demanded in the question, use your knowledge based on \
                 previous training and also check on available Internet sources to create \
                 the most complete answer."
            ),
        }
    }
}

/// Case-sensitive substring check against [`TRIGGER_KEYWORDS`].
pub fn contains_trigger(text: &str) -> bool {
    TRIGGER_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}
