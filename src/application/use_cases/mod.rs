mod chat;
mod compose_prompt;
mod retrieve_context;

pub use chat::*;
pub use compose_prompt::*;
pub use retrieve_context::*;
