mod chat_client;
mod search_index;

pub use chat_client::*;
pub use search_index::*;
