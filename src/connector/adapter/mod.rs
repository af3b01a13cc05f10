mod azure_chat_client;
mod azure_search_client;
mod credential;
mod mock_chat_client;
mod mock_search_index;

pub use azure_chat_client::*;
pub use azure_search_client::*;
pub use credential::*;
pub use mock_chat_client::*;
pub use mock_search_index::*;
