mod completion;
mod prompt;
mod search_result;

pub use completion::*;
pub use prompt::*;
pub use search_result::*;
