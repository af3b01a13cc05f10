//! Domain services: error taxonomy shared by every layer.

mod error;

pub use error::*;
