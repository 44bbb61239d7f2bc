pub mod config;
pub mod error;

pub use config::{AppCommand, AssistantConfig};
pub use error::{AideError, HandlerError, Result};
