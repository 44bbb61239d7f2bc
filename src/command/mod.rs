//! Command processing pipeline
//!
//! Converts raw utterance text into an executed OS side effect:
//! text -> Classifier -> ParsedCommand -> ConfirmationGate -> dispatch
//! -> ExecutionResult

pub mod classifier;
pub mod confirm;
pub mod engine;
pub mod intent;
pub mod registry;

pub use classifier::Classifier;
pub use confirm::ConfirmationGate;
pub use engine::{ExecutionEngine, ExecutionResult};
pub use intent::{Intent, ParsedCommand};
pub use registry::{CommandRule, PatternRegistry};
