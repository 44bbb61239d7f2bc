//! Task handlers - the only place the core touches the operating system
//!
//! Each intent maps to exactly one handler. Handlers return either a
//! user-facing success message or a typed HandlerError; the execution
//! engine converts errors to failure results at a single boundary.

pub mod apps;
pub mod files;
pub mod info;
pub mod system;
pub mod web;

use crate::command::intent::{Intent, ParsedCommand};
use crate::core::config::AssistantConfig;
use crate::core::error::HandlerError;

pub type HandlerResult = Result<String, HandlerError>;

/// Seam between the execution engine and the OS side effects.
///
/// Production code uses [`TaskDispatcher`]; tests substitute their own
/// implementation to observe dispatch without touching the system.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, cmd: &ParsedCommand, cfg: &AssistantConfig) -> HandlerResult;
}

/// Routes each intent to its handler.
pub struct TaskDispatcher;

impl Dispatch for TaskDispatcher {
    fn dispatch(&self, cmd: &ParsedCommand, cfg: &AssistantConfig) -> HandlerResult {
        match cmd.intent {
            Intent::OpenApp => apps::open_app(cmd.param(0), cfg),
            Intent::CloseApp => apps::close_app(cmd.param(0), cfg),
            Intent::SystemControl => system::system_control(cmd.param(0)),
            Intent::Volume => system::volume(cmd.param(0), cfg.volume_step_percent),
            Intent::OpenFile => files::open_file(cmd.param(0)),
            Intent::CreateFile => files::create_file(cmd.param(0)),
            Intent::DeleteFile => files::delete_file(cmd.param(0)),
            Intent::SearchFiles => files::search_files(cmd.param(0), cfg),
            Intent::WebSearch => web::web_search(cmd.param(0), cfg),
            Intent::OpenWebsite | Intent::OpenUrl => web::open_website(cmd.param(0)),
            Intent::InfoQuery => info::info_query(cmd.param(0)),
            // The engine short-circuits Unknown before dispatch
            Intent::Unknown => Err(HandlerError::InvalidArgument(
                "nothing to execute for an unrecognized command".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_intent_has_a_dispatch_arm() {
        // Unknown aside, every tag routes somewhere; the invalid-parameter
        // paths below prove the arm exists without touching the OS.
        let cfg = AssistantConfig::default();
        let dispatcher = TaskDispatcher;

        let empty_param_intents = [
            Intent::OpenApp,
            Intent::CloseApp,
            Intent::SystemControl,
            Intent::Volume,
            Intent::OpenFile,
            Intent::CreateFile,
            Intent::DeleteFile,
            Intent::SearchFiles,
            Intent::WebSearch,
            Intent::OpenWebsite,
            Intent::OpenUrl,
            Intent::InfoQuery,
        ];

        for intent in empty_param_intents {
            let cmd = ParsedCommand {
                intent,
                params: Vec::new(),
                raw_text: String::new(),
            };
            let result = dispatcher.dispatch(&cmd, &cfg);
            assert!(result.is_err(), "empty params must be rejected: {intent:?}");
        }
    }
}
