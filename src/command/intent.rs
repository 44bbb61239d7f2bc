//! Intent taxonomy and the classifier's output contract

use serde::{Deserialize, Serialize};

/// The classified category of a command.
///
/// Closed set: adding a tag requires adding both a rule in the pattern
/// registry and an arm in the dispatch table. `Unknown` is the designated
/// fallback and has no handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Launch an application by alias
    OpenApp,
    /// Terminate a running application by alias
    CloseApp,
    /// Shutdown, restart, or lock the session
    SystemControl,
    /// Volume up/down/mute
    Volume,
    /// Open a file with its default application
    OpenFile,
    /// Create a new empty file
    CreateFile,
    /// Delete a file (always confirmation-gated)
    DeleteFile,
    /// Name-match files under the configured scope
    SearchFiles,
    /// Web search via the configured engine template
    WebSearch,
    /// Open a website by name or address
    OpenWebsite,
    /// Open a bare URL
    OpenUrl,
    /// Read-only query: time, date, cpu, memory, disk, system, help, version
    InfoQuery,
    /// No rule matched
    Unknown,
}

/// One classified utterance, created per invocation and consumed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub intent: Intent,
    /// Extracted parameters, in capture order, whitespace-normalized.
    pub params: Vec<String>,
    /// The utterance as submitted, before normalization.
    pub raw_text: String,
}

impl ParsedCommand {
    /// The fallback result for text no rule matched.
    pub fn unknown(raw_text: &str) -> Self {
        Self {
            intent: Intent::Unknown,
            params: Vec::new(),
            raw_text: raw_text.to_string(),
        }
    }

    /// Parameter at `idx`, or the empty string if absent.
    pub fn param(&self, idx: usize) -> &str {
        self.params.get(idx).map(String::as_str).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_has_no_params() {
        let cmd = ParsedCommand::unknown("asdkfjaslkdf");
        assert_eq!(cmd.intent, Intent::Unknown);
        assert!(cmd.params.is_empty());
        assert_eq!(cmd.raw_text, "asdkfjaslkdf");
    }

    #[test]
    fn test_missing_param_is_empty() {
        let cmd = ParsedCommand::unknown("x");
        assert_eq!(cmd.param(0), "");
        assert_eq!(cmd.param(7), "");
    }

    #[test]
    fn test_intent_serde_snake_case() {
        let json = serde_json::to_string(&Intent::OpenApp).unwrap();
        assert_eq!(json, "\"open_app\"");
        let intent: Intent = serde_json::from_str("\"delete_file\"").unwrap();
        assert_eq!(intent, Intent::DeleteFile);
    }

    #[test]
    fn test_parsed_command_round_trips_through_json() {
        // Front ends echo the pending command back across the confirm
        // boundary, so it must survive serialization.
        let cmd = ParsedCommand {
            intent: Intent::DeleteFile,
            params: vec!["/tmp/x.txt".to_string()],
            raw_text: "delete file /tmp/x.txt".to_string(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: ParsedCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
