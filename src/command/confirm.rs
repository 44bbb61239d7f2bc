//! Two-phase confirmation for irreversible intents
//!
//! Voice input is misrecognized often enough that shutdown, restart, and
//! file deletion must never execute on a single utterance. The gate itself
//! is stateless: the pending command travels through the caller and comes
//! back on the explicit confirm call.

use crate::command::intent::{Intent, ParsedCommand};
use std::collections::HashSet;

/// Decides which commands need an explicit second call before dispatch.
pub struct ConfirmationGate {
    /// Intents dangerous regardless of parameters.
    dangerous: HashSet<Intent>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        let dangerous = [Intent::DeleteFile].into_iter().collect();
        Self { dangerous }
    }

    /// True iff the command must wait for an explicit confirmation.
    ///
    /// Membership is authoritative: `delete_file` always, `system_control`
    /// only for shutdown/restart. Nothing else is dangerous (locking the
    /// screen and muting the volume are both reversible).
    pub fn needs_confirmation(&self, cmd: &ParsedCommand) -> bool {
        if self.dangerous.contains(&cmd.intent) {
            return true;
        }
        cmd.intent == Intent::SystemControl && matches!(cmd.param(0), "shutdown" | "restart")
    }

    /// Human-readable prompt for the front end to render or speak.
    pub fn prompt(&self, cmd: &ParsedCommand) -> String {
        match cmd.intent {
            Intent::DeleteFile => format!(
                "Delete {}? This cannot be undone. Confirm to continue.",
                cmd.param(0)
            ),
            Intent::SystemControl => {
                format!("Really {} the system? Confirm to continue.", cmd.param(0))
            }
            _ => format!("Confirm '{}'?", cmd.raw_text.trim()),
        }
    }
}

impl Default for ConfirmationGate {
    fn default() -> Self {
        Self::new()
    }
}
