//! Execution engine - orchestrates classify -> confirm -> dispatch
//!
//! State machine per invocation:
//! Idle -> Classifying -> (Dispatching | AwaitingConfirmation) -> Idle.
//! The engine holds no state across the confirmation boundary; the caller
//! echoes the pending command back via `confirm` or drops it via `cancel`.

use crate::command::classifier::{self, Classifier};
use crate::command::confirm::ConfirmationGate;
use crate::command::intent::{Intent, ParsedCommand};
use crate::command::registry::PatternRegistry;
use crate::core::config::AssistantConfig;
use crate::core::error::{HandlerError, Result};
use crate::handlers::{Dispatch, TaskDispatcher};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Outcome of one submitted command, consumed by the front end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub message: String,
    /// When true, no side effect has run yet; `pending` must be echoed
    /// back through `confirm` to proceed.
    pub requires_confirmation: bool,
    pub pending: Option<ParsedCommand>,
}

impl ExecutionResult {
    fn ok(message: String) -> Self {
        Self {
            success: true,
            message,
            requires_confirmation: false,
            pending: None,
        }
    }

    fn fail(message: String) -> Self {
        Self {
            success: false,
            message,
            requires_confirmation: false,
            pending: None,
        }
    }

    fn confirmation(message: String, pending: ParsedCommand) -> Self {
        Self {
            success: true,
            message,
            requires_confirmation: true,
            pending: Some(pending),
        }
    }
}

/// Drives the full pipeline for one front end (or several concurrently;
/// everything it shares is read-only after construction).
pub struct ExecutionEngine {
    classifier: Classifier,
    gate: ConfirmationGate,
    dispatcher: Arc<dyn Dispatch>,
    config: Arc<AssistantConfig>,
    runtime: tokio::runtime::Runtime,
}

impl ExecutionEngine {
    pub fn new(config: AssistantConfig) -> Result<Self> {
        Self::with_dispatcher(config, Arc::new(TaskDispatcher))
    }

    /// Build an engine around a custom dispatcher (the seam tests use).
    pub fn with_dispatcher(config: AssistantConfig, dispatcher: Arc<dyn Dispatch>) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;

        Ok(Self {
            classifier: Classifier::new(PatternRegistry::builtin()),
            gate: ConfirmationGate::new(),
            dispatcher,
            config: Arc::new(config),
            runtime,
        })
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.config
    }

    /// Classify one utterance and either dispatch it or ask for
    /// confirmation. Never returns an uncaught fault.
    pub fn submit(&self, text: &str) -> ExecutionResult {
        let cmd = self.classifier.classify(text);

        if cmd.intent == Intent::Unknown {
            // Not an error: a help-shaped reply keeps voice front ends
            // from reading out failure noises for every misrecognition.
            let result = ExecutionResult::ok(unknown_message(text));
            self.log(&cmd, &result, Duration::ZERO);
            return result;
        }

        if self.gate.needs_confirmation(&cmd) {
            let prompt = self.gate.prompt(&cmd);
            let result = ExecutionResult::confirmation(prompt, cmd.clone());
            self.log(&cmd, &result, Duration::ZERO);
            return result;
        }

        self.run(cmd)
    }

    /// Second phase for a dangerous command the caller echoed back.
    pub fn confirm(&self, pending: ParsedCommand) -> ExecutionResult {
        self.run(pending)
    }

    /// Abandon a pending dangerous command without dispatching.
    pub fn cancel(&self, pending: &ParsedCommand) -> ExecutionResult {
        let result = ExecutionResult::fail(format!("Cancelled: {}", pending.raw_text.trim()));
        self.log(pending, &result, Duration::ZERO);
        result
    }

    fn run(&self, cmd: ParsedCommand) -> ExecutionResult {
        let started = Instant::now();
        let budget = Duration::from_secs(self.config.dispatch_timeout_secs);

        let dispatcher = Arc::clone(&self.dispatcher);
        let config = Arc::clone(&self.config);
        let task_cmd = cmd.clone();

        let outcome = self.runtime.block_on(async move {
            tokio::time::timeout(
                budget,
                tokio::task::spawn_blocking(move || dispatcher.dispatch(&task_cmd, &config)),
            )
            .await
        });

        let result = match outcome {
            // The engine stops waiting; an external process that already
            // started is not cancelled.
            Err(_) => ExecutionResult::fail(
                HandlerError::Timeout(self.config.dispatch_timeout_secs).to_string(),
            ),
            Ok(Err(join_err)) => {
                tracing::error!(error = %join_err, "handler task aborted");
                ExecutionResult::fail("The command could not be completed".to_string())
            }
            Ok(Ok(Ok(message))) => ExecutionResult::ok(message),
            Ok(Ok(Err(err))) => ExecutionResult::fail(err.to_string()),
        };

        self.log(&cmd, &result, started.elapsed());
        result
    }

    /// One structured record per invocation, consumed by the external sink.
    fn log(&self, cmd: &ParsedCommand, result: &ExecutionResult, elapsed: Duration) {
        tracing::info!(
            input = %cmd.raw_text,
            intent = ?cmd.intent,
            success = result.success,
            requires_confirmation = result.requires_confirmation,
            elapsed_ms = elapsed.as_millis() as u64,
            "command processed"
        );
    }
}

/// Help-oriented reply for text no rule matched.
fn unknown_message(text: &str) -> String {
    let suggestions = classifier::suggestions(text);
    if suggestions.is_empty() {
        format!(
            "I don't know the command '{}'. Say 'help' for the full list.",
            text.trim()
        )
    } else {
        format!(
            "I don't know the command '{}'. Did you mean: {}?",
            text.trim(),
            suggestions.join(", ")
        )
    }
}
