//! Assistant configuration and application registry
//!
//! All policy values live here with explanations of their purpose. The
//! config is loaded once at startup (TOML file or built-in defaults) and
//! treated as immutable for the life of the process.

use crate::core::error::{AideError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Launch invocation for one application alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppCommand {
    /// Executable to spawn.
    pub program: String,

    /// Arguments passed to the executable.
    #[serde(default)]
    pub args: Vec<String>,

    /// Process name to match when closing; defaults to `program`.
    #[serde(default)]
    pub process_name: Option<String>,
}

impl AppCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            process_name: None,
        }
    }

    /// Name to look for in the process table when closing this app.
    pub fn match_name(&self) -> &str {
        self.process_name.as_deref().unwrap_or(&self.program)
    }
}

/// Policy values and the application alias registry.
///
/// Read-only after startup; shared by reference across concurrent
/// invocations without locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Volume change per `volume up` / `volume down`, in percent.
    ///
    /// Applied as a single amixer step; the handler never hardcodes a step
    /// per call.
    pub volume_step_percent: u8,

    /// Maximum number of matches a file search reports.
    ///
    /// Keeps result sizes bounded; the search still reports how many
    /// matches were shown.
    pub search_result_cap: usize,

    /// Directory subtree file searches are confined to.
    ///
    /// Defaults to the home directory when unset. Searches never walk
    /// outside this scope.
    pub search_scope: Option<PathBuf>,

    /// Upper bound on how long the engine waits for one handler, seconds.
    ///
    /// The engine stops waiting at this point; an already-started external
    /// process is not killed.
    pub dispatch_timeout_secs: u64,

    /// Web search URL template; `{query}` is replaced with the
    /// percent-encoded query.
    pub search_engine: String,

    /// Application alias registry (lowercase alias -> launch invocation).
    pub apps: BTreeMap<String, AppCommand>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            volume_step_percent: 5,
            search_result_cap: 10,
            search_scope: None,
            dispatch_timeout_secs: 15,
            search_engine: "https://www.google.com/search?q={query}".to_string(),
            apps: default_apps(),
        }
    }
}

impl AssistantConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate().map_err(AideError::Config)?;
        Ok(config)
    }

    /// Validate configuration for internal consistency.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.volume_step_percent == 0 || self.volume_step_percent > 50 {
            return Err(format!(
                "volume_step_percent ({}) must be between 1 and 50",
                self.volume_step_percent
            ));
        }

        if self.search_result_cap == 0 {
            return Err("search_result_cap must be at least 1".to_string());
        }

        if self.dispatch_timeout_secs == 0 {
            return Err("dispatch_timeout_secs must be at least 1".to_string());
        }

        if !self.search_engine.contains("{query}") {
            return Err(format!(
                "search_engine template '{}' has no {{query}} placeholder",
                self.search_engine
            ));
        }

        Ok(())
    }

    /// Look up an application alias (case-insensitive).
    pub fn app(&self, alias: &str) -> Option<&AppCommand> {
        self.apps.get(&alias.trim().to_lowercase())
    }

    /// First `limit` registered aliases, for "unknown application" messages.
    pub fn known_aliases(&self, limit: usize) -> Vec<&str> {
        self.apps.keys().take(limit).map(String::as_str).collect()
    }
}

/// Built-in alias table for common desktop applications.
fn default_apps() -> BTreeMap<String, AppCommand> {
    let entries = [
        ("firefox", "firefox"),
        ("chrome", "google-chrome"),
        ("google chrome", "google-chrome"),
        ("chromium", "chromium-browser"),
        ("vscode", "code"),
        ("visual studio code", "code"),
        ("terminal", "gnome-terminal"),
        ("console", "gnome-terminal"),
        ("files", "nautilus"),
        ("file manager", "nautilus"),
        ("calculator", "gnome-calculator"),
        ("text editor", "gedit"),
        ("gedit", "gedit"),
        ("music", "rhythmbox"),
        ("rhythmbox", "rhythmbox"),
        ("settings", "gnome-control-center"),
        ("system settings", "gnome-control-center"),
    ];

    entries
        .into_iter()
        .map(|(alias, program)| (alias.to_string(), AppCommand::new(program)))
        .collect()
}
