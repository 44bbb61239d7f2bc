//! Launch and close desktop applications via the alias registry

use crate::core::config::AssistantConfig;
use crate::core::error::HandlerError;
use crate::handlers::HandlerResult;
use std::process::{Command, Stdio};
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

/// Launch a registered application, detached from the assistant.
///
/// Unknown aliases are rejected outright; there is no best-guess $PATH
/// probe, so a misheard utterance cannot start an arbitrary binary.
pub fn open_app(alias: &str, cfg: &AssistantConfig) -> HandlerResult {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please name an application to open".to_string(),
        ));
    }

    let Some(app) = cfg.app(alias) else {
        return Err(unknown_app(alias, cfg));
    };

    // Fire and forget: only immediate launch failure is observed.
    Command::new(&app.program)
        .args(&app.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| launch_error(alias, &app.program, e))?;

    Ok(format!("Opening {alias}..."))
}

/// Terminate running processes belonging to a registered application.
pub fn close_app(alias: &str, cfg: &AssistantConfig) -> HandlerResult {
    let alias = alias.trim();
    if alias.is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please name an application to close".to_string(),
        ));
    }

    let Some(app) = cfg.app(alias) else {
        return Err(unknown_app(alias, cfg));
    };

    let target = app.match_name().to_lowercase();
    let sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new()),
    );

    let mut closed = 0usize;
    for process in sys.processes().values() {
        let name = process.name().to_string_lossy().to_lowercase();
        if name.contains(&target) && process.kill() {
            closed += 1;
        }
    }

    if closed > 0 {
        Ok(format!("Closed {alias}"))
    } else {
        // Not an error: the user's goal (app not running) already holds
        Ok(format!("{alias} is not running"))
    }
}

fn unknown_app(alias: &str, cfg: &AssistantConfig) -> HandlerError {
    HandlerError::NotFound(format!(
        "application '{}' is not registered. Known apps: {}",
        alias,
        cfg.known_aliases(10).join(", ")
    ))
}

fn launch_error(alias: &str, program: &str, err: std::io::Error) -> HandlerError {
    tracing::warn!(app = alias, program, error = %err, "application launch failed");
    match err.kind() {
        std::io::ErrorKind::NotFound => {
            HandlerError::NotFound(format!("the '{alias}' executable is not installed"))
        }
        std::io::ErrorKind::PermissionDenied => {
            HandlerError::PermissionDenied(format!("not allowed to start '{alias}'"))
        }
        _ => HandlerError::ExternalFailure(format!("could not start '{alias}'")),
    }
}
