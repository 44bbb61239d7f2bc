//! System power, session lock, and volume control

use crate::core::error::HandlerError;
use crate::handlers::HandlerResult;
use regex::Regex;
use std::process::{Command, Stdio};
use std::sync::OnceLock;

/// Execute a system control action.
///
/// Only `shutdown`, `restart`, and `lock` are valid; the first two reach
/// this point solely through the confirmation gate. Privilege checks
/// belong to the OS; a refusal maps to PermissionDenied.
pub fn system_control(action: &str) -> HandlerResult {
    match action {
        "shutdown" => run_control("shutdown", &["shutdown", "now"], "Shutting down the system..."),
        "restart" => run_control("restart", &["reboot"], "Restarting the system..."),
        "lock" => run_control(
            "lock",
            &["gnome-screensaver-command", "-l"],
            "Screen locked",
        ),
        other => Err(HandlerError::InvalidArgument(format!(
            "unsupported system action '{other}'"
        ))),
    }
}

fn run_control(action: &str, argv: &[&str], ok_message: &str) -> HandlerResult {
    let status = Command::new(argv[0])
        .args(&argv[1..])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| {
            tracing::warn!(action, error = %e, "system control command failed to start");
            match e.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    HandlerError::PermissionDenied(format!("not allowed to {action}"))
                }
                _ => HandlerError::ExternalFailure(format!("could not {action} the system")),
            }
        })?;

    if status.success() {
        Ok(ok_message.to_string())
    } else {
        // shutdown/reboot exit non-zero when the OS refuses the request
        Err(HandlerError::PermissionDenied(format!(
            "the system refused to {action}"
        )))
    }
}

/// Adjust the master volume by the configured step, or mute it.
///
/// Reports the new effective level when amixer output yields one, else
/// just the action taken.
pub fn volume(direction: &str, step_percent: u8) -> HandlerResult {
    let spec = match direction {
        "up" => format!("{step_percent}%+"),
        "down" => format!("{step_percent}%-"),
        "mute" => "mute".to_string(),
        other => {
            return Err(HandlerError::InvalidArgument(format!(
                "unsupported volume action '{other}'"
            )))
        }
    };

    let status = Command::new("amixer")
        .args(["sset", "Master", &spec])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| {
            tracing::warn!(error = %e, "amixer unavailable");
            HandlerError::ExternalFailure("volume control is unavailable".to_string())
        })?;

    if !status.success() {
        return Err(HandlerError::ExternalFailure(
            "volume control failed".to_string(),
        ));
    }

    match (direction, current_level()) {
        ("mute", _) => Ok("Volume muted".to_string()),
        ("up", Some(level)) => Ok(format!("Volume increased to {level}%")),
        ("down", Some(level)) => Ok(format!("Volume decreased to {level}%")),
        (dir, None) => Ok(format!("Volume turned {dir}")),
        _ => unreachable!("direction validated above"),
    }
}

/// Parse the effective level out of `amixer get Master` (e.g. "[42%]").
fn current_level() -> Option<u8> {
    static LEVEL: OnceLock<Regex> = OnceLock::new();
    let re = LEVEL.get_or_init(|| Regex::new(r"\[(\d{1,3})%\]").expect("level pattern compiles"));

    let output = Command::new("amixer").args(["get", "Master"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout);
    re.captures(&text)?.get(1)?.as_str().parse().ok()
}
