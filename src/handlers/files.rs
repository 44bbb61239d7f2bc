//! File open/create/delete/search with home-relative expansion

use crate::core::config::AssistantConfig;
use crate::core::error::HandlerError;
use crate::handlers::HandlerResult;
use std::fs;
use std::path::PathBuf;

/// Strip surrounding quotes and resolve `~` before any path is used.
fn expand(raw: &str) -> PathBuf {
    let trimmed = raw.trim().trim_matches(|c| c == '"' || c == '\'');
    PathBuf::from(shellexpand::tilde(trimmed).into_owned())
}

/// Open a file with its default application.
pub fn open_file(path: &str) -> HandlerResult {
    if path.trim().is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please specify a file path".to_string(),
        ));
    }

    let path = expand(path);
    if !path.exists() {
        return Err(HandlerError::NotFound(format!(
            "file not found: {}",
            path.display()
        )));
    }

    open::that(&path).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "file open failed");
        HandlerError::ExternalFailure(format!("could not open {}", path.display()))
    })?;

    Ok(format!("Opening {}", path.display()))
}

/// Create a new empty file; bare names land in the home directory.
///
/// An existing target is a conflict, never a silent overwrite.
pub fn create_file(name: &str) -> HandlerResult {
    let trimmed = name.trim().trim_matches(|c| c == '"' || c == '\'');
    if trimmed.is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please name the file to create".to_string(),
        ));
    }

    let target = if trimmed.contains('/') {
        expand(trimmed)
    } else {
        expand(&format!("~/{trimmed}"))
    };

    if target.exists() {
        return Err(HandlerError::AlreadyExists(format!(
            "{} already exists",
            target.display()
        )));
    }

    fs::write(&target, "").map_err(|e| write_error(&target, e))?;
    Ok(format!("Created {}", target.display()))
}

/// Delete a file. The confirmation gate has already run by the time this
/// handler is reached.
pub fn delete_file(path: &str) -> HandlerResult {
    if path.trim().is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please specify a file path".to_string(),
        ));
    }

    let path = expand(path);
    if !path.exists() {
        return Err(HandlerError::NotFound(format!(
            "file not found: {}",
            path.display()
        )));
    }

    fs::remove_file(&path).map_err(|e| write_error(&path, e))?;
    Ok(format!("Deleted {}", path.display()))
}

/// Name-match files under the configured scope, capped at the configured
/// maximum. Never walks outside the scope.
pub fn search_files(pattern: &str, cfg: &AssistantConfig) -> HandlerResult {
    let trimmed = pattern.trim().trim_matches(|c| c == '"' || c == '\'');
    if trimmed.is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please specify a search pattern".to_string(),
        ));
    }

    let scope = cfg
        .search_scope
        .clone()
        .unwrap_or_else(|| expand("~"));

    // User text is a name fragment, not a glob; escape its metacharacters
    let fragment = glob::Pattern::escape(trimmed);
    let glob_expr = format!("{}/**/*{}*", scope.display(), fragment);

    let walker = glob::glob(&glob_expr).map_err(|e| {
        HandlerError::InvalidArgument(format!("bad search pattern '{trimmed}': {e}"))
    })?;

    let cap = cfg.search_result_cap;
    let mut matches: Vec<PathBuf> = Vec::new();
    let mut truncated = false;
    for entry in walker.flatten() {
        if matches.len() == cap {
            truncated = true;
            break;
        }
        matches.push(entry);
    }

    if matches.is_empty() {
        return Ok(format!("No files matching '{trimmed}'"));
    }

    let header = if truncated {
        format!("Found more than {cap} files matching '{trimmed}', showing the first {cap}:")
    } else {
        format!("Found {} file(s) matching '{trimmed}':", matches.len())
    };

    let mut out = header;
    for path in &matches {
        out.push_str("\n  ");
        out.push_str(&path.display().to_string());
    }
    Ok(out)
}

fn write_error(path: &std::path::Path, err: std::io::Error) -> HandlerError {
    tracing::warn!(path = %path.display(), error = %err, "file operation failed");
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => {
            HandlerError::PermissionDenied(format!("not allowed to modify {}", path.display()))
        }
        std::io::ErrorKind::NotFound => {
            HandlerError::NotFound(format!("no such directory for {}", path.display()))
        }
        _ => HandlerError::ExternalFailure(format!("file operation failed on {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_expand_strips_quotes_and_tilde() {
        let path = expand("\"~/notes.txt\"");
        let text = path.to_string_lossy();
        assert!(!text.contains('~'), "tilde must be resolved: {text}");
        assert!(!text.contains('"'));
        assert!(text.ends_with("notes.txt"));
    }

    #[test]
    fn test_open_missing_file_is_not_found() {
        let err = open_file("/tmp/definitely_missing_aide_test_file").unwrap_err();
        assert!(matches!(err, HandlerError::NotFound(_)));
    }

    #[test]
    fn test_create_then_conflict() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("notes.txt");
        let arg = target.to_string_lossy().to_string();

        let msg = create_file(&arg).unwrap();
        assert!(msg.contains("notes.txt"));
        assert!(target.exists());

        // Second create must not overwrite
        let err = create_file(&arg).unwrap_err();
        assert!(matches!(err, HandlerError::AlreadyExists(_)));
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("gone.txt");
        fs::write(&target, "x").unwrap();

        let msg = delete_file(&target.to_string_lossy()).unwrap();
        assert!(msg.contains("gone.txt"));
        assert!(!target.exists());

        let err = delete_file(&target.to_string_lossy()).unwrap_err();
        assert!(matches!(err, HandlerError::NotFound(_)));
    }

    #[test]
    fn test_search_is_scoped_and_capped() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("report_alpha.txt"), "").unwrap();
        fs::write(dir.path().join("report_beta.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/report_gamma.txt"), "").unwrap();
        fs::write(dir.path().join("unrelated.txt"), "").unwrap();

        let cfg = AssistantConfig {
            search_scope: Some(dir.path().to_path_buf()),
            search_result_cap: 2,
            ..Default::default()
        };

        let out = search_files("report", &cfg).unwrap();
        assert!(out.contains("showing the first 2"), "cap applies: {out}");
        // Exactly two listed paths
        assert_eq!(out.lines().count(), 3);

        let out = search_files("gamma", &cfg).unwrap();
        assert!(out.contains("report_gamma.txt"), "recurses into sub: {out}");

        let out = search_files("no_such_fragment", &cfg).unwrap();
        assert!(out.contains("No files matching"));
    }

    #[test]
    fn test_search_escapes_glob_metacharacters() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("literal.txt"), "").unwrap();

        let cfg = AssistantConfig {
            search_scope: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        // "*" must be treated as a literal name fragment, not a wildcard
        let out = search_files("*", &cfg).unwrap();
        assert!(out.contains("No files matching"), "got: {out}");
    }
}
