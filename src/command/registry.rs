//! Ordered rule table mapping normalized text to intents
//!
//! Rules are evaluated in declaration order and the first match wins, so
//! ordering is a correctness property: specific rules ("open file ...")
//! must come before the generic ones ("open ...") or they are shadowed.

use crate::command::intent::Intent;
use regex::Regex;

/// How a rule derives parameters from a match.
#[derive(Debug, Clone)]
enum ParamSpec {
    /// Regex capture groups, in order, trimmed and whitespace-collapsed.
    Captures,
    /// Canonical parameters independent of the surface text. Used for the
    /// info queries and to fold synonyms ("reboot" -> "restart").
    Fixed(&'static [&'static str]),
}

/// One (intent, matcher, extractor) rule.
#[derive(Debug, Clone)]
pub struct CommandRule {
    pub intent: Intent,
    matcher: Regex,
    params: ParamSpec,
}

impl CommandRule {
    fn captures(intent: Intent, pattern: &str) -> Self {
        Self {
            intent,
            matcher: compile(pattern),
            params: ParamSpec::Captures,
        }
    }

    fn fixed(intent: Intent, pattern: &str, params: &'static [&'static str]) -> Self {
        Self {
            intent,
            matcher: compile(pattern),
            params: ParamSpec::Fixed(params),
        }
    }

    /// Extracted parameters if this rule accepts `text`, None otherwise.
    pub fn try_match(&self, text: &str) -> Option<Vec<String>> {
        let caps = self.matcher.captures(text)?;
        let params = match &self.params {
            ParamSpec::Captures => caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| collapse_whitespace(m.as_str()))
                .collect(),
            ParamSpec::Fixed(fixed) => fixed.iter().map(|p| p.to_string()).collect(),
        };
        Some(params)
    }
}

fn compile(pattern: &str) -> Regex {
    // All patterns are compile-time literals; a failure here is a bug in
    // the table itself, not a runtime condition.
    Regex::new(pattern).expect("builtin command pattern must compile")
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The ordered set of command rules, built once at startup.
pub struct PatternRegistry {
    rules: Vec<CommandRule>,
}

impl PatternRegistry {
    /// Build the full rule table.
    ///
    /// Patterns are written against normalized (trimmed, lowercased) text,
    /// so none of them need case-insensitive flags.
    pub fn builtin() -> Self {
        let rules = vec![
            // Specific "open"/file forms before the generic app launcher
            CommandRule::captures(Intent::OpenFile, r"^open\s+file\s+(.+)$"),
            CommandRule::captures(Intent::OpenWebsite, r"^open\s+website\s+(.+)$"),
            CommandRule::captures(Intent::CreateFile, r"^create\s+file\s+(.+)$"),
            CommandRule::captures(Intent::DeleteFile, r"^delete\s+file\s+(.+)$"),
            CommandRule::captures(Intent::OpenUrl, r"^(https?://\S+)$"),
            // File search before the generic web search
            CommandRule::captures(Intent::SearchFiles, r"^(?:search\s+files|find\s+files?)\s+(.+)$"),
            CommandRule::captures(Intent::WebSearch, r"^(?:search|google)\s+(.+)$"),
            // System control; "reboot" is folded into "restart"
            CommandRule::fixed(Intent::SystemControl, r"^shutdown$", &["shutdown"]),
            CommandRule::fixed(Intent::SystemControl, r"^(?:restart|reboot)$", &["restart"]),
            CommandRule::fixed(Intent::SystemControl, r"^lock$", &["lock"]),
            CommandRule::captures(Intent::Volume, r"^volume\s+(up|down|mute)$"),
            // Informational queries with canonical parameter names
            CommandRule::fixed(Intent::InfoQuery, r"^time$", &["time"]),
            CommandRule::fixed(Intent::InfoQuery, r"^date$", &["date"]),
            CommandRule::fixed(Intent::InfoQuery, r"^cpu\s+usage$", &["cpu"]),
            CommandRule::fixed(Intent::InfoQuery, r"^memory\s+usage$", &["memory"]),
            CommandRule::fixed(Intent::InfoQuery, r"^disk\s+usage$", &["disk"]),
            CommandRule::fixed(Intent::InfoQuery, r"^system\s+info$", &["system"]),
            CommandRule::fixed(Intent::InfoQuery, r"^(?:help|\?)$", &["help"]),
            CommandRule::fixed(Intent::InfoQuery, r"^version$", &["version"]),
            // Generic launchers last so they cannot shadow the rules above
            CommandRule::captures(Intent::OpenApp, r"^open\s+(.+)$"),
            CommandRule::captures(Intent::CloseApp, r"^close\s+(.+)$"),
        ];

        Self { rules }
    }

    pub fn rules(&self) -> &[CommandRule] {
        &self.rules
    }
}
