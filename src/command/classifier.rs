//! Total, deterministic text -> ParsedCommand classification

use crate::command::intent::ParsedCommand;
use crate::command::registry::PatternRegistry;

/// Matches normalized input against the ordered rule table.
///
/// Classification never fails: text no rule accepts maps to the `Unknown`
/// intent, so every string yields exactly one ParsedCommand.
pub struct Classifier {
    registry: PatternRegistry,
}

impl Classifier {
    pub fn new(registry: PatternRegistry) -> Self {
        Self { registry }
    }

    /// Classify one utterance. First matching rule wins.
    pub fn classify(&self, text: &str) -> ParsedCommand {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return ParsedCommand::unknown(text);
        }

        for rule in self.registry.rules() {
            if let Some(params) = rule.try_match(&normalized) {
                return ParsedCommand {
                    intent: rule.intent,
                    params,
                    raw_text: text.to_string(),
                };
            }
        }

        ParsedCommand::unknown(text)
    }
}

/// Trim and lowercase; the only form rules are written against.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Suggestions for common first-word typos, capped at three.
pub fn suggestions(text: &str) -> Vec<&'static str> {
    let normalized = normalize(text);
    let Some(first_word) = normalized.split_whitespace().next() else {
        return Vec::new();
    };

    let mut out: Vec<&'static str> = Vec::new();
    match first_word {
        "opn" | "ope" => out.push("open <application>"),
        "cls" | "cloe" => out.push("close <application>"),
        "shut" | "shutdwn" => out.push("shutdown"),
        "restrt" => out.push("restart"),
        "serch" | "serh" => out.push("search <query>"),
        "tim" => out.push("time"),
        "dat" => out.push("date"),
        _ => {}
    }
    out.truncate(3);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::intent::Intent;
    use proptest::prelude::*;

    fn classifier() -> Classifier {
        Classifier::new(PatternRegistry::builtin())
    }

    #[test]
    fn test_classify_normalizes_case_and_whitespace() {
        let cmd = classifier().classify("  OPEN Firefox  ");
        assert_eq!(cmd.intent, Intent::OpenApp);
        assert_eq!(cmd.params, vec!["firefox".to_string()]);
        // Raw text is preserved as submitted
        assert_eq!(cmd.raw_text, "  OPEN Firefox  ");
    }

    #[test]
    fn test_classify_gibberish_is_unknown() {
        let cmd = classifier().classify("asdkfjaslkdf");
        assert_eq!(cmd.intent, Intent::Unknown);
        assert!(cmd.params.is_empty());
    }

    #[test]
    fn test_classify_empty_is_unknown() {
        let cmd = classifier().classify("   ");
        assert_eq!(cmd.intent, Intent::Unknown);
    }

    #[test]
    fn test_classify_taxonomy_round_trips() {
        let cases = [
            ("open firefox", Intent::OpenApp, vec!["firefox"]),
            ("close firefox", Intent::CloseApp, vec!["firefox"]),
            ("shutdown", Intent::SystemControl, vec!["shutdown"]),
            ("lock", Intent::SystemControl, vec!["lock"]),
            ("volume up", Intent::Volume, vec!["up"]),
            ("open file /tmp/x.txt", Intent::OpenFile, vec!["/tmp/x.txt"]),
            ("create file notes.txt", Intent::CreateFile, vec!["notes.txt"]),
            ("delete file /tmp/x.txt", Intent::DeleteFile, vec!["/tmp/x.txt"]),
            ("search files budget", Intent::SearchFiles, vec!["budget"]),
            ("search weather tomorrow", Intent::WebSearch, vec!["weather tomorrow"]),
            ("open website example.com", Intent::OpenWebsite, vec!["example.com"]),
            ("https://example.com", Intent::OpenUrl, vec!["https://example.com"]),
            ("time", Intent::InfoQuery, vec!["time"]),
            ("memory usage", Intent::InfoQuery, vec!["memory"]),
            ("help", Intent::InfoQuery, vec!["help"]),
            ("version", Intent::InfoQuery, vec!["version"]),
        ];

        let c = classifier();
        for (text, intent, params) in cases {
            let cmd = c.classify(text);
            assert_eq!(cmd.intent, intent, "input: {text}");
            let expected: Vec<String> = params.iter().map(|p| p.to_string()).collect();
            assert_eq!(cmd.params, expected, "input: {text}");
        }
    }

    #[test]
    fn test_suggestions_for_near_misses() {
        assert_eq!(suggestions("opn firefox"), vec!["open <application>"]);
        assert_eq!(suggestions("shutdwn"), vec!["shutdown"]);
        assert!(suggestions("completely unrelated").is_empty());
        assert!(suggestions("").is_empty());
    }

    proptest! {
        /// Classification is total: any string yields exactly one result,
        /// and re-classifying yields the same result.
        #[test]
        fn classify_is_total_and_deterministic(input in ".*") {
            let c = classifier();
            let first = c.classify(&input);
            let second = c.classify(&input);
            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.raw_text.as_str(), input.as_str());
        }
    }
}
