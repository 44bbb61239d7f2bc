//! Web search and URL opening

use crate::core::config::AssistantConfig;
use crate::core::error::HandlerError;
use crate::handlers::HandlerResult;

/// Encode the query into the configured engine template and open it.
pub fn web_search(query: &str, cfg: &AssistantConfig) -> HandlerResult {
    let query = query.trim();
    if query.is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please provide a search query".to_string(),
        ));
    }

    let url = cfg
        .search_engine
        .replace("{query}", &urlencoding::encode(query));
    open_in_browser(&url)?;
    Ok(format!("Searching the web for '{query}'"))
}

/// Open a website or URL, defaulting the scheme to https.
pub fn open_website(url: &str) -> HandlerResult {
    let url = normalize_url(url)?;
    open_in_browser(&url)?;
    Ok(format!("Opening {url}"))
}

/// Validate the address shape and default the scheme to `https://` when
/// the utterance omits it.
pub(crate) fn normalize_url(raw: &str) -> Result<String, HandlerError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(HandlerError::InvalidArgument(
            "please provide a website address".to_string(),
        ));
    }
    if raw.contains(char::is_whitespace) {
        return Err(HandlerError::InvalidArgument(format!(
            "'{raw}' does not look like a web address"
        )));
    }

    if raw.starts_with("http://") || raw.starts_with("https://") {
        Ok(raw.to_string())
    } else {
        Ok(format!("https://{raw}"))
    }
}

fn open_in_browser(url: &str) -> Result<(), HandlerError> {
    open::that(url).map_err(|e| {
        tracing::warn!(url, error = %e, "browser launch failed");
        HandlerError::ExternalFailure("could not open the browser".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_defaults_to_https() {
        assert_eq!(normalize_url("example.com").unwrap(), "https://example.com");
        assert_eq!(
            normalize_url("  example.com/page  ").unwrap(),
            "https://example.com/page"
        );
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        assert_eq!(
            normalize_url("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            normalize_url("https://example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_malformed_addresses_rejected() {
        assert!(matches!(
            normalize_url(""),
            Err(HandlerError::InvalidArgument(_))
        ));
        assert!(matches!(
            normalize_url("not a url"),
            Err(HandlerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_search_query_is_percent_encoded() {
        let cfg = AssistantConfig::default();
        let encoded = cfg
            .search_engine
            .replace("{query}", &urlencoding::encode("rust & ownership"));
        assert!(encoded.contains("rust%20%26%20ownership"));
    }
}
