//! Android-style intent URI parsing.
//!
//! Pages aimed at mobile browsers hand off app launches as
//! `intent://HOST/PATH#Intent;scheme=...;package=...;S.key=value;end`.
//! The fragment carries `key=value` parameters terminated by `end`;
//! `S.`-prefixed keys are percent-encoded string extras. The extra we
//! care about is `S.browser_fallback_url`, the alternate web URL to
//! load when no native handler exists.

use std::collections::HashMap;

/// Scheme marking an intent URI.
pub const INTENT_SCHEME: &str = "intent";

/// String extra naming the fallback web URL.
pub const FALLBACK_EXTRA: &str = "browser_fallback_url";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    #[error("not an intent uri")]
    NotIntent,

    #[error("missing #Intent fragment")]
    MissingFragment,

    #[error("missing ';end' terminator")]
    MissingTerminator,

    #[error("malformed intent parameter: {0}")]
    MalformedParameter(String),
}

/// A parsed intent URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentUri {
    /// Everything between `intent://` and the `#Intent` fragment,
    /// i.e. the host/path portion of the target data URI.
    pub data: String,
    /// Target scheme the handler should receive (`scheme=` parameter).
    pub scheme: Option<String>,
    /// Preferred handler package (`package=` parameter).
    pub package: Option<String>,
    /// Intent action (`action=` parameter).
    pub action: Option<String>,
    extras: HashMap<String, String>,
}

impl IntentUri {
    /// Parse an `intent:` URI. Typed (non-string) extras are ignored;
    /// unknown parameters are ignored rather than rejected.
    pub fn parse(raw: &str) -> Result<Self, IntentError> {
        let rest = raw.strip_prefix("intent:").ok_or(IntentError::NotIntent)?;
        let (body, fragment) = rest
            .split_once("#Intent;")
            .ok_or(IntentError::MissingFragment)?;
        // "end" must stand alone as the final token; a value that
        // merely ends in "end" is not a terminator.
        let params = match fragment.strip_suffix(";end") {
            Some(params) => params,
            None if fragment == "end" => "",
            None => return Err(IntentError::MissingTerminator),
        };

        let mut parsed = Self {
            data: body.trim_start_matches('/').to_string(),
            scheme: None,
            package: None,
            action: None,
            extras: HashMap::new(),
        };

        for part in params.split(';').filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| IntentError::MalformedParameter(part.to_string()))?;
            match key {
                "scheme" => parsed.scheme = Some(value.to_string()),
                "package" => parsed.package = Some(value.to_string()),
                "action" => parsed.action = Some(value.to_string()),
                _ => {
                    if let Some(name) = key.strip_prefix("S.") {
                        let decoded = urlencoding::decode(value)
                            .map(|cow| cow.into_owned())
                            .unwrap_or_else(|_| value.to_string());
                        parsed.extras.insert(name.to_string(), decoded);
                    }
                    // B./i./l. etc. extras have no use here.
                }
            }
        }

        Ok(parsed)
    }

    /// Look up a string extra by name.
    pub fn extra(&self, name: &str) -> Option<&str> {
        self.extras.get(name).map(String::as_str)
    }

    /// The `browser_fallback_url` extra, if present and non-empty.
    pub fn fallback_url(&self) -> Option<&str> {
        self.extra(FALLBACK_EXTRA).filter(|url| !url.is_empty())
    }

    /// Rebuild the URI an external handler should receive: the
    /// declared scheme applied to the data portion. Without a
    /// `scheme=` parameter there is nothing better than the raw
    /// intent URI, so `None` is returned.
    pub fn launch_url(&self) -> Option<String> {
        self.scheme
            .as_ref()
            .map(|scheme| format!("{scheme}://{}", self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE_URI: &str = "intent://details?id=com.example.app#Intent;\
         scheme=market;package=com.android.vending;\
         S.browser_fallback_url=https%3A%2F%2Fexample.com%2Fapp;end";

    #[test]
    fn parses_scheme_package_and_data() {
        let intent = IntentUri::parse(STORE_URI).unwrap();
        assert_eq!(intent.data, "details?id=com.example.app");
        assert_eq!(intent.scheme.as_deref(), Some("market"));
        assert_eq!(intent.package.as_deref(), Some("com.android.vending"));
        assert_eq!(intent.action, None);
    }

    #[test]
    fn fallback_url_is_percent_decoded() {
        let intent = IntentUri::parse(STORE_URI).unwrap();
        assert_eq!(intent.fallback_url(), Some("https://example.com/app"));
    }

    #[test]
    fn launch_url_applies_declared_scheme() {
        let intent = IntentUri::parse(STORE_URI).unwrap();
        assert_eq!(
            intent.launch_url().as_deref(),
            Some("market://details?id=com.example.app")
        );
    }

    #[test]
    fn launch_url_without_scheme_is_none() {
        let intent = IntentUri::parse("intent://host/path#Intent;package=com.x;end").unwrap();
        assert_eq!(intent.launch_url(), None);
    }

    #[test]
    fn missing_fallback_extra_is_none() {
        let intent = IntentUri::parse("intent://host#Intent;scheme=app;end").unwrap();
        assert_eq!(intent.fallback_url(), None);
    }

    #[test]
    fn empty_fallback_extra_is_treated_as_absent() {
        let intent =
            IntentUri::parse("intent://host#Intent;scheme=app;S.browser_fallback_url=;end")
                .unwrap();
        assert_eq!(intent.fallback_url(), None);
    }

    #[test]
    fn action_parameter_is_captured() {
        let intent =
            IntentUri::parse("intent://x#Intent;action=android.intent.action.VIEW;scheme=app;end")
                .unwrap();
        assert_eq!(intent.action.as_deref(), Some("android.intent.action.VIEW"));
    }

    #[test]
    fn non_intent_uri_is_rejected() {
        assert_eq!(
            IntentUri::parse("https://example.com"),
            Err(IntentError::NotIntent)
        );
    }

    #[test]
    fn missing_fragment_is_rejected() {
        assert_eq!(
            IntentUri::parse("intent://host/path"),
            Err(IntentError::MissingFragment)
        );
    }

    #[test]
    fn missing_terminator_is_rejected() {
        assert_eq!(
            IntentUri::parse("intent://host#Intent;scheme=app"),
            Err(IntentError::MissingTerminator)
        );
    }

    #[test]
    fn value_ending_in_end_is_not_a_terminator() {
        // Previously "weekend" was silently truncated to "week".
        assert_eq!(
            IntentUri::parse("intent://host#Intent;scheme=app;S.msg=weekend"),
            Err(IntentError::MissingTerminator)
        );
    }

    #[test]
    fn empty_parameter_list_is_accepted() {
        let intent = IntentUri::parse("intent://host#Intent;end").unwrap();
        assert_eq!(intent.scheme, None);
        assert_eq!(intent.data, "host");
    }

    #[test]
    fn bare_parameter_is_rejected() {
        assert_eq!(
            IntentUri::parse("intent://host#Intent;garbage;end"),
            Err(IntentError::MalformedParameter("garbage".into()))
        );
    }

    #[test]
    fn typed_extras_are_ignored() {
        let intent =
            IntentUri::parse("intent://host#Intent;scheme=app;B.flag=true;i.count=3;end").unwrap();
        assert_eq!(intent.extra("flag"), None);
        assert_eq!(intent.extra("count"), None);
    }
}
