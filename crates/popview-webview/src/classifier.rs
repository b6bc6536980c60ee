//! Navigation classification.
//!
//! A navigation request is either loaded by the issuing surface
//! (plain web URL) or handed off: to an external application handler,
//! to an embedded fallback URL, or, when nothing can service it, to
//! a user-visible notice. Classification is pure; the shell performs
//! the resulting action.

use tracing::debug;
use url::Url;

use crate::intent::{IntentUri, INTENT_SCHEME};

/// Schemes the rendering surface loads itself.
pub const WEB_SCHEMES: &[&str] = &["http", "https"];

/// True for URLs the surface should load directly, without
/// interception. `about:blank` is the empty popup page.
pub fn is_web_url(url: &str) -> bool {
    if url == "about:blank" {
        return true;
    }
    match Url::parse(url) {
        Ok(parsed) => WEB_SCHEMES.contains(&parsed.scheme()),
        Err(_) => false,
    }
}

/// A navigation request derived from one intercepted URL load.
/// Ephemeral; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// The URL exactly as the surface requested it.
    pub url: String,
    /// Lowercased scheme, empty when the URL has none.
    pub scheme: String,
    /// Lowercased scheme of `launch_url`. For intent URIs this is the
    /// declared target scheme, not `intent`; handler resolution must
    /// query this one, since `launch_url` is what gets opened.
    pub handler_scheme: String,
    /// The URI an external handler should receive. For intent URIs
    /// this is the reconstructed `scheme://data` form; otherwise the
    /// raw URL.
    pub launch_url: String,
    /// Fallback web URL embedded in the request, if any.
    pub fallback_url: Option<String>,
}

impl NavigationRequest {
    /// Derive a request from a raw URL. Malformed intent URIs yield a
    /// request with no fallback rather than an error; the classifier
    /// then reports them as unhandled instead of crashing the shell.
    pub fn parse(raw: &str) -> Self {
        let scheme = Url::parse(raw)
            .map(|u| u.scheme().to_ascii_lowercase())
            .unwrap_or_default();

        let mut handler_scheme = scheme.clone();
        let mut launch_url = raw.to_string();
        let mut fallback_url = None;
        if scheme == INTENT_SCHEME {
            match IntentUri::parse(raw) {
                Ok(intent) => {
                    if let Some(url) = intent.launch_url() {
                        launch_url = url;
                    }
                    if let Some(target) = &intent.scheme {
                        handler_scheme = target.to_ascii_lowercase();
                    }
                    fallback_url = intent.fallback_url().map(str::to_string);
                }
                Err(e) => {
                    debug!(url = %raw, error = %e, "malformed intent uri");
                }
            }
        }

        Self {
            url: raw.to_string(),
            scheme,
            handler_scheme,
            launch_url,
            fallback_url,
        }
    }
}

/// Outcome of classifying one navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Web URL; the requesting surface loads it itself.
    LoadDirectly,
    /// An external application handler exists; launch it with the URI.
    DelegateToHandler(String),
    /// No handler, but the request embeds a fallback URL to load.
    LoadFallback(String),
    /// Nothing can service this request; tell the user.
    Unhandled,
}

/// Host-OS collaborator that answers "does any installed application
/// handle this URI?".
pub trait HandlerResolver {
    fn resolves(&self, request: &NavigationRequest) -> bool;
}

/// Classify a navigation request. First matching rule wins:
/// web scheme → load directly; resolvable handler → delegate;
/// non-empty fallback → load fallback; otherwise unhandled.
///
/// The fallback URL is passed through without scheme or origin
/// validation (a known gap, not a guarantee).
pub fn classify(request: &NavigationRequest, resolver: &impl HandlerResolver) -> Classification {
    if WEB_SCHEMES.contains(&request.scheme.as_str()) {
        return Classification::LoadDirectly;
    }
    if resolver.resolves(request) {
        return Classification::DelegateToHandler(request.launch_url.clone());
    }
    match &request.fallback_url {
        Some(url) if !url.is_empty() => Classification::LoadFallback(url.clone()),
        _ => Classification::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedResolver(bool);

    impl HandlerResolver for FixedResolver {
        fn resolves(&self, _request: &NavigationRequest) -> bool {
            self.0
        }
    }

    #[test]
    fn web_urls_load_directly() {
        let resolver = FixedResolver(false);
        for url in ["http://example.com", "https://example.com/path?q=1"] {
            let request = NavigationRequest::parse(url);
            assert_eq!(classify(&request, &resolver), Classification::LoadDirectly);
        }
    }

    #[test]
    fn web_urls_skip_handler_resolution() {
        // Even a resolver that answers yes must not be consulted for
        // http(s); the surface owns those loads.
        let request = NavigationRequest::parse("https://example.com");
        assert_eq!(
            classify(&request, &FixedResolver(true)),
            Classification::LoadDirectly
        );
    }

    #[test]
    fn resolvable_custom_scheme_is_delegated() {
        let request = NavigationRequest::parse("kakaotalk://inappbrowser?url=x");
        assert_eq!(
            classify(&request, &FixedResolver(true)),
            Classification::DelegateToHandler("kakaotalk://inappbrowser?url=x".into())
        );
    }

    #[test]
    fn resolvable_intent_delegates_reconstructed_uri() {
        let request = NavigationRequest::parse(
            "intent://details?id=app#Intent;scheme=market;S.browser_fallback_url=https%3A%2F%2Ffallback.example;end",
        );
        assert_eq!(
            classify(&request, &FixedResolver(true)),
            Classification::DelegateToHandler("market://details?id=app".into())
        );
    }

    #[test]
    fn intent_request_exposes_target_scheme_for_resolution() {
        // Resolution must consult the scheme the handler would be
        // launched with, never the literal "intent" wrapper.
        let request = NavigationRequest::parse(
            "intent://details?id=app#Intent;scheme=market;end",
        );
        assert_eq!(request.scheme, "intent");
        assert_eq!(request.handler_scheme, "market");
        assert_eq!(request.launch_url, "market://details?id=app");
    }

    #[test]
    fn intent_without_target_scheme_keeps_raw_uri() {
        let request = NavigationRequest::parse("intent://host#Intent;package=com.x;end");
        assert_eq!(request.handler_scheme, "intent");
        assert_eq!(request.launch_url, "intent://host#Intent;package=com.x;end");
    }

    #[test]
    fn unresolvable_intent_uses_fallback() {
        let request = NavigationRequest::parse(
            "intent://details?id=app#Intent;scheme=market;S.browser_fallback_url=https%3A%2F%2Ffallback.example;end",
        );
        assert_eq!(
            classify(&request, &FixedResolver(false)),
            Classification::LoadFallback("https://fallback.example".into())
        );
    }

    #[test]
    fn unresolvable_without_fallback_is_unhandled() {
        let request = NavigationRequest::parse("intent://host#Intent;scheme=app;end");
        assert_eq!(
            classify(&request, &FixedResolver(false)),
            Classification::Unhandled
        );
    }

    #[test]
    fn malformed_intent_is_unhandled_not_a_crash() {
        // No #Intent fragment at all.
        let request = NavigationRequest::parse("intent://host/path");
        assert_eq!(request.scheme, "intent");
        assert_eq!(request.fallback_url, None);
        assert_eq!(
            classify(&request, &FixedResolver(false)),
            Classification::Unhandled
        );
    }

    #[test]
    fn unresolvable_plain_scheme_is_unhandled() {
        let request = NavigationRequest::parse("mailto:someone@example.com");
        assert_eq!(request.scheme, "mailto");
        assert_eq!(
            classify(&request, &FixedResolver(false)),
            Classification::Unhandled
        );
    }

    #[test]
    fn schemeless_string_is_unhandled() {
        let request = NavigationRequest::parse("not a url at all");
        assert_eq!(request.scheme, "");
        assert_eq!(
            classify(&request, &FixedResolver(false)),
            Classification::Unhandled
        );
    }

    #[test]
    fn is_web_url_accepts_http_https_and_blank() {
        assert!(is_web_url("http://example.com"));
        assert!(is_web_url("https://example.com"));
        assert!(is_web_url("about:blank"));
    }

    #[test]
    fn is_web_url_rejects_other_schemes() {
        assert!(!is_web_url("intent://x#Intent;end"));
        assert!(!is_web_url("market://details"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url(""));
        assert!(!is_web_url("no scheme here"));
    }
}
