//! Navigation intents and their classification.
//!
//! An [`Intent`] is whatever the caller (or a redirect hook) asks to
//! navigate to. Before matching, the router classifies it into a [`Target`]
//! with a fixed precedence:
//!
//! | Intent | Target |
//! |--------|--------|
//! | text containing `/` | [`Target::Url`] |
//! | other text, blank included | [`Target::Named`] with no params |
//! | query with a `name` | [`Target::Named`] |
//! | query with only a `url` | [`Target::Url`] (passed through) |
//! | query with neither | [`Target::Empty`] |
//!
//! A url target starting with `http://` or `https://` never reaches the route
//! table; the router turns it into an external [`MatchResult`](crate::MatchResult).

use crate::params::RouteParams;
use std::fmt;

/// Something a caller wants to navigate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// A path/url (contains `/`) or a route name (does not).
    Text(String),
    /// A structured route query.
    Query(RouteQuery),
}

impl From<&str> for Intent {
    fn from(text: &str) -> Self {
        Intent::Text(text.to_string())
    }
}

impl From<String> for Intent {
    fn from(text: String) -> Self {
        Intent::Text(text)
    }
}

impl From<RouteQuery> for Intent {
    fn from(query: RouteQuery) -> Self {
        Intent::Query(query)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Text(text) => write!(f, "'{}'", text),
            Intent::Query(query) => write!(f, "{}", query),
        }
    }
}

/// Structured intent: a route name with params, or a bare url.
///
/// # Example
///
/// ```
/// use nav_resolver::RouteQuery;
///
/// let query = RouteQuery::named("profile").param("id", "42");
/// assert_eq!(query.name.as_deref(), Some("profile"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteQuery {
    /// Route name to look up. Takes precedence over `url`.
    pub name: Option<String>,
    /// Values for the route's template parameters.
    pub params: RouteParams,
    /// Path or absolute url, used when no name is given.
    pub url: Option<String>,
}

impl RouteQuery {
    /// Query a route by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Query by url.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Add a template parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Replace all template parameters.
    pub fn params(mut self, params: RouteParams) -> Self {
        self.params = params;
        self
    }
}

impl fmt::Display for RouteQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.url) {
            (Some(name), _) => {
                let mut pairs: Vec<String> =
                    self.params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
                pairs.sort();
                write!(f, "{{name: {}, params: {{{}}}}}", name, pairs.join(", "))
            }
            (None, Some(url)) => write!(f, "{{url: {}}}", url),
            (None, None) => write!(f, "{{}}"),
        }
    }
}

/// Classified intent, ready to be matched against a [`Route`](crate::Route).
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// A path (optionally with `?query`/`#fragment`) or an absolute url.
    Url(String),
    /// A route name lookup.
    Named { name: String, params: RouteParams },
    /// A query carrying neither a name nor a url. Matches no route.
    Empty,
}

impl Target {
    /// Classify an intent.
    ///
    /// Every [`Intent`] has a classification; blank text is a name lookup
    /// that simply finds nothing.
    pub fn classify(intent: &Intent) -> Self {
        match intent {
            Intent::Text(text) if text.contains('/') => Target::Url(text.clone()),
            Intent::Text(text) => Target::Named {
                name: text.clone(),
                params: RouteParams::new(),
            },
            Intent::Query(RouteQuery {
                name: Some(name),
                params,
                ..
            }) => Target::Named {
                name: name.clone(),
                params: params.clone(),
            },
            Intent::Query(RouteQuery { url: Some(url), .. }) => Target::Url(url.clone()),
            Intent::Query(_) => Target::Empty,
        }
    }

    /// The url of this target when it points outside the application.
    pub fn external_url(&self) -> Option<&str> {
        match self {
            Target::Url(url) if is_external_url(url) => Some(url),
            _ => None,
        }
    }
}

/// Check for an absolute `http://` or `https://` url.
pub fn is_external_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_with_slash_is_url() {
        let target = Target::classify(&"/u/42".into());
        assert_eq!(target, Target::Url("/u/42".to_string()));
    }

    #[test]
    fn test_text_without_slash_is_name() {
        let target = Target::classify(&"login".into());
        assert_eq!(
            target,
            Target::Named {
                name: "login".to_string(),
                params: RouteParams::new(),
            }
        );
    }

    #[test]
    fn test_name_wins_over_url() {
        let query = RouteQuery {
            name: Some("home".to_string()),
            params: RouteParams::new(),
            url: Some("/elsewhere".to_string()),
        };
        let target = Target::classify(&query.into());
        assert!(matches!(target, Target::Named { ref name, .. } if name == "home"));
    }

    #[test]
    fn test_url_only_query_passes_through() {
        let target = Target::classify(&RouteQuery::url("https://site/x").into());
        assert_eq!(target.external_url(), Some("https://site/x"));
    }

    #[test]
    fn test_blank_inputs_still_classify() {
        assert_eq!(
            Target::classify(&"".into()),
            Target::Named {
                name: String::new(),
                params: RouteParams::new(),
            }
        );
        assert!(matches!(
            Target::classify(&RouteQuery::named("  ").into()),
            Target::Named { ref name, .. } if name == "  "
        ));
        assert_eq!(Target::classify(&RouteQuery::default().into()), Target::Empty);
        assert_eq!(Target::Empty.external_url(), None);
    }

    #[test]
    fn test_external_url_detection() {
        assert!(is_external_url("http://site/x"));
        assert!(is_external_url("https://site/x"));
        assert!(!is_external_url("/http://"));
        assert!(!is_external_url("ftp://site"));
        assert_eq!(Target::Url("/local".to_string()).external_url(), None);
    }

    #[test]
    fn test_query_display_is_stable() {
        let query = RouteQuery::named("post").param("b", "2").param("a", "1");
        assert_eq!(query.to_string(), "{name: post, params: {a=1, b=2}}");
    }
}
