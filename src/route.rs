//! Registered destinations.

use crate::intent::{Intent, Target};
use crate::matching::{build_path, match_path, normalize_path, split_url, template_params};
use crate::params::{QueryParams, RouteParams};
use crate::result::MatchResult;
use crate::trace_log;
use std::fmt;
use std::sync::Arc;

/// Per-route redirect hook.
///
/// Receives the match for its own route and returns the next intent, or
/// `None` when no redirect is needed.
pub type RedirectHook = Arc<dyn Fn(&MatchResult) -> Option<Intent> + Send + Sync>;

/// Configuration for one route, registered under a name via
/// [`RouterConfig::route`](crate::RouterConfig::route) or
/// [`Router::add_routes`](crate::Router::add_routes).
///
/// # Example
///
/// ```
/// use nav_resolver::RouteConfig;
///
/// let logged_in = true;
/// let login = RouteConfig::new("/login")
///     .redirect(move |_| logged_in.then(|| "/home".into()));
/// assert_eq!(login.path(), "/login");
/// ```
#[derive(Clone)]
pub struct RouteConfig {
    path: String,
    redirect: Option<RedirectHook>,
}

impl RouteConfig {
    /// Create a route config for a path template such as `/u/:id`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            redirect: None,
        }
    }

    /// Attach a redirect hook.
    pub fn redirect<F>(mut self, hook: F) -> Self
    where
        F: Fn(&MatchResult) -> Option<Intent> + Send + Sync + 'static,
    {
        self.redirect = Some(Arc::new(hook));
        self
    }

    /// The path template.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Debug for RouteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteConfig")
            .field("path", &self.path)
            .field("redirect", &self.redirect.is_some())
            .finish()
    }
}

/// A named destination in the route table.
///
/// Routes are created by the router from a [`RouteConfig`] and never change
/// afterwards.
pub struct Route {
    name: String,
    path: String,
    redirect: Option<RedirectHook>,
}

impl Route {
    /// Stamp a name into a config.
    pub fn new(name: impl Into<String>, config: RouteConfig) -> Self {
        Self {
            name: name.into(),
            path: config.path,
            redirect: config.redirect,
        }
    }

    /// Registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path template.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this route carries a redirect hook.
    pub fn has_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    /// Run the redirect hook, if any, against a match for this route.
    pub fn redirect(&self, current: &MatchResult) -> Option<Intent> {
        self.redirect.as_ref().and_then(|hook| hook(current))
    }

    /// Try to match a classified target.
    ///
    /// - [`Target::Url`] matches when the url's path fills the template;
    ///   its query string is parsed into [`MatchResult::query`].
    /// - [`Target::Named`] matches when the names are equal and every
    ///   template parameter is supplied. Params the template does not use
    ///   become query parameters.
    /// - [`Target::Empty`] never matches.
    pub fn matches(self: &Arc<Self>, target: &Target) -> Option<MatchResult> {
        match target {
            Target::Url(url) => {
                let (path, query) = split_url(url);
                let path = normalize_path(path);
                let params = match_path(&path, &self.path)?;
                let query = query.map(QueryParams::from_query_string).unwrap_or_default();
                trace_log!("Route '{}' matched url '{}'", self.name, url);
                let url = join_url(&path, &query);
                Some(MatchResult::internal(Arc::clone(self), params, query, url))
            }
            Target::Named { name, params } => {
                if *name != self.name {
                    return None;
                }
                let path = build_path(&self.path, params)?;
                let declared = template_params(&self.path);

                let mut path_params = RouteParams::new();
                let mut query = QueryParams::new();
                for (key, value) in params.iter() {
                    if declared.contains(&key.as_str()) {
                        path_params.insert(key.clone(), value.clone());
                    } else {
                        query.insert(key.clone(), value.clone());
                    }
                }
                // build_path succeeded, so only a wildcard can be missing.
                for key in declared {
                    if !path_params.contains(key) {
                        path_params.insert(key, "");
                    }
                }

                trace_log!("Route '{}' matched by name", self.name);
                let url = join_url(&path, &query);
                Some(MatchResult::internal(
                    Arc::clone(self),
                    path_params,
                    query,
                    url,
                ))
            }
            Target::Empty => None,
        }
    }
}

fn join_url(path: &str, query: &QueryParams) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query.to_query_string())
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("redirect", &self.redirect.is_some())
            .finish()
    }
}
