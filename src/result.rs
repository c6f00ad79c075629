//! Outcome of one matching step.

use crate::params::{QueryParams, RouteParams};
use crate::route::Route;
use std::sync::Arc;

/// The result of matching an intent against the route table, or of
/// short-circuiting to an external url.
///
/// Results are created fresh by every matching step. When the router reaches
/// a result by following redirects it records the caller's original match
/// with [`mark_as_redirect`](Self::mark_as_redirect).
#[derive(Debug, Clone)]
pub struct MatchResult {
    route: Option<Arc<Route>>,
    params: RouteParams,
    query: QueryParams,
    url: String,
    external: bool,
    redirected_from: Option<Box<MatchResult>>,
}

impl MatchResult {
    /// A match against a registered route.
    pub fn internal(
        route: Arc<Route>,
        params: RouteParams,
        query: QueryParams,
        url: impl Into<String>,
    ) -> Self {
        Self {
            route: Some(route),
            params,
            query,
            url: url.into(),
            external: false,
            redirected_from: None,
        }
    }

    /// A hand-off to an absolute url outside the route table.
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            route: None,
            params: RouteParams::new(),
            query: QueryParams::new(),
            url: url.into(),
            external: true,
            redirected_from: None,
        }
    }

    /// The matched route; `None` for external results.
    pub fn route(&self) -> Option<&Arc<Route>> {
        self.route.as_ref()
    }

    /// Name of the matched route.
    pub fn route_name(&self) -> Option<&str> {
        self.route.as_deref().map(Route::name)
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Resolved url. Absolute for external results, a path otherwise.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `true` only for an external-url short-circuit.
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Record that this result was reached by redirecting away from
    /// `original`, the match for the caller's initial intent.
    pub fn mark_as_redirect(&mut self, original: MatchResult) {
        self.redirected_from = Some(Box::new(original));
    }

    /// The original match this result was redirected from.
    pub fn redirected_from(&self) -> Option<&MatchResult> {
        self.redirected_from.as_deref()
    }

    pub fn was_redirected(&self) -> bool {
        self.redirected_from.is_some()
    }

    /// Whether two results point at the same place: the same registered
    /// route with structurally equal params, or the same external url.
    pub fn same_destination(&self, other: &MatchResult) -> bool {
        let same_route = match (&self.route, &other.route) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => self.url == other.url,
            _ => false,
        };
        same_route && self.params == other.params
    }
}
