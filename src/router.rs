//! The router: route table, redirect rules, listeners, and redirect
//! resolution.
//!
//! # Resolution
//!
//! [`Router::resolve`] first produces the *raw* match for the caller's intent
//! (see [`Router::match_raw`]), then walks the redirect chain:
//!
//! 1. Fail with [`RouterError::MaxRedirectsExceeded`] once the number of
//!    redirect steps reaches `max_redirects`.
//! 2. After the first step, stop if the current match points where an
//!    earlier match in the chain pointed; that earlier match is the result.
//! 3. An external result reached by redirecting is terminal.
//! 4. Ask the current route's redirect hook for the next intent; if it
//!    declines, ask each global [`RedirectRule`] in registration order.
//! 5. Match the next intent (it must match, or
//!    [`RouterError::NoMatchForRedirect`]) and go back to 1.
//! 6. When nothing redirects, the chain has settled. If at least one step
//!    was taken the final match is returned, marked with the original;
//!    otherwise the raw match is returned untouched.

use crate::error::{Result, RouterError};
use crate::intent::{Intent, Target};
use crate::redirect::{rule_fn, RedirectRule};
use crate::result::MatchResult;
use crate::route::{Route, RouteConfig};
use crate::{debug_log, error_log, info_log, trace_log, warn_log};
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "cache")]
use crate::cache::{CacheStats, MatchCache};
#[cfg(feature = "cache")]
use std::cell::RefCell;

/// Default bound on redirect steps per resolution.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Callback notified with the resolved url on every [`Router::go`].
pub type ChangeListener = Box<dyn Fn(&str) + Send + Sync>;

/// Construction-time configuration for a [`Router`].
///
/// # Example
///
/// ```
/// use nav_resolver::{HttpsUpgrade, RouteConfig, Router, RouterConfig};
///
/// let router = Router::new(
///     RouterConfig::new()
///         .route("home", RouteConfig::new("/"))
///         .redirect(HttpsUpgrade)
///         .max_redirects(5),
/// );
/// assert_eq!(router.max_redirects(), 5);
/// ```
pub struct RouterConfig {
    routes: Vec<(String, RouteConfig)>,
    redirects: Vec<Box<dyn RedirectRule>>,
    max_redirects: usize,
    #[cfg(feature = "cache")]
    cache_capacity: usize,
}

impl RouterConfig {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            redirects: Vec::new(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            #[cfg(feature = "cache")]
            cache_capacity: MatchCache::DEFAULT_CAPACITY,
        }
    }

    /// Register a route under `name`. Registration order is match priority.
    pub fn route(mut self, name: impl Into<String>, config: RouteConfig) -> Self {
        self.routes.push((name.into(), config));
        self
    }

    /// Register several routes in iteration order.
    ///
    /// Pass an ordered collection; a `HashMap` makes match priority
    /// unpredictable.
    pub fn routes<I, N>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = (N, RouteConfig)>,
        N: Into<String>,
    {
        self.routes
            .extend(routes.into_iter().map(|(name, config)| (name.into(), config)));
        self
    }

    /// Append a global redirect rule.
    pub fn redirect(mut self, rule: impl RedirectRule) -> Self {
        self.redirects.push(Box::new(rule));
        self
    }

    /// Append a global redirect rule built from a closure.
    pub fn redirect_fn<F>(self, name: impl Into<String>, test: F) -> Self
    where
        F: Fn(&MatchResult) -> Option<Intent> + Send + Sync + 'static,
    {
        self.redirect(rule_fn(name, test))
    }

    /// Bound on redirect steps per resolution.
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Number of urls kept in the raw-match cache.
    #[cfg(feature = "cache")]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact-equality filter for [`Router::get_route`].
///
/// Every field that is set must equal the route's attribute; an empty lookup
/// matches the first route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteLookup {
    pub name: Option<String>,
    pub path: Option<String>,
}

impl RouteLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Check a route against every set field.
    pub fn matches(&self, route: &Route) -> bool {
        self.name.as_deref().map_or(true, |name| route.name() == name)
            && self.path.as_deref().map_or(true, |path| route.path() == path)
    }
}

/// Resolves navigation intents against an ordered route table.
///
/// Setup (construction, [`add_routes`](Self::add_routes),
/// [`on_change`](Self::on_change)) needs `&mut self`; resolution only reads.
pub struct Router {
    routes: Vec<Arc<Route>>,
    redirects: Vec<Box<dyn RedirectRule>>,
    max_redirects: usize,
    listeners: Vec<ChangeListener>,
    #[cfg(feature = "cache")]
    cache: RefCell<MatchCache>,
}

impl Router {
    pub fn new(config: RouterConfig) -> Self {
        for rule in &config.redirects {
            info_log!("Registered redirect rule '{}'", rule.name());
        }

        let mut router = Self {
            routes: Vec::new(),
            redirects: config.redirects,
            max_redirects: config.max_redirects,
            listeners: Vec::new(),
            #[cfg(feature = "cache")]
            cache: RefCell::new(MatchCache::with_capacity(config.cache_capacity)),
        };
        router.add_routes(config.routes);
        router
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Stamp each name into its config and append the routes in iteration
    /// order.
    pub fn add_routes<I, N>(&mut self, routes: I)
    where
        I: IntoIterator<Item = (N, RouteConfig)>,
        N: Into<String>,
    {
        for (name, config) in routes {
            let route = Route::new(name, config);
            info_log!("Registered route '{}' ({})", route.name(), route.path());
            self.routes.push(Arc::new(route));
        }
        #[cfg(feature = "cache")]
        self.cache.get_mut().clear();
    }

    /// Append a single route.
    pub fn add_route(&mut self, name: impl Into<String>, config: RouteConfig) {
        self.add_routes([(name, config)]);
    }

    /// Subscribe to navigation. Listeners cannot be removed.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Routes in match-priority order.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    /// Names of the global redirect rules in evaluation order.
    pub fn redirect_rules(&self) -> impl Iterator<Item = &str> {
        self.redirects.iter().map(|rule| rule.name())
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects
    }

    /// First route whose attributes equal every field of `lookup`.
    pub fn get_route(&self, lookup: &RouteLookup) -> Option<&Arc<Route>> {
        self.routes.iter().find(|route| lookup.matches(route))
    }

    pub fn get_route_by_name(&self, name: &str) -> Result<&Arc<Route>> {
        self.get_route(&RouteLookup::new().name(name))
            .ok_or_else(|| RouterError::NoRouteNamed {
                name: name.to_string(),
            })
    }

    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats().clone()
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Resolve an intent to its settled match, following redirects.
    ///
    /// Returns `Ok(None)` when no route matches the intent itself. An
    /// absolute url that no rule rewrites comes back unmarked, so
    /// [`MatchResult::was_redirected`] is `false` for it.
    ///
    /// # Example
    ///
    /// ```
    /// use nav_resolver::{RouteConfig, Router, RouterConfig};
    ///
    /// let router = Router::new(
    ///     RouterConfig::new()
    ///         .route("home", RouteConfig::new("/"))
    ///         .route("old", RouteConfig::new("/old").redirect(|_| Some("home".into()))),
    /// );
    ///
    /// let settled = router.resolve("/old").unwrap().unwrap();
    /// assert_eq!(settled.route_name(), Some("home"));
    /// assert!(router.resolve("/missing").unwrap().is_none());
    /// ```
    pub fn resolve(&self, input: impl Into<Intent>) -> Result<Option<MatchResult>> {
        let intent = input.into();
        let Some(original) = self.match_raw(&intent)? else {
            debug_log!("No route matches {}", intent);
            return Ok(None);
        };

        match self.follow_redirects(&original)? {
            Some(mut redirected) => {
                redirected.mark_as_redirect(original);
                Ok(Some(redirected))
            }
            None => Ok(Some(original)),
        }
    }

    /// Match an intent against the route table without following redirects.
    ///
    /// Absolute `http(s)://` urls short-circuit to an external result.
    /// Otherwise the first route that matches wins.
    pub fn match_raw(&self, intent: &Intent) -> Result<Option<MatchResult>> {
        let target = Target::classify(intent);

        if let Some(url) = target.external_url() {
            trace_log!("External url '{}' bypasses the route table", url);
            return Ok(Some(MatchResult::external(url)));
        }

        #[cfg(feature = "cache")]
        {
            if let Target::Url(url) = &target {
                if let Some(cached) = self.cache.borrow_mut().get(url) {
                    return Ok(cached);
                }
                let raw = self.scan_routes(&target);
                self.cache.borrow_mut().insert(url.clone(), raw.clone());
                return Ok(raw);
            }
        }

        Ok(self.scan_routes(&target))
    }

    fn scan_routes(&self, target: &Target) -> Option<MatchResult> {
        self.routes.iter().find_map(|route| route.matches(target))
    }

    /// Walk the redirect chain starting at `original`.
    ///
    /// `Ok(None)` means nothing ever redirected and the caller should use
    /// `original` as is.
    fn follow_redirects(&self, original: &MatchResult) -> Result<Option<MatchResult>> {
        let mut history = vec![original.clone()];
        let mut num_redirects = 0;

        loop {
            if num_redirects >= self.max_redirects {
                error_log!(
                    "Redirect chain exceeded max_redirects ({}) starting at '{}'",
                    self.max_redirects,
                    original.url()
                );
                return Err(RouterError::MaxRedirectsExceeded {
                    max_redirects: self.max_redirects,
                    chain: history.iter().map(|m| m.url().to_string()).collect(),
                });
            }

            let Some((current, earlier)) = history.split_last() else {
                return Ok(None);
            };

            if num_redirects > 0 {
                if let Some(repeat) = earlier.iter().rev().find(|m| m.same_destination(current)) {
                    warn_log!(
                        "Redirect cycle detected at '{}', settling on '{}'",
                        current.url(),
                        repeat.url()
                    );
                    return Ok(Some(repeat.clone()));
                }

                if current.is_external() {
                    return Ok(Some(current.clone()));
                }
            }

            let Some(next) = self.next_intent(current) else {
                if num_redirects == 0 {
                    return Ok(None);
                }
                debug_log!(
                    "Redirect chain settled on '{}' after {} step(s)",
                    current.url(),
                    num_redirects
                );
                return Ok(history.pop());
            };

            let Some(target) = self.match_raw(&next)? else {
                error_log!(
                    "No route matches redirect target {} (from '{}')",
                    next,
                    current.url()
                );
                return Err(RouterError::NoMatchForRedirect {
                    target: next.to_string(),
                });
            };

            num_redirects += 1;
            debug_log!(
                "Redirect #{}: '{}' -> '{}'",
                num_redirects,
                current.url(),
                target.url()
            );
            history.push(target);
        }
    }

    /// The route's own hook first, then global rules in order.
    fn next_intent(&self, current: &MatchResult) -> Option<Intent> {
        if let Some(next) = current.route().and_then(|route| route.redirect(current)) {
            trace_log!(
                "Redirect hook of '{}' chose {}",
                current.route_name().unwrap_or_default(),
                next
            );
            return Some(next);
        }

        self.redirects.iter().find_map(|rule| {
            let next = rule.test(current)?;
            trace_log!("Redirect rule '{}' chose {}", rule.name(), next);
            Some(next)
        })
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Resolve an intent and notify every listener, in registration order,
    /// with the resolved url.
    ///
    /// Listeners run synchronously; a panicking listener stops the fan-out.
    pub fn go(&self, input: impl Into<Intent>) -> Result<MatchResult> {
        let intent = input.into();
        let described = intent.to_string();
        let resolved = self
            .resolve(intent)?
            .ok_or(RouterError::NotFound { input: described })?;

        info_log!(
            "Navigating to '{}' ({} listener(s))",
            resolved.url(),
            self.listeners.len()
        );
        for listener in &self.listeners {
            listener(resolved.url());
        }
        Ok(resolved)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(RouterConfig::new())
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field(
                "redirects",
                &self.redirect_rules().collect::<Vec<_>>(),
            )
            .field("max_redirects", &self.max_redirects)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
