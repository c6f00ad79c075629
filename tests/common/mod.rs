//! Shared fixtures for integration tests.

#![allow(dead_code)]

use nav_resolver::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// `home` at `/` and `profile` at `/u/:id`.
pub fn basic_config() -> RouterConfig {
    RouterConfig::new()
        .route("home", RouteConfig::new("/"))
        .route("profile", RouteConfig::new("/u/:id"))
}

pub fn basic_router() -> Router {
    Router::new(basic_config())
}

/// A session flag shared between a test and the redirect hooks it configures.
#[derive(Clone, Default)]
pub struct Session(Arc<AtomicBool>);

impl Session {
    pub fn logged_in() -> Self {
        let session = Self::default();
        session.set(true);
        session
    }

    pub fn set(&self, value: bool) {
        self.0.store(value, Ordering::SeqCst);
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Route that redirects to `to` unconditionally.
pub fn forward(path: &str, to: &'static str) -> RouteConfig {
    RouteConfig::new(path).redirect(move |_| Some(to.into()))
}

/// Shared log of `(listener tag, url)` notifications.
pub type Calls = Arc<Mutex<Vec<(&'static str, String)>>>;

/// Listener that appends `(tag, url)` to a shared log.
pub fn recorder(calls: &Calls, tag: &'static str) -> impl Fn(&str) + Send + Sync + 'static {
    let calls = Arc::clone(calls);
    move |url: &str| calls.lock().unwrap().push((tag, url.to_string()))
}

pub fn assert_param_equals(result: &MatchResult, key: &str, expected: &str) {
    let value = result.params().get(key);
    assert!(value.is_some(), "Parameter '{}' not found", key);
    assert_eq!(value.unwrap(), expected, "Parameter '{}' has wrong value", key);
}

pub fn assert_route(result: &MatchResult, name: &str) {
    assert_eq!(
        result.route_name(),
        Some(name),
        "expected route '{}', got {:?}",
        name,
        result.route_name()
    );
}
