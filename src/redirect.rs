//! Global redirect rules.
//!
//! Rules are consulted after a route's own redirect hook declines. They run
//! in registration order and the first rule returning `Some` decides the next
//! intent; reordering rules changes behavior.
//!
//! # Creating rules
//!
//! | Approach | When to use |
//! |----------|-------------|
//! | Implement [`RedirectRule`] | Stateful or reusable rules |
//! | [`rule_fn`] | Quick one-off from a closure |
//! | [`HttpsUpgrade`] | Send plain `http://` hand-offs to `https://` |
//!
//! # Example
//!
//! ```
//! use nav_resolver::{rule_fn, RedirectRule};
//!
//! let maintenance = rule_fn("maintenance", |current| {
//!     (current.route_name() == Some("shop")).then(|| "/maintenance".into())
//! });
//! assert_eq!(maintenance.name(), "maintenance");
//! ```

use crate::intent::Intent;
use crate::result::MatchResult;

/// A named predicate deciding whether the current match must redirect.
pub trait RedirectRule: Send + Sync + 'static {
    /// Rule name, used in diagnostics.
    fn name(&self) -> &str;

    /// Return the next intent, or `None` when no redirect is needed.
    ///
    /// Rules should be pure: the router may call them once per step and in a
    /// fixed order.
    fn test(&self, current: &MatchResult) -> Option<Intent>;
}

/// Create a rule from a closure.
pub fn rule_fn<F>(name: impl Into<String>, f: F) -> FnRule<F>
where
    F: Fn(&MatchResult) -> Option<Intent> + Send + Sync + 'static,
{
    FnRule {
        name: name.into(),
        f,
    }
}

/// Rule created from a closure by [`rule_fn`].
pub struct FnRule<F> {
    name: String,
    f: F,
}

impl<F> RedirectRule for FnRule<F>
where
    F: Fn(&MatchResult) -> Option<Intent> + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn test(&self, current: &MatchResult) -> Option<Intent> {
        (self.f)(current)
    }
}

/// Rewrites `http://` urls to `https://`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpsUpgrade;

impl RedirectRule for HttpsUpgrade {
    fn name(&self) -> &str {
        "upgradeToHttps"
    }

    fn test(&self, current: &MatchResult) -> Option<Intent> {
        current
            .url()
            .strip_prefix("http://")
            .map(|rest| Intent::Text(format!("https://{}", rest)))
    }
}
