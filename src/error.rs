//! Error handling for the router.
//!
//! Every failure is fatal and synchronous: the router never retries and has
//! no fallback mode. Each variant points at a defect in the route table or
//! the redirect configuration rather than a transient condition.
//!
//! # Examples
//!
//! ```
//! use nav_resolver::RouterError;
//!
//! let err = RouterError::NoRouteNamed { name: "nonexistent".into() };
//! assert_eq!(err.to_string(), "No route named nonexistent");
//! ```

use std::fmt;

/// Errors raised while registering, looking up, or resolving routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The intent could not be classified as a path, a name, or a query.
    ///
    /// Every [`Intent`](crate::Intent) has a classification, so resolution
    /// never produces this. It is kept for callers converting their own
    /// input into intents.
    InvalidInput { reason: String },

    /// [`get_route_by_name`](crate::Router::get_route_by_name) found nothing.
    NoRouteNamed { name: String },

    /// The redirect chain reached `max_redirects` without settling.
    MaxRedirectsExceeded {
        max_redirects: usize,
        /// Urls visited so far, starting with the original match.
        chain: Vec<String>,
    },

    /// A hook or rule redirected to an intent no route matches.
    NoMatchForRedirect { target: String },

    /// [`go`](crate::Router::go) was asked to navigate to an intent that
    /// resolves to nothing.
    NotFound { input: String },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidInput { reason } => {
                write!(f, "Invalid navigation input: {}", reason)
            }
            RouterError::NoRouteNamed { name } => write!(f, "No route named {}", name),
            RouterError::MaxRedirectsExceeded {
                max_redirects,
                chain,
            } => write!(
                f,
                "Number of redirects exceeded max_redirects ({}): {}",
                max_redirects,
                chain.join(" -> ")
            ),
            RouterError::NoMatchForRedirect { target } => {
                write!(f, "No match for redirect result {}", target)
            }
            RouterError::NotFound { input } => write!(f, "Nothing matches {}", input),
        }
    }
}

impl std::error::Error for RouterError {}

impl RouterError {
    /// Check if this error came out of the redirect chain rather than the
    /// caller's own input.
    pub fn is_redirect_failure(&self) -> bool {
        matches!(
            self,
            RouterError::MaxRedirectsExceeded { .. } | RouterError::NoMatchForRedirect { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = RouterError> = std::result::Result<T, E>;
