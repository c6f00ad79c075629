//! Navigation intent resolution with redirect chains.
//!
//! `nav-resolver` answers one question for a client-side navigation layer:
//! *where does this intent actually lead?* An intent is a route name, a path,
//! a full external URL, or a structured [`RouteQuery`]. The [`Router`] matches
//! it against an ordered table of [`Route`]s and then keeps following
//! redirects (per-route hooks first, then global [`RedirectRule`]s) until the
//! result settles, leaves for an external URL, or the redirect bound is hit.
//!
//! # Quick start
//!
//! ```
//! use nav_resolver::{RouteConfig, Router, RouterConfig};
//!
//! let router = Router::new(
//!     RouterConfig::new()
//!         .route("home", RouteConfig::new("/"))
//!         .route("profile", RouteConfig::new("/u/:id"))
//!         .route("me", RouteConfig::new("/me").redirect(|_| Some("/u/42".into()))),
//! );
//!
//! let found = router.resolve("/u/7").unwrap().unwrap();
//! assert_eq!(found.route_name(), Some("profile"));
//! assert_eq!(found.params().get("id"), Some(&"7".to_string()));
//!
//! let redirected = router.resolve("me").unwrap().unwrap();
//! assert_eq!(redirected.url(), "/u/42");
//! assert_eq!(redirected.redirected_from().unwrap().route_name(), Some("me"));
//! ```
//!
//! # Features
//!
//! | Feature   | Default | Purpose |
//! |-----------|---------|---------|
//! | `log`     | yes     | Diagnostics through the `log` crate |
//! | `tracing` | no      | Diagnostics through the `tracing` crate |
//! | `cache`   | yes     | LRU cache of raw route-table matches |

pub mod logging;

#[cfg(feature = "cache")]
pub mod cache;
pub mod error;
pub mod intent;
pub mod matching;
pub mod params;
pub mod redirect;
pub mod result;
pub mod route;
pub mod router;

pub use error::{Result, RouterError};
pub use intent::{is_external_url, Intent, RouteQuery, Target};
pub use matching::normalize_path;
pub use params::{QueryParams, RouteParams};
pub use redirect::{rule_fn, FnRule, HttpsUpgrade, RedirectRule};
pub use result::MatchResult;
pub use route::{RedirectHook, Route, RouteConfig};
pub use router::{ChangeListener, RouteLookup, Router, RouterConfig, DEFAULT_MAX_REDIRECTS};

/// Target used for every diagnostic event emitted by this crate.
pub const LOG_TARGET: &str = "nav_resolver";
