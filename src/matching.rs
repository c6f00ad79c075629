//! Segment-based path template matching.
//!
//! Templates are split on `/` into segments:
//!
//! - `literal` must match exactly
//! - `:name` captures one segment into [`RouteParams`]
//! - `*name` (or a bare `*`) captures the rest of the path and must be last
//!
//! Unlike prefix matching, every path segment has to be consumed: `/users/:id`
//! does not match `/users/1/edit`.

use crate::params::RouteParams;
use std::borrow::Cow;

/// Param key used for a bare `*` wildcard.
pub const WILDCARD_KEY: &str = "*";

/// Normalize a path: leading slash, no trailing slash, no empty segments.
///
/// Returns `Cow::Borrowed` when the path is already normal.
///
/// # Examples
///
/// ```
/// use nav_resolver::normalize_path;
///
/// assert_eq!(normalize_path("/dashboard"), "/dashboard");
/// assert_eq!(normalize_path("dashboard/"), "/dashboard");
/// assert_eq!(normalize_path("//a//b"), "/a/b");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let already_normal = path == "/"
        || (path.starts_with('/') && !path.ends_with('/') && !path.contains("//"));
    if already_normal {
        return Cow::Borrowed(path);
    }

    let segments = split_path(path);
    if segments.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", segments.join("/")))
    }
}

/// Split a path into its non-empty segments.
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Split a url into `(path, query)`, dropping any `#fragment`.
///
/// ```
/// use nav_resolver::matching::split_url;
///
/// assert_eq!(split_url("/a?x=1#top"), ("/a", Some("x=1")));
/// assert_eq!(split_url("/a#top"), ("/a", None));
/// ```
pub fn split_url(url: &str) -> (&str, Option<&str>) {
    let without_fragment = url.split_once('#').map_or(url, |(before, _)| before);
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    }
}

/// Match a concrete path against a template, extracting parameters.
///
/// ```
/// use nav_resolver::matching::match_path;
///
/// let params = match_path("/u/42", "/u/:id").unwrap();
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
/// assert!(match_path("/u/42/edit", "/u/:id").is_none());
/// ```
pub fn match_path(path: &str, template: &str) -> Option<RouteParams> {
    let path_segments = split_path(path);
    let template_segments = split_path(template);
    let mut params = RouteParams::new();

    for (index, template_seg) in template_segments.iter().enumerate() {
        if let Some(name) = wildcard_name(template_seg) {
            let rest = path_segments.get(index..).unwrap_or_default();
            params.insert(name, rest.join("/"));
            return Some(params);
        }

        let path_seg = path_segments.get(index)?;
        if let Some(name) = param_name(template_seg) {
            params.insert(name, *path_seg);
        } else if template_seg != path_seg {
            return None;
        }
    }

    (path_segments.len() == template_segments.len()).then_some(params)
}

/// Build a concrete path from a template and parameter values.
///
/// Every `:param` must be supplied; a missing wildcard expands to nothing.
///
/// ```
/// use nav_resolver::{matching::build_path, RouteParams};
///
/// let params = RouteParams::new().with("id", "7");
/// assert_eq!(build_path("/u/:id", &params).as_deref(), Some("/u/7"));
/// assert_eq!(build_path("/u/:id", &RouteParams::new()), None);
/// ```
pub fn build_path(template: &str, params: &RouteParams) -> Option<String> {
    let mut segments = Vec::new();

    for template_seg in split_path(template) {
        if let Some(name) = wildcard_name(template_seg) {
            if let Some(rest) = params.get(name).filter(|rest| !rest.is_empty()) {
                segments.push(rest.trim_matches('/').to_string());
            }
        } else if let Some(name) = param_name(template_seg) {
            segments.push(params.get(name)?.clone());
        } else {
            segments.push(template_seg.to_string());
        }
    }

    Some(format!("/{}", segments.join("/")))
}

/// Names of every parameter a template declares.
pub fn template_params(template: &str) -> Vec<&str> {
    split_path(template)
        .into_iter()
        .filter_map(|seg| param_name(seg).or_else(|| wildcard_name(seg)))
        .collect()
}

fn param_name(segment: &str) -> Option<&str> {
    segment.strip_prefix(':')
}

fn wildcard_name(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('*')
        .map(|name| if name.is_empty() { WILDCARD_KEY } else { name })
}
