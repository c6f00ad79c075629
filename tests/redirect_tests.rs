//! Redirect resolution: hooks, global rules, bounds, cycles.

mod common;

use common::*;
use nav_resolver::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_no_redirect_returns_raw_match_unchanged() {
    let router = Router::new(basic_config().redirect_fn("never", |_| None));

    let raw = router.match_raw(&"/u/5".into()).unwrap().unwrap();
    let resolved = router.resolve("/u/5").unwrap().unwrap();

    assert!(Arc::ptr_eq(raw.route().unwrap(), resolved.route().unwrap()));
    assert_eq!(raw.params(), resolved.params());
    assert_eq!(raw.url(), resolved.url());
    assert!(!resolved.was_redirected());
}

#[test]
fn test_login_hook_redirects_when_session_is_set() {
    let session = Session::logged_in();
    let hook_session = session.clone();
    let router = Router::new(
        RouterConfig::new()
            .route("home", RouteConfig::new("/home"))
            .route(
                "login",
                RouteConfig::new("/login")
                    .redirect(move |_| hook_session.is_logged_in().then(|| "/home".into())),
            ),
    );

    let m = router.resolve("login").unwrap().unwrap();
    assert_route(&m, "home");
    assert!(m.was_redirected());
    assert_route(m.redirected_from().unwrap(), "login");

    session.set(false);
    let m = router.resolve("login").unwrap().unwrap();
    assert_route(&m, "login");
    assert!(!m.was_redirected());
}

#[test]
fn test_https_upgrade_rule() {
    let router = Router::new(RouterConfig::new().redirect(HttpsUpgrade));

    let m = router.resolve("http://site/x").unwrap().unwrap();
    assert!(m.is_external());
    assert_eq!(m.url(), "https://site/x");
    assert_eq!(m.redirected_from().unwrap().url(), "http://site/x");

    let m = router.resolve("https://site/x").unwrap().unwrap();
    assert_eq!(m.url(), "https://site/x");
    assert!(!m.was_redirected());
}

#[test]
fn test_external_target_is_terminal() {
    let rule_calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&rule_calls);
    let router = Router::new(
        RouterConfig::new()
            .route("docs", forward("/docs", "https://docs.example.com"))
            .redirect_fn("count", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                None
            }),
    );

    let m = router.resolve("/docs").unwrap().unwrap();
    assert!(m.is_external());
    assert_eq!(m.url(), "https://docs.example.com");
    // The hook on /docs decided; the external target is never tested.
    assert_eq!(rule_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_hook_takes_precedence_over_rules() {
    let router = Router::new(
        RouterConfig::new()
            .route("a", RouteConfig::new("/a"))
            .route("b", RouteConfig::new("/b"))
            .route("start", forward("/start", "/a"))
            .redirect_fn("to-b", |current| {
                (current.route_name() == Some("start")).then(|| "/b".into())
            }),
    );

    let m = router.resolve("/start").unwrap().unwrap();
    assert_route(&m, "a");
}

#[test]
fn test_first_matching_rule_wins() {
    let router = Router::new(
        RouterConfig::new()
            .route("a", RouteConfig::new("/a"))
            .route("b", RouteConfig::new("/b"))
            .route("start", RouteConfig::new("/start"))
            .redirect_fn("skip", |_| None)
            .redirect_fn("to-a", |current| {
                (current.route_name() == Some("start")).then(|| "/a".into())
            })
            .redirect_fn("to-b", |current| {
                (current.route_name() == Some("start")).then(|| "/b".into())
            }),
    );

    let m = router.resolve("/start").unwrap().unwrap();
    assert_route(&m, "a");
}

#[test]
fn test_hook_sees_current_params() {
    let router = Router::new(basic_config().route(
        "legacy",
        RouteConfig::new("/legacy/:id").redirect(|current| {
            let id = current.params().get("id")?;
            Some(RouteQuery::named("profile").param("id", id.as_str()).into())
        }),
    ));

    let m = router.resolve("/legacy/31").unwrap().unwrap();
    assert_route(&m, "profile");
    assert_eq!(m.url(), "/u/31");
    assert_param_equals(m.redirected_from().unwrap(), "id", "31");
}

#[test]
fn test_chain_shorter_than_bound_settles_on_last_step() {
    let router = Router::new(
        RouterConfig::new()
            .route("a", forward("/a", "/b"))
            .route("b", forward("/b", "/c"))
            .route("c", RouteConfig::new("/c"))
            .max_redirects(3),
    );

    let m = router.resolve("/a").unwrap().unwrap();
    assert_route(&m, "c");
    assert_route(m.redirected_from().unwrap(), "a");
}

#[test]
fn test_chain_reaching_bound_fails() {
    let router = Router::new(
        RouterConfig::new()
            .route("a", forward("/a", "/b"))
            .route("b", forward("/b", "/c"))
            .route("c", forward("/c", "/d"))
            .route("d", RouteConfig::new("/d"))
            .max_redirects(2),
    );

    let err = router.resolve("/a").unwrap_err();
    assert_eq!(
        err,
        RouterError::MaxRedirectsExceeded {
            max_redirects: 2,
            chain: vec!["/a".to_string(), "/b".to_string(), "/c".to_string()],
        }
    );
    assert!(err.is_redirect_failure());

    // Two steps would settle on /c, but two is already the bound.
    let err = router.resolve("/b").unwrap_err();
    assert!(matches!(err, RouterError::MaxRedirectsExceeded { .. }));
    assert!(router.resolve("/c").is_ok());
}

#[test]
fn test_unbounded_chain_hits_default_bound() {
    let router = Router::new(RouterConfig::new().route(
        "page",
        RouteConfig::new("/page/:n").redirect(|current| {
            let n: u32 = current.params().get_as("n")?;
            Some(format!("/page/{}", n + 1).into())
        }),
    ));

    match router.resolve("/page/0") {
        Err(RouterError::MaxRedirectsExceeded {
            max_redirects,
            chain,
        }) => {
            assert_eq!(max_redirects, DEFAULT_MAX_REDIRECTS);
            assert_eq!(chain.len(), DEFAULT_MAX_REDIRECTS + 1);
            assert_eq!(chain.last().map(String::as_str), Some("/page/10"));
        }
        other => panic!("expected MaxRedirectsExceeded, got {:?}", other),
    }
}

#[test]
fn test_self_redirect_is_a_cycle() {
    let router = Router::new(
        RouterConfig::new().route("loop", forward("/loop", "/loop")),
    );

    let m = router.resolve("/loop").unwrap().unwrap();
    assert_route(&m, "loop");
    assert!(m.was_redirected());
}

#[test]
fn test_two_route_cycle_returns_earlier_match() {
    let router = Router::new(
        RouterConfig::new()
            .route("a", RouteConfig::new("/a/:id").redirect(|current| {
                let id = current.params().get("id")?;
                Some(format!("/b/{}", id).into())
            }))
            .route("b", RouteConfig::new("/b/:id").redirect(|current| {
                let id = current.params().get("id")?;
                Some(format!("/a/{}", id).into())
            })),
    );

    let m = router.resolve("/a/1").unwrap().unwrap();
    assert_route(&m, "a");
    assert_param_equals(&m, "id", "1");
    assert_route(m.redirected_from().unwrap(), "a");
}

#[test]
fn test_cycle_into_mid_chain_returns_that_match() {
    let router = Router::new(
        RouterConfig::new()
            .route("a", forward("/a", "/b"))
            .route("b", forward("/b", "/c"))
            .route("c", forward("/c", "/b")),
    );

    let m = router.resolve("/a").unwrap().unwrap();
    assert_route(&m, "b");
    assert_eq!(m.url(), "/b");
    assert_route(m.redirected_from().unwrap(), "a");
}

#[test]
fn test_params_differ_so_no_cycle() {
    let router = Router::new(
        RouterConfig::new()
            .route("flip", RouteConfig::new("/flip/:side").redirect(|current| {
                match current.params().get("side")?.as_str() {
                    "heads" => Some("/flip/tails".into()),
                    _ => None,
                }
            })),
    );

    let m = router.resolve("/flip/heads").unwrap().unwrap();
    assert_param_equals(&m, "side", "tails");
}

#[test]
fn test_redirect_to_unknown_route_fails() {
    let router = Router::new(basic_config().route("broken", forward("/broken", "/missing")));

    assert_eq!(
        router.resolve("/broken").unwrap_err(),
        RouterError::NoMatchForRedirect {
            target: "'/missing'".to_string()
        }
    );
}

#[test]
fn test_redirect_to_blank_name_fails() {
    let router = Router::new(basic_config().redirect_fn("blank", |current| {
        (current.route_name() == Some("home")).then(|| "".into())
    }));

    assert_eq!(
        router.resolve("/").unwrap_err(),
        RouterError::NoMatchForRedirect {
            target: "''".to_string()
        }
    );
}

#[test]
fn test_redirect_to_empty_query_fails() {
    let router = Router::new(basic_config().redirect_fn("empty", |current| {
        (current.route_name() == Some("home")).then(|| RouteQuery::default().into())
    }));

    assert_eq!(
        router.resolve("/").unwrap_err(),
        RouterError::NoMatchForRedirect {
            target: "{}".to_string()
        }
    );
}

#[test]
fn test_auth_rule_and_login_hook_together() {
    let session = Session::default();
    let rule_session = session.clone();
    let hook_session = session.clone();
    let router = Router::new(
        RouterConfig::new()
            .route("home", RouteConfig::new("/home"))
            .route("admin", RouteConfig::new("/admin"))
            .route(
                "login",
                RouteConfig::new("/login")
                    .redirect(move |_| hook_session.is_logged_in().then(|| "home".into())),
            )
            .redirect_fn("requireAuth", move |current| {
                let protected = current.route_name() == Some("admin");
                (protected && !rule_session.is_logged_in()).then(|| "login".into())
            }),
    );

    let m = router.resolve("/admin").unwrap().unwrap();
    assert_route(&m, "login");
    assert_route(m.redirected_from().unwrap(), "admin");

    session.set(true);
    let m = router.resolve("/admin").unwrap().unwrap();
    assert_route(&m, "admin");
    assert!(!m.was_redirected());

    let m = router.resolve("/login").unwrap().unwrap();
    assert_route(&m, "home");
}

#[test]
fn test_zero_bound_rejects_every_match() {
    let router = Router::new(basic_config().max_redirects(0));
    assert!(matches!(
        router.resolve("/"),
        Err(RouterError::MaxRedirectsExceeded { .. })
    ));
    // Nothing matched, so there is no chain to walk.
    assert!(router.resolve("/nowhere").unwrap().is_none());
}
