//! Redirect Resolution Demo
//!
//! Builds a small route table with a login hook, an auth rule and the
//! https upgrade, then resolves a handful of intents with the session
//! logged out and logged in.
//!
//! Run with `RUST_LOG=nav_resolver=debug cargo run --example redirect_demo`.

use nav_resolver::{HttpsUpgrade, RouteConfig, RouteQuery, Router, RouterConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

fn main() {
    env_logger::init();

    let logged_in = Arc::new(AtomicBool::new(false));
    let router = build_router(&logged_in);

    let intents: Vec<nav_resolver::Intent> = vec![
        "/".into(),
        "/u/42".into(),
        "admin".into(),
        "login".into(),
        RouteQuery::named("profile").param("id", "7").into(),
        "http://example.com/docs".into(),
        "/missing".into(),
    ];

    for state in [false, true] {
        logged_in.store(state, Ordering::SeqCst);
        println!("== logged in: {}", state);
        for intent in &intents {
            describe(&router, intent.clone());
        }
    }
}

fn build_router(logged_in: &Arc<AtomicBool>) -> Router {
    let hook_flag = Arc::clone(logged_in);
    let rule_flag = Arc::clone(logged_in);

    Router::new(
        RouterConfig::new()
            .route("home", RouteConfig::new("/"))
            .route("profile", RouteConfig::new("/u/:id"))
            .route("admin", RouteConfig::new("/admin"))
            .route(
                "login",
                RouteConfig::new("/login").redirect(move |_| {
                    hook_flag.load(Ordering::SeqCst).then(|| "home".into())
                }),
            )
            .redirect_fn("requireAuth", move |current| {
                let protected = current.route_name() == Some("admin");
                (protected && !rule_flag.load(Ordering::SeqCst)).then(|| "login".into())
            })
            .redirect(HttpsUpgrade),
    )
}

fn describe(router: &Router, intent: nav_resolver::Intent) {
    let label = intent.to_string();
    match router.resolve(intent) {
        Ok(Some(m)) => {
            let via = m
                .redirected_from()
                .map(|original| format!(" (redirected from {})", original.url()))
                .unwrap_or_default();
            let target = m.route_name().unwrap_or("<external>");
            println!("{:>40} -> {} [{}]{}", label, m.url(), target, via);
        }
        Ok(None) => println!("{:>40} -> not found", label),
        Err(err) => println!("{:>40} -> error: {}", label, err),
    }
}
