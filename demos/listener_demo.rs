//! Listener Demo
//!
//! Registers two change listeners and navigates through a redirect chain,
//! a cycle, and a chain that exceeds the redirect bound.

use nav_resolver::{RouteConfig, Router, RouterConfig};

fn main() {
    env_logger::init();

    let mut router = Router::new(
        RouterConfig::new()
            .route("home", RouteConfig::new("/"))
            .route("old-home", RouteConfig::new("/index").redirect(|_| Some("/".into())))
            .route("ping", RouteConfig::new("/ping").redirect(|_| Some("/pong".into())))
            .route("pong", RouteConfig::new("/pong").redirect(|_| Some("/ping".into())))
            .route(
                "page",
                RouteConfig::new("/page/:n").redirect(|current| {
                    let n: u32 = current.params().get_as("n")?;
                    Some(format!("/page/{}", n + 1).into())
                }),
            )
            .max_redirects(5),
    );

    router.on_change(|url| println!("  history.push({})", url));
    router.on_change(|url| println!("  analytics.page_view({})", url));

    for path in ["/index", "/ping", "/page/1", "/nowhere"] {
        println!("go({})", path);
        if let Err(err) = router.go(path) {
            println!("  failed: {}", err);
        }
    }
}
