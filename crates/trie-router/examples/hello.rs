//! Registers a few routes and dispatches in-memory requests against them.
//!
//! Run with:
//! ```sh
//! cargo run -p trie-router --example hello
//! ```

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use trie_router::{Request, Response, Router};

async fn index(_req: Request) -> Response {
    Response::text("Hello, World!")
}

async fn hello(req: Request) -> Response {
    let name = req.param("name").unwrap_or("stranger");
    Response::text(format!("Hello, {name}!"))
}

async fn user_action(req: Request) -> Response {
    let action = req.param("action").unwrap_or_default();
    Response::text(format!("Action: {action}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let router = Router::new()
        .get("/", index)?
        .get("/hello/:name", hello)?
        .get("/user/*action", user_action)?;

    for route in router.routes() {
        info!("{} {}", route.method, route.pattern);
    }

    for target in ["/", "/hello/world", "/user/profile/edit", "/hello"] {
        let response = router.handle(Request::get(target)).await;
        info!(
            "GET {target} -> {} {}",
            response.status,
            response.body_string().unwrap_or_default()
        );
    }

    Ok(())
}
