//! Tests for dispatching requests to async handlers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use trie_router::{Method, Request, Response, RouteGroup, Router, SharedRouter, handler};

async fn echo_params(req: Request) -> Response {
    let mut pairs: Vec<String> = req.params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    Response::text(pairs.join(","))
}

async fn list_routes(_req: Request) -> Response {
    Response::text("routes")
}

fn app() -> Router {
    Router::new()
        .get("/", list_routes)
        .and_then(|r| r.get("/hello/:name", echo_params))
        .and_then(|r| r.get("/user/*action", echo_params))
        .and_then(|r| r.route("PURGE", "/cache/:key", echo_params))
        .unwrap()
}

#[tokio::test]
async fn parameterized_routes_reach_their_handlers() {
    let router = app();

    let res = router.handle(Request::get("/hello/world")).await;
    assert_eq!(res.status, 200);
    assert_eq!(res.body_string(), Some("name=world".to_string()));

    let res = router.handle(Request::get("/user/profile/edit")).await;
    assert_eq!(res.body_string(), Some("action=profile/edit".to_string()));
}

#[tokio::test]
async fn custom_method_routes() {
    let router = app();
    let res = router.handle(Request::new("PURGE", "/cache/home")).await;
    assert_eq!(res.body_string(), Some("key=home".to_string()));

    let res = router.handle(Request::new("purge", "/cache/home")).await;
    assert_eq!(res.status, 404);
}

#[tokio::test]
async fn unmatched_requests_get_404() {
    let router = app();
    for req in [
        Request::get("/hello"),
        Request::new(Method::Delete, "/"),
        Request::get("/nope/nope"),
    ] {
        assert_eq!(router.handle(req).await.status, 404);
    }
}

#[tokio::test]
async fn query_string_is_not_part_of_the_path() {
    let res = app().handle(Request::get("/hello/ada?lang=en")).await;
    assert_eq!(res.body_string(), Some("name=ada".to_string()));
}

#[tokio::test]
async fn handlers_run_per_request() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let router = Router::new()
        .get("/count", move |_req| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Response::ok()
            }
        })
        .unwrap();

    for _ in 0..3 {
        router.handle(Request::get("/count")).await;
    }
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn groups_and_shared_router_compose() {
    let api = RouteGroup::new("/api").get("/items/:id", echo_params);
    let shared = SharedRouter::from(Router::new().group(api).unwrap());

    let res = shared.handle(Request::get("/api/items/9")).await;
    assert_eq!(res.body_string(), Some("id=9".to_string()));

    shared
        .register("POST", "/api/items", handler(list_routes))
        .unwrap();
    let res = shared.handle(Request::post("/api/items")).await;
    assert_eq!(res.body_string(), Some("routes".to_string()));
}

#[tokio::test]
async fn concurrent_handling_on_a_built_router() {
    let router = Arc::new(app());

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let router = Arc::clone(&router);
            tokio::spawn(async move {
                router
                    .handle(Request::get(&format!("/hello/n{i}")))
                    .await
                    .body_string()
            })
        })
        .collect();

    for (i, task) in tasks.into_iter().enumerate() {
        assert_eq!(task.await.unwrap(), Some(format!("name=n{i}")));
    }
}
