extern crate env_logger;
#[macro_use]
extern crate log;

use bobapp_rs::engine::Api;
use bobapp_rs::models::config::ServerConfig;
use bobapp_rs::models::{Catalogue, Joke};
use bobapp_rs::server;
use bobapp_rs::storage::memory::InMemoryStore;
use bobapp_rs::storage::StorageDriver;
use futures::future::join_all;
use std::sync::Arc;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

fn logging_init() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}

fn test_server_config(simulated_delay_max_millis: u64) -> Arc<ServerConfig> {
    Arc::new(ServerConfig {
        ip: "127.0.0.1".to_owned(),
        port: 0,
        simulated_delay_max_millis,
    })
}

fn joke(setup: &str, punchline: &str) -> Joke {
    Joke {
        id: Uuid::new_v4(),
        joke: setup.to_owned(),
        response: punchline.to_owned(),
    }
}

async fn routes_with_jokes(
    jokes: &[Joke],
    simulated_delay_max_millis: u64,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let store = Arc::new(InMemoryStore::new().unwrap());
    for joke in jokes {
        store.write(&joke.id, joke).unwrap();
    }
    let catalogue = Catalogue::from_storage(store).await.unwrap();
    let api = Arc::new(Api::new(catalogue).await);
    server::build_routes(test_server_config(simulated_delay_max_millis), api)
}

#[tokio::test]
async fn random_joke_is_returned_unmodified() {
    logging_init();

    let only = joke("Why did the chicken cross the road?", "To get to the other side");
    let routes = routes_with_jokes(&[only.clone()], 0).await;

    info!("[random_joke_is_returned_unmodified] Requesting GET /api/joke");
    let resp = warp::test::request()
        .method("GET")
        .path("/api/joke")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.body().as_ref(),
        serde_json::to_string(&only).unwrap().as_bytes()
    );
}

#[tokio::test]
async fn random_joke_completes_with_delay_enabled() {
    logging_init();

    let only = joke("setup", "punchline");
    let routes = routes_with_jokes(&[only.clone()], 25).await;

    let resp = warp::test::request()
        .method("GET")
        .path("/api/joke")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn random_joke_fails_when_catalogue_is_empty() {
    logging_init();

    let routes = routes_with_jokes(&[], 0).await;

    let resp = warp::test::request()
        .method("GET")
        .path("/api/joke")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn concurrent_requests_each_receive_a_catalogue_joke() {
    logging_init();

    let jokes = vec![joke("one", "1"), joke("two", "2"), joke("three", "3")];
    let routes = routes_with_jokes(&jokes, 10).await;

    info!("[concurrent_requests_each_receive_a_catalogue_joke] Spawning concurrent requests");
    let requests = (0..8).map(|_| {
        warp::test::request()
            .method("GET")
            .path("/api/joke")
            .reply(&routes)
    });

    for resp in join_all(requests).await {
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Joke = serde_json::from_slice(resp.body()).unwrap();
        assert!(jokes.contains(&body));
    }
}

#[tokio::test]
async fn get_joke_by_id_returns_exact_joke() {
    logging_init();

    let wanted = joke("wanted", "found");
    let routes = routes_with_jokes(&[wanted.clone(), joke("other", "noise")], 0).await;

    let resp = warp::test::request()
        .method("GET")
        .path(&format!("/api/joke/{}", wanted.id))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.body().as_ref(),
        serde_json::to_string(&wanted).unwrap().as_bytes()
    );
}

#[tokio::test]
async fn get_joke_by_unknown_id_returns_not_found() {
    logging_init();

    let routes = routes_with_jokes(&[joke("known", "joke")], 0).await;

    let resp = warp::test::request()
        .method("GET")
        .path(&format!("/api/joke/{}", Uuid::new_v4()))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_joke_creates_then_updates() {
    logging_init();

    let routes = routes_with_jokes(&[], 0).await;
    let new_joke = joke("new", "joke");

    let created = warp::test::request()
        .method("PUT")
        .path(&format!("/api/joke/{}", new_joke.id))
        .json(&serde_json::json!({ "joke": new_joke }))
        .reply(&routes)
        .await;
    let updated = warp::test::request()
        .method("PUT")
        .path(&format!("/api/joke/{}", new_joke.id))
        .json(&serde_json::json!({ "joke": new_joke }))
        .reply(&routes)
        .await;

    assert_eq!(created.status(), StatusCode::CREATED);
    assert_eq!(updated.status(), StatusCode::OK);
}

#[tokio::test]
async fn put_joke_rejects_mismatched_ids() {
    logging_init();

    let routes = routes_with_jokes(&[], 0).await;
    let body_joke = joke("body", "joke");

    let resp = warp::test::request()
        .method("PUT")
        .path(&format!("/api/joke/{}", Uuid::new_v4()))
        .json(&serde_json::json!({ "joke": body_joke }))
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn ping_replies_pong() {
    logging_init();

    let routes = routes_with_jokes(&[], 0).await;

    let resp = warp::test::request()
        .method("GET")
        .path("/ping")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.body().as_ref(), b"\"pong\"");
}

#[tokio::test]
async fn version_reports_crate_version() {
    logging_init();

    let routes = routes_with_jokes(&[], 0).await;

    let resp = warp::test::request()
        .method("GET")
        .path("/version")
        .reply(&routes)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.body().as_ref(),
        format!("\"{}\"", env!("CARGO_PKG_VERSION")).as_bytes()
    );
}
