use super::health_handlers;
use super::joke_handlers;
use super::logging;
use crate::engine;
use crate::models;

use std::convert::Infallible;
use std::sync::Arc;
use uuid::Uuid;
use warp::{Filter, Rejection, Reply};

pub fn build_routes(
    config: Arc<models::config::ServerConfig>,
    api: Arc<engine::Api>,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    let ping = warp::path!("ping")
        .and(warp::get())
        .and_then(health_handlers::ping);

    let version = warp::path!("version")
        .and(warp::get())
        .and_then(health_handlers::version);

    let get_random_joke = warp::path!("api" / "joke")
        .and(warp::get())
        .and(with_server_config(Arc::clone(&config)))
        .and(with_engine_api(Arc::clone(&api)))
        .and_then(joke_handlers::get_random_joke);

    let get_joke_from_catalogue = warp::path!("api" / "joke" / Uuid)
        .and(warp::get())
        .and(with_engine_api(Arc::clone(&api)))
        .and_then(joke_handlers::get_joke_from_catalogue);

    let put_joke_to_catalogue = warp::path!("api" / "joke" / Uuid)
        .and(warp::put())
        .and(with_engine_api(Arc::clone(&api)))
        .and(with_json_from_body())
        .and_then(joke_handlers::put_joke_to_catalogue);

    ping.or(version)
        .or(get_random_joke)
        .or(get_joke_from_catalogue)
        .or(put_joke_to_catalogue)
        .recover(joke_handlers::handle_engine_error)
        .with(logging::log_incoming_request())
}

fn with_engine_api(
    api: Arc<engine::Api>,
) -> impl Filter<Extract = (Arc<engine::Api>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&api))
}

fn with_server_config(
    config: Arc<models::config::ServerConfig>,
) -> impl Filter<Extract = (Arc<models::config::ServerConfig>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&config))
}

fn with_json_from_body<T>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: Send + serde::de::DeserializeOwned,
{
    warp::body::json()
}
