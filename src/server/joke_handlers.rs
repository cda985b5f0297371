use super::schemas;
use crate::engine;
use crate::models;

use engine::api::AddOrUpdateOperation;
use engine::{ErrorCategory, ErrorCode};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{reject, reply, Rejection, Reply};

pub async fn get_random_joke(
    config: Arc<models::config::ServerConfig>,
    api: Arc<engine::Api>,
) -> Result<impl Reply, Rejection> {
    info!("Handling: get_random_joke");

    // Simulated latency, sampled per request
    let delay = simulated_delay(
        rand::thread_rng().gen::<f64>(),
        config.simulated_delay_max_millis,
    );
    tokio::time::sleep(delay).await;

    match api.get_random_joke().await {
        Ok(joke) => Ok(reply::with_status(reply::json(&joke), StatusCode::OK)),
        Err(e) => Err(reject::custom(EngineError::new(e))),
    }
}

pub async fn get_joke_from_catalogue(
    joke_id: Uuid,
    api: Arc<engine::Api>,
) -> Result<impl Reply, Rejection> {
    info!("Handling: get_joke_from_catalogue");

    match api.get_joke_by_id(&joke_id).await {
        Ok(Some(joke)) => Ok(reply::with_status(reply::json(&joke), StatusCode::OK)),
        Ok(None) => Err(reject::not_found()),
        Err(e) => Err(reject::custom(EngineError::new(e))),
    }
}

pub async fn put_joke_to_catalogue(
    joke_id: Uuid,
    api: Arc<engine::Api>,
    body: schemas::PutJokeToCatalogueRequest,
) -> Result<impl Reply, Rejection> {
    info!("Handling: put_joke_to_catalogue");

    // Validate explicit ID parameter matches ID in body
    if joke_id != body.joke.id {
        return Err(reject::custom(EngineError::new(engine::Error::new(
            ErrorCode::IdMismatch,
            None,
        ))));
    }

    match api.add_or_update_joke_in_catalogue(body.joke).await {
        Ok(AddOrUpdateOperation::Add) => {
            Ok(reply::with_status(reply::reply(), StatusCode::CREATED))
        }
        Ok(AddOrUpdateOperation::Update) => Ok(reply::with_status(reply::reply(), StatusCode::OK)),
        Err(e) => Err(reject::custom(EngineError::new(e))),
    }
}

/// Maps a uniform sample from [0.0, 1.0) onto [0, max_millis) milliseconds.
fn simulated_delay(sample: f64, max_millis: u64) -> Duration {
    Duration::from_millis((sample * max_millis as f64) as u64)
}

fn get_http_code(error: &engine::Error) -> http::StatusCode {
    match error.classify() {
        ErrorCategory::BadRequest => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn handle_engine_error(err: Rejection) -> Result<impl Reply, Rejection> {
    if let Some(e) = err.find::<EngineError>() {
        let json = warp::reply::json(&ErrorResponse {
            error_message: e.error.to_string(),
        });
        Ok(warp::reply::with_status(json, e.status_code))
    } else {
        Err(err)
    }
}

#[derive(Debug)]
struct EngineError {
    pub error: engine::Error,
    pub status_code: StatusCode,
}

impl EngineError {
    fn new(error: engine::Error) -> EngineError {
        let status_code = get_http_code(&error);
        EngineError { error, status_code }
    }
}

impl reject::Reject for EngineError {}

#[derive(serde::Serialize)]
struct ErrorResponse {
    error_message: String,
}
