mod routes;
pub use self::routes::build_routes;

mod health_handlers;
mod joke_handlers;
mod logging;
mod schemas;
