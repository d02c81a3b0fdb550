//! relay-lambda
//!
//! API Gateway Lambda that relays a chat message to the inference endpoint
//! and answers with a fixed JSON envelope.

use axum::middleware as axum_mw;
use axum::routing::{options, MethodRouter};
use axum::Router;

pub mod config;
pub mod cors;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the router served by the Lambda.
///
/// The function is mounted behind a single API Gateway resource, so every
/// path is handled the same way: `OPTIONS` answers the preflight, any other
/// method goes to the relay.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", relay_methods())
        .route("/{*path}", relay_methods())
        .layer(axum_mw::from_fn(middleware::identity::attach_identity))
        .layer(axum_mw::from_fn(middleware::request_log::request_log));

    cors::with_fixed_headers(router).with_state(state)
}

fn relay_methods() -> MethodRouter<AppState> {
    options(routes::preflight::preflight).fallback(routes::relay::relay)
}
