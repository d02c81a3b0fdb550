use relay_inference::client::InferenceClient;

/// Shared application state, injected into the handlers via Axum state.
///
/// Built once at cold start and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub inference: InferenceClient,
}
