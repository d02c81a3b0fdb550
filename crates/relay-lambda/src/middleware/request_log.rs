use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

/// Request logging middleware.
///
/// Tags every invocation with a fresh id and logs one structured
/// `api_request` event once the response is ready.
pub async fn request_log(req: Request, next: Next) -> Response {
    let invocation_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let span = tracing::info_span!("invocation", %invocation_id);
    let response = next.run(req).instrument(span).await;

    let status = response.status().as_u16();
    tracing::info!(
        %invocation_id,
        method = %method,
        path = %path,
        status = status,
        "api_request"
    );

    response
}
