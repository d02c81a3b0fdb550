use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::Json;
use lambda_http::request::RequestContext;
use tracing::info;

use relay_core::models::chat::ChatTurn;
use relay_core::models::envelope::ResponseEnvelope;
use relay_core::models::request::IncomingRequest;

use crate::error::RelayError;
use crate::middleware::identity::CallerIdentity;
use crate::state::AppState;

/// API Gateway's maximum request payload.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Relay one chat message to the inference endpoint.
///
/// The endpoint receives the caller's history as sent plus the new message;
/// the caller gets back that history extended with both the user turn and
/// the assistant's reply.
pub async fn relay(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<ResponseEnvelope>, RelayError> {
    let identity = req.extensions().get::<CallerIdentity>().cloned();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let gateway_request_id = gateway_request_id(&req);

    let body = to_bytes(req.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| RelayError::Unhandled(format!("failed to read request body: {e}")))?;

    info!(
        gateway_request_id = gateway_request_id.as_deref(),
        method = %method,
        path = %path,
        body = %String::from_utf8_lossy(&body),
        "received event"
    );

    let request = IncomingRequest::from_body(&body)?;

    info!(
        user = identity.as_ref().map(CallerIdentity::as_str),
        message = %request.message,
        history_len = request.conversation_history.len(),
        "processing message"
    );

    let mut history = request.working_history();
    let reply = state.inference.infer(&request.outbound()).await?;
    history.push(ChatTurn::assistant(reply.clone()));

    Ok(Json(ResponseEnvelope::success(reply, history)))
}

/// API Gateway's id for the request, when the event came through a REST API.
fn gateway_request_id(req: &Request) -> Option<String> {
    match req.extensions().get::<RequestContext>()? {
        RequestContext::ApiGatewayV1(ctx) => ctx.request_id.clone(),
        _ => None,
    }
}
