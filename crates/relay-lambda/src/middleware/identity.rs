use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use lambda_http::request::RequestContext;

use relay_core::models::claims::AuthClaims;

/// Caller identity derived from authorizer claims, for logging only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

impl CallerIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identity middleware.
///
/// Reads the Cognito claims API Gateway attached to the request, logs who
/// is calling and inserts [`CallerIdentity`] into request extensions. Never
/// rejects: requests without claims pass through untouched.
pub async fn attach_identity(mut req: Request, next: Next) -> Response {
    if let Some(identity) = caller_identity(&req) {
        tracing::info!(user = identity.as_str(), "authenticated user");
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}

/// Claims from a REST API (v1) proxy event's `requestContext.authorizer`.
pub fn authorizer_claims(req: &Request) -> Option<AuthClaims> {
    let Some(RequestContext::ApiGatewayV1(ctx)) = req.extensions().get::<RequestContext>() else {
        return None;
    };

    let claims = ctx.authorizer.fields.get("claims")?;

    match serde_json::from_value::<AuthClaims>(claims.clone()) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed authorizer claims");
            None
        }
    }
}

/// The display identity for a request, if its claims carry one.
pub fn caller_identity(req: &Request) -> Option<CallerIdentity> {
    authorizer_claims(req)?
        .display_identity()
        .map(|s| CallerIdentity(s.to_string()))
}
