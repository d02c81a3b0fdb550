use serde::Deserialize;

/// Identity claims attached by the API Gateway authorizer.
///
/// Read-only and advisory: they are logged, never checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthClaims {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "cognito:username")]
    pub cognito_username: Option<String>,
}

impl AuthClaims {
    /// `email` if set, otherwise `cognito:username`.
    pub fn display_identity(&self) -> Option<&str> {
        self.email
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.cognito_username.as_deref().filter(|s| !s.is_empty()))
    }
}
