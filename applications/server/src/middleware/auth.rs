/// Authentication middleware
use crate::{error::ServerError, state::AppState};
use axum::{extract::FromRequestParts, http::request::Parts};
use mixtape_core::types::Actor;

/// Extractor resolving the Bearer token to the authenticated actor
///
/// Handlers that take this parameter are the protected surface; everything
/// else is anonymous. Extraction failure answers 401 before the handler
/// body runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Actor);

impl AuthenticatedUser {
    pub fn actor(&self) -> &Actor {
        &self.0
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ServerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ServerError::Auth("Missing authorization header".to_string()))?;

        // Check Bearer prefix
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ServerError::Auth("Invalid authorization header".to_string()))?;

        // Verify token
        let actor = state.auth.verify_access_token(token).map_err(|e| {
            tracing::warn!("Token verification failed: {}", e);
            ServerError::Auth("Invalid token".to_string())
        })?;

        Ok(AuthenticatedUser(actor))
    }
}
