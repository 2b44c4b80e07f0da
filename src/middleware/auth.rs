use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Shared-secret check on the `x-api-key` header. When no key is configured
/// the check is a pass-through.
pub async fn require_api_key(
    State(expected): State<Option<String>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(expected) = expected.as_deref() {
        let provided = request
            .headers()
            .get("x-api-key")
            .and_then(|value| value.to_str().ok());
        if provided != Some(expected) {
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
