use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use standard_error::{StandardError, Status};

use crate::{pkg::server::state::AppState, prelude::Result};

pub const SESSION_COOKIE: &str = "pmory_session";

pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let jar = CookieJar::from_headers(&headers);
    let maybe_cookie = jar.get(SESSION_COOKIE).filter(|c| !c.value().is_empty());
    if let Some(cookie) = maybe_cookie {
        match state.sessions.validate(cookie.value()) {
            Ok(session) => {
                request.extensions_mut().insert(Arc::new(session));
                return Ok(next.run(request).await);
            }
            Err(e) => {
                tracing::warn!("session rejected: {}", e);
            }
        }
    }
    tracing::warn!("session missing, authentication denied");
    Err(StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED))
}
