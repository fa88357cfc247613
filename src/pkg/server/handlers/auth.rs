use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use standard_error::{StandardError, Status};

use crate::{
    pkg::server::{middlewares::authn::SESSION_COOKIE, state::AppState},
    prelude::Result,
};

#[derive(Deserialize)]
pub struct LoginInput {
    pub secret: String,
}

#[derive(Serialize)]
pub struct LoginOutput {
    pub ok: bool,
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<(HeaderMap, Json<LoginOutput>)> {
    if !state.verifier.verify(&input.secret) {
        // the submitted text is dropped here, never retained or logged
        return Err(
            StandardError::new("ERR-AUTH-004: incorrect password, please try again")
                .code(StatusCode::UNAUTHORIZED),
        );
    }
    let session = state.sessions.issue();
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&format!(
            "{}={}; HttpOnly; Path=/",
            SESSION_COOKIE, session.token
        ))?,
    );
    tracing::info!("admin session issued, expires {}", session.expiry);
    Ok((headers, Json(LoginOutput { ok: true })))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Result<Json<LoginOutput>> {
    let jar = CookieJar::from_headers(&headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.revoke(cookie.value());
    }
    tracing::info!("admin logged out");
    Ok(Json(LoginOutput { ok: true }))
}
