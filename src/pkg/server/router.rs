use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use super::handlers;
use super::handlers::auth::{login, logout};
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/admin/logout", post(logout))
        .route(
            "/admin/mentors",
            get(handlers::mentors::list).post(handlers::mentors::create),
        )
        .route(
            "/admin/mentors/:id",
            patch(handlers::mentors::update).delete(handlers::mentors::remove),
        )
        .route("/admin/jobs/draft", post(handlers::jobs::draft))
        .route("/admin/jobs", put(handlers::jobs::save))
        .route("/admin/jobs/:id", delete(handlers::jobs::remove))
        .route("/admin/jobs/:id/status", patch(handlers::jobs::set_status))
        .route(
            "/admin/links",
            get(handlers::links::show).patch(handlers::links::update),
        )
        .route("/admin/subscribers", get(handlers::subscribers::list))
        .route("/admin/export", get(handlers::export::snapshot))
        .route("/admin/export/:collection", get(handlers::export::promotion))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/admin/login", post(login))
        .route("/mentors", get(handlers::mentors::directory))
        .route("/mentors/:id/contact", post(handlers::mentors::contact))
        .route("/jobs", get(handlers::jobs::list))
        .route("/subscribe", post(handlers::subscribers::subscribe))
        .route("/subscription", get(handlers::subscribers::subscription))
        .route("/chat", post(handlers::chat::ask))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
