use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::{
    pkg::{
        internal::{
            adaptors::links::{mutators::LinkMutator, spec::LinkSettings},
            auth::Session,
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinksInput {
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub member_application: Option<String>,
    pub events_calendar: Option<String>,
    pub feedback_form: Option<String>,
}

pub async fn show(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
) -> Result<Json<LinkSettings>> {
    let store = state.store.read().await;
    Ok(Json(store.links.clone()))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
    Json(input): Json<UpdateLinksInput>,
) -> Result<Json<LinkSettings>> {
    let mut store = state.store.write().await;
    let links = LinkMutator::new(&mut store).update(input).await?;
    Ok(Json(links))
}
