use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::subscribers::{
                mutators::SubscriberMutator,
                selectors::{mask, SubscriberSelector},
            },
            auth::Session,
            email::welcome::WelcomeTemplate,
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct SubscribeInput {
    #[validate(length(min = 1), email)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub masked: bool,
}

pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeInput>,
) -> Result<Json<Value>> {
    input.validate().map_err(|e| {
        StandardError::new("ERR-SUB-001: a valid email address is required")
            .code(StatusCode::BAD_REQUEST)
            .interpolate_err(e.to_string())
    })?;
    let mut store = state.store.write().await;
    let inserted = SubscriberMutator::new(&mut store)
        .subscribe(&input.email, &WelcomeTemplate)
        .await?;
    if inserted {
        tracing::info!("new subscriber: {}", &input.email);
    }
    Ok(Json(json!({ "subscribed": true, "inserted": inserted })))
}

pub async fn subscription(State(state): State<AppState>) -> Result<Json<Value>> {
    let store = state.store.read().await;
    let selector = SubscriberSelector::new(&store);
    let (email, subscribed) = selector.subscription();
    Ok(Json(json!({ "email": email, "subscribed": subscribed })))
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Value>> {
    let store = state.store.read().await;
    let selector = SubscriberSelector::new(&store);
    let subscribers: Vec<String> = if params.masked {
        selector.list().iter().map(|email| mask(email)).collect()
    } else {
        selector.list().to_vec()
    };
    Ok(Json(json!({ "count": subscribers.len(), "subscribers": subscribers })))
}
