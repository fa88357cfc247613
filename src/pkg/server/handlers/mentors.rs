use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
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
            adaptors::mentors::{
                mutators::MentorMutator,
                selectors::MentorSelector,
                spec::{MentorKind, MentorPublic, MentorRecord},
            },
            auth::Session,
        },
        server::{handlers::jobs::ConfirmParams, state::AppState},
    },
    prelude::Result,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMentorInput {
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub grad_year: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<MentorKind>,
    pub email: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "linkedIn")]
    pub linked_in: Option<String>,
    pub availability: Option<String>,
}

#[derive(Deserialize, Validate)]
pub struct ContactInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

pub async fn directory(State(state): State<AppState>) -> Result<Json<Vec<MentorPublic>>> {
    let store = state.store.read().await;
    Ok(Json(MentorSelector::new(&store).directory()))
}

pub async fn list(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
) -> Result<Json<Vec<MentorRecord>>> {
    let store = state.store.read().await;
    Ok(Json(MentorSelector::new(&store).all().to_vec()))
}

pub async fn create(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
) -> Result<Json<MentorRecord>> {
    let mut store = state.store.write().await;
    let mentor = MentorMutator::new(&mut store).create().await?;
    Ok(Json(mentor))
}

pub async fn update(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateMentorInput>,
) -> Result<Json<MentorRecord>> {
    let mut store = state.store.write().await;
    match MentorMutator::new(&mut store).update(id, input).await? {
        Some(mentor) => Ok(Json(mentor)),
        None => {
            Err(StandardError::new("ERR-MENTOR-404: mentor not found").code(StatusCode::NOT_FOUND))
        }
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
    Path(id): Path<i32>,
    Query(params): Query<ConfirmParams>,
) -> Result<Json<Value>> {
    if !params.confirm {
        return Err(
            StandardError::new("ERR-CONFIRM-001: deletion requires confirmation")
                .code(StatusCode::BAD_REQUEST),
        );
    }
    let mut store = state.store.write().await;
    if !MentorMutator::new(&mut store).delete(id).await? {
        return Err(
            StandardError::new("ERR-MENTOR-404: mentor not found").code(StatusCode::NOT_FOUND),
        );
    }
    Ok(Json(json!({ "deleted": id })))
}

// Builds the prefilled mailto link the contact modal opens; the mentor
// address itself never appears in the public directory payload.
pub async fn contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ContactInput>,
) -> Result<Json<Value>> {
    input.validate().map_err(|e| {
        StandardError::new("ERR-CONTACT-001: name, email and message are required")
            .code(StatusCode::BAD_REQUEST)
            .interpolate_err(e.to_string())
    })?;
    let store = state.store.read().await;
    let selector = MentorSelector::new(&store);
    let mentor = selector
        .get_by_id(id)
        .ok_or_else(|| {
            StandardError::new("ERR-MENTOR-404: mentor not found").code(StatusCode::NOT_FOUND)
        })?;
    let subject = format!("PMory Connection Request from {}", input.name);
    let body = format!(
        "Hi {},\n\n{}\n\nBest regards,\n{}\n{}",
        mentor.name, input.message, input.name, input.email
    );
    let mut url = reqwest::Url::parse(&format!("mailto:{}", mentor.email))
        .map_err(|e| StandardError::new("ERR-CONTACT-002").interpolate_err(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("subject", &subject)
        .append_pair("body", &body);
    Ok(Json(json!({ "mailto": url.to_string() })))
}
