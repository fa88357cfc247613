use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use standard_error::{StandardError, Status};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::{
                mutators::JobMutator,
                selectors::JobSelector,
                spec::{split_requirements, JobPosting, JobStatus, JobType, JobView},
            },
            auth::Session,
        },
        server::state::AppState,
    },
    prelude::Result,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveJobInput {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: JobType,
    pub deadline: NaiveDate,
    pub posted: NaiveDate,
    pub status: JobStatus,
    pub description: String,
    // free text, one requirement per line
    pub requirements: String,
    pub application_link: String,
}

#[derive(Deserialize)]
pub struct SetStatusInput {
    pub status: JobStatus,
}

#[derive(Deserialize)]
pub struct ConfirmParams {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<JobView>>> {
    let store = state.store.read().await;
    let jobs = JobSelector::new(&store).get_all(Utc::now().date_naive());
    Ok(Json(jobs))
}

pub async fn draft(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
) -> Result<Json<JobPosting>> {
    let mut store = state.store.write().await;
    let draft = JobMutator::new(&mut store).draft();
    Ok(Json(draft))
}

pub async fn save(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
    Json(input): Json<SaveJobInput>,
) -> Result<Json<JobPosting>> {
    let draft = JobPosting {
        id: input.id,
        title: input.title,
        company: input.company,
        location: input.location,
        kind: input.kind,
        deadline: input.deadline,
        posted: input.posted,
        status: input.status,
        description: input.description,
        requirements: split_requirements(&input.requirements),
        application_link: input.application_link,
    };
    let mut store = state.store.write().await;
    let (job, event) = JobMutator::new(&mut store).save(draft).await?;
    drop(store);
    if let Some(event) = event {
        if let Err(e) = state.notifier.send(event) {
            tracing::error!("failed to queue notification: {}", e);
        }
    }
    Ok(Json(job))
}

pub async fn set_status(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
    Path(id): Path<i32>,
    Json(input): Json<SetStatusInput>,
) -> Result<Json<JobPosting>> {
    let mut store = state.store.write().await;
    let outcome = JobMutator::new(&mut store).set_status(id, input.status).await?;
    drop(store);
    let Some((job, event)) = outcome else {
        return Err(StandardError::new("ERR-JOB-404: job not found").code(StatusCode::NOT_FOUND));
    };
    if let Some(event) = event {
        if let Err(e) = state.notifier.send(event) {
            tracing::error!("failed to queue notification: {}", e);
        }
    }
    Ok(Json(job))
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
    if !JobMutator::new(&mut store).delete(id).await? {
        return Err(StandardError::new("ERR-JOB-404: job not found").code(StatusCode::NOT_FOUND));
    }
    Ok(Json(json!({ "deleted": id })))
}
