use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::CONTENT_DISPOSITION, HeaderMap, HeaderValue},
    Extension, Json,
};

use crate::{
    pkg::{
        internal::{
            auth::Session,
            export::{self, export_filename, ExportBundle, Promotion},
        },
        server::state::AppState,
    },
    prelude::Result,
};

pub async fn snapshot(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
) -> Result<(HeaderMap, Json<ExportBundle>)> {
    let store = state.store.read().await;
    let bundle = export::snapshot(&store);
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            export_filename(bundle.export_date)
        ))?,
    );
    tracing::info!("exported data snapshot");
    Ok((headers, Json(bundle)))
}

pub async fn promotion(
    State(state): State<AppState>,
    Extension(_session): Extension<Arc<Session>>,
    Path(collection): Path<String>,
) -> Result<Json<Promotion>> {
    let store = state.store.read().await;
    Ok(Json(export::serialize_for_promotion(&store, &collection)?))
}
