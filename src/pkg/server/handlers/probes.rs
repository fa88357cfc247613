use axum::extract::State;

use crate::{pkg::server::state::AppState, prelude::Result};

pub async fn livez() -> Result<()> {
    tracing::debug!("service is live");
    Ok(())
}

pub async fn healthz(State(state): State<AppState>) -> Result<()> {
    let store = state.store.read().await;
    store.shadow().ensure_dir().await?;
    tracing::debug!("service is healthy");
    Ok(())
}
