use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{
    conf::settings,
    pkg::{internal::chat, server::state::AppState},
    prelude::Result,
};

#[derive(Deserialize)]
pub struct ChatInput {
    pub message: String,
    pub mode: chat::ChatMode,
}

#[derive(Serialize)]
pub struct ChatOutput {
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

pub async fn ask(
    State(state): State<AppState>,
    Json(input): Json<ChatInput>,
) -> Result<Json<ChatOutput>> {
    // an unconfigured endpoint is a setup problem, not a request failure
    let Some(endpoint) = settings.chat_endpoint.as_deref().filter(|e| !e.is_empty()) else {
        tracing::warn!("chat endpoint is not configured");
        return Ok(Json(ChatOutput {
            answer: None,
            warning: Some(
                "The assistant is not configured yet. Please set a chat endpoint.".to_string(),
            ),
        }));
    };
    let answer = chat::ask(&state.http, endpoint, &input.message, input.mode).await?;
    Ok(Json(ChatOutput {
        answer: Some(answer),
        warning: None,
    }))
}
