use serde::{Deserialize, Serialize};
use standard_error::{Interpolate, StandardError};

use crate::prelude::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    General,
    Skills,
    Careers,
    Mentorship,
}

#[derive(Serialize)]
struct UpstreamRequest<'a> {
    message: &'a str,
    mode: ChatMode,
}

#[derive(Deserialize)]
struct UpstreamResponse {
    answer: String,
}

// The endpoint is opaque: one POST in, one answer out.
pub async fn ask(
    http: &reqwest::Client,
    endpoint: &str,
    message: &str,
    mode: ChatMode,
) -> Result<String> {
    tracing::debug!("forwarding chat message ({:?}) to {}", mode, endpoint);
    let response = http
        .post(endpoint)
        .json(&UpstreamRequest { message, mode })
        .send()
        .await
        .map_err(|e| StandardError::new("ERR-CHAT-001").interpolate_err(e.to_string()))?
        .error_for_status()
        .map_err(|e| StandardError::new("ERR-CHAT-001").interpolate_err(e.to_string()))?;
    let body: UpstreamResponse = response
        .json()
        .await
        .map_err(|e| StandardError::new("ERR-CHAT-002").interpolate_err(e.to_string()))?;
    Ok(body.answer)
}
