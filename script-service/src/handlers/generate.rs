//! The two generation endpoints.
//!
//! Each handler deserializes a single-field request body, delegates to the
//! matching helper, and wraps the result in a single-field response. Any
//! provider failure surfaces as a 500 with the error text as `detail`.

use crate::services::{generate_ideas, generate_script};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct IdeaRequest {
    pub idea: String,
}

#[derive(Debug, Serialize)]
pub struct IdeasResponse {
    pub ideas: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScriptResponse {
    pub script: String,
}

/// POST /generate-ideas
pub async fn generate_ideas_handler(
    State(state): State<AppState>,
    Json(req): Json<TopicRequest>,
) -> Result<Json<IdeasResponse>, AppError> {
    let ideas = generate_ideas(state.idea_provider.as_ref(), &req.topic)
        .await
        .map_err(|e| {
            tracing::error!(topic = %req.topic, error = %e, "Idea generation failed");
            AppError::Provider(anyhow::Error::new(e))
        })?;

    Ok(Json(IdeasResponse { ideas }))
}

/// POST /generate-script
pub async fn generate_script_handler(
    State(state): State<AppState>,
    Json(req): Json<IdeaRequest>,
) -> Result<Json<ScriptResponse>, AppError> {
    let script = generate_script(state.script_provider.as_ref(), &req.idea)
        .await
        .map_err(|e| {
            tracing::error!(idea = %req.idea, error = %e, "Script generation failed");
            AppError::Provider(anyhow::Error::new(e))
        })?;

    Ok(Json(ScriptResponse { script }))
}
