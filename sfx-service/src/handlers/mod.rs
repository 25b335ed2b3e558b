//! HTTP handlers for the SFX planner.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};
use serde_json::json;
use service_core::error::AppError;

use crate::prompt::build_brief_prompt;
use crate::startup::AppState;

/// Maximum accepted length of an action description, in characters.
const MAX_ACTION_CHARS: usize = 500;

/// Sound-effect planning request.
#[derive(Debug, Deserialize)]
pub struct SfxRequest {
    pub action: String,
    #[serde(default = "default_genre")]
    pub genre: String,
}

fn default_genre() -> String {
    "General".to_string()
}

/// Sound-design brief produced by the model.
#[derive(Debug, Serialize)]
pub struct SfxResponse {
    pub description: String,
}

/// Liveness probe. Always succeeds, independent of upstream health.
///
/// GET /
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "Game SFX Planner API is running" }))
}

/// Turn a game-action description into a sound-design brief.
///
/// POST /
pub async fn describe_sound(
    State(state): State<AppState>,
    Json(req): Json<SfxRequest>,
) -> Result<Json<SfxResponse>, AppError> {
    if req.action.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Action description is required.".to_string(),
        ));
    }

    // Length is checked pre-trim, in characters. `genre` is deliberately
    // unvalidated and flows into the prompt verbatim.
    if req.action.chars().count() > MAX_ACTION_CHARS {
        return Err(AppError::InvalidInput(
            "Action description too long (max 500 chars).".to_string(),
        ));
    }

    let prompt = build_brief_prompt(&req.genre, &req.action);
    let description = state.text_provider.generate(&prompt).await?;

    Ok(Json(SfxResponse { description }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_defaults_to_general_when_omitted() {
        let req: SfxRequest =
            serde_json::from_str(r#"{"action":"sword swing"}"#).expect("deserialization failed");
        assert_eq!(req.genre, "General");
    }

    #[test]
    fn explicit_genre_is_kept() {
        let req: SfxRequest =
            serde_json::from_str(r#"{"action":"sword swing","genre":"RPG"}"#)
                .expect("deserialization failed");
        assert_eq!(req.genre, "RPG");
    }
}
