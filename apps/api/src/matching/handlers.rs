//! Axum route handlers for job recommendations.

use axum::{
    extract::{Path, State},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::matching::matcher::recommend;
use crate::matching::models::{Posting, Profile};
use crate::state::AppState;

/// POST /recommend_jobs
///
/// The body is read raw so an absent or empty payload maps to `MissingInput`
/// instead of axum's JSON rejection.
pub async fn handle_recommend_jobs(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Posting>>, AppError> {
    let payload = parse_profile_body(&body)?;
    let profile = Profile::from_payload(payload)?;
    let matched = recommend_for(&state, &profile).await?;
    Ok(Json(matched))
}

/// GET /api/v1/profiles/:id/recommendations
pub async fn handle_profile_recommendations(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Posting>>, AppError> {
    let profile = state
        .store
        .find_profile(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile {id} not found")))?;
    let matched = recommend_for(&state, &profile).await?;
    Ok(Json(matched))
}

async fn recommend_for(state: &AppState, profile: &Profile) -> Result<Vec<Posting>, AppError> {
    let candidates = state
        .store
        .postings_matching(profile.experience, &profile.preferred_location)
        .await?;
    let candidate_count = candidates.len();

    let matched = recommend(profile, candidates);

    info!(
        "Recommended {}/{} postings ({} skills, {}y, '{}')",
        matched.len(),
        candidate_count,
        profile.skills.len(),
        profile.experience,
        profile.preferred_location
    );
    Ok(matched)
}

/// Empty bodies and falsy JSON values (`null`, `false`, `0`, `""`, `[]`, `{}`)
/// all count as "no profile".
fn parse_profile_body(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::MissingInput);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidProfile(format!("Request body is not valid JSON: {e}")))?;

    match &value {
        Value::Null | Value::Bool(false) => Err(AppError::MissingInput),
        Value::Object(map) if map.is_empty() => Err(AppError::MissingInput),
        Value::Array(items) if items.is_empty() => Err(AppError::MissingInput),
        Value::String(s) if s.is_empty() => Err(AppError::MissingInput),
        Value::Number(n) if n.as_f64() == Some(0.0) => Err(AppError::MissingInput),
        _ => Ok(value),
    }
}
