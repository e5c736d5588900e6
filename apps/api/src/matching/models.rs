use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::matching::skills;

pub const REMOTE_LOCATION: &str = "remote";

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Invalid profile: {0}")]
    Malformed(String),

    #[error("Invalid profile: name must not be empty")]
    EmptyName,
}

/// A candidate's skills, experience and location preference.
///
/// Only constructed through [`Profile::from_payload`] or from a stored row, so every
/// instance has all three matching inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "skills::deserialize", serialize_with = "skills::serialize")]
    pub skills: Vec<String>,
    pub experience: u64,
    #[serde(rename = "preferences")]
    pub preferred_location: String,
}

impl Profile {
    /// Validates an inbound JSON payload.
    ///
    /// `skills`, `experience` (non-negative integer) and `preferences` are required.
    /// `name` is optional but must be non-empty when given.
    pub fn from_payload(payload: Value) -> Result<Self, ProfileError> {
        let profile: Profile = serde_json::from_value(payload)
            .map_err(|e| ProfileError::Malformed(e.to_string()))?;

        if matches!(profile.name.as_deref(), Some("")) {
            return Err(ProfileError::EmptyName);
        }

        Ok(profile)
    }
}

/// A job opening as read from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Posting {
    pub id: i64,
    pub title: String,
    #[serde(serialize_with = "skills::serialize")]
    pub required_skills: Vec<String>,
    pub experience_required: u64,
    pub location: String,
}
