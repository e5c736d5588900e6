use anyhow::{Context, Result};
use sqlx::FromRow;

use crate::matching::models::Profile;
use crate::matching::skills::split_skills;

/// Raw `user_profiles` row.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfileRow {
    pub id: i64,
    pub name: String,
    pub skills: Option<String>,
    pub experience: Option<i64>,
    pub preferences: Option<String>,
}

impl TryFrom<UserProfileRow> for Profile {
    type Error = anyhow::Error;

    fn try_from(row: UserProfileRow) -> Result<Self> {
        let experience = u64::try_from(row.experience.unwrap_or(0))
            .with_context(|| format!("user_profiles.{} has a negative experience", row.id))?;

        Ok(Profile {
            name: Some(row.name).filter(|n| !n.is_empty()),
            skills: split_skills(row.skills.as_deref().unwrap_or_default()),
            experience,
            preferred_location: row.preferences.unwrap_or_default(),
        })
    }
}
