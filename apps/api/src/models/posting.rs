use anyhow::{Context, Result};
use sqlx::FromRow;

use crate::matching::models::Posting;
use crate::matching::skills::split_skills;

/// Raw `job_postings` row. Columns other than `id` and `title` are nullable in the schema.
#[derive(Debug, Clone, FromRow)]
pub struct JobPostingRow {
    pub id: i64,
    pub title: String,
    pub required_skills: Option<String>,
    pub experience_required: Option<i64>,
    pub location: Option<String>,
}

impl TryFrom<JobPostingRow> for Posting {
    type Error = anyhow::Error;

    fn try_from(row: JobPostingRow) -> Result<Self> {
        let experience_required = u64::try_from(row.experience_required.unwrap_or(0))
            .with_context(|| format!("job_postings.{} has a negative experience_required", row.id))?;

        Ok(Posting {
            id: row.id,
            title: row.title,
            required_skills: split_skills(row.required_skills.as_deref().unwrap_or_default()),
            experience_required,
            location: row.location.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_decodes_joined_skills() {
        let posting = Posting::try_from(JobPostingRow {
            id: 1,
            title: "Backend Developer".into(),
            required_skills: Some("Python, Flask".into()),
            experience_required: Some(2),
            location: Some("remote".into()),
        })
        .unwrap();
        assert_eq!(posting.required_skills, vec!["Python", "Flask"]);
        assert_eq!(posting.experience_required, 2);
    }

    #[test]
    fn test_null_columns_become_empty() {
        let posting = Posting::try_from(JobPostingRow {
            id: 2,
            title: "Mystery".into(),
            required_skills: None,
            experience_required: None,
            location: None,
        })
        .unwrap();
        assert!(posting.required_skills.is_empty());
        assert_eq!(posting.experience_required, 0);
        assert_eq!(posting.location, "");
    }

    #[test]
    fn test_negative_experience_is_rejected() {
        let err = Posting::try_from(JobPostingRow {
            id: 3,
            title: "Broken".into(),
            required_skills: None,
            experience_required: Some(-4),
            location: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("job_postings.3"));
    }
}
