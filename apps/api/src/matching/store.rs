//! Job store: the storage collaborator behind the matcher.
//!
//! `AppState` holds an `Arc<dyn JobStore>`; `SqliteJobStore` is the production backend.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::models::{Posting, Profile, REMOTE_LOCATION};
use crate::models::posting::JobPostingRow;
use crate::models::profile::UserProfileRow;

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Postings with `experience_required <= max_experience` located at
    /// `preferred_location` or remote, in storage order.
    async fn postings_matching(
        &self,
        max_experience: u64,
        preferred_location: &str,
    ) -> Result<Vec<Posting>, AppError>;

    async fn find_profile(&self, id: i64) -> Result<Option<Profile>, AppError>;

    /// Cheap round-trip used by the health check.
    async fn ping(&self) -> Result<(), AppError>;
}

pub struct SqliteJobStore {
    pool: SqlitePool,
}

impl SqliteJobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for SqliteJobStore {
    async fn postings_matching(
        &self,
        max_experience: u64,
        preferred_location: &str,
    ) -> Result<Vec<Posting>, AppError> {
        let rows: Vec<JobPostingRow> = sqlx::query_as(
            r#"
            SELECT id, title, required_skills, experience_required, location
            FROM job_postings
            WHERE experience_required <= ?
              AND (location = ? OR location = ?)
            ORDER BY id
            "#,
        )
        .bind(i64::try_from(max_experience).unwrap_or(i64::MAX))
        .bind(preferred_location)
        .bind(REMOTE_LOCATION)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            "{} postings within {max_experience}y at '{preferred_location}' or remote",
            rows.len()
        );

        let postings = rows
            .into_iter()
            .map(Posting::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(postings)
    }

    async fn find_profile(&self, id: i64) -> Result<Option<Profile>, AppError> {
        let row: Option<UserProfileRow> = sqlx::query_as(
            "SELECT id, name, skills, experience, preferences FROM user_profiles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Profile::try_from).transpose()?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{seed_sample_data, test_pool};

    async fn seeded_store() -> SqliteJobStore {
        let pool = test_pool().await;
        seed_sample_data(&pool).await.unwrap();
        SqliteJobStore::new(pool)
    }

    fn titles(postings: &[Posting]) -> Vec<&str> {
        postings.iter().map(|p| p.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_remote_preference_excludes_onsite() {
        let store = seeded_store().await;
        let postings = store.postings_matching(3, "remote").await.unwrap();
        assert_eq!(titles(&postings), vec!["Backend Developer", "Frontend Developer"]);
        assert_eq!(postings[0].required_skills, vec!["Python", "Flask"]);
    }

    #[tokio::test]
    async fn test_onsite_preference_includes_remote() {
        let store = seeded_store().await;
        let postings = store.postings_matching(3, "onsite").await.unwrap();
        assert_eq!(postings.len(), 3);
    }

    #[tokio::test]
    async fn test_experience_ceiling_applies() {
        let store = seeded_store().await;
        let postings = store.postings_matching(1, "onsite").await.unwrap();
        assert_eq!(titles(&postings), vec!["Data Analyst"]);
    }

    #[tokio::test]
    async fn test_experience_above_i64_range_saturates() {
        let store = seeded_store().await;
        let postings = store.postings_matching(u64::MAX, "remote").await.unwrap();
        assert_eq!(postings.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_table_is_empty_pool() {
        let store = SqliteJobStore::new(test_pool().await);
        assert!(store.postings_matching(10, "remote").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_profile() {
        let store = seeded_store().await;
        let alice = store.find_profile(1).await.unwrap().unwrap();
        assert_eq!(alice.name.as_deref(), Some("Alice"));
        assert_eq!(alice.skills, vec!["Python", "Flask", "SQL"]);
        assert_eq!(alice.experience, 3);
        assert!(store.find_profile(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ping_fails_once_pool_is_closed() {
        let pool = test_pool().await;
        let store = SqliteJobStore::new(pool.clone());
        store.ping().await.unwrap();
        pool.close().await;
        assert!(matches!(store.ping().await, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_missing_table_surfaces_database_error() {
        let pool = test_pool().await;
        sqlx::query("DROP TABLE job_postings")
            .execute(&pool)
            .await
            .unwrap();
        let store = SqliteJobStore::new(pool);
        let err = store.postings_matching(3, "remote").await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
