use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Creates and returns a SQLite connection pool, creating the database file if needed.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    info!("Opening SQLite database at {}", config.url);
    anyhow::ensure!(
        config.max_connections > 0,
        "Database pool needs at least one connection"
    );

    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Invalid DATABASE_URL '{}'", config.url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Creates the `user_profiles` and `job_postings` tables. Safe to run on every start.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_profiles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            skills TEXT,
            experience INTEGER,
            preferences TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create user_profiles")?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_postings (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            required_skills TEXT,
            experience_required INTEGER,
            location TEXT
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create job_postings")?;

    info!("Schema migrations applied");
    Ok(())
}

/// Inserts the sample profile and postings. Skipped when `job_postings` already has rows.
/// Returns whether anything was inserted.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("Sample data skipped: job_postings already has {existing} rows");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    sqlx::query(
        "INSERT INTO user_profiles (name, skills, experience, preferences) VALUES (?, ?, ?, ?)",
    )
    .bind("Alice")
    .bind("Python, Flask, SQL")
    .bind(3_i64)
    .bind("remote")
    .execute(&mut *tx)
    .await?;

    let postings: [(&str, &str, i64, &str); 3] = [
        ("Backend Developer", "Python, Flask", 2, "remote"),
        ("Data Analyst", "SQL, Python", 1, "onsite"),
        ("Frontend Developer", "React, CSS", 2, "remote"),
    ];
    for (title, skills, experience, location) in postings {
        sqlx::query(
            "INSERT INTO job_postings (title, required_skills, experience_required, location) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(skills)
        .bind(experience)
        .bind(location)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!("Seeded sample profile and {} postings", postings.len());
    Ok(true)
}

/// Single-connection in-memory database with the schema applied.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = create_pool(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    })
    .await
    .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = test_pool().await;
        run_migrations(&pool).await.unwrap();
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('user_profiles', 'job_postings') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(tables, vec!["job_postings", "user_profiles"]);
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let pool = test_pool().await;
        assert!(seed_sample_data(&pool).await.unwrap());
        assert!(!seed_sample_data(&pool).await.unwrap());

        let postings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_postings")
            .fetch_one(&pool)
            .await
            .unwrap();
        let profiles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_profiles")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(postings, 3);
        assert_eq!(profiles, 1);
    }

    #[tokio::test]
    async fn test_zero_sized_pool_is_an_error() {
        let err = create_pool(&DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 0,
        })
        .await
        .unwrap_err();
        assert!(err.to_string().contains("at least one connection"), "{err}");
    }

    #[tokio::test]
    async fn test_file_backed_pool_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.db");
        let pool = create_pool(&DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 2,
        })
        .await
        .unwrap();
        run_migrations(&pool).await.unwrap();
        pool.close().await;
        assert!(path.exists());
    }
}
