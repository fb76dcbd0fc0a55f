use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::time::Duration;

pub const PREFIX: &str = "BATCH_";

const CREATE_INSTANCE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS BATCH_JOB_INSTANCE (
        JOB_INSTANCE_ID BIGINT NOT NULL PRIMARY KEY,
        VERSION BIGINT,
        JOB_NAME VARCHAR(100) NOT NULL,
        JOB_KEY VARCHAR(32) NOT NULL
    )
"#;

const CREATE_EXECUTION_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS BATCH_JOB_EXECUTION (
        JOB_EXECUTION_ID BIGINT NOT NULL PRIMARY KEY,
        VERSION BIGINT,
        JOB_INSTANCE_ID BIGINT NOT NULL REFERENCES BATCH_JOB_INSTANCE(JOB_INSTANCE_ID),
        STATUS VARCHAR(10)
    )
"#;

/// Runs against Postgres when TEST_DATABASE_URL is set (tables are emptied
/// first), otherwise against a fresh in-memory SQLite database. The SQLite
/// pool keeps a single connection that never expires so the schema lives as
/// long as the pool.
pub async fn setup_db() -> AnyPool {
    let _ = dotenvy::dotenv();
    install_default_drivers();

    let pool = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => AnyPoolOptions::new()
            .max_connections(5)
            .connect(url.trim())
            .await
            .expect("failed to connect to TEST_DATABASE_URL"),
        _ => AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory sqlite"),
    };

    sqlx::query(CREATE_INSTANCE_TABLE)
        .execute(&pool)
        .await
        .expect("create instance table failed");
    sqlx::query(CREATE_EXECUTION_TABLE)
        .execute(&pool)
        .await
        .expect("create execution table failed");

    sqlx::query("DELETE FROM BATCH_JOB_EXECUTION")
        .execute(&pool)
        .await
        .expect("clear executions failed");
    sqlx::query("DELETE FROM BATCH_JOB_INSTANCE")
        .execute(&pool)
        .await
        .expect("clear instances failed");

    pool
}

#[allow(dead_code)]
pub async fn insert_instance(pool: &AnyPool, id: i64, name: &str) {
    sqlx::query(
        "INSERT INTO BATCH_JOB_INSTANCE (JOB_INSTANCE_ID, VERSION, JOB_NAME, JOB_KEY) VALUES ($1, 0, $2, $3)",
    )
    .bind(id)
    .bind(name)
    .bind(format!("key-{id}"))
    .execute(pool)
    .await
    .expect("failed to insert job instance");
}

#[allow(dead_code)]
pub async fn insert_execution(pool: &AnyPool, id: i64, instance_id: i64, status: &str) {
    sqlx::query(
        "INSERT INTO BATCH_JOB_EXECUTION (JOB_EXECUTION_ID, VERSION, JOB_INSTANCE_ID, STATUS) VALUES ($1, 0, $2, $3)",
    )
    .bind(id)
    .bind(instance_id)
    .bind(status)
    .execute(pool)
    .await
    .expect("failed to insert job execution");
}

/// instances (1, job-A), (2, job-A), (3, job-B)
/// executions (1 -> FAILED), (2 -> COMPLETED), (3 -> COMPLETED)
#[allow(dead_code)]
pub async fn seed_scenario(pool: &AnyPool) {
    insert_instance(pool, 1, "job-A").await;
    insert_instance(pool, 2, "job-A").await;
    insert_instance(pool, 3, "job-B").await;

    insert_execution(pool, 10, 1, "FAILED").await;
    insert_execution(pool, 20, 2, "COMPLETED").await;
    insert_execution(pool, 30, 3, "COMPLETED").await;
}
