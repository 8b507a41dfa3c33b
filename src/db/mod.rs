use sqlx::{postgres::PgPoolOptions, Error, Executor, PgPool};
use thiserror::Error;

pub mod models;
pub mod store;

pub use store::{PgStore, PharmacyStore};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to parse database URL: {0}")]
    UrlParse(String),
    #[error("Database error: {0}")]
    Sqlx(#[from] Error),
    #[error("Failed to create database: {0}")]
    CreateDb(String),
}

/// Connects to `database_url`, creating the database first if the server
/// does not have it yet. Tables are not created here.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<PgPool, DatabaseError> {
    let target = parse_database_url(database_url)?;

    let temp_pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&target.maintenance_url())
        .await
        .map_err(DatabaseError::Sqlx)?;

    ensure_database_exists(&temp_pool, &target.db_name).await?;
    temp_pool.close().await;

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(DatabaseError::Sqlx)
}

#[derive(Debug, PartialEq)]
struct DatabaseTarget {
    base_url: String,
    db_name: String,
    query: Option<String>,
}

impl DatabaseTarget {
    /// URL of the `postgres` maintenance database on the same server.
    fn maintenance_url(&self) -> String {
        match &self.query {
            Some(query) => format!("{}/postgres?{}", self.base_url, query),
            None => format!("{}/postgres", self.base_url),
        }
    }
}

fn parse_database_url(database_url: &str) -> Result<DatabaseTarget, DatabaseError> {
    let (base_url, tail) = database_url
        .rsplit_once('/')
        .filter(|(base, _)| base.contains("://") && !base.ends_with('/'))
        .ok_or_else(|| DatabaseError::UrlParse("Invalid database URL format".to_string()))?;

    let (db_name, query) = match tail.split_once('?') {
        Some((name, query)) => (name, Some(query.to_string())),
        None => (tail, None),
    };

    if db_name.is_empty() {
        return Err(DatabaseError::UrlParse(
            "Failed to extract database name".to_string(),
        ));
    }

    Ok(DatabaseTarget {
        base_url: base_url.to_string(),
        db_name: db_name.to_string(),
        query,
    })
}

async fn ensure_database_exists(pool: &PgPool, db_name: &str) -> Result<(), DatabaseError> {
    let db_exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(db_name)
            .fetch_one(pool)
            .await
            .map_err(DatabaseError::Sqlx)?;

    if !db_exists {
        log::info!("Creating database {}", db_name);
        pool.execute(format!("CREATE DATABASE {}", quote_ident(db_name)).as_str())
            .await
            .map_err(|e| DatabaseError::CreateDb(e.to_string()))?;
    }

    Ok(())
}

fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
