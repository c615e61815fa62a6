use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};
use sqlx::{PgConnection, Postgres, Transaction};
use std::ops::{Deref, DerefMut};
use tracing::{debug, warn};

use crate::api::handlers::AppState;
use crate::errors::ApiError;

/// Request-scoped database session.
///
/// Work runs inside a transaction that is only kept when [`commit`] is
/// called. Dropping the session on any other path rolls back and returns
/// the connection to the pool.
///
/// [`commit`]: DbSession::commit
pub struct DbSession {
    // Only `None` inside `commit`, which consumes the session
    tx: Option<Transaction<'static, Postgres>>,
}

impl DbSession {
    pub async fn begin(pool: &super::Database) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        debug!("Database session opened");
        Ok(Self { tx: Some(tx) })
    }

    pub async fn commit(mut self) -> Result<(), sqlx::Error> {
        if let Some(tx) = self.tx.take() {
            tx.commit().await?;
            debug!("Database session committed");
        }
        Ok(())
    }

    fn transaction(&self) -> &Transaction<'static, Postgres> {
        match &self.tx {
            Some(tx) => tx,
            None => unreachable!("database session used after commit"),
        }
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        if self.tx.is_some() {
            debug!("Database session dropped without commit, rolling back");
        }
    }
}

impl Deref for DbSession {
    type Target = PgConnection;

    fn deref(&self) -> &Self::Target {
        self.transaction()
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut self.tx {
            Some(tx) => tx,
            None => unreachable!("database session used after commit"),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        DbSession::begin(&state.db).await.map_err(|e| {
            warn!(error = %e, "Failed to open database session");
            ApiError::transport(StatusCode::SERVICE_UNAVAILABLE, "database is unavailable")
        })
    }
}
