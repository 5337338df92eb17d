/// Shared application state
use crate::services::AuthService;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth: Arc<AuthService>) -> Self {
        Self { pool, auth }
    }
}
