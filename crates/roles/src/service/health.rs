use crate::abstract_trait::HealthServiceTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::ServiceError};
use tracing::error;

/// Probes the database with `SELECT 1` before the dispatcher touches storage.
pub struct DatabaseHealthService {
    db: ConnectionPool,
}

impl DatabaseHealthService {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthServiceTrait for DatabaseHealthService {
    async fn ping(&self) -> Result<(), ServiceError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Database connectivity probe failed: {:?}", e);
                ServiceError::Internal("Base de datos no disponible".into())
            })?;

        Ok(())
    }
}
