use crate::abstract_trait::RoleQueryRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError, model::Role};
use tracing::{error, info};

pub struct RoleQueryRepository {
    db: ConnectionPool,
}

impl RoleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleQueryRepositoryTrait for RoleQueryRepository {
    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError> {
        info!("🔍 Fetching all roles");

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        // no ORDER BY: row order is unspecified and callers must not rely on it
        let roles = sqlx::query_as::<_, Role>(
            "SELECT id, nombre AS name, descripcion AS description FROM roles",
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch roles: {:?}", e);
            RepositoryError::from(e)
        })?;

        info!("✅ Retrieved {} roles", roles.len());

        Ok(roles)
    }
}
