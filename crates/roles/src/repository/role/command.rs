use crate::abstract_trait::RoleCommandRepositoryTrait;
use async_trait::async_trait;
use shared::{
    config::ConnectionPool,
    domain::requests::{CreateRoleRequest, UpdateRoleRequest},
    errors::RepositoryError,
    model::RoleDeletion,
};
use tracing::{error, info, warn};

/// Name of the role every orphaned `usuarios` row is repointed at.
const FALLBACK_ROLE_NAME: &str = "Usuario";

pub struct RoleCommandRepository {
    db: ConnectionPool,
}

impl RoleCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoleCommandRepositoryTrait for RoleCommandRepository {
    async fn create(&self, role: &CreateRoleRequest) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO roles (nombre, descripcion) VALUES ($1, $2) RETURNING id",
        )
        .bind(&role.name)
        .bind(&role.description)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create role '{}': {:?}", role.name, err);
            RepositoryError::from(err)
        })?;

        info!("✅ Created role '{}' with id {}", role.name, id);
        Ok(id)
    }

    async fn update(&self, role: &UpdateRoleRequest) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("UPDATE roles SET nombre = $1, descripcion = $2 WHERE id = $3")
            .bind(&role.name)
            .bind(&role.description)
            .bind(role.id)
            .execute(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update role id {}: {:?}", role.id, err);
                RepositoryError::from(err)
            })?;

        let updated = result.rows_affected() > 0;
        if updated {
            info!("🔄 Updated role id {}", role.id);
        } else {
            warn!("⚠️ No role found to update for id {}", role.id);
        }

        Ok(updated)
    }

    async fn delete(&self, role_id: i32) -> Result<RoleDeletion, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let fallback_id = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM roles WHERE nombre = $1 LIMIT 1",
        )
        .bind(FALLBACK_ROLE_NAME)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            error!("❌ Failed to look up fallback role: {:?}", err);
            RepositoryError::from(err)
        })?;

        // dropping the open transaction rolls everything back
        let Some(fallback_id) = fallback_id else {
            error!("❌ Fallback role '{}' not found, aborting delete", FALLBACK_ROLE_NAME);
            return Err(RepositoryError::FallbackRoleMissing);
        };

        let reassigned = sqlx::query("UPDATE usuarios SET rol_id = $1 WHERE rol_id = $2")
            .bind(fallback_id)
            .bind(role_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to reassign users of role {}: {:?}", role_id, err);
                RepositoryError::from(err)
            })?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(role_id)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                error!("❌ Failed to delete role id {}: {:?}", role_id, err);
                RepositoryError::from(err)
            })?
            .rows_affected()
            > 0;

        tx.commit().await.map_err(RepositoryError::from)?;

        info!(
            "🗑️ Deleted role id {} (removed: {}, users reassigned to role {}: {})",
            role_id, deleted, fallback_id, reassigned
        );

        Ok(RoleDeletion {
            deleted,
            reassigned_users: reassigned,
        })
    }
}
