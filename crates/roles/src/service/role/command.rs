use crate::abstract_trait::{DynRoleCommandRepository, RoleCommandServiceTrait};
use async_trait::async_trait;
use shared::{
    domain::requests::{CreateRoleRequest, DeleteRoleRequest, UpdateRoleRequest},
    errors::{RepositoryError, ServiceError},
    model::RoleDeletion,
};
use tracing::info;
use validator::Validate;

#[derive(Clone)]
pub struct RoleCommandService {
    command: DynRoleCommandRepository,
}

impl RoleCommandService {
    pub fn new(command: DynRoleCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl RoleCommandServiceTrait for RoleCommandService {
    async fn create(&self, req: &CreateRoleRequest) -> Result<i32, ServiceError> {
        req.validate().map_err(ServiceError::from)?;

        let id = self.command.create(req).await?;

        info!("✅ Role '{}' created with id {}", req.name, id);
        Ok(id)
    }

    async fn update(&self, req: &UpdateRoleRequest) -> Result<(), ServiceError> {
        req.validate().map_err(ServiceError::from)?;

        let updated = self.command.update(req).await?;
        if !updated {
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        info!("🔄 Role id {} updated", req.id);
        Ok(())
    }

    async fn delete(&self, req: &DeleteRoleRequest) -> Result<RoleDeletion, ServiceError> {
        req.validate().map_err(ServiceError::from)?;

        let deletion = self.command.delete(req.id).await?;
        if !deletion.deleted {
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        info!(
            "🗑️ Role id {} deleted, {} users moved to the fallback role",
            req.id, deletion.reassigned_users
        );
        Ok(deletion)
    }
}
