use async_trait::async_trait;
use shared::{
    domain::requests::{CreateRoleRequest, UpdateRoleRequest},
    errors::RepositoryError,
    model::{Role, RoleDeletion},
};
use std::sync::Arc;

pub type DynRoleQueryRepository = Arc<dyn RoleQueryRepositoryTrait + Send + Sync>;
pub type DynRoleCommandRepository = Arc<dyn RoleCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait RoleQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Role>, RepositoryError>;
}

#[async_trait]
pub trait RoleCommandRepositoryTrait {
    /// Inserts a new role and returns the server-assigned id.
    async fn create(&self, role: &CreateRoleRequest) -> Result<i32, RepositoryError>;

    /// Replaces both fields of the matched row. `false` means no row matched.
    async fn update(&self, role: &UpdateRoleRequest) -> Result<bool, RepositoryError>;

    /// Compound delete inside one transaction: look up the fallback role,
    /// repoint every `usuarios` row at it, then remove the target row.
    async fn delete(&self, role_id: i32) -> Result<RoleDeletion, RepositoryError>;
}
