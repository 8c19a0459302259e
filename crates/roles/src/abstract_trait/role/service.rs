use async_trait::async_trait;
use shared::{
    domain::{
        requests::{CreateRoleRequest, DeleteRoleRequest, UpdateRoleRequest},
        responses::RoleResponse,
    },
    errors::ServiceError,
    model::RoleDeletion,
};
use std::sync::Arc;

pub type DynRoleQueryService = Arc<dyn RoleQueryServiceTrait + Send + Sync>;
pub type DynRoleCommandService = Arc<dyn RoleCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait RoleQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<RoleResponse>, ServiceError>;
}

#[async_trait]
pub trait RoleCommandServiceTrait {
    async fn create(&self, req: &CreateRoleRequest) -> Result<i32, ServiceError>;
    async fn update(&self, req: &UpdateRoleRequest) -> Result<(), ServiceError>;
    async fn delete(&self, req: &DeleteRoleRequest) -> Result<RoleDeletion, ServiceError>;
}
