use crate::abstract_trait::{DynRoleQueryRepository, RoleQueryServiceTrait};
use async_trait::async_trait;
use shared::{domain::responses::RoleResponse, errors::ServiceError};

#[derive(Clone)]
pub struct RoleQueryService {
    query: DynRoleQueryRepository,
}

impl RoleQueryService {
    pub fn new(query: DynRoleQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl RoleQueryServiceTrait for RoleQueryService {
    async fn find_all(&self) -> Result<Vec<RoleResponse>, ServiceError> {
        let roles = self.query.find_all().await?;

        Ok(roles.into_iter().map(RoleResponse::from).collect())
    }
}
