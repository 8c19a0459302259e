use crate::{
    abstract_trait::{DynHealthService, DynRoleCommandService, DynRoleQueryService},
    repository::role::{RoleCommandRepository, RoleQueryRepository},
    service::{DatabaseHealthService, RoleCommandService, RoleQueryService},
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

/// Explicitly constructed dependency container. Built once at startup from
/// the connection pool and shared behind `Arc<AppState>`.
#[derive(Clone)]
pub struct DependenciesInject {
    pub role_query: DynRoleQueryService,
    pub role_command: DynRoleCommandService,
    pub health: DynHealthService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("role_query", &"RoleQueryService")
            .field("role_command", &"RoleCommandService")
            .field("health", &"DatabaseHealthService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let role_query_repo = Arc::new(RoleQueryRepository::new(pool.clone()));
        let role_command_repo = Arc::new(RoleCommandRepository::new(pool.clone()));

        let role_query: DynRoleQueryService =
            Arc::new(RoleQueryService::new(role_query_repo));
        let role_command: DynRoleCommandService =
            Arc::new(RoleCommandService::new(role_command_repo));
        let health: DynHealthService = Arc::new(DatabaseHealthService::new(pool));

        Self {
            role_query,
            role_command,
            health,
        }
    }
}
