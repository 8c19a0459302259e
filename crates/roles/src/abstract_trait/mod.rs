mod health;
mod role;

pub use self::health::{DynHealthService, HealthServiceTrait};
pub use self::role::repository::{
    DynRoleCommandRepository, DynRoleQueryRepository, RoleCommandRepositoryTrait,
    RoleQueryRepositoryTrait,
};
pub use self::role::service::{
    DynRoleCommandService, DynRoleQueryService, RoleCommandServiceTrait, RoleQueryServiceTrait,
};
