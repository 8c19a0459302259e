mod api;
mod role;

pub use self::api::{ListRolesResponse, MessageResponse};
pub use self::role::RoleResponse;
