mod role;

pub use self::role::{CreateRoleRequest, DeleteRoleRequest, UpdateRoleRequest};
