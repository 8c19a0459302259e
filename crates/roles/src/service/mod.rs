mod health;
pub mod role;

pub use self::health::DatabaseHealthService;
pub use self::role::{RoleCommandService, RoleQueryService};
