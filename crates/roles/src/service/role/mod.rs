mod command;
mod query;

pub use self::command::RoleCommandService;
pub use self::query::RoleQueryService;
