mod command;
mod query;

pub use self::command::RoleCommandRepository;
pub use self::query::RoleQueryRepository;
