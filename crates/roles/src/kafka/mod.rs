mod consumer;
mod handler;

pub use self::consumer::RoleEventConsumer;
pub use self::handler::RoleEventHandler;

/// Topic the upstream systems publish role events to.
pub const ROLE_EVENTS_TOPIC: &str = "roles.events";
