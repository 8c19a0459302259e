mod role;

pub use self::role::{Role, RoleDeletion};
