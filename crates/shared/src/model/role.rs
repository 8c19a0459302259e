use sqlx::FromRow;

/// Row of the `roles` table. Column names are Spanish in storage; queries
/// alias them to the English field names.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Outcome of the compound delete: whether the target row was removed and
/// how many `usuarios` rows were repointed at the fallback role first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDeletion {
    pub deleted: bool,
    pub reassigned_users: u64,
}
