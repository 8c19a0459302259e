use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::Role;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleResponse {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        RoleResponse {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}
