use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "nombre must not be empty"))]
    pub name: String,

    #[serde(rename = "descripcion")]
    #[validate(length(min = 1, message = "descripcion must not be empty"))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i32,

    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "nombre must not be empty"))]
    pub name: String,

    #[serde(rename = "descripcion")]
    #[validate(length(min = 1, message = "descripcion must not be empty"))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct DeleteRoleRequest {
    #[validate(range(min = 1, message = "id must be positive"))]
    pub id: i32,
}
