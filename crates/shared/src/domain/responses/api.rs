use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::responses::RoleResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListRolesResponse {
    pub roles: Vec<RoleResponse>,
}
