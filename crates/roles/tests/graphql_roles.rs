//! GraphQL read projection tests, executed directly against the schema.

mod common;

use common::{FailingRoleRepository, MockRoleRepository, role};
use roles::{
    abstract_trait::DynRoleQueryService,
    graphql::build_schema,
    service::RoleQueryService,
};
use std::sync::Arc;

#[tokio::test]
async fn roles_query_returns_all_roles() {
    let repo = MockRoleRepository::new(
        vec![role(1, "Usuario", "Rol por defecto"), role(2, "Vet", "Veterinario")],
        vec![],
    );
    let query: DynRoleQueryService = Arc::new(RoleQueryService::new(repo));
    let schema = build_schema(query);

    let response = schema
        .execute("{ roles { id nombre descripcion } }")
        .await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    let roles = data["roles"].as_array().unwrap();
    assert_eq!(roles.len(), 2);
    assert!(
        roles
            .iter()
            .any(|r| r["id"] == 2 && r["nombre"] == "Vet" && r["descripcion"] == "Veterinario")
    );
}

#[tokio::test]
async fn storage_failure_surfaces_as_execution_error() {
    let query: DynRoleQueryService =
        Arc::new(RoleQueryService::new(Arc::new(FailingRoleRepository)));
    let schema = build_schema(query);

    let response = schema.execute("{ roles { id } }").await;

    assert!(!response.errors.is_empty());
    // no partial results
    let data = response.data.into_json().unwrap();
    assert!(data.is_null());
}

#[tokio::test]
async fn unknown_field_is_a_query_error() {
    let repo = MockRoleRepository::new(vec![], vec![]);
    let query: DynRoleQueryService = Arc::new(RoleQueryService::new(repo));
    let schema = build_schema(query);

    let response = schema.execute("{ mascotas { id } }").await;

    assert!(!response.errors.is_empty());
}
