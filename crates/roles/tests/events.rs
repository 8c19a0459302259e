//! Event surface tests: the handler consumes every message, applies known
//! events through the command service, and drops everything else with a log
//! line only.

mod common;

use common::{FALLBACK_ROLE_NAME, MockRoleRepository, role};
use roles::{kafka::RoleEventHandler, service::RoleCommandService};
use serde_json::json;
use std::sync::Arc;

fn handler(repo: Arc<MockRoleRepository>) -> RoleEventHandler {
    RoleEventHandler::new(Arc::new(RoleCommandService::new(repo)))
}

#[tokio::test]
async fn rol_creado_event_creates_a_role() {
    let repo = MockRoleRepository::new(vec![], vec![]);
    let handler = handler(repo.clone());

    let payload = json!({
        "eventType": "RolCreado",
        "data": {"nombre": "Vet", "descripcion": "Veterinario"}
    });
    handler.handle(&serde_json::to_vec(&payload).unwrap()).await;

    assert!(repo.roles().iter().any(|r| r.name == "Vet"));
}

#[tokio::test]
async fn rol_actualizado_event_updates_the_role() {
    let repo = MockRoleRepository::new(vec![role(3, "Vet", "Veterinario")], vec![]);
    let handler = handler(repo.clone());

    let payload = json!({
        "eventType": "RolActualizado",
        "data": {"id": 3, "nombre": "Cirujano", "descripcion": "Cirujano veterinario"}
    });
    handler.handle(&serde_json::to_vec(&payload).unwrap()).await;

    assert_eq!(
        repo.roles(),
        vec![role(3, "Cirujano", "Cirujano veterinario")]
    );
}

#[tokio::test]
async fn rol_eliminado_event_cascades_the_reassignment() {
    let repo = MockRoleRepository::new(
        vec![
            role(1, FALLBACK_ROLE_NAME, "Rol por defecto"),
            role(3, "Vet", "Veterinario"),
        ],
        vec![(10, 3), (11, 3)],
    );
    let handler = handler(repo.clone());

    let payload = json!({"eventType": "RolEliminado", "data": {"id": 3}});
    handler.handle(&serde_json::to_vec(&payload).unwrap()).await;

    assert!(repo.users().iter().all(|(_, rol_id)| *rol_id == 1));
    assert!(!repo.roles().iter().any(|r| r.id == 3));
}

#[tokio::test]
async fn unknown_event_type_is_consumed_without_mutation() {
    let repo = MockRoleRepository::new(vec![role(1, FALLBACK_ROLE_NAME, "Rol por defecto")], vec![]);
    let handler = handler(repo.clone());

    let payload = json!({
        "eventType": "RolArchivado",
        "data": {"id": 1}
    });
    handler.handle(&serde_json::to_vec(&payload).unwrap()).await;

    // no error escalates and storage is untouched
    assert_eq!(repo.call_count(), 0);
    assert_eq!(repo.roles(), vec![role(1, FALLBACK_ROLE_NAME, "Rol por defecto")]);
}

#[tokio::test]
async fn event_without_data_is_dropped() {
    let repo = MockRoleRepository::new(vec![], vec![]);
    let handler = handler(repo.clone());

    handler
        .handle(&serde_json::to_vec(&json!({"eventType": "RolCreado"})).unwrap())
        .await;
    handler
        .handle(&serde_json::to_vec(&json!({"eventType": "RolCreado", "data": null})).unwrap())
        .await;
    handler
        .handle(&serde_json::to_vec(&json!({"eventType": "RolCreado", "data": {}})).unwrap())
        .await;

    assert_eq!(repo.call_count(), 0);
}

#[tokio::test]
async fn event_with_missing_required_field_is_dropped() {
    let repo = MockRoleRepository::new(vec![], vec![]);
    let handler = handler(repo.clone());

    let payload = json!({"eventType": "RolCreado", "data": {"nombre": "Vet"}});
    handler.handle(&serde_json::to_vec(&payload).unwrap()).await;

    assert!(repo.roles().is_empty());
}

#[tokio::test]
async fn garbage_payload_is_dropped() {
    let repo = MockRoleRepository::new(vec![], vec![]);
    let handler = handler(repo.clone());

    handler.handle(b"not json at all").await;

    assert_eq!(repo.call_count(), 0);
}
