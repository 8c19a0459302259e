use crate::abstract_trait::DynRoleCommandService;
use shared::domain::{
    event::{RoleEventEnvelope, RoleEventKind},
    requests::{CreateRoleRequest, DeleteRoleRequest, UpdateRoleRequest},
};
use tracing::{error, info, warn};

/// Applies inbound role events to the command service. Events have no
/// response channel: every outcome, success or failure, is log-only and the
/// message is considered consumed.
pub struct RoleEventHandler {
    command: DynRoleCommandService,
}

impl RoleEventHandler {
    pub fn new(command: DynRoleCommandService) -> Self {
        Self { command }
    }

    pub async fn handle(&self, payload: &[u8]) {
        let envelope: RoleEventEnvelope = match serde_json::from_slice(payload) {
            Ok(envelope) => envelope,
            Err(e) => {
                error!("❌ Failed to deserialize role event envelope: {e}");
                return;
            }
        };

        let Some(kind) = RoleEventKind::parse(&envelope.event_type) else {
            warn!("⚠️ Unsupported event type '{}', ignoring", envelope.event_type);
            return;
        };

        let Some(data) = envelope.payload() else {
            warn!(
                "⚠️ Event '{}' carries no data, ignoring",
                envelope.event_type
            );
            return;
        };

        match kind {
            RoleEventKind::Created => match serde_json::from_value::<CreateRoleRequest>(data.clone())
            {
                Ok(req) => match self.command.create(&req).await {
                    Ok(id) => info!("✅ Event created role '{}' with id {}", req.name, id),
                    Err(e) => error!("❌ Failed to create role from event: {e}"),
                },
                Err(e) => error!("❌ Invalid data for RolCreado: {e}"),
            },

            RoleEventKind::Updated => match serde_json::from_value::<UpdateRoleRequest>(data.clone())
            {
                Ok(req) => match self.command.update(&req).await {
                    Ok(()) => info!("🔄 Event updated role id {}", req.id),
                    Err(e) => error!("❌ Failed to update role from event: {e}"),
                },
                Err(e) => error!("❌ Invalid data for RolActualizado: {e}"),
            },

            RoleEventKind::Deleted => match serde_json::from_value::<DeleteRoleRequest>(data.clone())
            {
                Ok(req) => match self.command.delete(&req).await {
                    Ok(deletion) => info!(
                        "🗑️ Event deleted role id {}, {} users reassigned",
                        req.id, deletion.reassigned_users
                    ),
                    Err(e) => error!("❌ Failed to delete role from event: {e}"),
                },
                Err(e) => error!("❌ Invalid data for RolEliminado: {e}"),
            },
        }
    }
}
