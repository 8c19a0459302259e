use crate::{
    abstract_trait::{DynHealthService, DynRoleCommandService, DynRoleQueryService},
    handler::validate::ValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Query, Request, rejection::QueryRejection},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use shared::{
    domain::{
        requests::{CreateRoleRequest, DeleteRoleRequest, UpdateRoleRequest},
        responses::{ListRolesResponse, MessageResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use tracing::warn;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/roles",
    tag = "Role",
    responses(
        (status = 200, description = "List of roles", body = ListRolesResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
        (status = 503, description = "Database unreachable", body = ErrorResponse)
    )
)]
pub async fn get_roles(
    Extension(service): Extension<DynRoleQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let roles = service.find_all().await?;

    Ok((StatusCode::OK, Json(ListRolesResponse { roles })))
}

#[utoipa::path(
    post,
    path = "/roles",
    tag = "Role",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = MessageResponse),
        (status = 400, description = "Missing or empty fields", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_role(
    Extension(service): Extension<DynRoleCommandService>,
    ValidatedJson(req): ValidatedJson<CreateRoleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.create(&req).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Rol creado exitosamente")),
    ))
}

#[utoipa::path(
    put,
    path = "/roles",
    tag = "Role",
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = MessageResponse),
        (status = 400, description = "Missing or empty fields", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn update_role(
    Extension(service): Extension<DynRoleCommandService>,
    ValidatedJson(req): ValidatedJson<UpdateRoleRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.update(&req).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Rol actualizado exitosamente")),
    ))
}

#[utoipa::path(
    delete,
    path = "/roles",
    tag = "Role",
    params(DeleteRoleRequest),
    responses(
        (status = 200, description = "Role deleted, dependents reassigned", body = MessageResponse),
        (status = 400, description = "Missing or invalid id", body = ErrorResponse),
        (status = 404, description = "Role not found", body = ErrorResponse),
        (status = 409, description = "Fallback role missing", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_role(
    Extension(service): Extension<DynRoleCommandService>,
    query: Result<Query<DeleteRoleRequest>, QueryRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Query(req) = query.map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

    service.delete(&req).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Rol eliminado exitosamente")),
    ))
}

/// Short-circuits with 503 when the connectivity probe fails; the operation
/// behind the route is never attempted.
pub async fn db_health_middleware(
    Extension(health): Extension<DynHealthService>,
    request: Request,
    next: Next,
) -> Response {
    if let Err(err) = health.ping().await {
        warn!("⚠️ Connectivity probe failed, rejecting request: {err}");
        return HttpError::ServiceUnavailable("Base de datos no disponible".into())
            .into_response();
    }

    next.run(request).await
}

pub fn roles_routes(state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/roles",
            get(get_roles)
                .post(create_role)
                .put(update_role)
                .delete(delete_role),
        )
        .route_layer(middleware::from_fn(db_health_middleware))
        .layer(Extension(state.di_container.role_query.clone()))
        .layer(Extension(state.di_container.role_command.clone()))
        .layer(Extension(state.di_container.health.clone()))
}
