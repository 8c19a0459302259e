mod role;
mod validate;

use crate::graphql::{build_schema, graphql_handler};
use crate::state::AppState;
use anyhow::{Context, Result};
use axum::{Extension, Router, routing::post};
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::role::roles_routes;
pub use self::validate::ValidatedJson;

#[derive(OpenApi)]
#[openapi(
    paths(
        role::get_roles,
        role::create_role,
        role::update_role,
        role::delete_role,
    ),
    tags(
        (name = "Role", description = "Veterinary role catalog endpoints"),
    )
)]
struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    /// Builds the full application router; exposed separately from `serve`
    /// so tests can drive it without binding a socket.
    pub fn build(state: Arc<AppState>) -> Router {
        let schema = build_schema(state.di_container.role_query.clone());

        let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(roles_routes(state))
            .split_for_parts();

        router
            .route("/graphql", post(graphql_handler))
            .layer(Extension(schema))
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
    }

    pub async fn serve(port: u16, state: Arc<AppState>) -> Result<()> {
        let app = Self::build(state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("📡 HTTP server listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        Ok(())
    }
}
