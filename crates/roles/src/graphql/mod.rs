use crate::abstract_trait::DynRoleQueryService;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema,
    SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use shared::domain::responses::RoleResponse;

pub type RolesSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// GraphQL shape of a role, exposed with the Spanish wire field names.
#[derive(SimpleObject)]
#[graphql(name = "Rol")]
pub struct Rol {
    pub id: i32,
    pub nombre: String,
    pub descripcion: String,
}

impl From<RoleResponse> for Rol {
    fn from(value: RoleResponse) -> Self {
        Rol {
            id: value.id,
            nombre: value.name,
            descripcion: value.description,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All roles in the catalog. No filtering or pagination.
    async fn roles(&self, ctx: &Context<'_>) -> Result<Vec<Rol>> {
        let service = ctx.data_unchecked::<DynRoleQueryService>();

        let roles = service
            .find_all()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(roles.into_iter().map(Rol::from).collect())
    }
}

pub fn build_schema(role_query: DynRoleQueryService) -> RolesSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(role_query)
        .finish()
}

pub async fn graphql_handler(
    Extension(schema): Extension<RolesSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
