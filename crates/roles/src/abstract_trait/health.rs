use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

/// Connectivity probe run before every HTTP operation.
#[async_trait]
pub trait HealthServiceTrait {
    async fn ping(&self) -> Result<(), ServiceError>;
}
