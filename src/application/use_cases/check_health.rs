use std::sync::Arc;

use crate::domain::repositories::ConsultantRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub store_reachable: bool,
}

/// Round-trips a cheap count to the store.
pub struct CheckHealthUseCase {
    consultant_repository: Arc<dyn ConsultantRepository>,
}

impl CheckHealthUseCase {
    pub fn new(consultant_repository: Arc<dyn ConsultantRepository>) -> Self {
        Self {
            consultant_repository,
        }
    }

    pub async fn execute(&self) -> HealthReport {
        let store_reachable = match self.consultant_repository.count(false).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Store health check failed: {}", e);
                false
            }
        };

        HealthReport { store_reachable }
    }
}
