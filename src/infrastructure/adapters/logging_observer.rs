use crate::application::ports::{LoadUserFailureObserver, LoadUserSuccessObserver};
use crate::domain::entities::Principal;
use crate::domain::errors::{DomainError, ObserverError};
use async_trait::async_trait;
use tracing::{info, warn};

/// Success observer that records resolutions through the tracing subscriber
#[derive(Debug, Default)]
pub struct LoggingSuccessObserver {
    order: i32,
}

impl LoggingSuccessObserver {
    pub fn with_order(order: i32) -> Self {
        Self { order }
    }
}

#[async_trait]
impl LoadUserSuccessObserver for LoggingSuccessObserver {
    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &str {
        "logging-success-observer"
    }

    async fn on_success(&self, principal: &dyn Principal) -> Result<(), ObserverError> {
        info!(
            account = %principal.account(),
            user_id = principal.user_id(),
            domain = %principal.domain().code,
            authorities = principal.authorities().len(),
            "User resolved"
        );
        Ok(())
    }
}

/// Failure observer that records not-found resolutions through tracing
#[derive(Debug, Default)]
pub struct LoggingFailureObserver {
    order: i32,
}

impl LoggingFailureObserver {
    pub fn with_order(order: i32) -> Self {
        Self { order }
    }
}

#[async_trait]
impl LoadUserFailureObserver for LoggingFailureObserver {
    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &str {
        "logging-failure-observer"
    }

    async fn on_failure(
        &self,
        account: &str,
        tenancy_id: i64,
        error: &DomainError,
    ) -> Result<(), ObserverError> {
        warn!(account = %account, tenancy_id, "User resolution failed: {error}");
        Ok(())
    }
}
