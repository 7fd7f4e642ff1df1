use crate::domain::entities::Principal;
use crate::domain::errors::{DomainError, ObserverError};
use async_trait::async_trait;

/// Observer invoked after a resolution produced a principal.
///
/// Observers carry an explicit ordering value; lower values run first, ties
/// break by registration order. Deployments register observers explicitly at
/// startup through the
/// [`NotificationChainBuilder`](crate::infrastructure::adapters::NotificationChainBuilder).
#[async_trait]
pub trait LoadUserSuccessObserver: Send + Sync {
    /// Explicit ordering value; lower runs first
    fn order(&self) -> i32 {
        0
    }

    /// Name used when a failure of this observer is logged
    fn name(&self) -> &str {
        "success-observer"
    }

    async fn on_success(&self, principal: &dyn Principal) -> Result<(), ObserverError>;
}

/// Observer invoked when a resolution fails on one of the two not-found
/// conditions (empty account, or no directory record).
#[async_trait]
pub trait LoadUserFailureObserver: Send + Sync {
    /// Explicit ordering value; lower runs first
    fn order(&self) -> i32 {
        0
    }

    /// Name used when a failure of this observer is logged
    fn name(&self) -> &str {
        "failure-observer"
    }

    async fn on_failure(
        &self,
        account: &str,
        tenancy_id: i64,
        error: &DomainError,
    ) -> Result<(), ObserverError>;
}
