use crate::application::ports::{LoadUserFailureObserver, LoadUserSuccessObserver};
use crate::domain::entities::Principal;
use crate::domain::errors::{DomainError, ObserverError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Composite success observer fanning out to an ordered member list.
///
/// Members run ascending by `order()`; ties keep registration order (stable
/// sort). A failing member is logged and does not stop the rest.
pub struct CompositeSuccessObserver {
    members: Vec<Arc<dyn LoadUserSuccessObserver>>,
}

#[async_trait]
impl LoadUserSuccessObserver for CompositeSuccessObserver {
    fn name(&self) -> &str {
        "composite-success-observer"
    }

    async fn on_success(&self, principal: &dyn Principal) -> Result<(), ObserverError> {
        for member in &self.members {
            if let Err(e) = member.on_success(principal).await {
                warn!(observer = member.name(), "Success observer failed: {e}");
            }
        }
        Ok(())
    }
}

/// Composite failure observer fanning out to an ordered member list
pub struct CompositeFailureObserver {
    members: Vec<Arc<dyn LoadUserFailureObserver>>,
}

#[async_trait]
impl LoadUserFailureObserver for CompositeFailureObserver {
    fn name(&self) -> &str {
        "composite-failure-observer"
    }

    async fn on_failure(
        &self,
        account: &str,
        tenancy_id: i64,
        error: &DomainError,
    ) -> Result<(), ObserverError> {
        for member in &self.members {
            if let Err(e) = member.on_failure(account, tenancy_id, error).await {
                warn!(observer = member.name(), "Failure observer failed: {e}");
            }
        }
        Ok(())
    }
}

/// Builds the two composite delegates once at subsystem initialization.
///
/// Observers are supplied explicitly at construction time; each group is
/// stably sorted by its ordering value and wrapped into one composite that
/// the resolver invokes exactly once per resolution. An empty group yields a
/// legal no-op composite.
#[derive(Default)]
pub struct NotificationChainBuilder {
    success: Vec<Arc<dyn LoadUserSuccessObserver>>,
    failure: Vec<Arc<dyn LoadUserFailureObserver>>,
}

impl NotificationChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_success(mut self, observer: Arc<dyn LoadUserSuccessObserver>) -> Self {
        self.success.push(observer);
        self
    }

    pub fn on_failure(mut self, observer: Arc<dyn LoadUserFailureObserver>) -> Self {
        self.failure.push(observer);
        self
    }

    pub fn build(self) -> (CompositeSuccessObserver, CompositeFailureObserver) {
        let mut success = self.success;
        success.sort_by_key(|o| o.order());

        let mut failure = self.failure;
        failure.sort_by_key(|o| o.order());

        (
            CompositeSuccessObserver { members: success },
            CompositeFailureObserver { members: failure },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        label: &'static str,
        order: i32,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl LoadUserSuccessObserver for Recording {
        fn order(&self) -> i32 {
            self.order
        }

        fn name(&self) -> &str {
            self.label
        }

        async fn on_success(&self, _principal: &dyn Principal) -> Result<(), ObserverError> {
            self.log.lock().unwrap().push(self.label);
            Ok(())
        }
    }

    fn observer(
        label: &'static str,
        order: i32,
        log: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn LoadUserSuccessObserver> {
        Arc::new(Recording {
            label,
            order,
            log: log.clone(),
        })
    }

    fn principal() -> impl Principal {
        use crate::domain::entities::{DefaultPrincipal, DomainPrincipalView, UserIdentity};
        use std::collections::HashMap;

        let view = DomainPrincipalView::static_placeholder("alice", UserIdentity::new(1, "alice"));
        DefaultPrincipal::new(view, HashMap::new())
    }

    #[tokio::test]
    async fn members_run_ascending_by_order_with_stable_ties() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (chain, _) = NotificationChainBuilder::new()
            .on_success(observer("b", 10, &log))
            .on_success(observer("a", 0, &log))
            .on_success(observer("c", 10, &log))
            .build();

        chain.on_success(&principal()).await.unwrap();

        assert_eq!(*log.lock().unwrap(), ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn empty_chain_is_a_no_op() {
        let (chain, _) = NotificationChainBuilder::new().build();
        assert!(chain.on_success(&principal()).await.is_ok());
    }
}
