use crate::application::ports::{
    LoadUserFailureObserver, LoadUserSuccessObserver, ResolverConfig, UserDirectory,
};
use crate::application::services::aggregation::{select_domains, DomainAggregator};
use crate::application::services::principal_factory::PrincipalFactory;
use crate::domain::entities::Principal;
use crate::domain::errors::{DomainError, DomainResult};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Orchestrates one identity resolution: validate input, fetch the raw user
/// detail from the directory, aggregate per-domain permissions, build the
/// principal and notify the matching delegate exactly once.
///
/// Resolutions are independent: the resolver holds only immutable state
/// after construction, so concurrent calls need no locking.
pub struct UserDetailResolver {
    directory: Arc<dyn UserDirectory>,
    config: ResolverConfig,
    factory: PrincipalFactory,
    success_delegate: Arc<dyn LoadUserSuccessObserver>,
    failure_delegate: Arc<dyn LoadUserFailureObserver>,
}

impl UserDetailResolver {
    /// Wire a resolver. Fails when the configuration is invalid (an unset
    /// current domain code is a deployment fault and must not wait for the
    /// first request to surface).
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        config: ResolverConfig,
        factory: PrincipalFactory,
        success_delegate: Arc<dyn LoadUserSuccessObserver>,
        failure_delegate: Arc<dyn LoadUserFailureObserver>,
    ) -> DomainResult<Self> {
        config.validate()?;

        Ok(Self {
            directory,
            config,
            factory,
            success_delegate,
            failure_delegate,
        })
    }

    /// Resolve the principal for one authentication attempt.
    ///
    /// Returns `UserNotFound` (after invoking the failure delegate once) for
    /// an empty account or a missing directory record. Directory transport
    /// errors propagate unchanged and trigger no delegate.
    #[instrument(skip(self), fields(account = %account, tenancy_id = tenancy_id))]
    pub async fn load_user_by_username(
        &self,
        account: &str,
        tenancy_id: i64,
    ) -> DomainResult<Box<dyn Principal>> {
        if account.is_empty() {
            return Err(self.fail_not_found(account, tenancy_id).await);
        }

        let detail = self
            .directory
            .fetch_user_detail(account, tenancy_id)
            .await?;

        let detail = match detail {
            Some(detail) => detail,
            None => return Err(self.fail_not_found(account, tenancy_id).await),
        };

        let selected = select_domains(
            &detail.domains,
            &self.config.current_domain_code,
            self.config.share_all_domains,
        );
        let views = DomainAggregator::aggregate(account, &detail.user, &selected);

        let principal = self.factory.build(
            &self.config.current_domain_code,
            views,
            self.config.principal_kind.as_deref(),
            account,
            &detail.user,
        );

        info!(
            user_id = principal.user_id(),
            authorities = principal.authorities().len(),
            domain = %principal.domain().code,
            "Resolved principal"
        );

        if let Err(e) = self.success_delegate.on_success(principal.as_ref()).await {
            warn!("Success delegate failed: {e}");
        }

        Ok(principal)
    }

    /// Invoke the failure delegate once and produce the not-found error
    async fn fail_not_found(&self, account: &str, tenancy_id: i64) -> DomainError {
        let error = DomainError::UserNotFound {
            account: account.to_string(),
            tenancy_id,
        };

        info!("Resolution failed: {error}");

        if let Err(e) = self
            .failure_delegate
            .on_failure(account, tenancy_id, &error)
            .await
        {
            warn!("Failure delegate failed: {e}");
        }

        error
    }
}
