use super::domain::{Domain, PermissionMap, PermissionObject};
use super::user::UserIdentity;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::collections::HashMap;

/// Credential placeholder stored on every view.
///
/// Authentication happens upstream; the resolved principal never carries a
/// real secret.
pub const PLACEHOLDER_CREDENTIAL: &str = "fake_password";

/// Reserved domain code for the synthetic view used when the current domain
/// has no data for the user. The synthesized view itself is keyed under the
/// real current domain code; only its embedded `Domain` carries this code.
pub const STATIC_DOMAIN_CODE: &str = "static_domain";

/// Per-domain materialized record of a user's access rights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainPrincipalView {
    pub account: String,
    pub credential: String,
    pub enabled: bool,
    pub account_non_expired: bool,
    pub credentials_non_expired: bool,
    pub account_non_locked: bool,
    pub authorities: Vec<String>,
    pub user_id: i64,
    pub user: UserIdentity,
    pub domain: Domain,
    pub perm_map: PermissionMap<String>,
    pub perm_detail_map: PermissionMap<PermissionObject>,
}

impl DomainPrincipalView {
    /// Build a view for one aggregated domain. All account-status flags
    /// default to active/unlocked.
    pub fn new(
        account: impl Into<String>,
        user: UserIdentity,
        domain: Domain,
        authorities: Vec<String>,
        perm_map: PermissionMap<String>,
        perm_detail_map: PermissionMap<PermissionObject>,
    ) -> Self {
        Self {
            account: account.into(),
            credential: PLACEHOLDER_CREDENTIAL.to_string(),
            enabled: true,
            account_non_expired: true,
            credentials_non_expired: true,
            account_non_locked: true,
            authorities,
            user_id: user.id,
            user,
            domain,
            perm_map,
            perm_detail_map,
        }
    }

    /// Build the synthetic view used when the current domain carries no data:
    /// empty authorities, empty permission mappings, static placeholder domain.
    pub fn static_placeholder(account: impl Into<String>, user: UserIdentity) -> Self {
        Self::new(
            account,
            user,
            Domain::new(STATIC_DOMAIN_CODE),
            Vec::new(),
            PermissionMap::new(),
            PermissionMap::new(),
        )
    }
}

/// The resolved identity object consumed by downstream authorization checks.
///
/// A deployment may substitute its own implementation (registered through a
/// [`PrincipalBuilder`](crate::application::ports::principal_builder::PrincipalBuilder))
/// as long as it satisfies this capability set. `as_any_mut` is the seam an
/// enrichment hook uses to reach the concrete type.
pub trait Principal: Send + Sync + std::fmt::Debug {
    fn account(&self) -> &str;
    fn credential(&self) -> &str;
    fn is_enabled(&self) -> bool;
    fn is_account_non_expired(&self) -> bool;
    fn is_credentials_non_expired(&self) -> bool;
    fn is_account_non_locked(&self) -> bool;
    fn authorities(&self) -> &[String];
    fn user_id(&self) -> i64;
    fn identity(&self) -> &UserIdentity;
    fn domain(&self) -> &Domain;
    fn permissions(&self) -> &PermissionMap<String>;
    fn permission_details(&self) -> &PermissionMap<PermissionObject>;

    /// View for another domain the user was aggregated under, for callers
    /// switching tenancy without re-authentication. Implementations that do
    /// not retain the full mapping may serve only the current domain.
    fn view_for_domain(&self, domain_code: &str) -> Option<&DomainPrincipalView>;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Check whether an authority (role code) was granted
    fn has_authority(&self, authority: &str) -> bool {
        self.authorities().iter().any(|a| a == authority)
    }
}

/// Default principal implementation: the current domain's view plus the full
/// per-domain mapping produced by aggregation.
#[derive(Debug, Clone)]
pub struct DefaultPrincipal {
    current: DomainPrincipalView,
    views: HashMap<String, DomainPrincipalView>,
}

impl DefaultPrincipal {
    pub fn new(current: DomainPrincipalView, views: HashMap<String, DomainPrincipalView>) -> Self {
        Self { current, views }
    }

    pub fn current_view(&self) -> &DomainPrincipalView {
        &self.current
    }

    pub fn domain_views(&self) -> &HashMap<String, DomainPrincipalView> {
        &self.views
    }
}

impl Principal for DefaultPrincipal {
    fn account(&self) -> &str {
        &self.current.account
    }

    fn credential(&self) -> &str {
        &self.current.credential
    }

    fn is_enabled(&self) -> bool {
        self.current.enabled
    }

    fn is_account_non_expired(&self) -> bool {
        self.current.account_non_expired
    }

    fn is_credentials_non_expired(&self) -> bool {
        self.current.credentials_non_expired
    }

    fn is_account_non_locked(&self) -> bool {
        self.current.account_non_locked
    }

    fn authorities(&self) -> &[String] {
        &self.current.authorities
    }

    fn user_id(&self) -> i64 {
        self.current.user_id
    }

    fn identity(&self) -> &UserIdentity {
        &self.current.user
    }

    fn domain(&self) -> &Domain {
        &self.current.domain
    }

    fn permissions(&self) -> &PermissionMap<String> {
        &self.current.perm_map
    }

    fn permission_details(&self) -> &PermissionMap<PermissionObject> {
        &self.current.perm_detail_map
    }

    fn view_for_domain(&self, domain_code: &str) -> Option<&DomainPrincipalView> {
        self.views.get(domain_code)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
