use crate::domain::entities::{Domain, DomainPrincipalView, PermissionMap, UserIdentity};
use crate::domain::permissions::merge_permission_map;
use std::collections::HashMap;
use tracing::debug;

/// Decide which of the user's domains feed aggregation.
///
/// With `share_all` off, the scan stops at the first domain whose code
/// equals `current_code` — a deliberate single-match short-circuit, not a
/// filter. Duplicate domain codes per user are assumed not to occur in the
/// directory's data; if they did, only the first occurrence would be seen.
/// With `share_all` on, every domain is selected in order, unmodified.
pub fn select_domains<'a>(
    domains: &'a [Domain],
    current_code: &str,
    share_all: bool,
) -> Vec<&'a Domain> {
    if share_all {
        return domains.iter().collect();
    }

    for domain in domains {
        if domain.code == current_code {
            return vec![domain];
        }
    }

    Vec::new()
}

/// Aggregates each selected domain's roles into one per-domain principal
/// view: an authority entry per role code and both permission mappings
/// merged with union semantics.
pub struct DomainAggregator;

impl DomainAggregator {
    /// Produce one view per selected domain, keyed by domain code.
    pub fn aggregate(
        account: &str,
        user: &UserIdentity,
        selected: &[&Domain],
    ) -> HashMap<String, DomainPrincipalView> {
        let mut views = HashMap::new();

        for domain in selected {
            let mut authorities = Vec::new();
            let mut perm_map = PermissionMap::new();
            let mut perm_detail_map = PermissionMap::new();

            for role in &domain.roles {
                authorities.push(role.code.clone());
                merge_permission_map(&mut perm_map, &role.perm_map);
                merge_permission_map(&mut perm_detail_map, &role.perm_detail_map);
            }

            debug!(
                domain = %domain.code,
                roles = domain.roles.len(),
                permission_types = perm_map.len(),
                "Aggregated domain view"
            );

            let view = DomainPrincipalView::new(
                account,
                user.clone(),
                (*domain).clone(),
                authorities,
                perm_map,
                perm_detail_map,
            );
            views.insert(domain.code.clone(), view);
        }

        views
    }
}
