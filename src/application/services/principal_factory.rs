use crate::application::ports::{PrincipalEnricher, PrincipalRegistry};
use crate::domain::entities::{
    DefaultPrincipal, DomainPrincipalView, Principal, UserIdentity,
};
use crate::domain::errors::PrincipalError;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error};

/// Builds the final principal from the aggregated per-domain views.
///
/// Construction never fails to the caller: when a configured custom
/// principal cannot be produced, the failure is logged and the default
/// principal is returned instead.
pub struct PrincipalFactory {
    registry: PrincipalRegistry,
    enricher: Option<Arc<dyn PrincipalEnricher>>,
}

impl PrincipalFactory {
    pub fn new(registry: PrincipalRegistry, enricher: Option<Arc<dyn PrincipalEnricher>>) -> Self {
        Self { registry, enricher }
    }

    /// Assemble the principal for `current_domain_code`.
    ///
    /// When the current domain has no aggregated view, a synthetic
    /// static-domain view with empty authorities and permissions is inserted
    /// under the real current domain code first.
    pub fn build(
        &self,
        current_domain_code: &str,
        mut views: HashMap<String, DomainPrincipalView>,
        principal_kind: Option<&str>,
        account: &str,
        user: &UserIdentity,
    ) -> Box<dyn Principal> {
        let current = match views.get(current_domain_code) {
            Some(view) => view.clone(),
            None => {
                debug!(
                    domain = %current_domain_code,
                    "No view for current domain, synthesizing static placeholder"
                );
                let placeholder = DomainPrincipalView::static_placeholder(account, user.clone());
                views.insert(current_domain_code.to_string(), placeholder.clone());
                placeholder
            }
        };

        let kind = match principal_kind {
            Some(k) if !k.trim().is_empty() => k,
            _ => return Box::new(DefaultPrincipal::new(current, views)),
        };

        match self.build_custom(kind, &current) {
            Ok(principal) => principal,
            Err(e) => {
                error!(
                    kind = %kind,
                    "Falling back to the default principal instead of the configured \
                     custom one, possible reasons: (1) no builder registered for the \
                     kind, (2) the builder rejected the view, (3) the enrichment hook \
                     failed: {e}"
                );
                Box::new(DefaultPrincipal::new(current, views))
            }
        }
    }

    fn build_custom(
        &self,
        kind: &str,
        view: &DomainPrincipalView,
    ) -> Result<Box<dyn Principal>, PrincipalError> {
        let builder = self
            .registry
            .get(kind)
            .ok_or_else(|| PrincipalError::UnknownKind {
                kind: kind.to_string(),
            })?;

        let mut principal = builder.build(view)?;

        if let Some(ref enricher) = self.enricher {
            enricher.enrich(principal.as_mut())?;
        }

        Ok(principal)
    }
}
