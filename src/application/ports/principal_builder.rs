use crate::domain::entities::{DomainPrincipalView, Principal};
use crate::domain::errors::PrincipalError;
use std::collections::HashMap;
use std::sync::Arc;

/// Port for deployment-specific principal implementations.
///
/// A deployment registers one builder per principal kind; configuration then
/// selects a kind by key. This replaces runtime type lookup with explicit
/// registration, so a missing implementation surfaces at wiring time or as a
/// contained [`PrincipalError::UnknownKind`].
pub trait PrincipalBuilder: Send + Sync {
    /// Build a principal from the current domain's view.
    ///
    /// The builder receives the same record the default principal is built
    /// from: account, credential, status flags, authorities, user id,
    /// identity, domain and both permission mappings.
    fn build(&self, view: &DomainPrincipalView) -> Result<Box<dyn Principal>, PrincipalError>;
}

/// Hook run after a custom principal was built, for in-place enrichment.
///
/// Implementations reach their concrete principal type through
/// [`Principal::as_any_mut`].
pub trait PrincipalEnricher: Send + Sync {
    fn enrich(&self, principal: &mut dyn Principal) -> Result<(), PrincipalError>;
}

/// Registry of principal builders keyed by configured kind
#[derive(Default, Clone)]
pub struct PrincipalRegistry {
    builders: HashMap<String, Arc<dyn PrincipalBuilder>>,
}

impl PrincipalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a builder under a kind key, replacing any previous one
    pub fn register(mut self, kind: impl Into<String>, builder: Arc<dyn PrincipalBuilder>) -> Self {
        self.builders.insert(kind.into(), builder);
        self
    }

    pub fn get(&self, kind: &str) -> Option<&Arc<dyn PrincipalBuilder>> {
        self.builders.get(kind)
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}
