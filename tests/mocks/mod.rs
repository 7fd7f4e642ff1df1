#![allow(dead_code)]

use async_trait::async_trait;
use identity_domain::{
    application::ports::{
        LoadUserFailureObserver, LoadUserSuccessObserver, PrincipalBuilder, PrincipalEnricher,
    },
    domain::{
        entities::{Domain, DomainPrincipalView, PermissionMap, PermissionObject, Principal, UserIdentity},
        errors::{DomainError, ObserverError, PrincipalError},
    },
};
use std::any::Any;
use std::sync::{Arc, Mutex};

/// Success observer that records every invocation
pub struct RecordingSuccessObserver {
    pub order: i32,
    pub label: &'static str,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingSuccessObserver {
    pub fn new(label: &'static str, order: i32) -> Self {
        Self {
            order,
            label,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LoadUserSuccessObserver for RecordingSuccessObserver {
    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &str {
        self.label
    }

    async fn on_success(&self, principal: &dyn Principal) -> Result<(), ObserverError> {
        self.calls
            .lock()
            .unwrap()
            .push(principal.account().to_string());
        Ok(())
    }
}

/// Failure observer that records (account, tenancy, not-found?) triples
pub struct RecordingFailureObserver {
    pub order: i32,
    pub label: &'static str,
    pub calls: Arc<Mutex<Vec<(String, i64, bool)>>>,
}

impl RecordingFailureObserver {
    pub fn new(label: &'static str, order: i32) -> Self {
        Self {
            order,
            label,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LoadUserFailureObserver for RecordingFailureObserver {
    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &str {
        self.label
    }

    async fn on_failure(
        &self,
        account: &str,
        tenancy_id: i64,
        error: &DomainError,
    ) -> Result<(), ObserverError> {
        self.calls
            .lock()
            .unwrap()
            .push((account.to_string(), tenancy_id, error.is_not_found()));
        Ok(())
    }
}

/// Success observer that always fails, for continue-past-failure tests
pub struct FailingSuccessObserver {
    pub order: i32,
}

#[async_trait]
impl LoadUserSuccessObserver for FailingSuccessObserver {
    fn order(&self) -> i32 {
        self.order
    }

    fn name(&self) -> &str {
        "failing-success-observer"
    }

    async fn on_success(&self, _principal: &dyn Principal) -> Result<(), ObserverError> {
        Err(ObserverError::HandlingFailed {
            name: "failing-success-observer".to_string(),
            message: "always fails".to_string(),
        })
    }
}

/// Deployment-specific principal used to exercise the custom-kind path.
///
/// Carries a mutable `title` the enricher fills in.
#[derive(Debug)]
pub struct TitledPrincipal {
    pub view: DomainPrincipalView,
    pub title: Option<String>,
}

impl Principal for TitledPrincipal {
    fn account(&self) -> &str {
        &self.view.account
    }

    fn credential(&self) -> &str {
        &self.view.credential
    }

    fn is_enabled(&self) -> bool {
        self.view.enabled
    }

    fn is_account_non_expired(&self) -> bool {
        self.view.account_non_expired
    }

    fn is_credentials_non_expired(&self) -> bool {
        self.view.credentials_non_expired
    }

    fn is_account_non_locked(&self) -> bool {
        self.view.account_non_locked
    }

    fn authorities(&self) -> &[String] {
        &self.view.authorities
    }

    fn user_id(&self) -> i64 {
        self.view.user_id
    }

    fn identity(&self) -> &UserIdentity {
        &self.view.user
    }

    fn domain(&self) -> &Domain {
        &self.view.domain
    }

    fn permissions(&self) -> &PermissionMap<String> {
        &self.view.perm_map
    }

    fn permission_details(&self) -> &PermissionMap<PermissionObject> {
        &self.view.perm_detail_map
    }

    fn view_for_domain(&self, domain_code: &str) -> Option<&DomainPrincipalView> {
        (self.view.domain.code == domain_code).then_some(&self.view)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Builder for [`TitledPrincipal`]
pub struct TitledPrincipalBuilder;

impl PrincipalBuilder for TitledPrincipalBuilder {
    fn build(&self, view: &DomainPrincipalView) -> Result<Box<dyn Principal>, PrincipalError> {
        Ok(Box::new(TitledPrincipal {
            view: view.clone(),
            title: None,
        }))
    }
}

/// Builder that always rejects the view
pub struct FailingPrincipalBuilder;

impl PrincipalBuilder for FailingPrincipalBuilder {
    fn build(&self, _view: &DomainPrincipalView) -> Result<Box<dyn Principal>, PrincipalError> {
        Err(PrincipalError::BuildFailed {
            kind: "failing".to_string(),
            message: "constructor shape mismatch".to_string(),
        })
    }
}

/// Enricher that sets the title on a [`TitledPrincipal`]
pub struct TitleEnricher {
    pub title: &'static str,
}

impl PrincipalEnricher for TitleEnricher {
    fn enrich(&self, principal: &mut dyn Principal) -> Result<(), PrincipalError> {
        match principal.as_any_mut().downcast_mut::<TitledPrincipal>() {
            Some(titled) => {
                titled.title = Some(self.title.to_string());
                Ok(())
            }
            None => Err(PrincipalError::EnrichmentFailed {
                kind: "titled".to_string(),
                message: "unexpected principal type".to_string(),
            }),
        }
    }
}

/// Enricher that always fails
pub struct FailingEnricher;

impl PrincipalEnricher for FailingEnricher {
    fn enrich(&self, _principal: &mut dyn Principal) -> Result<(), PrincipalError> {
        Err(PrincipalError::EnrichmentFailed {
            kind: "titled".to_string(),
            message: "enrichment exploded".to_string(),
        })
    }
}
