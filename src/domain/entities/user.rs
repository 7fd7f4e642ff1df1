use super::domain::Domain;
use serde::{Deserialize, Serialize};

/// Identity of an authenticated user as known by the remote directory.
///
/// Read-only snapshot; fetched fresh for every resolution and never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    pub account: String,
}

impl UserIdentity {
    pub fn new(id: i64, account: impl Into<String>) -> Self {
        Self {
            id,
            account: account.into(),
        }
    }
}

/// Full detail record returned by the directory for one (account, tenancy)
/// lookup: the user's identity plus every domain membership it carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    pub user: UserIdentity,
    pub domains: Vec<Domain>,
}

impl UserDetail {
    pub fn new(user: UserIdentity) -> Self {
        Self {
            user,
            domains: Vec::new(),
        }
    }

    pub fn with_domains(mut self, domains: Vec<Domain>) -> Self {
        self.domains = domains;
        self
    }
}
