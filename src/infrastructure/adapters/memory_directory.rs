use crate::application::ports::UserDirectory;
use crate::domain::entities::UserDetail;
use crate::domain::errors::DirectoryError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory user directory for development and testing.
///
/// Records are keyed by (account, tenancy id); a failure switch lets tests
/// exercise the transport-error path.
pub struct InMemoryDirectory {
    records: RwLock<HashMap<(String, i64), UserDetail>>,
    should_fail: RwLock<bool>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            should_fail: RwLock::new(false),
        }
    }

    /// Store a detail record for one (account, tenancy) pair
    pub async fn insert(&self, account: impl Into<String>, tenancy_id: i64, detail: UserDetail) {
        self.records
            .write()
            .await
            .insert((account.into(), tenancy_id), detail);
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

impl Default for InMemoryDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn fetch_user_detail(
        &self,
        account: &str,
        tenancy_id: i64,
    ) -> Result<Option<UserDetail>, DirectoryError> {
        if *self.should_fail.read().await {
            return Err(DirectoryError::RemoteFault {
                message: "In-memory directory failure enabled".to_string(),
            });
        }

        let records = self.records.read().await;
        Ok(records.get(&(account.to_string(), tenancy_id)).cloned())
    }
}
