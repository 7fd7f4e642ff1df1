use crate::domain::entities::UserDetail;
use crate::domain::errors::DirectoryError;
use async_trait::async_trait;

/// Port to the remote user directory.
///
/// The transport behind this trait (and any retry policy) is owned by the
/// adapter; this core awaits the call, treats `None` as user-not-found and
/// propagates transport errors unchanged.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full user detail for one (account, tenancy) pair.
    ///
    /// Returns `Ok(None)` when the directory holds no record for the pair.
    async fn fetch_user_detail(
        &self,
        account: &str,
        tenancy_id: i64,
    ) -> Result<Option<UserDetail>, DirectoryError>;
}
