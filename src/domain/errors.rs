use thiserror::Error;

/// Domain-specific errors for identity resolution
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {account} (tenancy {tenancy_id})")]
    UserNotFound { account: String, tenancy_id: i64 },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Directory error: {message}")]
    Directory { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },
}

impl DomainError {
    /// True for the two conditions that trigger the failure delegate
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::UserNotFound { .. })
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors raised by the remote user directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Connection failed: {message}")]
    ConnectionFailed { message: String },

    #[error("Remote fault: {message}")]
    RemoteFault { message: String },

    #[error("Timeout after {seconds} seconds")]
    Timeout { seconds: u64 },
}

impl From<DirectoryError> for DomainError {
    fn from(err: DirectoryError) -> Self {
        DomainError::Directory {
            message: err.to_string(),
        }
    }
}

/// Errors raised while constructing a configured custom principal.
///
/// These never reach the resolver's caller; the principal factory logs them
/// and falls back to the default principal.
#[derive(Error, Debug)]
pub enum PrincipalError {
    #[error("No principal builder registered for kind '{kind}'")]
    UnknownKind { kind: String },

    #[error("Principal builder for kind '{kind}' failed: {message}")]
    BuildFailed { kind: String, message: String },

    #[error("Enrichment hook failed for kind '{kind}': {message}")]
    EnrichmentFailed { kind: String, message: String },
}

/// Errors raised by resolution observers
#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("Observer '{name}' failed: {message}")]
    HandlingFailed { name: String, message: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::MissingRequired { key } => DomainError::Configuration {
                message: format!("Missing required configuration: {key}"),
            },
            ConfigError::InvalidValue { key, message } => DomainError::Configuration {
                message: format!("Invalid value for {key}: {message}"),
            },
        }
    }
}
