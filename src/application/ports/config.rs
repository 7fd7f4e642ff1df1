use crate::domain::errors::{ConfigError, DomainResult};
use serde::{Deserialize, Serialize};

/// Configuration for one resolver deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Domain code of the calling deployment. Required, non-empty.
    pub current_domain_code: String,
    /// When true, aggregation covers every domain the user belongs to
    /// instead of only the current one.
    pub share_all_domains: bool,
    /// Registry key of a custom principal implementation; `None` selects the
    /// default principal.
    pub principal_kind: Option<String>,
}

impl ResolverConfig {
    pub fn new(current_domain_code: impl Into<String>) -> Self {
        Self {
            current_domain_code: current_domain_code.into(),
            share_all_domains: false,
            principal_kind: None,
        }
    }

    pub fn with_share_all_domains(mut self, share: bool) -> Self {
        self.share_all_domains = share;
        self
    }

    pub fn with_principal_kind(mut self, kind: impl Into<String>) -> Self {
        self.principal_kind = Some(kind.into());
        self
    }

    /// An unset current domain code is a deployment fault, not a per-request
    /// condition; it must fail loudly before any resolution runs.
    pub fn validate(&self) -> DomainResult<()> {
        if self.current_domain_code.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "IDENTITY_DOMAIN_CODE".to_string(),
            }
            .into());
        }

        if let Some(ref kind) = self.principal_kind {
            if kind.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: "IDENTITY_PRINCIPAL_KIND".to_string(),
                    message: "Must be non-empty when set".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> DomainResult<Self> {
        use std::env;

        let config = Self {
            current_domain_code: env::var("IDENTITY_DOMAIN_CODE").map_err(|_| {
                ConfigError::MissingRequired {
                    key: "IDENTITY_DOMAIN_CODE".to_string(),
                }
            })?,
            share_all_domains: env::var("IDENTITY_SHARE_ALL_DOMAINS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            principal_kind: env::var("IDENTITY_PRINCIPAL_KIND")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        };

        config.validate()?;
        Ok(config)
    }
}
