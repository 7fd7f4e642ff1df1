/*!
# Identity Domain

Multi-tenant identity resolution and permission aggregation, using hexagonal
architecture principles.

Given an authenticated account and tenancy, this crate resolves a single
consumable principal for the caller's domain: it fetches the raw user detail
from a remote directory, selects which domain memberships are authoritative
(current-domain-only or share-all mode), merges per-role permission mappings
with union semantics, and runs ordered notification chains on success or
failure.

## Architecture

```text
┌─────────────────────────────────────────────────────────┐
│                Application Layer                        │
│  • UserDetailResolver     • PrincipalFactory            │
│  • DomainAggregator       • domain selection policy     │
├─────────────────────────────────────────────────────────┤
│                Domain Layer (Ports)                     │
│  • UserDirectory          • PrincipalBuilder/Enricher   │
│  • success/failure observers                            │
├─────────────────────────────────────────────────────────┤
│           Infrastructure Layer (Adapters)               │
│  • NotificationChainBuilder (composite delegates)       │
│  • InMemoryDirectory      • logging observers           │
└─────────────────────────────────────────────────────────┘
```

## Usage

```rust,no_run
use std::sync::Arc;
use identity_domain::{
    application::ports::{PrincipalRegistry, ResolverConfig},
    application::services::{PrincipalFactory, UserDetailResolver},
    infrastructure::adapters::{InMemoryDirectory, NotificationChainBuilder},
};

# async fn wire() -> identity_domain::domain::errors::DomainResult<()> {
let (success, failure) = NotificationChainBuilder::new().build();
let resolver = UserDetailResolver::new(
    Arc::new(InMemoryDirectory::new()),
    ResolverConfig::new("techops"),
    PrincipalFactory::new(PrincipalRegistry::new(), None),
    Arc::new(success),
    Arc::new(failure),
)?;

let _principal = resolver.load_user_by_username("alice", 1).await?;
# Ok(())
# }
```
*/

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::ports::*;
pub use application::services::*;
pub use domain::entities::*;
pub use domain::errors::*;
pub use domain::permissions::merge_permission_map;
