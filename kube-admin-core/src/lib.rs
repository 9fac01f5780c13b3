//! kube-admin Core Library
//!
//! Provides the cluster-facing half of the kube-admin console:
//! - Remote client abstraction (`RemoteClient`) over typed cluster resources
//! - Dependency graph rendering (`GraphRenderer`)
//! - Health and resource-usage report builders
//!
//! The library knows nothing about terminals. Cluster access is abstracted
//! through traits, with a kube-rs backed implementation behind the
//! `kube-client` feature.

#[cfg(feature = "kube-client")]
pub mod adapters;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use traits::{GraphRenderer, RemoteClient};
pub use types::{ResourceKind, ResourceRef, ResourceSpec};
