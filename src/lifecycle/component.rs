//! # Lifecycle Components
//!
//! Anything the host starts and stops. A component is created idle, becomes
//! usable after [`LifecycleComponent::start`] and releases what it holds in
//! [`LifecycleComponent::stop`].

use async_trait::async_trait;
use std::fmt;

/// Role of a component within the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleComponentType {
    AssetModule,
}

impl fmt::Display for LifecycleComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleComponentType::AssetModule => f.write_str("Asset Module"),
        }
    }
}

#[async_trait]
pub trait LifecycleComponent: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    fn component_type(&self) -> LifecycleComponentType;

    async fn start(&mut self) -> Result<(), Self::Error>;

    async fn stop(&mut self) -> Result<(), Self::Error>;
}
