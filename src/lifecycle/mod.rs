//! Runtime lifecycle and observability.
//!
//! - [`LifecycleComponent`] - start/stop contract for hosted components
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod component;
pub mod tracing;

pub use component::*;
pub use tracing::*;
