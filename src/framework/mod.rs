//! Generic actor framework for keyed, task-owned stores.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stored types implement
//! - [`ResourceActor`] - Generic actor owning the store
//! - [`ResourceClient`] - Type-safe handle for sending requests
//! - [`FrameworkError`] - Channel errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
