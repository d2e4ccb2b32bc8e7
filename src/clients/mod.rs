//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod asset_cache_client;

pub use actor_client::*;
pub use asset_cache_client::*;
