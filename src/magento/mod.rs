//! # Magento asset module
//!
//! Loads the Magento product catalog over SOAP and serves it as hardware assets.
//!
//! ## Loading
//!
//! 1. Log in with the configured API user.
//! 2. List the attribute sets and, concurrently, the attribute codes of each set.
//! 3. List the products and, concurrently, fetch each product with every attribute
//!    of its set plus its first image.
//! 4. Store the resulting assets in the cache actor.
//!
//! Concurrency is bounded by [`MagentoConfig::workers`]. Any failed call fails the
//! whole load; a refresh reports that failure in its [`CommandResponse`](crate::asset::CommandResponse).

pub mod config;
pub mod error;
pub mod fields;
pub mod loader;
pub mod module;

pub use config::*;
pub use error::*;
pub use module::*;
