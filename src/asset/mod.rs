//! # Assets
//!
//! The records an asset module serves and the contract it serves them under.
//!
//! - [`HardwareAsset`]: A product as seen by device management.
//! - [`AssetMatcher`] / [`AssetQuery`]: Case-insensitive free text search.
//! - [`AssetModule`]: Lookup, search and refresh over a cached catalog.
//! - [`CommandResponse`]: Outcome of an administrative command such as a refresh.

pub mod command;
pub mod hardware;
pub mod matcher;
pub mod module;

pub use command::*;
pub use hardware::*;
pub use matcher::*;
pub use module::*;
