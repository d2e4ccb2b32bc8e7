//! # SiteWhere Magento
//!
//! > **Magento's catalog as SiteWhere hardware assets.**
//!
//! This crate models the Magento SOAP v2 (WS-I) API as plain Rust records, speaks
//! just enough SOAP to call it, and builds an asset module on top that caches every
//! product for fast lookups and searches.
//!
//! ## Module Tour
//!
//! ### 1. The Data Model ([`ws`])
//! One record per complex type of the Magento WSDL, with the exact wire names.
//! - **Role**: Typed requests and replies. Every field is optional.
//! - **Key items**: [`SoapRequest`](ws::SoapRequest), [`ObjectFactory`](ws::ObjectFactory).
//!
//! ### 2. The Wire ([`soap`])
//! Envelopes, faults and the [`MagentoPort`](soap::MagentoPort) trait.
//! - **Role**: Turns a typed request into a typed reply, over HTTP or in memory.
//! - **Key items**: [`HttpMagentoPort`](soap::HttpMagentoPort), [`MockMagentoPort`](soap::MockMagentoPort).
//!
//! ### 3. The Engine ([`framework`], [`clients`])
//! A generic actor that owns a keyed store, and the typed client in front of it.
//! - **Role**: Holds the cached assets. Loader tasks write, queries read, no locks.
//! - **Key items**: [`ResourceActor`](framework::ResourceActor), [`AssetCacheClient`](clients::AssetCacheClient).
//!
//! ### 4. The Module ([`asset`], [`magento`])
//! The asset vocabulary and the Magento implementation of it.
//! - **Role**: Login, concurrent catalog load, lookup, search, refresh.
//! - **Key items**: [`MagentoAssetModule`](magento::MagentoAssetModule), [`AssetMatcher`](asset::AssetMatcher).
//!
//! ### 5. The Runtime ([`lifecycle`])
//! Start/stop contract and tracing setup.
//!
//! ## Quick Start
//!
//! ```bash
//! # Load the catalog and print the summary
//! RUST_LOG=info sitewhere-magento --url http://shop/index.php/api/v2_soap?wsdl refresh
//!
//! # Search by name, description, sku or id
//! sitewhere-magento search widget
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod asset;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod magento;
pub mod soap;
pub mod ws;
