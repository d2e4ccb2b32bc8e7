//! # Magento SOAP v2 (WS-I) data model
//!
//! Plain records mirroring the complex types of Magento's WS-I compliant WSDL
//! (`api/v2_soap?wsdl=1` with WS-I compliance switched on).
//!
//! ## Shape of a record
//!
//! - Every element is optional. An unset field is `None` and is not written out.
//! - Field names follow the wire names (`increment_id`, `base_grand_total`). Operation
//!   parameters are camelCase on the wire (`sessionId`) and snake_case in Rust.
//! - Lists are `…Array` wrappers around a repeated `complexObjectArray` element.
//! - There are no cross-field rules. Magento is the authority on what is valid.
//!
//! ## Layout
//!
//! One module per Magento API resource. [`factory`] holds the generic constructor and
//! the two element wrappers scoped to the attribute frontend label.

#[macro_use]
mod macros;

pub mod api;
pub mod cart;
pub mod category;
pub mod common;
pub mod creditmemo;
pub mod custom_option;
pub mod customer;
pub mod directory;
pub mod downloadable;
pub mod factory;
pub mod gift_message;
pub mod inventory;
pub mod invoice;
pub mod link;
pub mod media;
pub mod product;
pub mod product_attribute;
pub mod sales_order;
pub mod shipment;
pub mod store;
pub mod tag;

pub use api::*;
pub use cart::*;
pub use category::*;
pub use common::*;
pub use creditmemo::*;
pub use custom_option::*;
pub use customer::*;
pub use directory::*;
pub use downloadable::*;
pub use factory::{ObjectFactory, XmlElement};
pub use gift_message::*;
pub use inventory::*;
pub use invoice::*;
pub use link::*;
pub use media::*;
pub use product::*;
pub use product_attribute::*;
pub use sales_order::*;
pub use shipment::*;
pub use store::*;
pub use tag::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Namespace of every Magento element.
pub const MAGENTO_NAMESPACE: &str = "urn:Magento";

/// A type declared in the Magento schema.
pub trait MagentoType: Default {
    /// Schema name of the complex type, or of the element for operation parameters.
    const XML_TYPE: &'static str;
}

/// Request element of a Magento operation.
pub trait SoapRequest: MagentoType + Serialize + std::fmt::Debug + Send + Sync {
    /// Operation name as listed in the WSDL port type (`catalogProductList`).
    const OPERATION: &'static str;

    /// Element carried back in the reply body.
    type Response: MagentoType + DeserializeOwned + std::fmt::Debug + Send + 'static;

    /// Body element name, always the request's schema name.
    fn element() -> &'static str {
        Self::XML_TYPE
    }
}

/// Fixed value per field type, used by the tests generated for every record.
#[cfg(test)]
pub(crate) trait SampleValue {
    fn sample() -> Self;
}

#[cfg(test)]
impl SampleValue for String {
    fn sample() -> Self {
        "sample".to_string()
    }
}

#[cfg(test)]
impl SampleValue for i32 {
    fn sample() -> Self {
        7
    }
}

#[cfg(test)]
impl SampleValue for f64 {
    fn sample() -> Self {
        1.5
    }
}

#[cfg(test)]
impl SampleValue for bool {
    fn sample() -> Self {
        true
    }
}

/// Nested records and arrays use their empty instance.
#[cfg(test)]
impl<T: MagentoType> SampleValue for T {
    fn sample() -> Self {
        T::default()
    }
}
