//! # SOAP plumbing
//!
//! The smallest amount of SOAP 1.1 needed to talk to Magento's WS-I endpoint:
//! document/literal envelopes around the [`ws`](crate::ws) records, fault
//! extraction, and a [`MagentoPort`] that hides the transport.
//!
//! ## Architecture Note
//! Callers only ever see typed records. A request type knows its operation name
//! and its reply type through [`SoapRequest`](crate::ws::SoapRequest), so the
//! port needs a single generic [`MagentoPort::call`] and everything else is a
//! thin, named wrapper around it. Swapping [`HttpMagentoPort`] for
//! [`MockMagentoPort`] changes nothing above this layer.

pub mod envelope;
pub mod error;
pub mod http;
pub mod mock;
pub mod port;

pub use error::SoapError;
pub use http::HttpMagentoPort;
pub use mock::MockMagentoPort;
pub use port::MagentoPort;
