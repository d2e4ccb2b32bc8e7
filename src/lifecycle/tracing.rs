//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log lines use the compact format without the module prefix (`with_target(false)`);
//! the structured fields (`set_id`, `product_id`, `count`, `elapsed_ms`) carry the context.
//! The level comes from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Cache actor**: Startup, clear, shutdown and final size
//! - **Magento calls**: One span per port operation, with the SOAP operation name
//! - **Catalog load**: Attribute sets and products as they load, and the summary line
//! - **Errors**: Faults and failed loaders with the ids involved
//!
//! ## Usage Examples
//!
//! ```bash
//! # Summary only
//! RUST_LOG=info sitewhere-magento refresh
//!
//! # Every set and product as it loads
//! RUST_LOG=debug sitewhere-magento refresh
//!
//! # Full SOAP envelopes (needs debug_soap = true)
//! RUST_LOG=sitewhere_magento::soap=debug sitewhere-magento --debug-soap refresh
//! ```
//!
//! ## Refresh Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Connecting to Magento web service username="magento"
//! INFO Actor started entity_type="HardwareAsset"
//! INFO Cleared entity_type="HardwareAsset" removed=0
//! INFO Caching search data.
//! INFO Cached 128 assets in 912ms. count=128 elapsed_ms=912
//! ```
//!
//! **With `RUST_LOG=debug`** each product adds a line under its span:
//!
//! ```text
//! DEBUG load_products:load_product: Loaded product product_id="42" asset_id=42 properties=17
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - structured fields carry the context
        .compact() // Compact format shows spans inline (e.g., "load_products:load_product")
        .init();
}
