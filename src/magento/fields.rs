//! Magento attribute codes the asset module maps onto named asset fields.

/// Product name attribute.
pub const PROP_NAME: &str = "name";

/// Product description attribute.
pub const PROP_DESCRIPTION: &str = "description";
