//! Generic constructor for the generated records and the two scoped element
//! wrappers of `catalogProductAttributeFrontendLabelEntity`.

use super::product_attribute::CatalogProductAttributeFrontendLabelEntity;
use super::MagentoType;

const FRONTEND_LABEL_SCOPE: &str = "catalogProductAttributeFrontendLabelEntity";

/// A named XML element carrying a value, optionally scoped to the complex type it is
/// declared inside of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement<T> {
    pub name: &'static str,
    pub namespace: &'static str,
    pub scope: Option<&'static str>,
    pub value: T,
}

impl<T> XmlElement<T> {
    pub fn new(name: &'static str, namespace: &'static str, scope: Option<&'static str>, value: T) -> Self {
        Self { name, namespace, scope, value }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl XmlElement<String> {
    /// Writes the wrapped value into the frontend label field it names.
    ///
    /// Elements from another scope or with an unknown name leave the label untouched
    /// and return `false`.
    pub fn apply_to(&self, label: &mut CatalogProductAttributeFrontendLabelEntity) -> bool {
        if self.scope != Some(FRONTEND_LABEL_SCOPE) {
            return false;
        }
        match self.name {
            "store_id" => label.store_id = Some(self.value.clone()),
            "label" => label.label = Some(self.value.clone()),
            _ => return false,
        }
        true
    }
}

/// Creates instances of the generated types.
pub struct ObjectFactory;

impl ObjectFactory {
    /// Empty instance of any Magento record, array or operation parameter.
    pub fn create<T: MagentoType>() -> T {
        T::default()
    }

    pub fn create_catalog_product_attribute_frontend_label_entity_store_id(
        value: impl Into<String>,
    ) -> XmlElement<String> {
        XmlElement::new("store_id", "", Some(FRONTEND_LABEL_SCOPE), value.into())
    }

    pub fn create_catalog_product_attribute_frontend_label_entity_label(
        value: impl Into<String>,
    ) -> XmlElement<String> {
        XmlElement::new("label", "", Some(FRONTEND_LABEL_SCOPE), value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::{CatalogProductEntity, CatalogProductListRequestParam, SalesOrderEntity};

    #[test]
    fn test_create_returns_empty_records() {
        let product: CatalogProductEntity = ObjectFactory::create();
        assert_eq!(product, CatalogProductEntity::default());
        assert_eq!(product.sku, None);

        let order = ObjectFactory::create::<SalesOrderEntity>();
        assert_eq!(order.increment_id, None);

        let request = ObjectFactory::create::<CatalogProductListRequestParam>();
        assert_eq!(request.session_id, None);
    }

    #[test]
    fn test_frontend_label_elements() {
        let store = ObjectFactory::create_catalog_product_attribute_frontend_label_entity_store_id("1");
        assert_eq!(store.name, "store_id");
        assert_eq!(store.namespace, "");
        assert_eq!(store.scope, Some("catalogProductAttributeFrontendLabelEntity"));
        assert_eq!(store.value, "1");

        let label = ObjectFactory::create_catalog_product_attribute_frontend_label_entity_label("Colour");
        assert_eq!(label.name, "label");
        assert_eq!(label.into_value(), "Colour");
    }

    #[test]
    fn test_apply_to_label_entity() {
        let mut entity = CatalogProductAttributeFrontendLabelEntity::new();
        assert!(ObjectFactory::create_catalog_product_attribute_frontend_label_entity_store_id("2")
            .apply_to(&mut entity));
        assert!(ObjectFactory::create_catalog_product_attribute_frontend_label_entity_label("Size")
            .apply_to(&mut entity));
        assert_eq!(entity.store_id.as_deref(), Some("2"));
        assert_eq!(entity.label.as_deref(), Some("Size"));

        let foreign = XmlElement::new("label", "", Some("otherEntity"), "x".to_string());
        assert!(!foreign.apply_to(&mut entity));
        assert_eq!(entity.label.as_deref(), Some("Size"));
    }
}
