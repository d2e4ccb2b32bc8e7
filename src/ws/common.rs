//! Building blocks shared by every resource: string/int lists, key/value pairs and
//! the filter records accepted by the `…List` operations.

magento_array! {
    /// List of strings (attribute codes, website ids, product ids).
    ArrayOfString => "ArrayOfString" [String]

    ArrayOfInt => "ArrayOfInt" [i32]

    AssociativeArray => "associativeArray" [AssociativeEntity]

    AssociativeMultiArray => "associativeMultiArray" [AssociativeMultiEntity]

    ComplexFilterArray => "complexFilterArray" [ComplexFilter]

    ArrayOfExistsFaltures => "ArrayOfExistsFaltures" [ExistsFaltureEntity]
}

magento_entity! {
    /// A single key/value pair. Magento uses these for anything schemaless, most
    /// notably the product `additional_attributes`.
    AssociativeEntity => "associativeEntity" {
        key: String,
        value: String,
    }

    /// A key mapped to several values.
    AssociativeMultiEntity => "associativeMultiEntity" {
        key: String,
        value: ArrayOfString,
    }

    /// Condition on one field, e.g. key `created_at` with value `{gt: 2014-01-01}`.
    ComplexFilter => "complexFilter" {
        key: String,
        value: AssociativeEntity,
    }

    /// Filter accepted by the list operations. `filter` holds equality matches,
    /// `complex_filter` holds conditions with an operator.
    Filters => "filters" {
        filter: AssociativeArray,
        complex_filter: ComplexFilterArray,
    }

    /// Per-item outcome of a bulk call (the schema really does spell it "faltures").
    ExistsFaltureEntity => "existsFaltureEntity" {
        code: String,
        message: String,
    }
}

impl AssociativeEntity {
    /// Shorthand for a fully populated pair.
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}

impl AssociativeArray {
    /// Value of the first entry with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.complex_object_array
            .iter()
            .find(|entry| entry.key.as_deref() == Some(key))
            .and_then(|entry| entry.value.as_deref())
    }
}

impl Filters {
    /// Filter matching a single field by equality.
    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_filter(AssociativeArray::from(vec![AssociativeEntity::pair(key, value)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::MagentoType;

    #[test]
    fn test_unset_fields_read_back_absent() {
        let entity = AssociativeEntity::new();
        assert_eq!(entity.key, None);
        assert_eq!(entity.value, None);
    }

    #[test]
    fn test_set_then_read_back() {
        let entity = AssociativeEntity::new().with_key("color").with_value("red");
        assert_eq!(entity.key.as_deref(), Some("color"));
        assert_eq!(entity.value.as_deref(), Some("red"));

        let mut cleared = entity.clone();
        cleared.value = None;
        assert_eq!(cleared.value, None);
        assert_ne!(cleared, entity);
    }

    #[test]
    fn test_associative_array_lookup() {
        let attrs: AssociativeArray = vec![
            AssociativeEntity::pair("name", "Widget"),
            AssociativeEntity::pair("description", "A widget"),
        ]
        .into();

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("description"), Some("A widget"));
        assert_eq!(attrs.get("missing"), None);
    }

    #[test]
    fn test_schema_names() {
        assert_eq!(ArrayOfString::XML_TYPE, "ArrayOfString");
        assert_eq!(ComplexFilter::XML_TYPE, "complexFilter");
        assert_eq!(Filters::XML_TYPE, "filters");
    }

    #[test]
    fn test_array_iteration() {
        let codes: ArrayOfString = ["sku", "name"].iter().map(|s| s.to_string()).collect();
        let collected: Vec<&String> = (&codes).into_iter().collect();
        assert_eq!(collected, vec!["sku", "name"]);
        assert_eq!(codes.into_vec(), vec!["sku".to_string(), "name".to_string()]);
    }
}
