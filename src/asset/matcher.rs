use super::HardwareAsset;

/// Free text query against cached assets. Criteria are trimmed and lower cased
/// once, on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetQuery {
    criteria: String,
}

impl AssetQuery {
    pub fn new(criteria: &str) -> Self {
        Self { criteria: criteria.trim().to_lowercase() }
    }

    pub fn criteria(&self) -> &str {
        &self.criteria
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

/// Substring matching over the searchable fields of an asset.
pub struct AssetMatcher;

impl AssetMatcher {
    /// True when id, name, description or sku contains `criteria`.
    ///
    /// `criteria` is expected in lower case. Field values are trimmed and lower
    /// cased before comparing. Absent fields never match.
    pub fn is_hardware_match(asset: &HardwareAsset, criteria: &str) -> bool {
        let fields = [
            Some(asset.id.as_str()),
            asset.name.as_deref(),
            asset.description.as_deref(),
            asset.sku.as_deref(),
        ];
        fields
            .into_iter()
            .flatten()
            .any(|value| Self::contains(value, criteria))
    }

    fn contains(value: &str, criteria: &str) -> bool {
        value.trim().to_lowercase().contains(criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> HardwareAsset {
        HardwareAsset {
            id: "42".into(),
            name: Some("  Super Widget ".into()),
            description: None,
            sku: Some("SW-100".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_matches_any_field() {
        let asset = widget();
        assert!(AssetMatcher::is_hardware_match(&asset, "super"));
        assert!(AssetMatcher::is_hardware_match(&asset, "sw-1"));
        assert!(AssetMatcher::is_hardware_match(&asset, "42"));
        assert!(!AssetMatcher::is_hardware_match(&asset, "gadget"));
    }

    #[test]
    fn test_absent_fields_never_match() {
        let asset = HardwareAsset::new("1");
        assert!(!AssetMatcher::is_hardware_match(&asset, "widget"));
    }

    #[test]
    fn test_query_normalizes() {
        let query = AssetQuery::new("  WIDget ");
        assert_eq!(query.criteria(), "widget");
        assert!(!query.is_empty());
        assert!(AssetQuery::new("   ").is_empty());
    }
}
