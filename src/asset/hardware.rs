use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AssetMatcher, AssetQuery};
use crate::framework::ActorEntity;

/// Broad category an asset module serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Person,
    Hardware,
    Location,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetType::Person => "Person",
            AssetType::Hardware => "Hardware",
            AssetType::Location => "Location",
        };
        f.write_str(name)
    }
}

/// A piece of hardware that devices can be associated with.
///
/// `properties` holds every attribute the source system reported, the named
/// fields are the ones searches look at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardwareAsset {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub image_url: Option<String>,
    pub properties: BTreeMap<String, String>,
}

impl HardwareAsset {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Sets a property, returning the value it replaced.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }
}

impl ActorEntity for HardwareAsset {
    type Id = String;
    type Query = AssetQuery;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn matches(&self, query: &AssetQuery) -> bool {
        AssetMatcher::is_hardware_match(self, query.criteria())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties() {
        let mut asset = HardwareAsset::new("42");
        assert_eq!(asset.property("color"), None);

        assert_eq!(asset.set_property("color", "red"), None);
        assert_eq!(asset.set_property("color", "blue"), Some("red".to_string()));
        assert_eq!(asset.property("color"), Some("blue"));
    }

    #[test]
    fn test_store_key_and_query() {
        let mut asset = HardwareAsset::new("42");
        asset.sku = Some("WID-001".into());

        assert_eq!(ActorEntity::id(&asset), "42");
        assert!(asset.matches(&AssetQuery::new("wid")));
        assert!(!asset.matches(&AssetQuery::new("gadget")));
    }
}
