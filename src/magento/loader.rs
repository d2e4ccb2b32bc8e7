//! Concurrent loading of the Magento catalog.
//!
//! Both phases fan out over a [`JoinSet`] with at most `workers` calls in flight,
//! bounded by a [`Semaphore`]. The first failure aborts the phase; dropping the
//! set cancels whatever is still running.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, instrument, warn};

use super::fields::{PROP_DESCRIPTION, PROP_NAME};
use super::MagentoError;
use crate::asset::HardwareAsset;
use crate::clients::AssetCacheClient;
use crate::soap::MagentoPort;
use crate::ws::{ArrayOfString, CatalogProductEntity, CatalogProductRequestAttributes};

/// Attribute codes by attribute set id.
pub type AttributeSets = HashMap<i32, ArrayOfString>;

/// Lists the attribute codes of every attribute set.
#[instrument(skip(port, session_id))]
pub async fn load_attribute_sets<P: MagentoPort>(
    port: &Arc<P>,
    session_id: &str,
    workers: usize,
) -> Result<AttributeSets, MagentoError> {
    let sets = port.catalog_product_attribute_set_list(session_id).await?;
    let limit = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = JoinSet::new();

    for set_id in sets.into_iter().filter_map(|set| set.set_id) {
        let port = port.clone();
        let session_id = session_id.to_string();
        let limit = limit.clone();
        tasks.spawn(async move {
            let _permit = limit.acquire_owned().await.map_err(|e| MagentoError::Task(e.to_string()))?;
            let attributes = port.catalog_product_attribute_list(&session_id, set_id).await?;
            let codes: ArrayOfString = attributes.into_iter().filter_map(|a| a.code).collect();
            debug!(set_id, count = codes.len(), "Loaded attribute set");
            Ok::<_, MagentoError>((set_id, codes))
        });
    }

    let mut loaded = AttributeSets::new();
    while let Some(joined) = tasks.join_next().await {
        let (set_id, codes) = joined??;
        loaded.insert(set_id, codes);
    }
    Ok(loaded)
}

/// Loads every product as a hardware asset and stores it in `cache`.
/// Returns the number of assets stored.
#[instrument(skip_all, fields(products = products.len()))]
pub async fn load_products<P: MagentoPort>(
    port: &Arc<P>,
    session_id: &str,
    attribute_sets: Arc<AttributeSets>,
    products: Vec<CatalogProductEntity>,
    workers: usize,
    cache: &AssetCacheClient,
) -> Result<usize, MagentoError> {
    let limit = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = JoinSet::new();

    for product in products {
        let port = port.clone();
        let session_id = session_id.to_string();
        let attribute_sets = attribute_sets.clone();
        let cache = cache.clone();
        let limit = limit.clone();
        tasks.spawn(async move {
            let _permit = limit.acquire_owned().await.map_err(|e| MagentoError::Task(e.to_string()))?;
            let asset = load_product(port.as_ref(), &session_id, &attribute_sets, &product).await?;
            cache.store(asset).await
        });
    }

    let mut total = 0;
    while let Some(joined) = tasks.join_next().await {
        joined??;
        total += 1;
    }
    Ok(total)
}

/// Builds one asset from the product's info and media.
///
/// Every additional attribute of the product's set becomes a property; `name`
/// and `description` are lifted from those properties and the first image
/// provides the image url.
#[instrument(skip_all, fields(product_id = product.product_id.as_deref().unwrap_or_default()))]
pub async fn load_product<P: MagentoPort>(
    port: &P,
    session_id: &str,
    attribute_sets: &AttributeSets,
    product: &CatalogProductEntity,
) -> Result<HardwareAsset, MagentoError> {
    let product_id = product.product_id.clone().unwrap_or_default();
    let set_id = match product.set_id() {
        Some(Ok(set_id)) => set_id,
        _ => {
            return Err(MagentoError::InvalidAttributeSet {
                product_id,
                set: product.set.clone().unwrap_or_default(),
            })
        }
    };

    let mut attributes = CatalogProductRequestAttributes::new().with_attributes(ArrayOfString::new());
    match attribute_sets.get(&set_id) {
        Some(codes) => attributes.additional_attributes = Some(codes.clone()),
        None => warn!(set_id, "Product uses an unknown attribute set"),
    }

    let info = port.catalog_product_info(session_id, &product_id, attributes).await?;

    let mut asset = HardwareAsset::new(info.product_id.clone().unwrap_or_else(|| product_id.clone()));
    for entry in info.additional_attributes.into_iter().flatten() {
        if let Some(key) = entry.key {
            asset.set_property(key, entry.value.unwrap_or_default());
        }
    }
    asset.sku = info.sku;
    asset.name = asset.property(PROP_NAME).map(str::to_string);
    asset.description = asset.property(PROP_DESCRIPTION).map(str::to_string);

    let media = port.catalog_product_attribute_media_list(session_id, &product_id).await?;
    asset.image_url = media.first_url().map(str::to_string);

    debug!(asset_id = %asset.id, properties = asset.properties.len(), "Loaded product");
    Ok(asset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ResourceActor;
    use crate::soap::{MockMagentoPort, SoapError};
    use std::time::Duration;

    async fn session(port: &MockMagentoPort) -> String {
        port.login("magento", "magento").await.unwrap()
    }

    #[tokio::test]
    async fn test_load_attribute_sets() {
        let port = Arc::new(MockMagentoPort::new("magento", "magento"));
        port.add_attribute_set(4, "Default", &["name", "description"]);
        port.add_attribute_set(9, "Sensors", &["name", "range"]);
        let session_id = session(&port).await;

        let sets = load_attribute_sets(&port, &session_id, 2).await.unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[&9].items(), &["name".to_string(), "range".to_string()]);
        assert_eq!(port.calls("catalogProductAttributeList"), 2);
    }

    #[tokio::test]
    async fn test_attribute_set_failure_aborts() {
        let port = Arc::new(MockMagentoPort::new("magento", "magento"));
        port.add_attribute_set(4, "Default", &["name"]);
        port.fail_attribute_set(4);
        let session_id = session(&port).await;

        let err = load_attribute_sets(&port, &session_id, 5).await.unwrap_err();
        assert!(matches!(err, MagentoError::Soap(SoapError::Fault { .. })));
    }

    #[tokio::test]
    async fn test_load_product_maps_fields() {
        let port = MockMagentoPort::new("magento", "magento");
        port.add_attribute_set(4, "Default", &["name", "description", "color"]);
        port.add_product(
            "42",
            "W-1",
            "4",
            &[("name", "Widget"), ("description", "A widget"), ("color", "red"), ("secret", "x")],
            &["http://img/1.png", "http://img/2.png"],
        );
        let session_id = session(&port).await;
        let codes = ArrayOfString::from(vec!["name".to_string(), "description".to_string(), "color".to_string()]);
        let sets: AttributeSets = [(4, codes)].into_iter().collect();
        let product = CatalogProductEntity::new().with_product_id("42").with_set("4");

        let asset = load_product(&port, &session_id, &sets, &product).await.unwrap();
        assert_eq!(asset.id, "42");
        assert_eq!(asset.sku.as_deref(), Some("W-1"));
        assert_eq!(asset.name.as_deref(), Some("Widget"));
        assert_eq!(asset.description.as_deref(), Some("A widget"));
        assert_eq!(asset.property("color"), Some("red"));
        assert_eq!(asset.property("secret"), None);
        assert_eq!(asset.image_url.as_deref(), Some("http://img/1.png"));
    }

    #[tokio::test]
    async fn test_non_numeric_set_is_rejected() {
        let port = MockMagentoPort::new("magento", "magento");
        let session_id = session(&port).await;
        let product = CatalogProductEntity::new().with_product_id("7").with_set("default");

        let err = load_product(&port, &session_id, &AttributeSets::new(), &product).await.unwrap_err();
        assert_eq!(
            err,
            MagentoError::InvalidAttributeSet { product_id: "7".into(), set: "default".into() }
        );
        assert_eq!(port.calls("catalogProductInfo"), 0);
    }

    #[tokio::test]
    async fn test_attribute_sets_respect_worker_limit() {
        let port = Arc::new(MockMagentoPort::new("magento", "magento"));
        for set_id in 1..=6 {
            port.add_attribute_set(set_id, "Set", &["name"]);
        }
        let session_id = session(&port).await;
        port.set_latency(Duration::from_millis(20));

        let sets = load_attribute_sets(&port, &session_id, 2).await.unwrap();
        assert_eq!(sets.len(), 6);
        assert_eq!(port.max_in_flight(), 2);
    }

    #[tokio::test]
    async fn test_products_respect_worker_limit() {
        let port = Arc::new(MockMagentoPort::new("magento", "magento"));
        port.add_attribute_set(4, "Default", &["name"]);
        for i in 1..=10 {
            let id = i.to_string();
            port.add_product(&id, &format!("SKU-{}", i), "4", &[("name", "Widget")], &[]);
        }
        let session_id = session(&port).await;
        let sets = load_attribute_sets(&port, &session_id, 1).await.unwrap();
        let products = port.catalog_product_list(&session_id, None).await.unwrap().into_vec();

        let (actor, client) = ResourceActor::new(16);
        let handle = tokio::spawn(actor.run());
        let cache = AssetCacheClient::new(client);

        port.set_latency(Duration::from_millis(20));
        let total = load_products(&port, &session_id, Arc::new(sets), products, 3, &cache)
            .await
            .unwrap();

        assert_eq!(total, 10);
        let peak = port.max_in_flight();
        assert!(peak > 1, "products were loaded one at a time");
        assert!(peak <= 3, "{} calls in flight with 3 workers", peak);

        drop(cache);
        handle.await.unwrap();
    }
}
