use std::sync::Arc;

use sitewhere_magento::asset::{AssetModule, CommandResult};
use sitewhere_magento::clients::{ActorClient, AssetCacheClient};
use sitewhere_magento::framework::ResourceActor;
use sitewhere_magento::lifecycle::LifecycleComponent;
use sitewhere_magento::magento::loader::{load_attribute_sets, load_products};
use sitewhere_magento::magento::{MagentoAssetModule, MagentoConfig, MagentoError};
use sitewhere_magento::soap::{MagentoPort, MockMagentoPort};

fn catalog(products: usize) -> MockMagentoPort {
    let port = MockMagentoPort::new("magento", "magento");
    port.add_attribute_set(4, "Default", &["name", "description", "color"]);
    port.add_attribute_set(9, "Sensors", &["name", "range"]);
    for i in 0..products {
        let id = (i + 1).to_string();
        let sku = format!("SKU-{:03}", i + 1);
        let name = format!("Widget {}", i + 1);
        let set = if i % 2 == 0 { "4" } else { "9" };
        port.add_product(&id, &sku, set, &[("name", name.as_str()), ("color", "red"), ("range", "0..10")], &[]);
    }
    port
}

/// Full end-to-end test: start, search, refresh, stop.
#[tokio::test]
async fn test_full_module_lifecycle() {
    let port = catalog(12);
    let config = MagentoConfig { workers: 3, ..Default::default() };
    let mut module = MagentoAssetModule::with_port(config, port.clone());

    module.start().await.expect("Failed to start module");

    // Every product is cached
    let all = module.search("").await.expect("Failed to search");
    assert_eq!(all.len(), 12);

    // Properties follow the product's attribute set
    let first = module.asset_by_id("1").await.unwrap().expect("Asset not found");
    assert_eq!(first.sku.as_deref(), Some("SKU-001"));
    assert_eq!(first.property("color"), Some("red"));
    assert_eq!(first.property("range"), None);

    let second = module.asset_by_id("2").await.unwrap().expect("Asset not found");
    assert_eq!(second.property("range"), Some("0..10"));
    assert_eq!(second.property("color"), None);

    // Case-insensitive search over name and sku
    let hits = module.search("WIDGET 1").await.unwrap();
    let mut ids: Vec<_> = hits.iter().map(|a| a.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "10", "11", "12"]);
    assert_eq!(module.search("sku-007").await.unwrap().len(), 1);
    assert!(module.search("gadget").await.unwrap().is_empty());

    // Refresh reloads from Magento
    port.add_product("99", "SKU-099", "4", &[("name", "Late Arrival")], &[]);
    let response = module.refresh().await;
    assert_eq!(response.result, CommandResult::Successful);
    assert!(response.message.starts_with("Cached 13 assets in "));
    assert!(response.message.ends_with("ms."));
    assert_eq!(port.calls("catalogProductList"), 2);

    module.stop().await.unwrap();
    assert_eq!(port.open_sessions(), 0);
    module.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_failed_product_fails_refresh() {
    let port = catalog(4);
    let mut module = MagentoAssetModule::with_port(MagentoConfig::default(), port.clone());
    module.start().await.unwrap();

    port.fail_product("3");
    let response = module.refresh().await;
    assert_eq!(response.result, CommandResult::Failed);
    assert!(response.message.contains("Product not exists."));

    module.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_set_fails_start() {
    let port = catalog(1);
    port.add_product("5", "BAD", "default", &[], &[]);
    let mut module = MagentoAssetModule::with_port(MagentoConfig::default(), port);

    let err = module.start().await.unwrap_err();
    assert_eq!(
        err,
        MagentoError::InvalidAttributeSet { product_id: "5".into(), set: "default".into() }
    );
    module.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_wrong_credentials() {
    let port = catalog(1);
    let config = MagentoConfig { password: "wrong".into(), ..Default::default() };
    let mut module = MagentoAssetModule::with_port(config, port.clone());

    let err = module.start().await.unwrap_err();
    assert_eq!(err.to_string(), "Magento login failed.");
    assert_eq!(port.calls("catalogProductList"), 0);
    module.shutdown().await.unwrap();
}

/// Loaders against a real cache actor, without the module.
#[tokio::test]
async fn test_loaders_fill_cache() {
    let port = Arc::new(catalog(7));
    let session_id = port.login("magento", "magento").await.unwrap();

    let (actor, client) = ResourceActor::new(16);
    let handle = tokio::spawn(actor.run());
    let cache = AssetCacheClient::new(client);

    let sets = load_attribute_sets(&port, &session_id, 1).await.unwrap();
    let products = port.catalog_product_list(&session_id, None).await.unwrap().into_vec();
    let total = load_products(&port, &session_id, Arc::new(sets), products, 2, &cache)
        .await
        .unwrap();

    assert_eq!(total, 7);
    assert_eq!(cache.len().await.unwrap(), 7);
    assert!(cache.get("7".to_string()).await.unwrap().is_some());

    drop(cache);
    handle.await.unwrap();
}
