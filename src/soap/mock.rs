//! # Mock Magento
//!
//! An in-memory [`MagentoPort`] for tests and demos.
//!
//! Requests and replies go through the same XML serializer as the HTTP port: the
//! request is written out with its wire names and read back as the record the mock
//! understands, and the reply takes the same trip into the caller's reply type. A
//! field named wrongly on either side shows up here as a missing value.
//!
//! ```ignore
//! let port = MockMagentoPort::new("magento", "magento");
//! port.add_attribute_set(4, "Default", &["name", "description", "color"]);
//! port.add_product("42", "W-1", "4", &[("name", "Widget"), ("color", "red")], &["http://img/w.png"]);
//! port.fail_product("43");
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::{MagentoPort, SoapError};
use crate::ws::{
    AssociativeEntity, CatalogAttributeEntity, CatalogProductAttributeListRequestParam,
    CatalogProductAttributeListResponseParam, CatalogProductAttributeMediaListRequestParam,
    CatalogProductAttributeMediaListResponseParam, CatalogProductAttributeSetEntity,
    CatalogProductAttributeSetListRequestParam, CatalogProductAttributeSetListResponseParam,
    CatalogProductEntity, CatalogProductImageEntity, CatalogProductInfoRequestParam,
    CatalogProductInfoResponseParam, CatalogProductListRequestParam,
    CatalogProductListResponseParam, CatalogProductReturnEntity, EndSessionParam,
    EndSessionResponseParam, LoginParam, LoginResponseParam, SoapRequest,
};

#[derive(Debug, Default)]
struct MockProduct {
    sku: String,
    set: String,
    attributes: BTreeMap<String, String>,
    images: Vec<String>,
}

#[derive(Debug, Default)]
struct MockCatalog {
    username: String,
    api_key: String,
    login_fails: bool,
    next_session: u64,
    sessions: HashSet<String>,
    attribute_sets: BTreeMap<i32, (String, Vec<String>)>,
    failing_sets: HashSet<i32>,
    products: BTreeMap<String, MockProduct>,
    failing_products: HashSet<String>,
    calls: HashMap<&'static str, usize>,
    latency: Option<Duration>,
}

/// Calls currently being answered and the most seen at once.
#[derive(Debug, Default)]
struct Load {
    current: AtomicUsize,
    peak: AtomicUsize,
}

/// Counts one call as in flight until dropped.
struct InFlight<'a>(&'a Load);

impl<'a> InFlight<'a> {
    fn enter(load: &'a Load) -> Self {
        let now = load.current.fetch_add(1, Ordering::SeqCst) + 1;
        load.peak.fetch_max(now, Ordering::SeqCst);
        Self(load)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.current.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Magento stand-in holding a small catalog.
#[derive(Debug, Clone, Default)]
pub struct MockMagentoPort {
    catalog: Arc<Mutex<MockCatalog>>,
    load: Arc<Load>,
}

impl MockMagentoPort {
    /// Mock accepting `username`/`api_key` at login.
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        let catalog = MockCatalog {
            username: username.into(),
            api_key: api_key.into(),
            ..Default::default()
        };
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            load: Arc::default(),
        }
    }

    fn catalog(&self) -> MutexGuard<'_, MockCatalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_attribute_set(&self, set_id: i32, name: &str, codes: &[&str]) {
        let codes = codes.iter().map(|c| c.to_string()).collect();
        self.catalog().attribute_sets.insert(set_id, (name.to_string(), codes));
    }

    /// Adds a product. `set` is kept as given so non-numeric set ids can be tested.
    pub fn add_product(
        &self,
        product_id: &str,
        sku: &str,
        set: &str,
        attributes: &[(&str, &str)],
        image_urls: &[&str],
    ) {
        let product = MockProduct {
            sku: sku.to_string(),
            set: set.to_string(),
            attributes: attributes.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            images: image_urls.iter().map(|u| u.to_string()).collect(),
        };
        self.catalog().products.insert(product_id.to_string(), product);
    }

    /// Every login is refused with an access denied fault.
    pub fn fail_login(&self) {
        self.catalog().login_fails = true;
    }

    /// Attribute listing for `set_id` returns a fault.
    pub fn fail_attribute_set(&self, set_id: i32) {
        self.catalog().failing_sets.insert(set_id);
    }

    /// Product info for `product_id` returns a fault.
    pub fn fail_product(&self, product_id: &str) {
        self.catalog().failing_products.insert(product_id.to_string());
    }

    /// Number of calls received for `operation`.
    pub fn calls(&self, operation: &str) -> usize {
        self.catalog().calls.get(operation).copied().unwrap_or(0)
    }

    pub fn open_sessions(&self) -> usize {
        self.catalog().sessions.len()
    }

    /// Every call waits `latency` before it is answered.
    pub fn set_latency(&self, latency: Duration) {
        self.catalog().latency = Some(latency);
    }

    /// Most calls that were being answered at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.load.peak.load(Ordering::SeqCst)
    }

    /// Counts a call and returns how long it should wait.
    fn record_call(&self, operation: &'static str) -> Option<Duration> {
        let mut catalog = self.catalog();
        *catalog.calls.entry(operation).or_default() += 1;
        catalog.latency
    }
}

fn fault(code: &str, message: &str) -> SoapError {
    SoapError::Fault { code: code.to_string(), message: message.to_string() }
}

/// Writes `value` as XML and reads it back as `T`.
fn reencode<S: Serialize, T: DeserializeOwned>(value: &S) -> Result<T, SoapError> {
    let xml = quick_xml::se::to_string_with_root("value", value)
        .map_err(|e| SoapError::Encode(e.to_string()))?;
    quick_xml::de::from_str(&xml).map_err(|e| SoapError::Decode(e.to_string()))
}

impl MockCatalog {
    fn check_session(&self, session_id: Option<&str>) -> Result<(), SoapError> {
        match session_id {
            Some(id) if self.sessions.contains(id) => Ok(()),
            _ => Err(fault("5", "Session expired. Try to relogin.")),
        }
    }

    fn login(&mut self, request: LoginParam) -> Result<LoginResponseParam, SoapError> {
        let accepted = !self.login_fails
            && request.username.as_deref() == Some(self.username.as_str())
            && request.api_key.as_deref() == Some(self.api_key.as_str());
        if !accepted {
            return Err(fault("2", "Access denied."));
        }
        self.next_session += 1;
        let session_id = format!("mock-session-{}", self.next_session);
        self.sessions.insert(session_id.clone());
        Ok(LoginResponseParam::new().with_result(session_id))
    }

    fn end_session(&mut self, request: EndSessionParam) -> Result<EndSessionResponseParam, SoapError> {
        let closed = request
            .session_id
            .as_deref()
            .is_some_and(|id| self.sessions.remove(id));
        Ok(EndSessionResponseParam::new().with_result(closed))
    }

    fn attribute_sets(
        &self,
        request: CatalogProductAttributeSetListRequestParam,
    ) -> Result<CatalogProductAttributeSetListResponseParam, SoapError> {
        self.check_session(request.session_id.as_deref())?;
        let sets = self
            .attribute_sets
            .iter()
            .map(|(id, (name, _))| CatalogProductAttributeSetEntity::new().with_set_id(*id).with_name(name.as_str()))
            .collect::<crate::ws::CatalogProductAttributeSetEntityArray>();
        Ok(CatalogProductAttributeSetListResponseParam::new().with_result(sets))
    }

    fn attributes(
        &self,
        request: CatalogProductAttributeListRequestParam,
    ) -> Result<CatalogProductAttributeListResponseParam, SoapError> {
        self.check_session(request.session_id.as_deref())?;
        let set_id = request.set_id.unwrap_or_default();
        if self.failing_sets.contains(&set_id) {
            return Err(fault("100", "Requested attribute set not found."));
        }
        let (_, codes) = self
            .attribute_sets
            .get(&set_id)
            .ok_or_else(|| fault("100", "Requested attribute set not found."))?;
        let attributes = codes
            .iter()
            .enumerate()
            .map(|(index, code)| {
                CatalogAttributeEntity::new()
                    .with_attribute_id(index as i32 + 1)
                    .with_code(code.as_str())
                    .with_kind("text")
                    .with_scope("global")
            })
            .collect::<crate::ws::CatalogAttributeEntityArray>();
        Ok(CatalogProductAttributeListResponseParam::new().with_result(attributes))
    }

    fn products(
        &self,
        request: CatalogProductListRequestParam,
    ) -> Result<CatalogProductListResponseParam, SoapError> {
        self.check_session(request.session_id.as_deref())?;
        let products = self
            .products
            .iter()
            .map(|(id, product)| {
                CatalogProductEntity::new()
                    .with_product_id(id.as_str())
                    .with_sku(product.sku.as_str())
                    .with_set(product.set.as_str())
                    .with_kind("simple")
            })
            .collect::<crate::ws::CatalogProductEntityArray>();
        Ok(CatalogProductListResponseParam::new().with_result(products))
    }

    /// Only the requested additional attributes are returned, as Magento does.
    fn product_info(
        &self,
        request: CatalogProductInfoRequestParam,
    ) -> Result<CatalogProductInfoResponseParam, SoapError> {
        self.check_session(request.session_id.as_deref())?;
        let product_id = request.product_id.unwrap_or_default();
        if self.failing_products.contains(&product_id) {
            return Err(fault("101", "Product not exists."));
        }
        let product = self
            .products
            .get(&product_id)
            .ok_or_else(|| fault("101", "Product not exists."))?;

        let requested: HashSet<String> = request
            .attributes
            .and_then(|a| a.additional_attributes)
            .map(|codes| codes.into_iter().collect())
            .unwrap_or_default();
        let additional = product
            .attributes
            .iter()
            .filter(|(key, _)| requested.contains(*key))
            .map(|(key, value)| AssociativeEntity::pair(key.as_str(), value.as_str()))
            .collect::<crate::ws::AssociativeArray>();

        let info = CatalogProductReturnEntity::new()
            .with_product_id(product_id.as_str())
            .with_sku(product.sku.as_str())
            .with_set(product.set.as_str())
            .with_kind("simple")
            .with_additional_attributes(additional);
        Ok(CatalogProductInfoResponseParam::new().with_result(info))
    }

    fn media(
        &self,
        request: CatalogProductAttributeMediaListRequestParam,
    ) -> Result<CatalogProductAttributeMediaListResponseParam, SoapError> {
        self.check_session(request.session_id.as_deref())?;
        let product_id = request.product_id.unwrap_or_default();
        let images = self
            .products
            .get(&product_id)
            .map(|product| product.images.as_slice())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(index, url)| {
                CatalogProductImageEntity::new()
                    .with_file(format!("/m/{}.jpg", index))
                    .with_position(index.to_string())
                    .with_url(url.as_str())
            })
            .collect::<crate::ws::CatalogProductImageEntityArray>();
        Ok(CatalogProductAttributeMediaListResponseParam::new().with_result(images))
    }
}

#[async_trait]
impl MagentoPort for MockMagentoPort {
    async fn call<Req>(&self, request: Req) -> Result<Req::Response, SoapError>
    where
        Req: SoapRequest + 'static,
    {
        debug!(operation = Req::OPERATION, "Mock call");
        let _in_flight = InFlight::enter(&self.load);
        if let Some(latency) = self.record_call(Req::OPERATION) {
            tokio::time::sleep(latency).await;
        }

        let mut catalog = self.catalog();

        match Req::OPERATION {
            "login" => reencode(&catalog.login(reencode(&request)?)?),
            "endSession" => reencode(&catalog.end_session(reencode(&request)?)?),
            "catalogProductAttributeSetList" => reencode(&catalog.attribute_sets(reencode(&request)?)?),
            "catalogProductAttributeList" => reencode(&catalog.attributes(reencode(&request)?)?),
            "catalogProductList" => reencode(&catalog.products(reencode(&request)?)?),
            "catalogProductInfo" => reencode(&catalog.product_info(reencode(&request)?)?),
            "catalogProductAttributeMediaList" => reencode(&catalog.media(reencode(&request)?)?),
            other => Err(fault("3", &format!("Invalid api path: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::{CatalogProductRequestAttributes, CustomerCustomerListRequestParam};

    fn catalog() -> MockMagentoPort {
        let port = MockMagentoPort::new("magento", "magento");
        port.add_attribute_set(4, "Default", &["name", "color"]);
        port.add_product("42", "W-1", "4", &[("name", "Widget"), ("color", "red"), ("weight", "2")], &["http://img/1.png"]);
        port
    }

    #[tokio::test]
    async fn test_login_and_end_session() {
        let port = catalog();
        let session = port.login("magento", "magento").await.unwrap();
        assert_eq!(port.open_sessions(), 1);

        assert!(port.end_session(&session).await.unwrap());
        assert!(!port.end_session(&session).await.unwrap());
        assert_eq!(port.open_sessions(), 0);
        assert_eq!(port.calls("endSession"), 2);
    }

    #[tokio::test]
    async fn test_wrong_credentials_fault() {
        let port = catalog();
        let err = port.login("magento", "nope").await.unwrap_err();
        assert_eq!(err, fault("2", "Access denied."));
    }

    #[tokio::test]
    async fn test_requires_session() {
        let port = catalog();
        let err = port.catalog_product_list("bogus", None).await.unwrap_err();
        assert!(err.is_fault());
    }

    #[tokio::test]
    async fn test_product_info_returns_requested_attributes() {
        let port = catalog();
        let session = port.login("magento", "magento").await.unwrap();

        let info = port
            .catalog_product_info(
                &session,
                "42",
                CatalogProductRequestAttributes::additional_only(vec!["color".to_string()].into()),
            )
            .await
            .unwrap();

        let attrs = info.additional_attributes.unwrap();
        assert_eq!(attrs.get("color"), Some("red"));
        assert_eq!(attrs.get("name"), None);
        assert_eq!(info.sku.as_deref(), Some("W-1"));
    }

    #[tokio::test]
    async fn test_tracks_concurrent_calls() {
        let port = catalog();
        port.set_latency(Duration::from_millis(20));
        let session = port.login("magento", "magento").await.unwrap();
        assert_eq!(port.max_in_flight(), 1);

        let (a, b) = tokio::join!(
            port.catalog_product_list(&session, None),
            port.catalog_product_attribute_set_list(&session),
        );
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(port.max_in_flight(), 2);
    }

    #[tokio::test]
    async fn test_unsupported_operation() {
        let port = catalog();
        let err = port.call(CustomerCustomerListRequestParam::new()).await.unwrap_err();
        assert!(matches!(err, SoapError::Fault { code, .. } if code == "3"));
    }
}
