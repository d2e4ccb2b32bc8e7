//! The Magento hardware asset module.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use super::loader::{load_attribute_sets, load_products};
use super::{MagentoConfig, MagentoError};
use crate::asset::{AssetModule, AssetQuery, AssetType, CommandResponse, HardwareAsset};
use crate::clients::{ActorClient, AssetCacheClient};
use crate::framework::ResourceActor;
use crate::lifecycle::{LifecycleComponent, LifecycleComponentType};
use crate::soap::{HttpMagentoPort, MagentoPort, SoapError};

pub const MODULE_ID: &str = "magento";
pub const MODULE_NAME: &str = "Magento Identity Management";

/// Queue depth of the asset cache actor.
const CACHE_BUFFER: usize = 64;

type Connector<P> = Box<dyn Fn(&MagentoConfig) -> Result<Arc<P>, SoapError> + Send + Sync>;

/// State that exists once the module has been started.
struct Running<P> {
    port: Arc<P>,
    session_id: Option<String>,
    cache: AssetCacheClient,
    cache_handle: JoinHandle<()>,
}

/// Serves Magento products as [`HardwareAsset`]s.
///
/// # Architecture Note
/// Products are loaded once on [`start`](LifecycleComponent::start) and again on
/// every [`refresh`](AssetModule::refresh). Lookups and searches never reach Magento;
/// they are answered by an actor-owned cache, so they run concurrently with a
/// refresh that is still filling it.
///
/// The port is created on start through a connector. [`MagentoAssetModule::new`]
/// connects over HTTP, [`MagentoAssetModule::with_port`] injects a ready port.
pub struct MagentoAssetModule<P: MagentoPort> {
    config: MagentoConfig,
    connect: Connector<P>,
    running: Option<Running<P>>,
    initial_load: Option<CommandResponse>,
}

impl MagentoAssetModule<HttpMagentoPort> {
    pub fn new(config: MagentoConfig) -> Self {
        Self::with_connector(config, |config| {
            HttpMagentoPort::new(&config.url, config.debug_soap, config.timeout()).map(Arc::new)
        })
    }
}

impl<P: MagentoPort> MagentoAssetModule<P> {
    pub fn with_connector(
        config: MagentoConfig,
        connect: impl Fn(&MagentoConfig) -> Result<Arc<P>, SoapError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            config,
            connect: Box::new(connect),
            running: None,
            initial_load: None,
        }
    }

    pub fn with_port(config: MagentoConfig, port: P) -> Self {
        let port = Arc::new(port);
        Self::with_connector(config, move |_| Ok(port.clone()))
    }

    pub fn config(&self) -> &MagentoConfig {
        &self.config
    }

    /// Id of the open Magento session.
    pub fn session_id(&self) -> Option<&str> {
        self.running.as_ref().and_then(|r| r.session_id.as_deref())
    }

    /// Outcome of the catalog load done by the last successful start.
    pub fn initial_load(&self) -> Option<&CommandResponse> {
        self.initial_load.as_ref()
    }

    fn running(&self) -> Result<&Running<P>, MagentoError> {
        self.running.as_ref().ok_or(MagentoError::NotStarted)
    }

    /// Logs in with the configured credentials and keeps the session id.
    #[instrument(skip(self), fields(username = %self.config.username))]
    pub async fn login(&mut self) -> Result<(), MagentoError> {
        let running = self.running.as_mut().ok_or(MagentoError::NotStarted)?;
        let session_id = running
            .port
            .login(&self.config.username, &self.config.password)
            .await
            .map_err(|e| match e {
                fault @ SoapError::Fault { .. } => MagentoError::LoginFailed(fault),
                other => MagentoError::Soap(other),
            })?;
        running.session_id = Some(session_id);
        Ok(())
    }

    /// Reloads every product from Magento into the cache.
    #[instrument(skip(self))]
    pub async fn cache_asset_data(&self) -> Result<CommandResponse, MagentoError> {
        let running = self.running()?;
        let session_id = running.session_id.as_deref().ok_or(MagentoError::NotLoggedIn)?;
        let workers = self.config.workers;

        running.cache.clear().await?;
        info!("Caching search data.");
        let started = Instant::now();

        let attribute_sets = load_attribute_sets(&running.port, session_id, workers).await?;
        let products = running.port.catalog_product_list(session_id, None).await?;
        let total = load_products(
            &running.port,
            session_id,
            Arc::new(attribute_sets),
            products.into_vec(),
            workers,
            &running.cache,
        )
        .await?;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        let message = format!("Cached {} assets in {}ms.", total, elapsed_ms);
        info!(count = total, elapsed_ms, "{}", message);
        Ok(CommandResponse::successful(message))
    }

    /// Stops the cache actor and waits for it to finish.
    pub async fn shutdown(self) -> Result<(), MagentoError> {
        let Some(running) = self.running else {
            return Ok(());
        };
        info!("Shutting down asset cache...");

        // Dropping the last client closes the channel and ends the actor loop.
        drop(running.cache);
        running.cache_handle.await?;

        info!("Asset cache shutdown complete.");
        Ok(())
    }
}

#[async_trait]
impl<P: MagentoPort> LifecycleComponent for MagentoAssetModule<P> {
    type Error = MagentoError;

    fn component_type(&self) -> LifecycleComponentType {
        LifecycleComponentType::AssetModule
    }

    /// Connects, logs in and fills the cache.
    async fn start(&mut self) -> Result<(), MagentoError> {
        info!(username = %self.config.username, "Connecting to Magento web service");
        if self.running.is_none() {
            let port = (self.connect)(&self.config)?;
            let (actor, client) = ResourceActor::<HardwareAsset>::new(CACHE_BUFFER);
            let cache_handle = tokio::spawn(actor.run());
            self.running = Some(Running {
                port,
                session_id: None,
                cache: AssetCacheClient::new(client),
                cache_handle,
            });
        }

        self.login().await?;
        self.initial_load = Some(self.cache_asset_data().await?);
        Ok(())
    }

    /// Ends the Magento session. Failures are logged, the cache stays readable.
    async fn stop(&mut self) -> Result<(), MagentoError> {
        let Some(running) = self.running.as_mut() else {
            return Ok(());
        };
        if let Some(session_id) = running.session_id.take() {
            match running.port.end_session(&session_id).await {
                Ok(_) => info!("Magento session ended"),
                Err(e) => warn!(error = %e, "Unable to end Magento session"),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<P: MagentoPort> AssetModule<HardwareAsset> for MagentoAssetModule<P> {
    type Error = MagentoError;

    fn id(&self) -> &str {
        MODULE_ID
    }

    fn name(&self) -> &str {
        MODULE_NAME
    }

    fn asset_type(&self) -> AssetType {
        AssetType::Hardware
    }

    async fn asset_by_id(&self, id: &str) -> Result<Option<HardwareAsset>, MagentoError> {
        self.running()?.cache.get(id.to_string()).await
    }

    async fn search(&self, criteria: &str) -> Result<Vec<HardwareAsset>, MagentoError> {
        let cache = &self.running()?.cache;
        let query = AssetQuery::new(criteria);
        if query.is_empty() {
            return cache.list().await;
        }
        cache.search(query).await
    }

    async fn refresh(&self) -> CommandResponse {
        match self.cache_asset_data().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Refresh failed");
                CommandResponse::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soap::MockMagentoPort;

    fn module() -> (MagentoAssetModule<MockMagentoPort>, MockMagentoPort) {
        let port = MockMagentoPort::new("magento", "magento");
        port.add_attribute_set(4, "Default", &["name", "description"]);
        port.add_product("1", "W-1", "4", &[("name", "Widget"), ("description", "Blue widget")], &[]);
        port.add_product("2", "G-2", "4", &[("name", "Gadget")], &["http://img/g.png"]);
        (MagentoAssetModule::with_port(MagentoConfig::default(), port.clone()), port)
    }

    #[test]
    fn test_identity() {
        let (module, _) = module();
        assert_eq!(module.id(), "magento");
        assert_eq!(module.name(), "Magento Identity Management");
        assert_eq!(module.asset_type(), AssetType::Hardware);
        assert_eq!(module.component_type(), LifecycleComponentType::AssetModule);
    }

    #[tokio::test]
    async fn test_calls_before_start() {
        let (mut module, _) = module();
        assert_eq!(module.asset_by_id("1").await.unwrap_err(), MagentoError::NotStarted);
        assert_eq!(module.search("").await.unwrap_err(), MagentoError::NotStarted);
        assert_eq!(module.login().await.unwrap_err(), MagentoError::NotStarted);

        let response = module.refresh().await;
        assert!(!response.is_successful());
        assert_eq!(response.message, MagentoError::NotStarted.to_string());
    }

    #[tokio::test]
    async fn test_start_search_and_stop() {
        let (mut module, port) = module();
        module.start().await.unwrap();
        assert!(module.session_id().is_some());

        let loaded = module.initial_load().expect("Start records its load");
        assert!(loaded.is_successful());
        assert!(loaded.message.starts_with("Cached 2 assets in "));
        assert_eq!(port.calls("catalogProductList"), 1);

        let widget = module.asset_by_id("1").await.unwrap().unwrap();
        assert_eq!(widget.description.as_deref(), Some("Blue widget"));
        assert_eq!(module.search("").await.unwrap().len(), 2);
        assert_eq!(module.search("  GADG ").await.unwrap()[0].id, "2");

        module.stop().await.unwrap();
        assert_eq!(module.session_id(), None);
        assert_eq!(port.open_sessions(), 0);

        // Cached data survives stop.
        assert!(module.asset_by_id("2").await.unwrap().is_some());
        module.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_criteria_list_everything() {
        let (mut module, _) = module();
        module.start().await.unwrap();

        assert_eq!(module.search("   ").await.unwrap().len(), 2);
        assert_eq!(module.search("\t").await.unwrap().len(), 2);
        assert!(module.search(" zzz ").await.unwrap().is_empty());
        module.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_login_fault() {
        let (mut module, port) = module();
        port.fail_login();

        let err = module.start().await.unwrap_err();
        assert!(matches!(err, MagentoError::LoginFailed(_)));
        assert!(module.initial_load().is_none());
        assert_eq!(err.to_string(), "Magento login failed.");
        module.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_refresh_after_stop_fails() {
        let (mut module, _) = module();
        module.start().await.unwrap();
        module.stop().await.unwrap();

        let response = module.refresh().await;
        assert!(!response.is_successful());
        assert_eq!(response.message, MagentoError::NotLoggedIn.to_string());
        module.shutdown().await.unwrap();
    }
}
