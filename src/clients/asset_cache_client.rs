use crate::asset::HardwareAsset;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::magento::MagentoError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for the actor holding cached hardware assets.
#[derive(Clone)]
pub struct AssetCacheClient {
    inner: ResourceClient<HardwareAsset>,
}

impl AssetCacheClient {
    pub fn new(inner: ResourceClient<HardwareAsset>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<HardwareAsset> for AssetCacheClient {
    type Error = MagentoError;

    fn inner(&self) -> &ResourceClient<HardwareAsset> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MagentoError::Cache(e)
    }
}

impl AssetCacheClient {
    /// Stores an asset under its id, replacing any previous version.
    #[instrument(skip(self, asset), fields(asset_id = %asset.id))]
    pub async fn store(&self, asset: HardwareAsset) -> Result<(), MagentoError> {
        debug!("Sending request");
        self.inner.put(asset).await.map_err(Self::map_error)?;
        Ok(())
    }

    /// Empties the cache, returning how many assets were dropped.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, MagentoError> {
        self.inner.clear().await.map_err(Self::map_error)
    }

    pub async fn len(&self) -> Result<usize, MagentoError> {
        self.inner.len().await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_clear, expect_put, MockClient};

    #[tokio::test]
    async fn test_store_sends_put() {
        let (client, mut receiver) = create_mock_client::<HardwareAsset>(4);
        let cache = AssetCacheClient::new(client);

        let task = tokio::spawn(async move { cache.store(HardwareAsset::new("42")).await });

        let (item, responder) = expect_put(&mut receiver).await.expect("Expected Put request");
        assert_eq!(item.id, "42");
        responder.send(Ok(None)).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_clear_reports_count() {
        let (client, mut receiver) = create_mock_client::<HardwareAsset>(4);
        let cache = AssetCacheClient::new(client);

        let task = tokio::spawn(async move { cache.clear().await });
        expect_clear(&mut receiver).await.expect("Expected Clear request").send(Ok(12)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 12);
    }

    #[tokio::test]
    async fn test_framework_errors_are_mapped() {
        let mut mock = MockClient::<HardwareAsset>::new();
        mock.expect_get().return_err(FrameworkError::ActorClosed);
        let cache = AssetCacheClient::new(mock.client());

        let err = cache.get("1".to_string()).await.unwrap_err();
        assert_eq!(err, MagentoError::Cache(FrameworkError::ActorClosed));
        mock.verify();
    }
}
