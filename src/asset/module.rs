use async_trait::async_trait;

use super::{AssetType, CommandResponse};

/// A source of assets backed by an external system.
#[async_trait]
pub trait AssetModule<T>: Send + Sync {
    type Error: std::error::Error + Send + Sync;

    /// Stable identifier of the module.
    fn id(&self) -> &str;

    /// Display name of the module.
    fn name(&self) -> &str;

    fn asset_type(&self) -> AssetType;

    async fn asset_by_id(&self, id: &str) -> Result<Option<T>, Self::Error>;

    /// Assets matching free text `criteria`. Empty criteria return every asset.
    async fn search(&self, criteria: &str) -> Result<Vec<T>, Self::Error>;

    /// Reloads the module's data. Failures are reported in the response.
    async fn refresh(&self) -> CommandResponse;
}
