//! The [`MagentoPort`] abstraction.

use async_trait::async_trait;
use tracing::instrument;

use super::SoapError;
use crate::ws::{
    CatalogAttributeEntityArray, CatalogProductAttributeListRequestParam,
    CatalogProductAttributeMediaListRequestParam, CatalogProductAttributeSetEntityArray,
    CatalogProductAttributeSetListRequestParam, CatalogProductEntityArray,
    CatalogProductImageEntityArray, CatalogProductInfoRequestParam, CatalogProductListRequestParam,
    CatalogProductRequestAttributes, CatalogProductReturnEntity, EndSessionParam, Filters,
    LoginParam, SoapRequest,
};

/// Access to a Magento SOAP v2 endpoint.
///
/// Implementors provide [`call`](MagentoPort::call). The named operations used by the
/// asset module are provided methods that build the request, call, and unwrap `result`.
/// A reply without `result` is read as the empty value of the reply type.
#[async_trait]
pub trait MagentoPort: Send + Sync + 'static {
    /// Sends one request and returns its reply element.
    async fn call<Req>(&self, request: Req) -> Result<Req::Response, SoapError>
    where
        Req: SoapRequest + 'static;

    /// Opens a session and returns its id.
    #[instrument(skip(self, api_key))]
    async fn login(&self, username: &str, api_key: &str) -> Result<String, SoapError> {
        let reply = self.call(LoginParam::credentials(username, api_key)).await?;
        Ok(reply.result.unwrap_or_default())
    }

    #[instrument(skip(self, session_id))]
    async fn end_session(&self, session_id: &str) -> Result<bool, SoapError> {
        let reply = self.call(EndSessionParam::new().with_session_id(session_id)).await?;
        Ok(reply.result.unwrap_or_default())
    }

    #[instrument(skip(self, session_id))]
    async fn catalog_product_attribute_set_list(
        &self,
        session_id: &str,
    ) -> Result<CatalogProductAttributeSetEntityArray, SoapError> {
        let request = CatalogProductAttributeSetListRequestParam::new().with_session_id(session_id);
        Ok(self.call(request).await?.result.unwrap_or_default())
    }

    #[instrument(skip(self, session_id))]
    async fn catalog_product_attribute_list(
        &self,
        session_id: &str,
        set_id: i32,
    ) -> Result<CatalogAttributeEntityArray, SoapError> {
        let request = CatalogProductAttributeListRequestParam::new()
            .with_session_id(session_id)
            .with_set_id(set_id);
        Ok(self.call(request).await?.result.unwrap_or_default())
    }

    #[instrument(skip(self, session_id))]
    async fn catalog_product_list(
        &self,
        session_id: &str,
        filters: Option<Filters>,
    ) -> Result<CatalogProductEntityArray, SoapError> {
        let mut request = CatalogProductListRequestParam::new().with_session_id(session_id);
        request.filters = filters;
        Ok(self.call(request).await?.result.unwrap_or_default())
    }

    /// Full product record, including the `additional_attributes` named in `attributes`.
    #[instrument(skip(self, session_id, attributes))]
    async fn catalog_product_info(
        &self,
        session_id: &str,
        product_id: &str,
        attributes: CatalogProductRequestAttributes,
    ) -> Result<CatalogProductReturnEntity, SoapError> {
        let request = CatalogProductInfoRequestParam::new()
            .with_session_id(session_id)
            .with_product_id(product_id)
            .with_attributes(attributes);
        Ok(self.call(request).await?.result.unwrap_or_default())
    }

    #[instrument(skip(self, session_id))]
    async fn catalog_product_attribute_media_list(
        &self,
        session_id: &str,
        product_id: &str,
    ) -> Result<CatalogProductImageEntityArray, SoapError> {
        let request = CatalogProductAttributeMediaListRequestParam::new()
            .with_session_id(session_id)
            .with_product_id(product_id);
        Ok(self.call(request).await?.result.unwrap_or_default())
    }
}
