//! [`MagentoPort`] over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

use super::{envelope, MagentoPort, SoapError};
use crate::ws::SoapRequest;

/// Magento dispatches every WS-I operation by body element, so the action header is fixed.
const SOAP_ACTION: &str = "urn:Action";

/// Posts SOAP envelopes to a Magento `api/v2_soap` endpoint.
#[derive(Debug, Clone)]
pub struct HttpMagentoPort {
    client: reqwest::Client,
    endpoint: String,
    debug_soap: bool,
}

impl HttpMagentoPort {
    /// Creates a port for `url`. A trailing `?wsdl` is dropped, the service listens on
    /// the same address as its description.
    pub fn new(url: &str, debug_soap: bool, timeout: Duration) -> Result<Self, SoapError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint_of(url),
            debug_soap,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn endpoint_of(url: &str) -> String {
    let trimmed = url.trim();
    match trimmed.rfind('?') {
        Some(pos) if trimmed[pos + 1..].eq_ignore_ascii_case("wsdl") => trimmed[..pos].to_string(),
        _ => trimmed.to_string(),
    }
}

#[async_trait]
impl MagentoPort for HttpMagentoPort {
    #[instrument(skip(self, request), fields(operation = Req::OPERATION))]
    async fn call<Req>(&self, request: Req) -> Result<Req::Response, SoapError>
    where
        Req: SoapRequest + 'static,
    {
        let body = envelope::encode(&request)?;
        if self.debug_soap {
            debug!(envelope = %body, "Outbound");
        }

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", SOAP_ACTION)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if self.debug_soap {
            debug!(status = status.as_u16(), envelope = %text, "Inbound");
        }

        if status.is_success() {
            return envelope::decode(&text);
        }

        // Faults arrive with HTTP 500.
        match envelope::decode::<Req::Response>(&text) {
            Err(fault @ SoapError::Fault { .. }) => Err(fault),
            _ => {
                warn!(status = status.as_u16(), "Request failed");
                Err(SoapError::Status(status.as_u16()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_wsdl_query() {
        assert_eq!(
            endpoint_of("http://localhost/magento/index.php/api/v2_soap?wsdl"),
            "http://localhost/magento/index.php/api/v2_soap"
        );
        assert_eq!(endpoint_of("http://shop/api/v2_soap?WSDL=1"), "http://shop/api/v2_soap?WSDL=1");
        assert_eq!(endpoint_of(" http://shop/api/v2_soap "), "http://shop/api/v2_soap");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let port = HttpMagentoPort::new("http://127.0.0.1:9/api/v2_soap?wsdl", false, Duration::from_secs(2)).unwrap();
        assert_eq!(port.endpoint(), "http://127.0.0.1:9/api/v2_soap");

        let err = port.login("magento", "magento").await.unwrap_err();
        assert!(matches!(err, SoapError::Transport(_)));
    }
}
