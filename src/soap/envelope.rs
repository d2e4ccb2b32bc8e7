//! SOAP 1.1 envelope encoding and decoding.
//!
//! Requests are written as
//!
//! ```xml
//! <soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:urn="urn:Magento">
//!   <soapenv:Header/>
//!   <soapenv:Body>
//!     <urn:loginParam><username>..</username><apiKey>..</apiKey></urn:loginParam>
//!   </soapenv:Body>
//! </soapenv:Envelope>
//! ```
//!
//! Only the body element is namespace qualified; its children are unqualified, as the
//! WS-I schema declares them. Replies are read by local name so the prefix Magento
//! picks (`ns1:`, `SOAP-ENV:`) does not matter.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::SoapError;
use crate::ws::{SoapRequest, MAGENTO_NAMESPACE};

pub const SOAP_ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

#[derive(Debug, Default, Deserialize)]
struct Fault {
    #[serde(default)]
    faultcode: Option<String>,
    #[serde(default)]
    faultstring: Option<String>,
}

/// Wraps `request` in a SOAP envelope.
pub fn encode<Req: SoapRequest>(request: &Req) -> Result<String, SoapError> {
    let root = format!("urn:{}", Req::element());
    let body = quick_xml::se::to_string_with_root(&root, request)
        .map_err(|e| SoapError::Encode(e.to_string()))?;

    Ok(format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            r#"<soapenv:Envelope xmlns:soapenv="{}" xmlns:urn="{}">"#,
            r#"<soapenv:Header/><soapenv:Body>{}</soapenv:Body></soapenv:Envelope>"#
        ),
        SOAP_ENVELOPE_NAMESPACE, MAGENTO_NAMESPACE, body
    ))
}

/// Reads the reply element out of a SOAP envelope.
///
/// A `Fault` in the body becomes [`SoapError::Fault`].
pub fn decode<R: DeserializeOwned>(xml: &str) -> Result<R, SoapError> {
    let element = body_element(xml)?;
    if element.is_fault {
        let fault: Fault = quick_xml::de::from_str(element.fragment)
            .map_err(|e| SoapError::Decode(e.to_string()))?;
        return Err(SoapError::Fault {
            code: fault.faultcode.unwrap_or_default(),
            message: fault.faultstring.unwrap_or_default(),
        });
    }
    quick_xml::de::from_str(element.fragment).map_err(|e| SoapError::Decode(e.to_string()))
}

struct BodyElement<'a> {
    fragment: &'a str,
    is_fault: bool,
}

fn body_element(xml: &str) -> Result<BodyElement<'_>, SoapError> {
    let mut reader = Reader::from_str(xml);
    let mut in_body = false;

    loop {
        let start = reader.buffer_position() as usize;
        let event = reader
            .read_event()
            .map_err(|e| SoapError::Decode(e.to_string()))?;

        match event {
            Event::Start(e) if !in_body => {
                in_body = e.local_name().as_ref() == b"Body";
            }
            Event::Empty(e) if !in_body => {
                if e.local_name().as_ref() == b"Body" {
                    return Err(SoapError::MissingBody);
                }
            }
            Event::Start(e) => {
                let is_fault = e.local_name().as_ref() == b"Fault";
                let end = e.to_end().into_owned();
                reader
                    .read_to_end(end.name())
                    .map_err(|e| SoapError::Decode(e.to_string()))?;
                let stop = reader.buffer_position() as usize;
                return Ok(BodyElement { fragment: &xml[start..stop], is_fault });
            }
            Event::Empty(e) => {
                let stop = reader.buffer_position() as usize;
                return Ok(BodyElement {
                    fragment: &xml[start..stop],
                    is_fault: e.local_name().as_ref() == b"Fault",
                });
            }
            Event::End(_) if in_body => return Err(SoapError::MissingBody),
            Event::Eof => return Err(SoapError::MissingBody),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::{
        CatalogProductInfoRequestParam, CatalogProductInfoResponseParam,
        CatalogProductRequestAttributes, LoginParam, LoginResponseParam, StartSessionParam,
    };

    #[test]
    fn test_encode_login_uses_wire_names() {
        let xml = encode(&LoginParam::credentials("magento", "s3cr&t")).unwrap();

        assert!(xml.contains(r#"xmlns:urn="urn:Magento""#));
        assert!(xml.contains("<urn:loginParam>"));
        assert!(xml.contains("<username>magento</username>"));
        assert!(xml.contains("<apiKey>s3cr&amp;t</apiKey>"));
        assert!(xml.ends_with("</soapenv:Body></soapenv:Envelope>"));
    }

    #[test]
    fn test_encode_skips_absent_fields() {
        let request = CatalogProductInfoRequestParam::new()
            .with_session_id("abc")
            .with_product_id("42")
            .with_attributes(CatalogProductRequestAttributes::additional_only(
                vec!["color".to_string(), "size".to_string()].into(),
            ));
        let xml = encode(&request).unwrap();

        assert!(xml.contains("<sessionId>abc</sessionId>"));
        assert!(xml.contains("<productId>42</productId>"));
        assert!(!xml.contains("<store>"));
        assert!(!xml.contains("identifierType"));
        assert!(xml.contains(
            "<additional_attributes><complexObjectArray>color</complexObjectArray><complexObjectArray>size</complexObjectArray></additional_attributes>"
        ));
    }

    #[test]
    fn test_encode_empty_request() {
        let xml = encode(&StartSessionParam::new()).unwrap();
        assert!(xml.contains("<urn:startSessionParam/>") || xml.contains("<urn:startSessionParam></urn:startSessionParam>"));
    }

    #[test]
    fn test_decode_reply() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="urn:Magento">
  <SOAP-ENV:Body>
    <ns1:loginResponseParam><result>0f4c2bd1e8</result></ns1:loginResponseParam>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

        let reply: LoginResponseParam = decode(xml).unwrap();
        assert_eq!(reply.result.as_deref(), Some("0f4c2bd1e8"));
    }

    #[test]
    fn test_decode_nested_arrays() {
        let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="urn:Magento"><SOAP-ENV:Body>
<ns1:catalogProductInfoResponseParam><result>
  <product_id>42</product_id><sku>W-1</sku><set>4</set><type>simple</type>
  <additional_attributes>
    <complexObjectArray><key>name</key><value>Widget</value></complexObjectArray>
    <complexObjectArray><key>color</key><value>red</value></complexObjectArray>
  </additional_attributes>
</result></ns1:catalogProductInfoResponseParam>
</SOAP-ENV:Body></SOAP-ENV:Envelope>"#;

        let reply: CatalogProductInfoResponseParam = decode(xml).unwrap();
        let product = reply.result.unwrap();
        assert_eq!(product.product_id.as_deref(), Some("42"));
        assert_eq!(product.kind.as_deref(), Some("simple"));
        let attrs = product.additional_attributes.unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("color"), Some("red"));
        assert_eq!(product.description, None);
    }

    #[test]
    fn test_decode_fault() {
        let xml = r#"<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/"><SOAP-ENV:Body>
<SOAP-ENV:Fault><faultcode>2</faultcode><faultstring>Access denied.</faultstring></SOAP-ENV:Fault>
</SOAP-ENV:Body></SOAP-ENV:Envelope>"#;

        let err = decode::<LoginResponseParam>(xml).unwrap_err();
        assert_eq!(
            err,
            SoapError::Fault { code: "2".into(), message: "Access denied.".into() }
        );
        assert!(err.is_fault());
    }

    #[test]
    fn test_decode_missing_body() {
        let empty = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"><soapenv:Body></soapenv:Body></soapenv:Envelope>"#;
        assert_eq!(decode::<LoginResponseParam>(empty).unwrap_err(), SoapError::MissingBody);

        let no_body = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/"/>"#;
        assert_eq!(decode::<LoginResponseParam>(no_body).unwrap_err(), SoapError::MissingBody);
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            decode::<LoginResponseParam>("<a><b></a>"),
            Err(SoapError::Decode(_)) | Err(SoapError::MissingBody)
        ));
    }
}
