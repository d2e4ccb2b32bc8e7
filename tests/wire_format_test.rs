use sitewhere_magento::soap::{envelope, SoapError};
use sitewhere_magento::ws::{
    AssociativeEntity, CatalogProductAttributeMediaListResponseParam, CatalogProductListRequestParam,
    CatalogProductListResponseParam, CustomerCustomerEntity, Filters, ObjectFactory,
    SalesOrderInfoResponseParam, SalesOrderListRequestParam, ShoppingCartProductAddRequestParam,
    ShoppingCartProductEntity, ShoppingCartProductEntityArray,
};

fn reply(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="urn:Magento">
<SOAP-ENV:Body>{}</SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#,
        body
    )
}

#[test]
fn test_filters_on_the_wire() {
    let request = CatalogProductListRequestParam::new()
        .with_session_id("s1")
        .with_filters(Filters::equals("type", "simple"))
        .with_store("default");
    let xml = envelope::encode(&request).unwrap();

    assert!(xml.contains("<urn:catalogProductListRequestParam>"));
    assert!(xml.contains(
        "<filters><filter><complexObjectArray><key>type</key><value>simple</value></complexObjectArray></filter></filters>"
    ));
    assert!(xml.contains("<store>default</store>"));
}

#[test]
fn test_snake_case_operation_parameters() {
    let request = SalesOrderListRequestParam::new().with_session_id("s1");
    let xml = envelope::encode(&request).unwrap();
    assert!(xml.contains("<sessionId>s1</sessionId>"));

    let add = ShoppingCartProductAddRequestParam::new()
        .with_session_id("s1")
        .with_quote_id(12)
        .with_products_data(ShoppingCartProductEntityArray::from(vec![
            ShoppingCartProductEntity::new().with_sku("W-1").with_qty(2.0),
        ]));
    let xml = envelope::encode(&add).unwrap();
    assert!(xml.contains("<quoteId>12</quoteId>"));
    assert!(xml.contains("<sku>W-1</sku>"));
}

#[test]
fn test_product_list_reply() {
    let xml = reply(
        r#"<ns1:catalogProductListResponseParam><result>
<complexObjectArray><product_id>1</product_id><sku>A</sku><set>4</set><type>simple</type>
  <category_ids><complexObjectArray>3</complexObjectArray><complexObjectArray>5</complexObjectArray></category_ids>
</complexObjectArray>
<complexObjectArray><product_id>2</product_id><sku>B</sku><set>9</set></complexObjectArray>
</result></ns1:catalogProductListResponseParam>"#,
    );

    let products = envelope::decode::<CatalogProductListResponseParam>(&xml)
        .unwrap()
        .result
        .unwrap();
    assert_eq!(products.len(), 2);
    let first = &products.items()[0];
    assert_eq!(first.set_id(), Some(Ok(4)));
    assert_eq!(first.category_ids.as_ref().map(|c| c.len()), Some(2));
    assert_eq!(products.items()[1].kind, None);
}

#[test]
fn test_empty_media_list() {
    let xml = reply("<ns1:catalogProductAttributeMediaListResponseParam><result/></ns1:catalogProductAttributeMediaListResponseParam>");
    let media = envelope::decode::<CatalogProductAttributeMediaListResponseParam>(&xml).unwrap();
    assert!(media.result.unwrap_or_default().is_empty());
}

#[test]
fn test_order_reply_with_nested_records() {
    let xml = reply(
        r#"<ns1:salesOrderInfoResponseParam><result>
<increment_id>100000001</increment_id><grand_total>25.5000</grand_total>
<billing_address><firstname>Ada</firstname><city>London</city></billing_address>
<items><complexObjectArray><sku>W-1</sku><qty_ordered>2.0000</qty_ordered></complexObjectArray></items>
</result></ns1:salesOrderInfoResponseParam>"#,
    );

    let order = envelope::decode::<SalesOrderInfoResponseParam>(&xml).unwrap().result.unwrap();
    assert_eq!(order.increment_id.as_deref(), Some("100000001"));
    assert_eq!(order.grand_total.as_deref(), Some("25.5000"));
    assert_eq!(order.billing_address.and_then(|a| a.city).as_deref(), Some("London"));
    assert_eq!(order.items.map(|i| i.len()), Some(1));
    assert_eq!(order.shipping_address, None);
}

#[test]
fn test_fault_with_detail() {
    let xml = reply(
        "<SOAP-ENV:Fault><faultcode>5</faultcode><faultstring>Session expired. Try to relogin.</faultstring><detail/></SOAP-ENV:Fault>",
    );
    let err = envelope::decode::<CatalogProductListResponseParam>(&xml).unwrap_err();
    assert_eq!(
        err,
        SoapError::Fault { code: "5".into(), message: "Session expired. Try to relogin.".into() }
    );
}

#[test]
fn test_factory_records_encode_empty() {
    let customer: CustomerCustomerEntity = ObjectFactory::create();
    assert_eq!(customer, CustomerCustomerEntity::default());

    let pair: AssociativeEntity = ObjectFactory::create();
    assert_eq!(pair.key, None);
}
