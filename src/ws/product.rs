//! Catalog products: listing, details, create/update/delete, special prices and
//! product types.

use super::common::{ArrayOfString, AssociativeArray, Filters};
use super::inventory::CatalogInventoryStockItemUpdateEntity;

magento_array! {
    CatalogProductEntityArray => "catalogProductEntityArray" [CatalogProductEntity]
    CatalogProductCreateEntityArray => "catalogProductCreateEntityArray" [CatalogProductCreateEntity]
    CatalogProductTierPriceEntityArray => "catalogProductTierPriceEntityArray" [CatalogProductTierPriceEntity]
    CatalogProductTypeEntityArray => "catalogProductTypeEntityArray" [CatalogProductTypeEntity]
}

magento_entity! {
    /// Summary row returned by `catalogProductList`. `set` is the attribute set id
    /// as a decimal string.
    CatalogProductEntity => "catalogProductEntity" {
        product_id: String,
        sku: String,
        name: String,
        set: String,
        #[serde(rename = "type")]
        kind: String,
        category_ids: ArrayOfString,
        website_ids: ArrayOfString,
    }

    /// Full product returned by `catalogProductInfo`. Attributes requested through
    /// `additional_attributes` come back as key/value pairs.
    CatalogProductReturnEntity => "catalogProductReturnEntity" {
        product_id: String,
        sku: String,
        set: String,
        #[serde(rename = "type")]
        kind: String,
        categories: ArrayOfString,
        websites: ArrayOfString,
        created_at: String,
        updated_at: String,
        type_id: String,
        name: String,
        description: String,
        short_description: String,
        weight: String,
        status: String,
        url_key: String,
        url_path: String,
        visibility: String,
        category_ids: ArrayOfString,
        website_ids: ArrayOfString,
        has_options: String,
        gift_message_available: String,
        price: String,
        special_price: String,
        special_from_date: String,
        special_to_date: String,
        tax_class_id: String,
        tier_price: CatalogProductTierPriceEntityArray,
        meta_title: String,
        meta_keyword: String,
        meta_description: String,
        custom_design: String,
        custom_layout_update: String,
        options_container: String,
        additional_attributes: AssociativeArray,
        enable_googlecheckout: String,
    }

    /// Payload for `catalogProductCreate`, `catalogProductUpdate` and `catalogProductMultiUpdate`.
    CatalogProductCreateEntity => "catalogProductCreateEntity" {
        categories: ArrayOfString,
        websites: ArrayOfString,
        name: String,
        description: String,
        short_description: String,
        weight: String,
        status: String,
        url_key: String,
        url_path: String,
        visibility: String,
        category_ids: ArrayOfString,
        website_ids: ArrayOfString,
        has_options: String,
        gift_message_available: String,
        price: String,
        special_price: String,
        special_from_date: String,
        special_to_date: String,
        tax_class_id: String,
        tier_price: CatalogProductTierPriceEntityArray,
        meta_title: String,
        meta_keyword: String,
        meta_description: String,
        custom_design: String,
        custom_layout_update: String,
        options_container: String,
        additional_attributes: AssociativeArray,
        stock_data: CatalogInventoryStockItemUpdateEntity,
    }

    /// Selects which attributes `catalogProductInfo` returns. `attributes` names
    /// standard attributes, `additional_attributes` names everything else.
    CatalogProductRequestAttributes => "catalogProductRequestAttributes" {
        attributes: ArrayOfString,
        additional_attributes: ArrayOfString,
    }

    CatalogProductTierPriceEntity => "catalogProductTierPriceEntity" {
        customer_group_id: String,
        website: String,
        qty: i32,
        price: f64,
    }

    CatalogProductSpecialPriceReturnEntity => "catalogProductSpecialPriceReturnEntity" {
        special_price: String,
        special_from_date: String,
        special_to_date: String,
    }

    CatalogProductTypeEntity => "catalogProductTypeEntity" {
        #[serde(rename = "type")]
        kind: String,
        label: String,
    }
}

magento_operation! {
    operation "catalogProductCurrentStore" {
        request CatalogProductCurrentStoreRequestParam => "catalogProductCurrentStoreRequestParam" {
            session_id: String,
            store: String,
        }
        response CatalogProductCurrentStoreResponseParam => "catalogProductCurrentStoreResponseParam" {
            result: i32,
        }
    }

    /// Lists products, optionally filtered. Without filters the whole catalog comes back.
    operation "catalogProductList" {
        request CatalogProductListRequestParam => "catalogProductListRequestParam" {
            session_id: String,
            filters: Filters,
            store: String,
        }
        response CatalogProductListResponseParam => "catalogProductListResponseParam" {
            result: CatalogProductEntityArray,
        }
    }

    /// Loads one product. `identifier_type` is `id` or `sku` and tells Magento how
    /// to read `product_id`.
    operation "catalogProductInfo" {
        request CatalogProductInfoRequestParam => "catalogProductInfoRequestParam" {
            session_id: String,
            product_id: String,
            store: String,
            attributes: CatalogProductRequestAttributes,
            identifier_type: String,
        }
        response CatalogProductInfoResponseParam => "catalogProductInfoResponseParam" {
            result: CatalogProductReturnEntity,
        }
    }

    operation "catalogProductCreate" {
        request CatalogProductCreateRequestParam => "catalogProductCreateRequestParam" {
            session_id: String,
            #[serde(rename = "type")]
            kind: String,
            set: String,
            sku: String,
            product_data: CatalogProductCreateEntity,
            store: String,
        }
        response CatalogProductCreateResponseParam => "catalogProductCreateResponseParam" {
            result: i32,
        }
    }

    operation "catalogProductUpdate" {
        request CatalogProductUpdateRequestParam => "catalogProductUpdateRequestParam" {
            session_id: String,
            product_id: String,
            product_data: CatalogProductCreateEntity,
            store: String,
            identifier_type: String,
        }
        response CatalogProductUpdateResponseParam => "catalogProductUpdateResponseParam" {
            result: bool,
        }
    }

    /// Applies `product_data[i]` to `product_ids[i]`.
    operation "catalogProductMultiUpdate" {
        request CatalogProductMultiUpdateRequestParam => "catalogProductMultiUpdateRequestParam" {
            session_id: String,
            product_ids: ArrayOfString,
            product_data: CatalogProductCreateEntityArray,
            store: String,
            identifier_type: String,
        }
        response CatalogProductMultiUpdateResponseParam => "catalogProductMultiUpdateResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductDelete" {
        request CatalogProductDeleteRequestParam => "catalogProductDeleteRequestParam" {
            session_id: String,
            product_id: String,
            identifier_type: String,
        }
        response CatalogProductDeleteResponseParam => "catalogProductDeleteResponseParam" {
            result: i32,
        }
    }

    operation "catalogProductSetSpecialPrice" {
        request CatalogProductSetSpecialPriceRequestParam => "catalogProductSetSpecialPriceRequestParam" {
            session_id: String,
            product_id: String,
            special_price: String,
            from_date: String,
            to_date: String,
            store: String,
            identifier_type: String,
        }
        response CatalogProductSetSpecialPriceResponseParam => "catalogProductSetSpecialPriceResponseParam" {
            result: i32,
        }
    }

    operation "catalogProductGetSpecialPrice" {
        request CatalogProductGetSpecialPriceRequestParam => "catalogProductGetSpecialPriceRequestParam" {
            session_id: String,
            product_id: String,
            store: String,
            identifier_type: String,
        }
        response CatalogProductGetSpecialPriceResponseParam => "catalogProductGetSpecialPriceResponseParam" {
            result: CatalogProductSpecialPriceReturnEntity,
        }
    }

    operation "catalogProductTypeList" {
        request CatalogProductTypeListRequestParam => "catalogProductTypeListRequestParam" {
            session_id: String,
        }
        response CatalogProductTypeListResponseParam => "catalogProductTypeListResponseParam" {
            result: CatalogProductTypeEntityArray,
        }
    }
}

impl CatalogProductEntity {
    /// Attribute set id parsed from `set`.
    pub fn set_id(&self) -> Option<Result<i32, std::num::ParseIntError>> {
        self.set.as_deref().map(|set| set.trim().parse())
    }
}

impl CatalogProductRequestAttributes {
    /// Requests only the given non-standard attributes. The standard list is sent
    /// empty so Magento does not fall back to returning every attribute.
    pub fn additional_only(codes: ArrayOfString) -> Self {
        Self::new()
            .with_attributes(ArrayOfString::new())
            .with_additional_attributes(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_id_parsing() {
        let product = CatalogProductEntity::new().with_set("4");
        assert_eq!(product.set_id(), Some(Ok(4)));

        let broken = CatalogProductEntity::new().with_set("default");
        assert!(matches!(broken.set_id(), Some(Err(_))));

        assert_eq!(CatalogProductEntity::new().set_id(), None);
    }

    #[test]
    fn test_additional_only_keeps_empty_standard_list() {
        let codes: ArrayOfString = vec!["color".to_string()].into();
        let attrs = CatalogProductRequestAttributes::additional_only(codes);

        assert_eq!(attrs.attributes, Some(ArrayOfString::new()));
        assert_eq!(attrs.additional_attributes.map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_return_entity_type_and_attributes() {
        let product = CatalogProductReturnEntity::new()
            .with_product_id("10")
            .with_kind("simple")
            .with_additional_attributes(AssociativeArray::new());

        assert_eq!(product.kind.as_deref(), Some("simple"));
        assert_eq!(product.enable_googlecheckout, None);
        assert!(product.additional_attributes.is_some());
    }

    #[test]
    fn test_create_entity_carries_stock_data() {
        let create = CatalogProductCreateEntity::new()
            .with_stock_data(CatalogInventoryStockItemUpdateEntity::new().with_qty("10"));
        let qty = create.stock_data.as_ref().and_then(|s| s.qty.as_deref());
        assert_eq!(qty, Some("10"));
    }
}
