//! Product custom options and their selectable values.

magento_array! {
    CatalogProductCustomOptionAdditionalFieldsArray => "catalogProductCustomOptionAdditionalFieldsArray" [CatalogProductCustomOptionAdditionalFieldsEntity]
    CatalogProductCustomOptionListArray => "catalogProductCustomOptionListArray" [CatalogProductCustomOptionListEntity]
    CatalogProductCustomOptionTypesArray => "catalogProductCustomOptionTypesArray" [CatalogProductCustomOptionTypesEntity]
    CatalogProductCustomOptionValueListArray => "catalogProductCustomOptionValueListArray" [CatalogProductCustomOptionValueListEntity]
    CatalogProductCustomOptionValueAddArray => "catalogProductCustomOptionValueAddArray" [CatalogProductCustomOptionValueAddEntity]
}

magento_entity! {
    /// Type specific settings. Text options use `max_characters`, file options use
    /// the extension and image size limits, select options carry `value_id`.
    CatalogProductCustomOptionAdditionalFieldsEntity => "catalogProductCustomOptionAdditionalFieldsEntity" {
        title: String,
        price: String,
        price_type: String,
        sku: String,
        max_characters: String,
        sort_order: String,
        file_extension: String,
        image_size_x: String,
        image_size_y: String,
        value_id: String,
    }

    CatalogProductCustomOptionToAdd => "catalogProductCustomOptionToAdd" {
        title: String,
        #[serde(rename = "type")]
        kind: String,
        sort_order: String,
        is_require: i32,
        additional_fields: CatalogProductCustomOptionAdditionalFieldsArray,
    }

    CatalogProductCustomOptionToUpdate => "catalogProductCustomOptionToUpdate" {
        title: String,
        #[serde(rename = "type")]
        kind: String,
        sort_order: String,
        is_require: i32,
        additional_fields: CatalogProductCustomOptionAdditionalFieldsArray,
    }

    CatalogProductCustomOptionInfoEntity => "catalogProductCustomOptionInfoEntity" {
        title: String,
        #[serde(rename = "type")]
        kind: String,
        sort_order: String,
        is_require: i32,
        additional_fields: CatalogProductCustomOptionAdditionalFieldsArray,
    }

    CatalogProductCustomOptionListEntity => "catalogProductCustomOptionListEntity" {
        option_id: String,
        title: String,
        #[serde(rename = "type")]
        kind: String,
        sort_order: String,
        is_require: i32,
    }

    CatalogProductCustomOptionTypesEntity => "catalogProductCustomOptionTypesEntity" {
        label: String,
        value: String,
    }

    CatalogProductCustomOptionValueListEntity => "catalogProductCustomOptionValueListEntity" {
        value_id: String,
        title: String,
        price: String,
        price_type: String,
        sku: String,
        sort_order: String,
    }

    /// One value of a select option. `default_*` fields are the admin store
    /// values, `store_*` the values of the requested store view.
    CatalogProductCustomOptionValueInfoEntity => "catalogProductCustomOptionValueInfoEntity" {
        value_id: String,
        option_id: String,
        sku: String,
        sort_order: String,
        default_price: String,
        default_price_type: String,
        store_price: String,
        store_price_type: String,
        price: String,
        price_type: String,
        default_title: String,
        store_title: String,
        title: String,
    }

    CatalogProductCustomOptionValueAddEntity => "catalogProductCustomOptionValueAddEntity" {
        title: String,
        price: String,
        price_type: String,
        sku: String,
        sort_order: i32,
    }

    CatalogProductCustomOptionValueUpdateEntity => "catalogProductCustomOptionValueUpdateEntity" {
        title: String,
        price: String,
        price_type: String,
        sku: String,
        sort_order: i32,
    }
}

magento_operation! {
    operation "catalogProductCustomOptionAdd" {
        request CatalogProductCustomOptionAddRequestParam => "catalogProductCustomOptionAddRequestParam" {
            session_id: String,
            product_id: String,
            data: CatalogProductCustomOptionToAdd,
            store: String,
        }
        response CatalogProductCustomOptionAddResponseParam => "catalogProductCustomOptionAddResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductCustomOptionUpdate" {
        request CatalogProductCustomOptionUpdateRequestParam => "catalogProductCustomOptionUpdateRequestParam" {
            session_id: String,
            option_id: String,
            data: CatalogProductCustomOptionToUpdate,
            store: String,
        }
        response CatalogProductCustomOptionUpdateResponseParam => "catalogProductCustomOptionUpdateResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductCustomOptionTypes" {
        request CatalogProductCustomOptionTypesRequestParam => "catalogProductCustomOptionTypesRequestParam" {
            session_id: String,
        }
        response CatalogProductCustomOptionTypesResponseParam => "catalogProductCustomOptionTypesResponseParam" {
            result: CatalogProductCustomOptionTypesArray,
        }
    }

    operation "catalogProductCustomOptionInfo" {
        request CatalogProductCustomOptionInfoRequestParam => "catalogProductCustomOptionInfoRequestParam" {
            session_id: String,
            option_id: String,
            store: String,
        }
        response CatalogProductCustomOptionInfoResponseParam => "catalogProductCustomOptionInfoResponseParam" {
            result: CatalogProductCustomOptionInfoEntity,
        }
    }

    operation "catalogProductCustomOptionList" {
        request CatalogProductCustomOptionListRequestParam => "catalogProductCustomOptionListRequestParam" {
            session_id: String,
            product_id: String,
            store: String,
        }
        response CatalogProductCustomOptionListResponseParam => "catalogProductCustomOptionListResponseParam" {
            result: CatalogProductCustomOptionListArray,
        }
    }

    operation "catalogProductCustomOptionRemove" {
        request CatalogProductCustomOptionRemoveRequestParam => "catalogProductCustomOptionRemoveRequestParam" {
            session_id: String,
            option_id: String,
        }
        response CatalogProductCustomOptionRemoveResponseParam => "catalogProductCustomOptionRemoveResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductCustomOptionValueList" {
        request CatalogProductCustomOptionValueListRequestParam => "catalogProductCustomOptionValueListRequestParam" {
            session_id: String,
            option_id: String,
            store: String,
        }
        response CatalogProductCustomOptionValueListResponseParam => "catalogProductCustomOptionValueListResponseParam" {
            result: CatalogProductCustomOptionValueListArray,
        }
    }

    operation "catalogProductCustomOptionValueInfo" {
        request CatalogProductCustomOptionValueInfoRequestParam => "catalogProductCustomOptionValueInfoRequestParam" {
            session_id: String,
            value_id: String,
            store: String,
        }
        response CatalogProductCustomOptionValueInfoResponseParam => "catalogProductCustomOptionValueInfoResponseParam" {
            result: CatalogProductCustomOptionValueInfoEntity,
        }
    }

    operation "catalogProductCustomOptionValueAdd" {
        request CatalogProductCustomOptionValueAddRequestParam => "catalogProductCustomOptionValueAddRequestParam" {
            session_id: String,
            option_id: String,
            data: CatalogProductCustomOptionValueAddArray,
            store: String,
        }
        response CatalogProductCustomOptionValueAddResponseParam => "catalogProductCustomOptionValueAddResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductCustomOptionValueUpdate" {
        request CatalogProductCustomOptionValueUpdateRequestParam => "catalogProductCustomOptionValueUpdateRequestParam" {
            session_id: String,
            value_id: String,
            data: CatalogProductCustomOptionValueUpdateEntity,
            store_id: String,
        }
        response CatalogProductCustomOptionValueUpdateResponseParam => "catalogProductCustomOptionValueUpdateResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductCustomOptionValueRemove" {
        request CatalogProductCustomOptionValueRemoveRequestParam => "catalogProductCustomOptionValueRemoveRequestParam" {
            session_id: String,
            value_id: String,
        }
        response CatalogProductCustomOptionValueRemoveResponseParam => "catalogProductCustomOptionValueRemoveResponseParam" {
            result: bool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::{MagentoType, SoapRequest};

    #[test]
    fn test_value_info_store_overrides() {
        let value = CatalogProductCustomOptionValueInfoEntity::new()
            .with_default_title("Red")
            .with_store_title("Rouge")
            .with_title("Rouge");

        assert_eq!(value.default_title.as_deref(), Some("Red"));
        assert_eq!(value.title.as_deref(), Some("Rouge"));
        assert_eq!(value.price, None);
    }

    #[test]
    fn test_option_kind_and_fields() {
        let option = CatalogProductCustomOptionToAdd::new()
            .with_title("Engraving")
            .with_kind("field")
            .with_is_require(1)
            .with_additional_fields(CatalogProductCustomOptionAdditionalFieldsArray::from(vec![
                CatalogProductCustomOptionAdditionalFieldsEntity::new().with_max_characters("20"),
            ]));

        assert_eq!(option.kind.as_deref(), Some("field"));
        assert_eq!(option.additional_fields.map(|f| f.len()), Some(1));
        assert_eq!(CatalogProductCustomOptionToAdd::XML_TYPE, "catalogProductCustomOptionToAdd");
    }

    #[test]
    fn test_value_update_uses_store_id() {
        assert_eq!(
            CatalogProductCustomOptionValueUpdateRequestParam::OPERATION,
            "catalogProductCustomOptionValueUpdate"
        );
        let request = CatalogProductCustomOptionValueUpdateRequestParam::new().with_store_id("1");
        assert_eq!(request.store_id.as_deref(), Some("1"));
    }
}
