//! Product attributes and attribute sets, plus tier prices (which Magento files
//! under the attribute resource).

use super::category::{CatalogAttributeEntityArray, CatalogAttributeOptionEntityArray};
use super::common::{ArrayOfString, AssociativeArray};
use super::product::CatalogProductTierPriceEntityArray;

magento_array! {
    CatalogProductAttributeSetEntityArray => "catalogProductAttributeSetEntityArray" [CatalogProductAttributeSetEntity]
    CatalogProductAttributeFrontendLabelArray => "catalogProductAttributeFrontendLabelArray" [CatalogProductAttributeFrontendLabelEntity]
    CatalogProductAttributeOptionLabelArray => "catalogProductAttributeOptionLabelArray" [CatalogProductAttributeOptionLabelEntity]
}

magento_entity! {
    CatalogProductAttributeSetEntity => "catalogProductAttributeSetEntity" {
        set_id: i32,
        name: String,
    }

    /// Full attribute definition returned by `catalogProductAttributeInfo`.
    CatalogProductAttributeEntity => "catalogProductAttributeEntity" {
        attribute_id: String,
        attribute_code: String,
        frontend_input: String,
        scope: String,
        default_value: String,
        is_unique: i32,
        is_required: i32,
        apply_to: ArrayOfString,
        is_configurable: i32,
        is_searchable: i32,
        is_visible_in_advanced_search: i32,
        is_comparable: i32,
        is_used_for_promo_rules: i32,
        is_visible_on_front: i32,
        used_in_product_listing: i32,
        additional_fields: AssociativeArray,
        options: CatalogAttributeOptionEntityArray,
        frontend_label: CatalogProductAttributeFrontendLabelArray,
    }

    CatalogProductAttributeEntityToCreate => "catalogProductAttributeEntityToCreate" {
        attribute_code: String,
        frontend_input: String,
        scope: String,
        default_value: String,
        is_unique: i32,
        is_required: i32,
        apply_to: ArrayOfString,
        is_configurable: i32,
        is_searchable: i32,
        is_visible_in_advanced_search: i32,
        is_comparable: i32,
        is_used_for_promo_rules: i32,
        is_visible_on_front: i32,
        used_in_product_listing: i32,
        additional_fields: AssociativeArray,
        frontend_label: CatalogProductAttributeFrontendLabelArray,
    }

    CatalogProductAttributeEntityToUpdate => "catalogProductAttributeEntityToUpdate" {
        scope: String,
        default_value: String,
        is_unique: i32,
        is_required: i32,
        apply_to: ArrayOfString,
        is_configurable: i32,
        is_searchable: i32,
        is_visible_in_advanced_search: i32,
        is_comparable: i32,
        is_used_for_promo_rules: i32,
        is_visible_on_front: i32,
        used_in_product_listing: i32,
        additional_fields: AssociativeArray,
        frontend_label: CatalogProductAttributeFrontendLabelArray,
    }

    /// Store-specific label of an attribute. Both elements are declared in the
    /// empty namespace, see [`ObjectFactory`](crate::ws::ObjectFactory).
    CatalogProductAttributeFrontendLabelEntity => "catalogProductAttributeFrontendLabelEntity" {
        store_id: String,
        label: String,
    }

    CatalogProductAttributeOptionLabelEntity => "catalogProductAttributeOptionLabelEntity" {
        store_id: ArrayOfString,
        value: String,
    }

    CatalogProductAttributeOptionEntityToAdd => "catalogProductAttributeOptionEntityToAdd" {
        label: CatalogProductAttributeOptionLabelArray,
        order: i32,
        is_default: i32,
    }
}

magento_operation! {
    operation "catalogProductAttributeCurrentStore" {
        request CatalogProductAttributeCurrentStoreRequestParam => "catalogProductAttributeCurrentStoreRequestParam" {
            session_id: String,
            store: String,
        }
        response CatalogProductAttributeCurrentStoreResponseParam => "catalogProductAttributeCurrentStoreResponseParam" {
            result: i32,
        }
    }

    /// Attributes belonging to one attribute set.
    operation "catalogProductAttributeList" {
        request CatalogProductAttributeListRequestParam => "catalogProductAttributeListRequestParam" {
            session_id: String,
            set_id: i32,
        }
        response CatalogProductAttributeListResponseParam => "catalogProductAttributeListResponseParam" {
            result: CatalogAttributeEntityArray,
        }
    }

    operation "catalogProductAttributeOptions" {
        request CatalogProductAttributeOptionsRequestParam => "catalogProductAttributeOptionsRequestParam" {
            session_id: String,
            attribute_id: String,
            store: String,
        }
        response CatalogProductAttributeOptionsResponseParam => "catalogProductAttributeOptionsResponseParam" {
            result: CatalogAttributeOptionEntityArray,
        }
    }

    operation "catalogProductAttributeAddOption" {
        request CatalogProductAttributeAddOptionRequestParam => "catalogProductAttributeAddOptionRequestParam" {
            session_id: String,
            attribute: String,
            data: CatalogProductAttributeOptionEntityToAdd,
        }
        response CatalogProductAttributeAddOptionResponseParam => "catalogProductAttributeAddOptionResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeCreate" {
        request CatalogProductAttributeCreateRequestParam => "catalogProductAttributeCreateRequestParam" {
            session_id: String,
            data: CatalogProductAttributeEntityToCreate,
        }
        response CatalogProductAttributeCreateResponseParam => "catalogProductAttributeCreateResponseParam" {
            result: i32,
        }
    }

    operation "catalogProductAttributeUpdate" {
        request CatalogProductAttributeUpdateRequestParam => "catalogProductAttributeUpdateRequestParam" {
            session_id: String,
            attribute: String,
            data: CatalogProductAttributeEntityToUpdate,
        }
        response CatalogProductAttributeUpdateResponseParam => "catalogProductAttributeUpdateResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeRemove" {
        request CatalogProductAttributeRemoveRequestParam => "catalogProductAttributeRemoveRequestParam" {
            session_id: String,
            attribute: String,
        }
        response CatalogProductAttributeRemoveResponseParam => "catalogProductAttributeRemoveResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeInfo" {
        request CatalogProductAttributeInfoRequestParam => "catalogProductAttributeInfoRequestParam" {
            session_id: String,
            attribute: String,
        }
        response CatalogProductAttributeInfoResponseParam => "catalogProductAttributeInfoResponseParam" {
            result: CatalogProductAttributeEntity,
        }
    }

    operation "catalogProductAttributeSetList" {
        request CatalogProductAttributeSetListRequestParam => "catalogProductAttributeSetListRequestParam" {
            session_id: String,
        }
        response CatalogProductAttributeSetListResponseParam => "catalogProductAttributeSetListResponseParam" {
            result: CatalogProductAttributeSetEntityArray,
        }
    }

    /// Creates a set from the skeleton set's groups and attributes.
    operation "catalogProductAttributeSetCreate" {
        request CatalogProductAttributeSetCreateRequestParam => "catalogProductAttributeSetCreateRequestParam" {
            session_id: String,
            attribute_set_name: String,
            skeleton_set_id: i32,
        }
        response CatalogProductAttributeSetCreateResponseParam => "catalogProductAttributeSetCreateResponseParam" {
            result: i32,
        }
    }

    operation "catalogProductAttributeSetRemove" {
        request CatalogProductAttributeSetRemoveRequestParam => "catalogProductAttributeSetRemoveRequestParam" {
            session_id: String,
            attribute_set_id: String,
            force_products_remove: String,
        }
        response CatalogProductAttributeSetRemoveResponseParam => "catalogProductAttributeSetRemoveResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeSetAttributeAdd" {
        request CatalogProductAttributeSetAttributeAddRequestParam => "catalogProductAttributeSetAttributeAddRequestParam" {
            session_id: String,
            attribute_id: String,
            attribute_set_id: String,
            attribute_group_id: String,
            sort_order: String,
        }
        response CatalogProductAttributeSetAttributeAddResponseParam => "catalogProductAttributeSetAttributeAddResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeSetAttributeRemove" {
        request CatalogProductAttributeSetAttributeRemoveRequestParam => "catalogProductAttributeSetAttributeRemoveRequestParam" {
            session_id: String,
            attribute_id: String,
            attribute_set_id: String,
        }
        response CatalogProductAttributeSetAttributeRemoveResponseParam => "catalogProductAttributeSetAttributeRemoveResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeSetGroupAdd" {
        request CatalogProductAttributeSetGroupAddRequestParam => "catalogProductAttributeSetGroupAddRequestParam" {
            session_id: String,
            attribute_set_id: String,
            group_name: String,
        }
        response CatalogProductAttributeSetGroupAddResponseParam => "catalogProductAttributeSetGroupAddResponseParam" {
            result: i32,
        }
    }

    operation "catalogProductAttributeSetGroupRename" {
        request CatalogProductAttributeSetGroupRenameRequestParam => "catalogProductAttributeSetGroupRenameRequestParam" {
            session_id: String,
            group_id: String,
            group_name: String,
        }
        response CatalogProductAttributeSetGroupRenameResponseParam => "catalogProductAttributeSetGroupRenameResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeSetGroupRemove" {
        request CatalogProductAttributeSetGroupRemoveRequestParam => "catalogProductAttributeSetGroupRemoveRequestParam" {
            session_id: String,
            attribute_group_id: String,
        }
        response CatalogProductAttributeSetGroupRemoveResponseParam => "catalogProductAttributeSetGroupRemoveResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeTierPriceInfo" {
        request CatalogProductAttributeTierPriceInfoRequestParam => "catalogProductAttributeTierPriceInfoRequestParam" {
            session_id: String,
            product_id: String,
            identifier_type: String,
        }
        response CatalogProductAttributeTierPriceInfoResponseParam => "catalogProductAttributeTierPriceInfoResponseParam" {
            result: CatalogProductTierPriceEntityArray,
        }
    }

    operation "catalogProductAttributeTierPriceUpdate" {
        request CatalogProductAttributeTierPriceUpdateRequestParam => "catalogProductAttributeTierPriceUpdateRequestParam" {
            session_id: String,
            product_id: String,
            #[serde(rename = "tier_price")]
            tier_price: CatalogProductTierPriceEntityArray,
            identifier_type: String,
        }
        response CatalogProductAttributeTierPriceUpdateResponseParam => "catalogProductAttributeTierPriceUpdateResponseParam" {
            result: i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::SoapRequest;

    #[test]
    fn test_attribute_list_request() {
        let request = CatalogProductAttributeListRequestParam::new()
            .with_session_id("abc")
            .with_set_id(4);

        assert_eq!(request.session_id.as_deref(), Some("abc"));
        assert_eq!(request.set_id, Some(4));
        assert_eq!(CatalogProductAttributeListRequestParam::OPERATION, "catalogProductAttributeList");
    }

    #[test]
    fn test_option_to_add_labels() {
        let label = CatalogProductAttributeOptionLabelEntity::new()
            .with_store_id(vec!["0".to_string(), "1".to_string()])
            .with_value("Blue");
        let option = CatalogProductAttributeOptionEntityToAdd::new()
            .with_label(CatalogProductAttributeOptionLabelArray::from(vec![label]))
            .with_order(1)
            .with_is_default(0);

        assert_eq!(option.order, Some(1));
        let stores = option
            .label
            .as_ref()
            .and_then(|labels| labels.items().first())
            .and_then(|label| label.store_id.as_ref())
            .map(|stores| stores.len());
        assert_eq!(stores, Some(2));
    }
}
