//! Product links (related, up-sell, cross-sell, grouped).

use super::common::ArrayOfString;

magento_array! {
    CatalogProductLinkEntityArray => "catalogProductLinkEntityArray" [CatalogProductLinkEntity]
    CatalogProductLinkAttributeEntityArray => "catalogProductLinkAttributeEntityArray" [CatalogProductLinkAttributeEntity]
}

magento_entity! {
    CatalogProductLinkEntity => "catalogProductLinkEntity" {
        product_id: String,
        #[serde(rename = "type")]
        kind: String,
        set: String,
        sku: String,
        position: String,
        qty: String,
    }

    CatalogProductLinkAttributeEntity => "catalogProductLinkAttributeEntity" {
        code: String,
        #[serde(rename = "type")]
        kind: String,
    }
}

magento_operation! {
    /// Linked products of one link type (`related`, `up_sell`, `cross_sell`, `grouped`).
    operation "catalogProductLinkList" {
        request CatalogProductLinkListRequestParam => "catalogProductLinkListRequestParam" {
            session_id: String,
            #[serde(rename = "type")]
            kind: String,
            product_id: String,
            identifier_type: String,
        }
        response CatalogProductLinkListResponseParam => "catalogProductLinkListResponseParam" {
            result: CatalogProductLinkEntityArray,
        }
    }

    operation "catalogProductLinkAssign" {
        request CatalogProductLinkAssignRequestParam => "catalogProductLinkAssignRequestParam" {
            session_id: String,
            #[serde(rename = "type")]
            kind: String,
            product_id: String,
            linked_product_id: String,
            data: CatalogProductLinkEntity,
            identifier_type: String,
        }
        response CatalogProductLinkAssignResponseParam => "catalogProductLinkAssignResponseParam" {
            result: String,
        }
    }

    operation "catalogProductLinkUpdate" {
        request CatalogProductLinkUpdateRequestParam => "catalogProductLinkUpdateRequestParam" {
            session_id: String,
            #[serde(rename = "type")]
            kind: String,
            product_id: String,
            linked_product_id: String,
            data: CatalogProductLinkEntity,
            identifier_type: String,
        }
        response CatalogProductLinkUpdateResponseParam => "catalogProductLinkUpdateResponseParam" {
            result: String,
        }
    }

    operation "catalogProductLinkRemove" {
        request CatalogProductLinkRemoveRequestParam => "catalogProductLinkRemoveRequestParam" {
            session_id: String,
            #[serde(rename = "type")]
            kind: String,
            product_id: String,
            linked_product_id: String,
            identifier_type: String,
        }
        response CatalogProductLinkRemoveResponseParam => "catalogProductLinkRemoveResponseParam" {
            result: String,
        }
    }

    operation "catalogProductLinkTypes" {
        request CatalogProductLinkTypesRequestParam => "catalogProductLinkTypesRequestParam" {
            session_id: String,
        }
        response CatalogProductLinkTypesResponseParam => "catalogProductLinkTypesResponseParam" {
            result: ArrayOfString,
        }
    }

    operation "catalogProductLinkAttributes" {
        request CatalogProductLinkAttributesRequestParam => "catalogProductLinkAttributesRequestParam" {
            session_id: String,
            #[serde(rename = "type")]
            kind: String,
        }
        response CatalogProductLinkAttributesResponseParam => "catalogProductLinkAttributesResponseParam" {
            result: CatalogProductLinkAttributeEntityArray,
        }
    }
}
