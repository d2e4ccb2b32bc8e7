//! Product tags.

use super::common::AssociativeArray;

magento_array! {
    CatalogProductTagListEntityArray => "catalogProductTagListEntityArray" [CatalogProductTagListEntity]
}

magento_entity! {
    CatalogProductTagListEntity => "catalogProductTagListEntity" {
        tag_id: String,
        name: String,
    }

    CatalogProductTagAddEntity => "catalogProductTagAddEntity" {
        tag: String,
        product_id: String,
        customer_id: String,
        store: String,
    }

    CatalogProductTagUpdateEntity => "catalogProductTagUpdateEntity" {
        name: String,
        status: String,
        base_popularity: String,
    }

    /// Tag details. `products` maps product ids to tag usage counts.
    CatalogProductTagInfoEntity => "catalogProductTagInfoEntity" {
        name: String,
        status: String,
        base_popularity: String,
        products: AssociativeArray,
    }
}

magento_operation! {
    operation "catalogProductTagList" {
        request CatalogProductTagListRequestParam => "catalogProductTagListRequestParam" {
            session_id: String,
            product_id: String,
            store: String,
        }
        response CatalogProductTagListResponseParam => "catalogProductTagListResponseParam" {
            result: CatalogProductTagListEntityArray,
        }
    }

    operation "catalogProductTagInfo" {
        request CatalogProductTagInfoRequestParam => "catalogProductTagInfoRequestParam" {
            session_id: String,
            tag_id: String,
            store: String,
        }
        response CatalogProductTagInfoResponseParam => "catalogProductTagInfoResponseParam" {
            result: CatalogProductTagInfoEntity,
        }
    }

    /// Tags a product. The reply maps each tag name to its id.
    operation "catalogProductTagAdd" {
        request CatalogProductTagAddRequestParam => "catalogProductTagAddRequestParam" {
            session_id: String,
            data: CatalogProductTagAddEntity,
        }
        response CatalogProductTagAddResponseParam => "catalogProductTagAddResponseParam" {
            result: AssociativeArray,
        }
    }

    operation "catalogProductTagUpdate" {
        request CatalogProductTagUpdateRequestParam => "catalogProductTagUpdateRequestParam" {
            session_id: String,
            tag_id: String,
            data: CatalogProductTagUpdateEntity,
            store: String,
        }
        response CatalogProductTagUpdateResponseParam => "catalogProductTagUpdateResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductTagRemove" {
        request CatalogProductTagRemoveRequestParam => "catalogProductTagRemoveRequestParam" {
            session_id: String,
            tag_id: String,
        }
        response CatalogProductTagRemoveResponseParam => "catalogProductTagRemoveResponseParam" {
            result: bool,
        }
    }
}
