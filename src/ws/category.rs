//! Catalog categories: the tree, category details and product assignment.

use super::common::ArrayOfString;

magento_array! {
    ArrayOfCatalogCategoryEntities => "ArrayOfCatalogCategoryEntities" [CatalogCategoryEntity]
    ArrayOfCatalogCategoryEntitiesNoChildren => "ArrayOfCatalogCategoryEntitiesNoChildren" [CatalogCategoryEntityNoChildren]
    CatalogAssignedProductArray => "catalogAssignedProductArray" [CatalogAssignedProduct]
    CatalogAttributeEntityArray => "catalogAttributeEntityArray" [CatalogAttributeEntity]
    CatalogAttributeOptionEntityArray => "catalogAttributeOptionEntityArray" [CatalogAttributeOptionEntity]
}

magento_entity! {
    /// Node of the category tree. Children nest recursively.
    CatalogCategoryEntity => "catalogCategoryEntity" {
        category_id: i32,
        parent_id: i32,
        name: String,
        is_active: i32,
        position: i32,
        level: i32,
        children: ArrayOfCatalogCategoryEntities,
    }

    CatalogCategoryEntityNoChildren => "catalogCategoryEntityNoChildren" {
        category_id: i32,
        parent_id: i32,
        name: String,
        is_active: i32,
        position: i32,
        level: i32,
    }

    /// Root of the tree returned by `catalogCategoryTree`.
    CatalogCategoryTree => "catalogCategoryTree" {
        category_id: i32,
        parent_id: i32,
        name: String,
        position: i32,
        level: i32,
        children: ArrayOfCatalogCategoryEntities,
    }

    CatalogCategoryInfo => "catalogCategoryInfo" {
        category_id: String,
        is_active: i32,
        position: String,
        level: String,
        parent_id: String,
        all_children: String,
        children: String,
        created_at: String,
        updated_at: String,
        name: String,
        url_key: String,
        description: String,
        meta_title: String,
        meta_keywords: String,
        meta_description: String,
        path: String,
        url_path: String,
        children_count: i32,
        display_mode: String,
        is_anchor: i32,
        available_sort_by: ArrayOfString,
        custom_design: String,
        custom_design_apply: String,
        custom_design_from: String,
        custom_design_to: String,
        page_layout: String,
        custom_layout_update: String,
        default_sort_by: String,
        landing_page: i32,
    }

    /// Payload for `catalogCategoryCreate` and `catalogCategoryUpdate`.
    CatalogCategoryEntityCreate => "catalogCategoryEntityCreate" {
        name: String,
        is_active: i32,
        position: i32,
        available_sort_by: ArrayOfString,
        custom_design: String,
        custom_design_apply: i32,
        custom_design_from: String,
        custom_design_to: String,
        custom_layout_update: String,
        default_sort_by: String,
        description: String,
        display_mode: String,
        is_anchor: i32,
        landing_page: i32,
        meta_description: String,
        meta_keywords: String,
        meta_title: String,
        page_layout: String,
        url_key: String,
        include_in_menu: i32,
    }

    CatalogAssignedProduct => "catalogAssignedProduct" {
        product_id: i32,
        #[serde(rename = "type")]
        kind: String,
        set: i32,
        sku: String,
        position: i32,
    }

    /// Attribute descriptor. Shared by the category and product attribute APIs.
    CatalogAttributeEntity => "catalogAttributeEntity" {
        attribute_id: i32,
        code: String,
        #[serde(rename = "type")]
        kind: String,
        required: String,
        scope: String,
    }

    CatalogAttributeOptionEntity => "catalogAttributeOptionEntity" {
        label: String,
        value: String,
    }
}

magento_operation! {
    operation "catalogCategoryCurrentStore" {
        request CatalogCategoryCurrentStoreRequestParam => "catalogCategoryCurrentStoreRequestParam" {
            session_id: String,
            store: String,
        }
        response CatalogCategoryCurrentStoreResponseParam => "catalogCategoryCurrentStoreResponseParam" {
            result: i32,
        }
    }

    operation "catalogCategoryTree" {
        request CatalogCategoryTreeRequestParam => "catalogCategoryTreeRequestParam" {
            session_id: String,
            parent_id: String,
            store_view: String,
        }
        response CatalogCategoryTreeResponseParam => "catalogCategoryTreeResponseParam" {
            result: CatalogCategoryTree,
        }
    }

    /// One level of the tree below `parent_category`.
    operation "catalogCategoryLevel" {
        request CatalogCategoryLevelRequestParam => "catalogCategoryLevelRequestParam" {
            session_id: String,
            website: String,
            store_view: String,
            parent_category: String,
        }
        response CatalogCategoryLevelResponseParam => "catalogCategoryLevelResponseParam" {
            result: ArrayOfCatalogCategoryEntitiesNoChildren,
        }
    }

    operation "catalogCategoryInfo" {
        request CatalogCategoryInfoRequestParam => "catalogCategoryInfoRequestParam" {
            session_id: String,
            category_id: i32,
            store_view: String,
            attributes: ArrayOfString,
        }
        response CatalogCategoryInfoResponseParam => "catalogCategoryInfoResponseParam" {
            result: CatalogCategoryInfo,
        }
    }

    operation "catalogCategoryCreate" {
        request CatalogCategoryCreateRequestParam => "catalogCategoryCreateRequestParam" {
            session_id: String,
            parent_id: i32,
            category_data: CatalogCategoryEntityCreate,
            store_view: String,
        }
        response CatalogCategoryCreateResponseParam => "catalogCategoryCreateResponseParam" {
            result: i32,
        }
    }

    operation "catalogCategoryUpdate" {
        request CatalogCategoryUpdateRequestParam => "catalogCategoryUpdateRequestParam" {
            session_id: String,
            category_id: i32,
            category_data: CatalogCategoryEntityCreate,
            store_view: String,
        }
        response CatalogCategoryUpdateResponseParam => "catalogCategoryUpdateResponseParam" {
            result: bool,
        }
    }

    operation "catalogCategoryMove" {
        request CatalogCategoryMoveRequestParam => "catalogCategoryMoveRequestParam" {
            session_id: String,
            category_id: i32,
            parent_id: i32,
            after_id: String,
        }
        response CatalogCategoryMoveResponseParam => "catalogCategoryMoveResponseParam" {
            result: bool,
        }
    }

    operation "catalogCategoryDelete" {
        request CatalogCategoryDeleteRequestParam => "catalogCategoryDeleteRequestParam" {
            session_id: String,
            category_id: i32,
        }
        response CatalogCategoryDeleteResponseParam => "catalogCategoryDeleteResponseParam" {
            result: bool,
        }
    }

    operation "catalogCategoryAssignedProducts" {
        request CatalogCategoryAssignedProductsRequestParam => "catalogCategoryAssignedProductsRequestParam" {
            session_id: String,
            category_id: i32,
        }
        response CatalogCategoryAssignedProductsResponseParam => "catalogCategoryAssignedProductsResponseParam" {
            result: CatalogAssignedProductArray,
        }
    }

    operation "catalogCategoryAssignProduct" {
        request CatalogCategoryAssignProductRequestParam => "catalogCategoryAssignProductRequestParam" {
            session_id: String,
            category_id: i32,
            product_id: String,
            position: String,
            identifier_type: String,
        }
        response CatalogCategoryAssignProductResponseParam => "catalogCategoryAssignProductResponseParam" {
            result: bool,
        }
    }

    operation "catalogCategoryUpdateProduct" {
        request CatalogCategoryUpdateProductRequestParam => "catalogCategoryUpdateProductRequestParam" {
            session_id: String,
            category_id: i32,
            product_id: String,
            position: String,
            identifier_type: String,
        }
        response CatalogCategoryUpdateProductResponseParam => "catalogCategoryUpdateProductResponseParam" {
            result: bool,
        }
    }

    operation "catalogCategoryRemoveProduct" {
        request CatalogCategoryRemoveProductRequestParam => "catalogCategoryRemoveProductRequestParam" {
            session_id: String,
            category_id: i32,
            product_id: String,
            identifier_type: String,
        }
        response CatalogCategoryRemoveProductResponseParam => "catalogCategoryRemoveProductResponseParam" {
            result: bool,
        }
    }

    operation "catalogCategoryAttributeCurrentStore" {
        request CatalogCategoryAttributeCurrentStoreRequestParam => "catalogCategoryAttributeCurrentStoreRequestParam" {
            session_id: String,
            store: String,
        }
        response CatalogCategoryAttributeCurrentStoreResponseParam => "catalogCategoryAttributeCurrentStoreResponseParam" {
            result: i32,
        }
    }

    operation "catalogCategoryAttributeList" {
        request CatalogCategoryAttributeListRequestParam => "catalogCategoryAttributeListRequestParam" {
            session_id: String,
        }
        response CatalogCategoryAttributeListResponseParam => "catalogCategoryAttributeListResponseParam" {
            result: CatalogAttributeEntityArray,
        }
    }

    operation "catalogCategoryAttributeOptions" {
        request CatalogCategoryAttributeOptionsRequestParam => "catalogCategoryAttributeOptionsRequestParam" {
            session_id: String,
            attribute_id: String,
            store_view: String,
        }
        response CatalogCategoryAttributeOptionsResponseParam => "catalogCategoryAttributeOptionsResponseParam" {
            result: CatalogAttributeOptionEntityArray,
        }
    }
}

impl CatalogCategoryEntity {
    /// Number of categories in this subtree, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .flat_map(|children| children.items())
            .map(CatalogCategoryEntity::subtree_size)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_children() {
        let leaf = CatalogCategoryEntity::new().with_category_id(3).with_name("Sensors");
        let mid = CatalogCategoryEntity::new()
            .with_category_id(2)
            .with_children(ArrayOfCatalogCategoryEntities::from(vec![leaf.clone(), leaf]));
        let root = CatalogCategoryEntity::new()
            .with_category_id(1)
            .with_children(ArrayOfCatalogCategoryEntities::from(vec![mid]));

        assert_eq!(root.subtree_size(), 4);
        assert_eq!(CatalogCategoryEntity::new().subtree_size(), 1);
    }

    #[test]
    fn test_info_int_and_string_fields() {
        let info = CatalogCategoryInfo::new()
            .with_is_active(1)
            .with_position("2")
            .with_children_count(5)
            .with_available_sort_by(vec!["position".to_string()]);

        assert_eq!(info.is_active, Some(1));
        assert_eq!(info.position.as_deref(), Some("2"));
        assert_eq!(info.children_count, Some(5));
        assert_eq!(info.landing_page, None);
    }
}
