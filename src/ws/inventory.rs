//! Stock levels (`cataloginventory_stock_item`).

use super::common::ArrayOfString;

magento_array! {
    CatalogInventoryStockItemEntityArray => "catalogInventoryStockItemEntityArray" [CatalogInventoryStockItemEntity]
    CatalogInventoryStockItemUpdateEntityArray => "catalogInventoryStockItemUpdateEntityArray" [CatalogInventoryStockItemUpdateEntity]
}

magento_entity! {
    CatalogInventoryStockItemEntity => "catalogInventoryStockItemEntity" {
        product_id: String,
        sku: String,
        qty: String,
        is_in_stock: String,
    }

    /// Stock changes. The `use_config_*` flags make the item follow the store
    /// configuration instead of the explicit value.
    CatalogInventoryStockItemUpdateEntity => "catalogInventoryStockItemUpdateEntity" {
        qty: String,
        is_in_stock: i32,
        manage_stock: i32,
        use_config_manage_stock: i32,
        min_qty: i32,
        use_config_min_qty: i32,
        min_sale_qty: i32,
        use_config_min_sale_qty: i32,
        max_sale_qty: i32,
        use_config_max_sale_qty: i32,
        is_qty_decimal: i32,
        backorders: i32,
        use_config_backorders: i32,
        notify_stock_qty: i32,
        use_config_notify_stock_qty: i32,
    }
}

magento_operation! {
    operation "catalogInventoryStockItemList" {
        request CatalogInventoryStockItemListRequestParam => "catalogInventoryStockItemListRequestParam" {
            session_id: String,
            products: ArrayOfString,
        }
        response CatalogInventoryStockItemListResponseParam => "catalogInventoryStockItemListResponseParam" {
            result: CatalogInventoryStockItemEntityArray,
        }
    }

    operation "catalogInventoryStockItemUpdate" {
        request CatalogInventoryStockItemUpdateRequestParam => "catalogInventoryStockItemUpdateRequestParam" {
            session_id: String,
            product_id: String,
            data: CatalogInventoryStockItemUpdateEntity,
        }
        response CatalogInventoryStockItemUpdateResponseParam => "catalogInventoryStockItemUpdateResponseParam" {
            result: i32,
        }
    }

    operation "catalogInventoryStockItemMultiUpdate" {
        request CatalogInventoryStockItemMultiUpdateRequestParam => "catalogInventoryStockItemMultiUpdateRequestParam" {
            session_id: String,
            product_ids: ArrayOfString,
            product_data: CatalogInventoryStockItemUpdateEntityArray,
        }
        response CatalogInventoryStockItemMultiUpdateResponseParam => "catalogInventoryStockItemMultiUpdateResponseParam" {
            result: bool,
        }
    }
}
