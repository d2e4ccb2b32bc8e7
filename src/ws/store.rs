//! Store views.

magento_array! {
    StoreEntityArray => "storeEntityArray" [StoreEntity]
}

magento_entity! {
    StoreEntity => "storeEntity" {
        store_id: i32,
        code: String,
        website_id: i32,
        group_id: i32,
        name: String,
        sort_order: i32,
        is_active: i32,
    }
}

magento_operation! {
    operation "storeList" {
        request StoreListRequestParam => "storeListRequestParam" {
            session_id: String,
        }
        response StoreListResponseParam => "storeListResponseParam" {
            result: StoreEntityArray,
        }
    }

    operation "storeInfo" {
        request StoreInfoRequestParam => "storeInfoRequestParam" {
            session_id: String,
            store_id: String,
        }
        response StoreInfoResponseParam => "storeInfoResponseParam" {
            result: StoreEntity,
        }
    }
}
