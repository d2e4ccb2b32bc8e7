//! Shipments, their lines, tracking numbers and comments.

use super::common::{AssociativeArray, Filters};
use super::sales_order::OrderItemIdQtyArray;

magento_array! {
    SalesOrderShipmentEntityArray => "salesOrderShipmentEntityArray" [SalesOrderShipmentEntity]
    SalesOrderShipmentItemEntityArray => "salesOrderShipmentItemEntityArray" [SalesOrderShipmentItemEntity]
    SalesOrderShipmentTrackEntityArray => "salesOrderShipmentTrackEntityArray" [SalesOrderShipmentTrackEntity]
    SalesOrderShipmentCommentEntityArray => "salesOrderShipmentCommentEntityArray" [SalesOrderShipmentCommentEntity]
}

magento_entity! {
    SalesOrderShipmentEntity => "salesOrderShipmentEntity" {
        increment_id: String,
        parent_id: String,
        store_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        shipping_address_id: String,
        shipping_firstname: String,
        shipping_lastname: String,
        order_id: String,
        order_increment_id: String,
        order_created_at: String,
        total_qty: String,
        shipment_id: String,
        items: SalesOrderShipmentItemEntityArray,
        tracks: SalesOrderShipmentTrackEntityArray,
        comments: SalesOrderShipmentCommentEntityArray,
    }

    SalesOrderShipmentItemEntity => "salesOrderShipmentItemEntity" {
        increment_id: String,
        parent_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        sku: String,
        name: String,
        order_item_id: String,
        product_id: String,
        weight: String,
        price: String,
        qty: String,
        item_id: String,
    }

    SalesOrderShipmentTrackEntity => "salesOrderShipmentTrackEntity" {
        increment_id: String,
        parent_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        carrier_code: String,
        title: String,
        number: String,
        order_id: String,
        track_id: String,
    }

    SalesOrderShipmentCommentEntity => "salesOrderShipmentCommentEntity" {
        increment_id: String,
        parent_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        comment: String,
        is_customer_notified: String,
        comment_id: String,
    }
}

magento_operation! {
    operation "salesOrderShipmentList" {
        request SalesOrderShipmentListRequestParam => "salesOrderShipmentListRequestParam" {
            session_id: String,
            filters: Filters,
        }
        response SalesOrderShipmentListResponseParam => "salesOrderShipmentListResponseParam" {
            result: SalesOrderShipmentEntityArray,
        }
    }

    operation "salesOrderShipmentInfo" {
        request SalesOrderShipmentInfoRequestParam => "salesOrderShipmentInfoRequestParam" {
            session_id: String,
            shipment_increment_id: String,
        }
        response SalesOrderShipmentInfoResponseParam => "salesOrderShipmentInfoResponseParam" {
            result: SalesOrderShipmentEntity,
        }
    }

    operation "salesOrderShipmentCreate" {
        request SalesOrderShipmentCreateRequestParam => "salesOrderShipmentCreateRequestParam" {
            session_id: String,
            order_increment_id: String,
            items_qty: OrderItemIdQtyArray,
            comment: String,
            email: i32,
            include_comment: i32,
        }
        response SalesOrderShipmentCreateResponseParam => "salesOrderShipmentCreateResponseParam" {
            result: String,
        }
    }

    operation "salesOrderShipmentAddComment" {
        request SalesOrderShipmentAddCommentRequestParam => "salesOrderShipmentAddCommentRequestParam" {
            session_id: String,
            shipment_increment_id: String,
            comment: String,
            email: String,
            include_in_email: String,
        }
        response SalesOrderShipmentAddCommentResponseParam => "salesOrderShipmentAddCommentResponseParam" {
            result: String,
        }
    }

    operation "salesOrderShipmentAddTrack" {
        request SalesOrderShipmentAddTrackRequestParam => "salesOrderShipmentAddTrackRequestParam" {
            session_id: String,
            shipment_increment_id: String,
            carrier: String,
            title: String,
            track_number: String,
        }
        response SalesOrderShipmentAddTrackResponseParam => "salesOrderShipmentAddTrackResponseParam" {
            result: i32,
        }
    }

    operation "salesOrderShipmentRemoveTrack" {
        request SalesOrderShipmentRemoveTrackRequestParam => "salesOrderShipmentRemoveTrackRequestParam" {
            session_id: String,
            shipment_increment_id: String,
            track_id: String,
        }
        response SalesOrderShipmentRemoveTrackResponseParam => "salesOrderShipmentRemoveTrackResponseParam" {
            result: i32,
        }
    }

    operation "salesOrderShipmentSendInfo" {
        request SalesOrderShipmentSendInfoRequestParam => "salesOrderShipmentSendInfoRequestParam" {
            session_id: String,
            shipment_increment_id: String,
            comment: String,
        }
        response SalesOrderShipmentSendInfoResponseParam => "salesOrderShipmentSendInfoResponseParam" {
            result: i32,
        }
    }

    /// Carriers allowed for the order, as code/label pairs.
    operation "salesOrderShipmentGetCarriers" {
        request SalesOrderShipmentGetCarriersRequestParam => "salesOrderShipmentGetCarriersRequestParam" {
            session_id: String,
            order_increment_id: String,
        }
        response SalesOrderShipmentGetCarriersResponseParam => "salesOrderShipmentGetCarriersResponseParam" {
            result: AssociativeArray,
        }
    }
}
