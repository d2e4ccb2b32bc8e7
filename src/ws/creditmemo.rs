//! Credit memos (refunds).

use super::common::Filters;
use super::sales_order::OrderItemIdQtyArray;

magento_array! {
    SalesOrderCreditmemoEntityArray => "salesOrderCreditmemoEntityArray" [SalesOrderCreditmemoEntity]
    SalesOrderCreditmemoItemEntityArray => "salesOrderCreditmemoItemEntityArray" [SalesOrderCreditmemoItemEntity]
    SalesOrderCreditmemoCommentEntityArray => "salesOrderCreditmemoCommentEntityArray" [SalesOrderCreditmemoCommentEntity]
}

magento_entity! {
    SalesOrderCreditmemoEntity => "salesOrderCreditmemoEntity" {
        updated_at: String,
        created_at: String,
        increment_id: String,
        transaction_id: String,
        global_currency_code: String,
        base_currency_code: String,
        order_currency_code: String,
        store_currency_code: String,
        cybersource_token: String,
        invoice_id: String,
        billing_address_id: String,
        shipping_address_id: String,
        state: String,
        creditmemo_status: String,
        email_sent: String,
        order_id: String,
        tax_amount: String,
        shipping_tax_amount: String,
        base_tax_amount: String,
        base_adjustment_positive: String,
        base_grand_total: String,
        adjustment: String,
        subtotal: String,
        discount_amount: String,
        base_subtotal: String,
        base_adjustment: String,
        base_to_global_rate: String,
        store_to_base_rate: String,
        base_shipping_amount: String,
        adjustment_negative: String,
        subtotal_incl_tax: String,
        shipping_amount: String,
        base_subtotal_incl_tax: String,
        base_adjustment_negative: String,
        grand_total: String,
        base_discount_amount: String,
        base_to_order_rate: String,
        store_to_order_rate: String,
        base_shipping_tax_amount: String,
        adjustment_positive: String,
        store_id: String,
        hidden_tax_amount: String,
        base_hidden_tax_amount: String,
        shipping_hidden_tax_amount: String,
        base_shipping_hidden_tax_amnt: String,
        shipping_incl_tax: String,
        base_shipping_incl_tax: String,
        base_customer_balance_amount: String,
        customer_balance_amount: String,
        bs_customer_bal_total_refunded: String,
        customer_bal_total_refunded: String,
        base_gift_cards_amount: String,
        gift_cards_amount: String,
        gw_base_price: String,
        gw_price: String,
        gw_items_base_price: String,
        gw_items_price: String,
        gw_card_base_price: String,
        gw_card_price: String,
        gw_base_tax_amount: String,
        gw_tax_amount: String,
        gw_items_base_tax_amount: String,
        gw_items_tax_amount: String,
        gw_card_base_tax_amount: String,
        gw_card_tax_amount: String,
        base_reward_currency_amount: String,
        reward_currency_amount: String,
        reward_points_balance: String,
        reward_points_balance_refund: String,
        creditmemo_id: String,
        items: SalesOrderCreditmemoItemEntityArray,
        comments: SalesOrderCreditmemoCommentEntityArray,
    }

    SalesOrderCreditmemoItemEntity => "salesOrderCreditmemoItemEntity" {
        item_id: String,
        parent_id: String,
        weee_tax_applied_row_amount: String,
        base_price: String,
        base_weee_tax_row_disposition: String,
        tax_amount: String,
        base_weee_tax_applied_amount: String,
        weee_tax_row_disposition: String,
        base_row_total: String,
        discount_amount: String,
        row_total: String,
        weee_tax_applied_amount: String,
        base_discount_amount: String,
        base_weee_tax_disposition: String,
        price_incl_tax: String,
        base_tax_amount: String,
        weee_tax_disposition: String,
        base_price_incl_tax: String,
        qty: String,
        base_cost: String,
        base_weee_tax_applied_row_amount: String,
        price: String,
        base_row_total_incl_tax: String,
        row_total_incl_tax: String,
        product_id: String,
        order_item_id: String,
        additional_data: String,
        description: String,
        weee_tax_applied: String,
        sku: String,
        name: String,
        hidden_tax_amount: String,
        base_hidden_tax_amount: String,
    }

    SalesOrderCreditmemoCommentEntity => "salesOrderCreditmemoCommentEntity" {
        parent_id: String,
        created_at: String,
        comment: String,
        is_customer_notified: i32,
        comment_id: String,
    }

    /// What to refund: per-line quantities plus shipping and manual adjustments.
    SalesOrderCreditmemoData => "salesOrderCreditmemoData" {
        qtys: OrderItemIdQtyArray,
        shipping_amount: f64,
        adjustment_positive: f64,
        adjustment_negative: f64,
    }
}

magento_operation! {
    operation "salesOrderCreditmemoList" {
        request SalesOrderCreditmemoListRequestParam => "salesOrderCreditmemoListRequestParam" {
            session_id: String,
            filters: Filters,
        }
        response SalesOrderCreditmemoListResponseParam => "salesOrderCreditmemoListResponseParam" {
            result: SalesOrderCreditmemoEntityArray,
        }
    }

    operation "salesOrderCreditmemoInfo" {
        request SalesOrderCreditmemoInfoRequestParam => "salesOrderCreditmemoInfoRequestParam" {
            session_id: String,
            creditmemo_increment_id: String,
        }
        response SalesOrderCreditmemoInfoResponseParam => "salesOrderCreditmemoInfoResponseParam" {
            result: SalesOrderCreditmemoEntity,
        }
    }

    operation "salesOrderCreditmemoCreate" {
        request SalesOrderCreditmemoCreateRequestParam => "salesOrderCreditmemoCreateRequestParam" {
            session_id: String,
            order_increment_id: String,
            creditmemo_data: SalesOrderCreditmemoData,
            comment: String,
            notify_customer: i32,
            include_comment: i32,
            refund_to_store_credit_amount: String,
        }
        response SalesOrderCreditmemoCreateResponseParam => "salesOrderCreditmemoCreateResponseParam" {
            result: String,
        }
    }

    operation "salesOrderCreditmemoAddComment" {
        request SalesOrderCreditmemoAddCommentRequestParam => "salesOrderCreditmemoAddCommentRequestParam" {
            session_id: String,
            creditmemo_increment_id: String,
            comment: String,
            notify_customer: i32,
            include_comment: i32,
        }
        response SalesOrderCreditmemoAddCommentResponseParam => "salesOrderCreditmemoAddCommentResponseParam" {
            result: i32,
        }
    }

    operation "salesOrderCreditmemoCancel" {
        request SalesOrderCreditmemoCancelRequestParam => "salesOrderCreditmemoCancelRequestParam" {
            session_id: String,
            creditmemo_increment_id: String,
        }
        response SalesOrderCreditmemoCancelResponseParam => "salesOrderCreditmemoCancelResponseParam" {
            result: i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::OrderItemIdQty;

    #[test]
    fn test_refund_data() {
        let data = SalesOrderCreditmemoData::new()
            .with_qtys(OrderItemIdQtyArray::from(vec![OrderItemIdQty::line(3, 1.0)]))
            .with_shipping_amount(5.0);

        assert_eq!(data.shipping_amount, Some(5.0));
        assert_eq!(data.adjustment_positive, None);
        assert_eq!(data.qtys.map(|q| q.len()), Some(1));
    }
}
