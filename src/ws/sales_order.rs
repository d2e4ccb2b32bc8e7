//! Sales orders: the order itself, its lines, addresses, payment and history, plus
//! the status transitions (`hold`, `unhold`, `cancel`, `addComment`).

use super::common::Filters;

magento_array! {
    SalesOrderListEntityArray => "salesOrderListEntityArray" [SalesOrderListEntity]
    SalesOrderItemEntityArray => "salesOrderItemEntityArray" [SalesOrderItemEntity]
    SalesOrderStatusHistoryEntityArray => "salesOrderStatusHistoryEntityArray" [SalesOrderStatusHistoryEntity]

    /// Quantities per order line, used when invoicing, shipping or refunding.
    OrderItemIdQtyArray => "orderItemIdQtyArray" [OrderItemIdQty]
}

magento_entity! {
    /// Full order as returned by `salesOrderInfo`. Amounts are decimal strings.
    SalesOrderEntity => "salesOrderEntity" {
        increment_id: String,
        parent_id: String,
        store_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        customer_id: String,
        tax_amount: String,
        shipping_amount: String,
        discount_amount: String,
        subtotal: String,
        grand_total: String,
        total_paid: String,
        total_refunded: String,
        total_qty_ordered: String,
        total_canceled: String,
        total_invoiced: String,
        total_online_refunded: String,
        total_offline_refunded: String,
        base_tax_amount: String,
        base_shipping_amount: String,
        base_discount_amount: String,
        base_subtotal: String,
        base_grand_total: String,
        base_total_paid: String,
        base_total_refunded: String,
        base_total_qty_ordered: String,
        base_total_canceled: String,
        base_total_invoiced: String,
        base_total_online_refunded: String,
        base_total_offline_refunded: String,
        billing_address_id: String,
        billing_firstname: String,
        billing_lastname: String,
        shipping_address_id: String,
        shipping_firstname: String,
        shipping_lastname: String,
        billing_name: String,
        shipping_name: String,
        store_to_base_rate: String,
        store_to_order_rate: String,
        base_to_global_rate: String,
        base_to_order_rate: String,
        weight: String,
        store_name: String,
        remote_ip: String,
        status: String,
        state: String,
        applied_rule_ids: String,
        global_currency_code: String,
        base_currency_code: String,
        store_currency_code: String,
        order_currency_code: String,
        shipping_method: String,
        shipping_description: String,
        customer_email: String,
        customer_firstname: String,
        customer_lastname: String,
        quote_id: String,
        is_virtual: String,
        customer_group_id: String,
        customer_note_notify: String,
        customer_is_guest: String,
        email_sent: String,
        order_id: String,
        gift_message_id: String,
        gift_message: String,
        shipping_address: SalesOrderAddressEntity,
        billing_address: SalesOrderAddressEntity,
        items: SalesOrderItemEntityArray,
        payment: SalesOrderPaymentEntity,
        status_history: SalesOrderStatusHistoryEntityArray,
    }

    /// Flattened order row returned by `salesOrderList`.
    SalesOrderListEntity => "salesOrderListEntity" {
        increment_id: String,
        store_id: String,
        created_at: String,
        updated_at: String,
        customer_id: String,
        tax_amount: String,
        shipping_amount: String,
        discount_amount: String,
        subtotal: String,
        grand_total: String,
        total_paid: String,
        total_refunded: String,
        total_qty_ordered: String,
        total_canceled: String,
        total_invoiced: String,
        total_online_refunded: String,
        total_offline_refunded: String,
        base_tax_amount: String,
        base_shipping_amount: String,
        base_discount_amount: String,
        base_subtotal: String,
        base_grand_total: String,
        base_total_paid: String,
        base_total_refunded: String,
        base_total_qty_ordered: String,
        base_total_canceled: String,
        base_total_invoiced: String,
        base_total_online_refunded: String,
        base_total_offline_refunded: String,
        billing_address_id: String,
        billing_firstname: String,
        billing_lastname: String,
        shipping_address_id: String,
        shipping_firstname: String,
        shipping_lastname: String,
        billing_name: String,
        shipping_name: String,
        store_to_base_rate: String,
        store_to_order_rate: String,
        base_to_global_rate: String,
        base_to_order_rate: String,
        weight: String,
        store_name: String,
        remote_ip: String,
        status: String,
        state: String,
        applied_rule_ids: String,
        global_currency_code: String,
        base_currency_code: String,
        store_currency_code: String,
        order_currency_code: String,
        shipping_method: String,
        shipping_description: String,
        customer_email: String,
        customer_firstname: String,
        customer_lastname: String,
        quote_id: String,
        is_virtual: String,
        customer_group_id: String,
        customer_note_notify: String,
        customer_is_guest: String,
        email_sent: String,
        order_id: String,
        gift_message_id: String,
        coupon_code: String,
        protect_code: String,
        base_discount_canceled: String,
        base_discount_invoiced: String,
        base_discount_refunded: String,
        base_shipping_canceled: String,
        base_shipping_invoiced: String,
        base_shipping_refunded: String,
        base_shipping_tax_amount: String,
        base_shipping_tax_refunded: String,
        base_subtotal_canceled: String,
        base_subtotal_invoiced: String,
        base_subtotal_refunded: String,
        base_tax_canceled: String,
        base_tax_invoiced: String,
        base_tax_refunded: String,
        base_total_invoiced_cost: String,
        discount_canceled: String,
        discount_invoiced: String,
        discount_refunded: String,
        shipping_canceled: String,
        shipping_invoiced: String,
        shipping_refunded: String,
        shipping_tax_amount: String,
        shipping_tax_refunded: String,
        subtotal_canceled: String,
        subtotal_invoiced: String,
        subtotal_refunded: String,
        tax_canceled: String,
        tax_invoiced: String,
        tax_refunded: String,
        can_ship_partially: String,
        can_ship_partially_item: String,
        edit_increment: String,
        forced_do_shipment_with_invoice: String,
        payment_authorization_expiration: String,
        paypal_ipn_customer_notified: String,
        quote_address_id: String,
        adjustment_negative: String,
        adjustment_positive: String,
        base_adjustment_negative: String,
        base_adjustment_positive: String,
        base_shipping_discount_amount: String,
        base_subtotal_incl_tax: String,
        base_total_due: String,
        payment_authorization_amount: String,
        shipping_discount_amount: String,
        subtotal_incl_tax: String,
        total_due: String,
        customer_dob: String,
        customer_middlename: String,
        customer_prefix: String,
        customer_suffix: String,
        customer_taxvat: String,
        discount_description: String,
        ext_customer_id: String,
        ext_order_id: String,
        hold_before_state: String,
        hold_before_status: String,
        original_increment_id: String,
        relation_child_id: String,
        relation_child_real_id: String,
        relation_parent_id: String,
        relation_parent_real_id: String,
        x_forwarded_for: String,
        customer_note: String,
        total_item_count: String,
        customer_gender: String,
        hidden_tax_amount: String,
        base_hidden_tax_amount: String,
        shipping_hidden_tax_amount: String,
        base_shipping_hidden_tax_amount: String,
        hidden_tax_invoiced: String,
        base_hidden_tax_invoiced: String,
        hidden_tax_refunded: String,
        base_hidden_tax_refunded: String,
        shipping_incl_tax: String,
        base_shipping_incl_tax: String,
        base_customer_balance_amount: String,
        customer_balance_amount: String,
        base_customer_balance_invoiced: String,
        customer_balance_invoiced: String,
        base_customer_balance_refunded: String,
        customer_balance_refunded: String,
        base_customer_balance_total_refunded: String,
        customer_balance_total_refunded: String,
        gift_cards: String,
        base_gift_cards_amount: String,
        gift_cards_amount: String,
        base_gift_cards_invoiced: String,
        gift_cards_invoiced: String,
        base_gift_cards_refunded: String,
        gift_cards_refunded: String,
        reward_points_balance: String,
        base_reward_currency_amount: String,
        reward_currency_amount: String,
        base_reward_currency_amount_invoiced: String,
        reward_currency_amount_invoiced: String,
        base_reward_currency_amount_refunded: String,
        reward_currency_amount_refunded: String,
        reward_points_balance_refunded: String,
        reward_points_balance_to_refund: String,
        reward_salesrule_points: String,
        firstname: String,
        lastname: String,
        telephone: String,
        postcode: String,
    }

    SalesOrderItemEntity => "salesOrderItemEntity" {
        item_id: String,
        order_id: String,
        quote_item_id: String,
        created_at: String,
        updated_at: String,
        product_id: String,
        product_type: String,
        product_options: String,
        weight: String,
        is_virtual: String,
        sku: String,
        name: String,
        applied_rule_ids: String,
        free_shipping: String,
        is_qty_decimal: String,
        no_discount: String,
        qty_canceled: String,
        qty_invoiced: String,
        qty_ordered: String,
        qty_refunded: String,
        qty_shipped: String,
        cost: String,
        price: String,
        base_price: String,
        original_price: String,
        base_original_price: String,
        tax_percent: String,
        tax_amount: String,
        base_tax_amount: String,
        tax_invoiced: String,
        base_tax_invoiced: String,
        discount_percent: String,
        discount_amount: String,
        base_discount_amount: String,
        discount_invoiced: String,
        base_discount_invoiced: String,
        amount_refunded: String,
        base_amount_refunded: String,
        row_total: String,
        base_row_total: String,
        row_invoiced: String,
        base_row_invoiced: String,
        row_weight: String,
        gift_message_id: String,
        gift_message: String,
        gift_message_available: String,
        base_tax_before_discount: String,
        tax_before_discount: String,
        weee_tax_applied: String,
        weee_tax_applied_amount: String,
        weee_tax_applied_row_amount: String,
        base_weee_tax_applied_amount: String,
        base_weee_tax_applied_row_amount: String,
        weee_tax_disposition: String,
        weee_tax_row_disposition: String,
        base_weee_tax_disposition: String,
        base_weee_tax_row_disposition: String,
    }

    SalesOrderAddressEntity => "salesOrderAddressEntity" {
        increment_id: String,
        parent_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        address_type: String,
        firstname: String,
        lastname: String,
        company: String,
        street: String,
        city: String,
        region: String,
        postcode: String,
        country_id: String,
        telephone: String,
        fax: String,
        region_id: String,
        address_id: String,
    }

    SalesOrderPaymentEntity => "salesOrderPaymentEntity" {
        increment_id: String,
        parent_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        amount_ordered: String,
        shipping_amount: String,
        base_amount_ordered: String,
        base_shipping_amount: String,
        method: String,
        po_number: String,
        cc_type: String,
        cc_number_enc: String,
        cc_last4: String,
        cc_owner: String,
        cc_exp_month: String,
        cc_exp_year: String,
        cc_ss_start_month: String,
        cc_ss_start_year: String,
        payment_id: String,
    }

    SalesOrderStatusHistoryEntity => "salesOrderStatusHistoryEntity" {
        increment_id: String,
        parent_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        is_customer_notified: String,
        status: String,
        comment: String,
    }

    OrderItemIdQty => "orderItemIdQty" {
        order_item_id: i32,
        qty: f64,
    }
}

magento_operation! {
    operation "salesOrderList" {
        request SalesOrderListRequestParam => "salesOrderListRequestParam" {
            session_id: String,
            filters: Filters,
        }
        response SalesOrderListResponseParam => "salesOrderListResponseParam" {
            result: SalesOrderListEntityArray,
        }
    }

    operation "salesOrderInfo" {
        request SalesOrderInfoRequestParam => "salesOrderInfoRequestParam" {
            session_id: String,
            order_increment_id: String,
        }
        response SalesOrderInfoResponseParam => "salesOrderInfoResponseParam" {
            result: SalesOrderEntity,
        }
    }

    /// Adds a history comment and optionally moves the order to `status`.
    operation "salesOrderAddComment" {
        request SalesOrderAddCommentRequestParam => "salesOrderAddCommentRequestParam" {
            session_id: String,
            order_increment_id: String,
            status: String,
            comment: String,
            notify: String,
        }
        response SalesOrderAddCommentResponseParam => "salesOrderAddCommentResponseParam" {
            result: i32,
        }
    }

    operation "salesOrderHold" {
        request SalesOrderHoldRequestParam => "salesOrderHoldRequestParam" {
            session_id: String,
            order_increment_id: String,
        }
        response SalesOrderHoldResponseParam => "salesOrderHoldResponseParam" {
            result: i32,
        }
    }

    operation "salesOrderUnhold" {
        request SalesOrderUnholdRequestParam => "salesOrderUnholdRequestParam" {
            session_id: String,
            order_increment_id: String,
        }
        response SalesOrderUnholdResponseParam => "salesOrderUnholdResponseParam" {
            result: i32,
        }
    }

    operation "salesOrderCancel" {
        request SalesOrderCancelRequestParam => "salesOrderCancelRequestParam" {
            session_id: String,
            order_increment_id: String,
        }
        response SalesOrderCancelResponseParam => "salesOrderCancelResponseParam" {
            result: i32,
        }
    }
}

impl OrderItemIdQty {
    pub fn line(order_item_id: i32, qty: f64) -> Self {
        Self::new().with_order_item_id(order_item_id).with_qty(qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::{MagentoType, SoapRequest};

    #[test]
    fn test_order_nested_records() {
        let order = SalesOrderEntity::new()
            .with_increment_id("100000001")
            .with_grand_total("25.50")
            .with_billing_address(SalesOrderAddressEntity::new().with_city("Atlanta"))
            .with_items(SalesOrderItemEntityArray::from(vec![
                SalesOrderItemEntity::new().with_sku("W-1"),
            ]));

        assert_eq!(order.increment_id.as_deref(), Some("100000001"));
        assert_eq!(order.shipping_address, None);
        let billing = order.billing_address.as_ref().and_then(|a| a.city.as_deref());
        assert_eq!(billing, Some("Atlanta"));
        assert_eq!(order.items.map(|items| items.len()), Some(1));
    }

    #[test]
    fn test_list_entity_is_independent_of_full_entity() {
        let row = SalesOrderListEntity::new().with_increment_id("100000002");
        assert_eq!(row.increment_id.as_deref(), Some("100000002"));
        assert_eq!(SalesOrderListEntity::XML_TYPE, "salesOrderListEntity");
    }

    #[test]
    fn test_order_item_qty_line() {
        let line = OrderItemIdQty::line(7, 2.0);
        assert_eq!(line.order_item_id, Some(7));
        assert_eq!(line.qty, Some(2.0));
        assert_eq!(SalesOrderHoldRequestParam::element(), "salesOrderHoldRequestParam");
    }
}
