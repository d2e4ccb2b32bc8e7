//! Invoices and the invoice life cycle (`create`, `capture`, `void`, `cancel`).

use super::common::Filters;
use super::sales_order::OrderItemIdQtyArray;

magento_array! {
    SalesOrderInvoiceEntityArray => "salesOrderInvoiceEntityArray" [SalesOrderInvoiceEntity]
    SalesOrderInvoiceItemEntityArray => "salesOrderInvoiceItemEntityArray" [SalesOrderInvoiceItemEntity]
    SalesOrderInvoiceCommentEntityArray => "salesOrderInvoiceCommentEntityArray" [SalesOrderInvoiceCommentEntity]
}

magento_entity! {
    SalesOrderInvoiceEntity => "salesOrderInvoiceEntity" {
        increment_id: String,
        parent_id: String,
        store_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        global_currency_code: String,
        base_currency_code: String,
        store_currency_code: String,
        order_currency_code: String,
        store_to_base_rate: String,
        store_to_order_rate: String,
        base_to_global_rate: String,
        base_to_order_rate: String,
        subtotal: String,
        base_subtotal: String,
        base_grand_total: String,
        discount_amount: String,
        base_discount_amount: String,
        shipping_amount: String,
        base_shipping_amount: String,
        tax_amount: String,
        base_tax_amount: String,
        billing_address_id: String,
        billing_firstname: String,
        billing_lastname: String,
        order_id: String,
        order_increment_id: String,
        order_created_at: String,
        state: String,
        grand_total: String,
        invoice_id: String,
        items: SalesOrderInvoiceItemEntityArray,
        comments: SalesOrderInvoiceCommentEntityArray,
    }

    SalesOrderInvoiceItemEntity => "salesOrderInvoiceItemEntity" {
        increment_id: String,
        parent_id: String,
        created_at: String,
        updated_at: String,
        is_active: String,
        weee_tax_applied: String,
        qty: String,
        cost: String,
        price: String,
        tax_amount: String,
        row_total: String,
        base_price: String,
        base_tax_amount: String,
        base_row_total: String,
        base_weee_tax_applied_amount: String,
        base_weee_tax_applied_row_amount: String,
        weee_tax_applied_amount: String,
        weee_tax_applied_row_amount: String,
        weee_tax_disposition: String,
        weee_tax_row_disposition: String,
        base_weee_tax_disposition: String,
        base_weee_tax_row_disposition: String,
        sku: String,
        name: String,
        order_item_id: String,
        product_id: String,
        item_id: String,
    }

    SalesOrderInvoiceCommentEntity => "salesOrderInvoiceCommentEntity" {
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
    operation "salesOrderInvoiceList" {
        request SalesOrderInvoiceListRequestParam => "salesOrderInvoiceListRequestParam" {
            session_id: String,
            filters: Filters,
        }
        response SalesOrderInvoiceListResponseParam => "salesOrderInvoiceListResponseParam" {
            result: SalesOrderInvoiceEntityArray,
        }
    }

    operation "salesOrderInvoiceInfo" {
        request SalesOrderInvoiceInfoRequestParam => "salesOrderInvoiceInfoRequestParam" {
            session_id: String,
            invoice_increment_id: String,
        }
        response SalesOrderInvoiceInfoResponseParam => "salesOrderInvoiceInfoResponseParam" {
            result: SalesOrderInvoiceEntity,
        }
    }

    /// Invoices the given order lines. The reply is the new invoice increment id.
    operation "salesOrderInvoiceCreate" {
        request SalesOrderInvoiceCreateRequestParam => "salesOrderInvoiceCreateRequestParam" {
            session_id: String,
            order_increment_id: String,
            items_qty: OrderItemIdQtyArray,
            comment: String,
            email: String,
            include_comment: String,
        }
        response SalesOrderInvoiceCreateResponseParam => "salesOrderInvoiceCreateResponseParam" {
            result: String,
        }
    }

    operation "salesOrderInvoiceAddComment" {
        request SalesOrderInvoiceAddCommentRequestParam => "salesOrderInvoiceAddCommentRequestParam" {
            session_id: String,
            invoice_increment_id: String,
            comment: String,
            email: String,
            include_comment: String,
        }
        response SalesOrderInvoiceAddCommentResponseParam => "salesOrderInvoiceAddCommentResponseParam" {
            result: String,
        }
    }

    operation "salesOrderInvoiceCapture" {
        request SalesOrderInvoiceCaptureRequestParam => "salesOrderInvoiceCaptureRequestParam" {
            session_id: String,
            invoice_increment_id: String,
        }
        response SalesOrderInvoiceCaptureResponseParam => "salesOrderInvoiceCaptureResponseParam" {
            result: String,
        }
    }

    operation "salesOrderInvoiceVoid" {
        request SalesOrderInvoiceVoidRequestParam => "salesOrderInvoiceVoidRequestParam" {
            session_id: String,
            invoice_increment_id: String,
        }
        response SalesOrderInvoiceVoidResponseParam => "salesOrderInvoiceVoidResponseParam" {
            result: String,
        }
    }

    operation "salesOrderInvoiceCancel" {
        request SalesOrderInvoiceCancelRequestParam => "salesOrderInvoiceCancelRequestParam" {
            session_id: String,
            invoice_increment_id: String,
        }
        response SalesOrderInvoiceCancelResponseParam => "salesOrderInvoiceCancelResponseParam" {
            result: String,
        }
    }
}
