//! Shopping cart (quote) API: building a quote, pricing it and turning it into an order.

use super::common::{ArrayOfString, AssociativeArray};
use super::product::CatalogProductEntity;

magento_array! {
    ShoppingCartItemEntityArray => "shoppingCartItemEntityArray" [ShoppingCartItemEntity]
    ShoppingCartProductEntityArray => "shoppingCartProductEntityArray" [ShoppingCartProductEntity]

    /// Products currently in the quote, in catalog form.
    ShoppingCartProductResponseEntityArray => "shoppingCartProductResponseEntityArray" [CatalogProductEntity]

    ShoppingCartCustomerAddressEntityArray => "shoppingCartCustomerAddressEntityArray" [ShoppingCartCustomerAddressEntity]
    ShoppingCartShippingMethodEntityArray => "shoppingCartShippingMethodEntityArray" [ShoppingCartShippingMethodEntity]
    ShoppingCartPaymentMethodResponseEntityArray => "shoppingCartPaymentMethodResponseEntityArray" [ShoppingCartPaymentMethodResponseEntity]
    ShoppingCartLicenseEntityArray => "shoppingCartLicenseEntityArray" [ShoppingCartLicenseEntity]
    ShoppingCartTotalsEntityArray => "shoppingCartTotalsEntityArray" [ShoppingCartTotalsEntity]
}

magento_entity! {
    /// The quote as a whole, returned by `shoppingCartInfo`.
    ShoppingCartInfoEntity => "shoppingCartInfoEntity" {
        store_id: String,
        created_at: String,
        updated_at: String,
        converted_at: String,
        quote_id: i32,
        is_active: i32,
        is_virtual: i32,
        is_multi_shipping: i32,
        items_count: f64,
        items_qty: f64,
        orig_order_id: String,
        store_to_base_rate: String,
        store_to_quote_rate: String,
        base_currency_code: String,
        store_currency_code: String,
        quote_currency_code: String,
        grand_total: String,
        base_grand_total: String,
        checkout_method: String,
        customer_id: String,
        customer_tax_class_id: String,
        customer_group_id: i32,
        customer_email: String,
        customer_prefix: String,
        customer_firstname: String,
        customer_middlename: String,
        customer_lastname: String,
        customer_suffix: String,
        customer_note: String,
        customer_note_notify: String,
        customer_is_guest: String,
        applied_rule_ids: String,
        reserved_order_id: String,
        password_hash: String,
        coupon_code: String,
        global_currency_code: String,
        base_to_global_rate: f64,
        base_to_quote_rate: f64,
        customer_taxvat: String,
        customer_gender: String,
        subtotal: f64,
        base_subtotal: f64,
        subtotal_with_discount: f64,
        base_subtotal_with_discount: f64,
        ext_shipping_info: String,
        gift_message_id: String,
        gift_message: String,
        customer_balance_amount_used: f64,
        base_customer_balance_amount_used: f64,
        use_customer_balance: String,
        gift_cards_amount: String,
        base_gift_cards_amount: String,
        gift_cards_amount_used: String,
        use_reward_points: String,
        reward_points_balance: String,
        base_reward_currency_amount: String,
        reward_currency_amount: String,
        shipping_address: ShoppingCartAddressEntity,
        billing_address: ShoppingCartAddressEntity,
        items: ShoppingCartItemEntityArray,
        payment: ShoppingCartPaymentEntity,
    }

    ShoppingCartItemEntity => "shoppingCartItemEntity" {
        item_id: String,
        created_at: String,
        updated_at: String,
        product_id: String,
        store_id: String,
        parent_item_id: String,
        is_virtual: i32,
        sku: String,
        name: String,
        description: String,
        applied_rule_ids: String,
        additional_data: String,
        free_shipping: String,
        is_qty_decimal: String,
        no_discount: String,
        weight: f64,
        qty: f64,
        price: f64,
        base_price: f64,
        custom_price: f64,
        discount_percent: f64,
        discount_amount: f64,
        base_discount_amount: f64,
        tax_percent: f64,
        tax_amount: f64,
        base_tax_amount: f64,
        row_total: f64,
        base_row_total: f64,
        row_total_with_discount: f64,
        row_weight: f64,
        product_type: String,
        base_tax_before_discount: f64,
        tax_before_discount: f64,
        original_custom_price: f64,
        base_cost: f64,
        price_incl_tax: f64,
        base_price_incl_tax: f64,
        row_total_incl_tax: f64,
        base_row_total_incl_tax: f64,
        gift_message_id: String,
        gift_message: String,
        gift_message_available: String,
        weee_tax_applied: f64,
        weee_tax_applied_amount: f64,
        weee_tax_applied_row_amount: f64,
        base_weee_tax_applied_amount: f64,
        base_weee_tax_applied_row_amount: f64,
        weee_tax_disposition: f64,
        weee_tax_row_disposition: f64,
        base_weee_tax_disposition: f64,
        base_weee_tax_row_disposition: f64,
        tax_class_id: String,
    }

    ShoppingCartPaymentEntity => "shoppingCartPaymentEntity" {
        payment_id: String,
        created_at: String,
        updated_at: String,
        method: String,
        cc_type: String,
        cc_number_enc: String,
        cc_last4: String,
        cc_cid_enc: String,
        cc_owner: String,
        cc_exp_month: String,
        cc_exp_year: String,
        cc_ss_owner: String,
        cc_ss_start_month: String,
        cc_ss_start_year: String,
        cc_ss_issue: String,
        po_number: String,
        additional_data: String,
        additional_information: String,
    }

    ShoppingCartAddressEntity => "shoppingCartAddressEntity" {
        address_id: String,
        created_at: String,
        updated_at: String,
        customer_id: String,
        save_in_address_book: i32,
        customer_address_id: String,
        address_type: String,
        email: String,
        prefix: String,
        firstname: String,
        middlename: String,
        lastname: String,
        suffix: String,
        company: String,
        street: String,
        city: String,
        region: String,
        region_id: String,
        postcode: String,
        country_id: String,
        telephone: String,
        fax: String,
        same_as_billing: i32,
        free_shipping: i32,
        shipping_method: String,
        shipping_description: String,
        weight: f64,
    }

    /// Customer attached to a quote. `mode` is `customer`, `register` or `guest`.
    ShoppingCartCustomerEntity => "shoppingCartCustomerEntity" {
        mode: String,
        customer_id: i32,
        email: String,
        firstname: String,
        lastname: String,
        password: String,
        confirmation: String,
        website_id: i32,
        store_id: i32,
        group_id: i32,
    }

    /// Billing or shipping address for a quote. `mode` is `billing` or `shipping`.
    ShoppingCartCustomerAddressEntity => "shoppingCartCustomerAddressEntity" {
        mode: String,
        address_id: String,
        firstname: String,
        lastname: String,
        company: String,
        street: String,
        city: String,
        region: String,
        region_id: String,
        postcode: String,
        country_id: String,
        telephone: String,
        fax: String,
        is_default_billing: i32,
        is_default_shipping: i32,
    }

    /// Product line to add, update or remove. Identify by `product_id` or `sku`.
    ShoppingCartProductEntity => "shoppingCartProductEntity" {
        product_id: String,
        sku: String,
        qty: f64,
        options: AssociativeArray,
        bundle_option: AssociativeArray,
        bundle_option_qty: AssociativeArray,
        links: ArrayOfString,
    }

    ShoppingCartShippingMethodEntity => "shoppingCartShippingMethodEntity" {
        code: String,
        carrier: String,
        carrier_title: String,
        method: String,
        method_title: String,
        method_description: String,
        price: f64,
    }

    ShoppingCartPaymentMethodEntity => "shoppingCartPaymentMethodEntity" {
        po_number: String,
        method: String,
        cc_cid: String,
        cc_owner: String,
        cc_number: String,
        cc_type: String,
        cc_exp_year: String,
        cc_exp_month: String,
    }

    ShoppingCartPaymentMethodResponseEntity => "shoppingCartPaymentMethodResponseEntity" {
        code: String,
        title: String,
        cc_types: AssociativeArray,
    }

    /// Terms and conditions the customer must accept before `shoppingCartOrder`.
    ShoppingCartLicenseEntity => "shoppingCartLicenseEntity" {
        agreement_id: String,
        name: String,
        content: String,
        is_active: i32,
        is_html: i32,
    }

    ShoppingCartTotalsEntity => "shoppingCartTotalsEntity" {
        title: String,
        amount: f64,
    }
}

magento_operation! {
    /// Creates an empty quote and returns its id.
    operation "shoppingCartCreate" {
        request ShoppingCartCreateRequestParam => "shoppingCartCreateRequestParam" {
            session_id: String,
            store_id: String,
        }
        response ShoppingCartCreateResponseParam => "shoppingCartCreateResponseParam" {
            result: i32,
        }
    }

    operation "shoppingCartInfo" {
        request ShoppingCartInfoRequestParam => "shoppingCartInfoRequestParam" {
            session_id: String,
            quote_id: i32,
            store_id: String,
        }
        response ShoppingCartInfoResponseParam => "shoppingCartInfoResponseParam" {
            result: ShoppingCartInfoEntity,
        }
    }

    operation "shoppingCartTotals" {
        request ShoppingCartTotalsRequestParam => "shoppingCartTotalsRequestParam" {
            session_id: String,
            quote_id: i32,
            store_id: String,
        }
        response ShoppingCartTotalsResponseParam => "shoppingCartTotalsResponseParam" {
            result: ShoppingCartTotalsEntityArray,
        }
    }

    /// Converts the quote to an order. The reply is the order increment id.
    operation "shoppingCartOrder" {
        request ShoppingCartOrderRequestParam => "shoppingCartOrderRequestParam" {
            session_id: String,
            quote_id: i32,
            store_id: String,
            agreements: ArrayOfString,
        }
        response ShoppingCartOrderResponseParam => "shoppingCartOrderResponseParam" {
            result: String,
        }
    }

    operation "shoppingCartLicense" {
        request ShoppingCartLicenseRequestParam => "shoppingCartLicenseRequestParam" {
            session_id: String,
            quote_id: i32,
            store_id: String,
        }
        response ShoppingCartLicenseResponseParam => "shoppingCartLicenseResponseParam" {
            result: ShoppingCartLicenseEntityArray,
        }
    }

    operation "shoppingCartProductAdd" {
        request ShoppingCartProductAddRequestParam => "shoppingCartProductAddRequestParam" {
            session_id: String,
            quote_id: i32,
            products_data: ShoppingCartProductEntityArray,
            store_id: String,
        }
        response ShoppingCartProductAddResponseParam => "shoppingCartProductAddResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartProductUpdate" {
        request ShoppingCartProductUpdateRequestParam => "shoppingCartProductUpdateRequestParam" {
            session_id: String,
            quote_id: i32,
            products_data: ShoppingCartProductEntityArray,
            store_id: String,
        }
        response ShoppingCartProductUpdateResponseParam => "shoppingCartProductUpdateResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartProductRemove" {
        request ShoppingCartProductRemoveRequestParam => "shoppingCartProductRemoveRequestParam" {
            session_id: String,
            quote_id: i32,
            products_data: ShoppingCartProductEntityArray,
            store_id: String,
        }
        response ShoppingCartProductRemoveResponseParam => "shoppingCartProductRemoveResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartProductList" {
        request ShoppingCartProductListRequestParam => "shoppingCartProductListRequestParam" {
            session_id: String,
            quote_id: i32,
            store_id: String,
        }
        response ShoppingCartProductListResponseParam => "shoppingCartProductListResponseParam" {
            result: ShoppingCartProductResponseEntityArray,
        }
    }

    operation "shoppingCartProductMoveToCustomerQuote" {
        request ShoppingCartProductMoveToCustomerQuoteRequestParam => "shoppingCartProductMoveToCustomerQuoteRequestParam" {
            session_id: String,
            quote_id: i32,
            products_data: ShoppingCartProductEntityArray,
            store_id: String,
        }
        response ShoppingCartProductMoveToCustomerQuoteResponseParam => "shoppingCartProductMoveToCustomerQuoteResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartCustomerSet" {
        request ShoppingCartCustomerSetRequestParam => "shoppingCartCustomerSetRequestParam" {
            session_id: String,
            quote_id: i32,
            customer_data: ShoppingCartCustomerEntity,
            store_id: String,
        }
        response ShoppingCartCustomerSetResponseParam => "shoppingCartCustomerSetResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartCustomerAddresses" {
        request ShoppingCartCustomerAddressesRequestParam => "shoppingCartCustomerAddressesRequestParam" {
            session_id: String,
            quote_id: i32,
            customer_address_data: ShoppingCartCustomerAddressEntityArray,
            store_id: String,
        }
        response ShoppingCartCustomerAddressesResponseParam => "shoppingCartCustomerAddressesResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartShippingMethod" {
        request ShoppingCartShippingMethodRequestParam => "shoppingCartShippingMethodRequestParam" {
            session_id: String,
            quote_id: i32,
            shipping_method: String,
            store_id: String,
        }
        response ShoppingCartShippingMethodResponseParam => "shoppingCartShippingMethodResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartShippingList" {
        request ShoppingCartShippingListRequestParam => "shoppingCartShippingListRequestParam" {
            session_id: String,
            quote_id: i32,
            store_id: String,
        }
        response ShoppingCartShippingListResponseParam => "shoppingCartShippingListResponseParam" {
            result: ShoppingCartShippingMethodEntityArray,
        }
    }

    operation "shoppingCartPaymentMethod" {
        request ShoppingCartPaymentMethodRequestParam => "shoppingCartPaymentMethodRequestParam" {
            session_id: String,
            quote_id: i32,
            payment_data: ShoppingCartPaymentMethodEntity,
            store_id: String,
        }
        response ShoppingCartPaymentMethodResponseParam => "shoppingCartPaymentMethodResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartPaymentList" {
        request ShoppingCartPaymentListRequestParam => "shoppingCartPaymentListRequestParam" {
            session_id: String,
            quote_id: i32,
            store: String,
        }
        response ShoppingCartPaymentListResponseParam => "shoppingCartPaymentListResponseParam" {
            result: ShoppingCartPaymentMethodResponseEntityArray,
        }
    }

    operation "shoppingCartCouponAdd" {
        request ShoppingCartCouponAddRequestParam => "shoppingCartCouponAddRequestParam" {
            session_id: String,
            quote_id: i32,
            coupon_code: String,
            store_id: String,
        }
        response ShoppingCartCouponAddResponseParam => "shoppingCartCouponAddResponseParam" {
            result: bool,
        }
    }

    operation "shoppingCartCouponRemove" {
        request ShoppingCartCouponRemoveRequestParam => "shoppingCartCouponRemoveRequestParam" {
            session_id: String,
            quote_id: i32,
            store_id: String,
        }
        response ShoppingCartCouponRemoveResponseParam => "shoppingCartCouponRemoveResponseParam" {
            result: bool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_info_mixed_scalar_types() {
        let info = ShoppingCartInfoEntity::new()
            .with_quote_id(42)
            .with_items_count(3.0)
            .with_store_id("1")
            .with_payment(ShoppingCartPaymentEntity::new().with_method("checkmo"));

        assert_eq!(info.quote_id, Some(42));
        assert_eq!(info.items_count, Some(3.0));
        assert_eq!(info.store_id.as_deref(), Some("1"));
        let method = info.payment.as_ref().and_then(|p| p.method.as_deref());
        assert_eq!(method, Some("checkmo"));
        assert_eq!(info.billing_address, None);
    }

    #[test]
    fn test_product_line_by_sku() {
        let line = ShoppingCartProductEntity::new().with_sku("W-1").with_qty(2.0);
        let lines: ShoppingCartProductEntityArray = vec![line].into();
        assert_eq!(lines.items()[0].sku.as_deref(), Some("W-1"));
        assert_eq!(lines.items()[0].product_id, None);
    }
}
