//! Gift messages on quotes, quote items and quote products.

use super::cart::ShoppingCartProductEntity;

magento_array! {
    GiftMessageAssociativeProductsEntityArray => "giftMessageAssociativeProductsEntityArray" [GiftMessageAssociativeProductsEntity]
    GiftMessageResponseArray => "giftMessageResponseArray" [GiftMessageResponse]
}

magento_entity! {
    GiftMessageEntity => "giftMessageEntity" {
        from: String,
        to: String,
        message: String,
    }

    GiftMessageAssociativeProductsEntity => "giftMessageAssociativeProductsEntity" {
        product: ShoppingCartProductEntity,
        message: GiftMessageEntity,
    }

    /// Outcome for one quote, item or product.
    GiftMessageResponse => "giftMessageResponse" {
        #[serde(rename = "entityId")]
        entity_id: String,
        result: bool,
        error: String,
    }
}

magento_operation! {
    operation "giftMessageForQuote" {
        request GiftMessageForQuoteRequestParam => "giftMessageForQuoteRequestParam" {
            session_id: String,
            quote_id: String,
            gift_message: GiftMessageEntity,
            store_id: String,
        }
        response GiftMessageForQuoteResponseParam => "giftMessageForQuoteResponseParam" {
            result: GiftMessageResponse,
        }
    }

    operation "giftMessageForQuoteItem" {
        request GiftMessageForQuoteItemRequestParam => "giftMessageForQuoteItemRequestParam" {
            session_id: String,
            quote_item_id: String,
            gift_message: GiftMessageEntity,
            store_id: String,
        }
        response GiftMessageForQuoteItemResponseParam => "giftMessageForQuoteItemResponseParam" {
            result: GiftMessageResponse,
        }
    }

    operation "giftMessageForQuoteProduct" {
        request GiftMessageForQuoteProductRequestParam => "giftMessageForQuoteProductRequestParam" {
            session_id: String,
            quote_id: String,
            products_and_messages: GiftMessageAssociativeProductsEntityArray,
            store_id: String,
        }
        response GiftMessageForQuoteProductResponseParam => "giftMessageForQuoteProductResponseParam" {
            result: GiftMessageResponseArray,
        }
    }
}
