//! Customers, customer addresses and customer groups.

use super::common::{ArrayOfString, Filters};

magento_array! {
    CustomerCustomerEntityArray => "customerCustomerEntityArray" [CustomerCustomerEntity]
    CustomerGroupEntityArray => "customerGroupEntityArray" [CustomerGroupEntity]
    CustomerAddressEntityArray => "customerAddressEntityArray" [CustomerAddressEntityItem]
}

magento_entity! {
    CustomerCustomerEntity => "customerCustomerEntity" {
        customer_id: i32,
        created_at: String,
        updated_at: String,
        increment_id: String,
        store_id: i32,
        website_id: i32,
        created_in: String,
        email: String,
        firstname: String,
        middlename: String,
        lastname: String,
        group_id: i32,
        prefix: String,
        suffix: String,
        dob: String,
        taxvat: String,
        confirmation: bool,
        password_hash: String,
        rp_token: String,
        rp_token_created_at: String,
    }

    /// Payload for `customerCustomerCreate` and `customerCustomerUpdate`.
    CustomerCustomerEntityToCreate => "customerCustomerEntityToCreate" {
        customer_id: i32,
        email: String,
        firstname: String,
        lastname: String,
        password: String,
        website_id: i32,
        store_id: i32,
        group_id: i32,
        prefix: String,
        suffix: String,
        dob: String,
        taxvat: String,
        gender: i32,
        middlename: String,
    }

    CustomerGroupEntity => "customerGroupEntity" {
        customer_group_id: i32,
        customer_group_code: String,
    }

    CustomerAddressEntityCreate => "customerAddressEntityCreate" {
        city: String,
        company: String,
        country_id: String,
        fax: String,
        firstname: String,
        lastname: String,
        middlename: String,
        postcode: String,
        prefix: String,
        region_id: i32,
        region: String,
        street: ArrayOfString,
        suffix: String,
        telephone: String,
        is_default_billing: bool,
        is_default_shipping: bool,
    }

    /// Address as returned by `customerAddressList` and `customerAddressInfo`.
    CustomerAddressEntityItem => "customerAddressEntityItem" {
        customer_address_id: i32,
        created_at: String,
        updated_at: String,
        increment_id: String,
        city: String,
        company: String,
        country_id: String,
        fax: String,
        firstname: String,
        lastname: String,
        middlename: String,
        postcode: String,
        prefix: String,
        region: String,
        region_id: i32,
        street: String,
        suffix: String,
        telephone: String,
        is_default_billing: bool,
        is_default_shipping: bool,
    }
}

magento_operation! {
    operation "customerCustomerList" {
        request CustomerCustomerListRequestParam => "customerCustomerListRequestParam" {
            session_id: String,
            filters: Filters,
        }
        response CustomerCustomerListResponseParam => "customerCustomerListResponseParam" {
            result: CustomerCustomerEntityArray,
        }
    }

    operation "customerCustomerCreate" {
        request CustomerCustomerCreateRequestParam => "customerCustomerCreateRequestParam" {
            session_id: String,
            customer_data: CustomerCustomerEntityToCreate,
        }
        response CustomerCustomerCreateResponseParam => "customerCustomerCreateResponseParam" {
            result: i32,
        }
    }

    operation "customerCustomerInfo" {
        request CustomerCustomerInfoRequestParam => "customerCustomerInfoRequestParam" {
            session_id: String,
            customer_id: i32,
            attributes: ArrayOfString,
        }
        response CustomerCustomerInfoResponseParam => "customerCustomerInfoResponseParam" {
            result: CustomerCustomerEntity,
        }
    }

    operation "customerCustomerUpdate" {
        request CustomerCustomerUpdateRequestParam => "customerCustomerUpdateRequestParam" {
            session_id: String,
            customer_id: i32,
            customer_data: CustomerCustomerEntityToCreate,
        }
        response CustomerCustomerUpdateResponseParam => "customerCustomerUpdateResponseParam" {
            result: bool,
        }
    }

    operation "customerCustomerDelete" {
        request CustomerCustomerDeleteRequestParam => "customerCustomerDeleteRequestParam" {
            session_id: String,
            customer_id: i32,
        }
        response CustomerCustomerDeleteResponseParam => "customerCustomerDeleteResponseParam" {
            result: bool,
        }
    }

    operation "customerGroupList" {
        request CustomerGroupListRequestParam => "customerGroupListRequestParam" {
            session_id: String,
        }
        response CustomerGroupListResponseParam => "customerGroupListResponseParam" {
            result: CustomerGroupEntityArray,
        }
    }

    operation "customerAddressList" {
        request CustomerAddressListRequestParam => "customerAddressListRequestParam" {
            session_id: String,
            customer_id: i32,
        }
        response CustomerAddressListResponseParam => "customerAddressListResponseParam" {
            result: CustomerAddressEntityArray,
        }
    }

    operation "customerAddressCreate" {
        request CustomerAddressCreateRequestParam => "customerAddressCreateRequestParam" {
            session_id: String,
            customer_id: i32,
            address_data: CustomerAddressEntityCreate,
        }
        response CustomerAddressCreateResponseParam => "customerAddressCreateResponseParam" {
            result: i32,
        }
    }

    operation "customerAddressInfo" {
        request CustomerAddressInfoRequestParam => "customerAddressInfoRequestParam" {
            session_id: String,
            address_id: i32,
        }
        response CustomerAddressInfoResponseParam => "customerAddressInfoResponseParam" {
            result: CustomerAddressEntityItem,
        }
    }

    operation "customerAddressUpdate" {
        request CustomerAddressUpdateRequestParam => "customerAddressUpdateRequestParam" {
            session_id: String,
            address_id: i32,
            address_data: CustomerAddressEntityCreate,
        }
        response CustomerAddressUpdateResponseParam => "customerAddressUpdateResponseParam" {
            result: bool,
        }
    }

    operation "customerAddressDelete" {
        request CustomerAddressDeleteRequestParam => "customerAddressDeleteRequestParam" {
            session_id: String,
            address_id: i32,
        }
        response CustomerAddressDeleteResponseParam => "customerAddressDeleteResponseParam" {
            result: bool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_item_flags_and_ids() {
        let address = CustomerAddressEntityItem::new()
            .with_customer_address_id(12)
            .with_region_id(43)
            .with_is_default_billing(true)
            .with_city("Atlanta");

        assert_eq!(address.customer_address_id, Some(12));
        assert_eq!(address.region_id, Some(43));
        assert_eq!(address.is_default_billing, Some(true));
        assert_eq!(address.is_default_shipping, None);
        assert_eq!(address.city.as_deref(), Some("Atlanta"));
    }

    #[test]
    fn test_address_create_street_lines() {
        let address = CustomerAddressEntityCreate::new()
            .with_street(vec!["1 Main St".to_string(), "Suite 4".to_string()]);
        assert_eq!(address.street.map(|s| s.len()), Some(2));
    }
}
