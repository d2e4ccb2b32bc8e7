//! Countries and regions known to the store.

magento_array! {
    DirectoryCountryEntityArray => "directoryCountryEntityArray" [DirectoryCountryEntity]
    DirectoryRegionEntityArray => "directoryRegionEntityArray" [DirectoryRegionEntity]
}

magento_entity! {
    DirectoryCountryEntity => "directoryCountryEntity" {
        country_id: String,
        iso2_code: String,
        iso3_code: String,
        name: String,
    }

    DirectoryRegionEntity => "directoryRegionEntity" {
        region_id: String,
        code: String,
        name: String,
    }
}

magento_operation! {
    operation "directoryCountryList" {
        request DirectoryCountryListRequestParam => "directoryCountryListRequestParam" {
            session_id: String,
        }
        response DirectoryCountryListResponseParam => "directoryCountryListResponseParam" {
            result: DirectoryCountryEntityArray,
        }
    }

    /// Regions of one country, keyed by ISO code.
    operation "directoryRegionList" {
        request DirectoryRegionListRequestParam => "directoryRegionListRequestParam" {
            session_id: String,
            country: String,
        }
        response DirectoryRegionListResponseParam => "directoryRegionListResponseParam" {
            result: DirectoryRegionEntityArray,
        }
    }
}
