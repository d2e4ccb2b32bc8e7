//! Links and samples of downloadable products.

magento_array! {
    CatalogProductDownloadableLinkFileInfoEntityArray => "catalogProductDownloadableLinkFileInfoEntityArray" [CatalogProductDownloadableLinkFileInfoEntity]
    CatalogProductDownloadableLinkEntityArray => "catalogProductDownloadableLinkEntityArray" [CatalogProductDownloadableLinkEntity]
    CatalogProductDownloadableLinkSampleEntityArray => "catalogProductDownloadableLinkSampleEntityArray" [CatalogProductDownloadableLinkSampleEntity]
}

magento_entity! {
    /// Inline upload of a link or sample file.
    CatalogProductDownloadableLinkFileEntity => "catalogProductDownloadableLinkFileEntity" {
        name: String,
        base64_content: String,
    }

    /// Sample attached to a new link. `kind` is `file` or `url`.
    CatalogProductDownloadableLinkAddSampleEntity => "catalogProductDownloadableLinkAddSampleEntity" {
        #[serde(rename = "type")]
        kind: String,
        file: CatalogProductDownloadableLinkFileEntity,
        url: String,
    }

    CatalogProductDownloadableLinkAddEntity => "catalogProductDownloadableLinkAddEntity" {
        title: String,
        price: String,
        is_unlimited: i32,
        number_of_downloads: i32,
        is_shareable: i32,
        sample: CatalogProductDownloadableLinkAddSampleEntity,
        #[serde(rename = "type")]
        kind: String,
        file: CatalogProductDownloadableLinkFileEntity,
        link_url: String,
        sample_url: String,
        sort_order: i32,
    }

    CatalogProductDownloadableLinkFileInfoEntity => "catalogProductDownloadableLinkFileInfoEntity" {
        file: String,
        name: String,
        size: i32,
        status: String,
    }

    CatalogProductDownloadableLinkEntity => "catalogProductDownloadableLinkEntity" {
        link_id: String,
        title: String,
        price: String,
        number_of_downloads: i32,
        is_unlimited: i32,
        is_shareable: i32,
        link_url: String,
        link_type: String,
        sample_file: String,
        sample_url: String,
        sample_type: String,
        sort_order: i32,
        file_save: CatalogProductDownloadableLinkFileInfoEntityArray,
        sample_file_save: CatalogProductDownloadableLinkFileInfoEntityArray,
    }

    CatalogProductDownloadableLinkSampleEntity => "catalogProductDownloadableLinkSampleEntity" {
        sample_id: String,
        product_id: String,
        sample_file: String,
        sample_url: String,
        sample_type: String,
        sort_order: String,
        default_title: String,
        store_title: String,
        title: String,
    }

    CatalogProductDownloadableLinkListEntity => "catalogProductDownloadableLinkListEntity" {
        links: CatalogProductDownloadableLinkEntityArray,
        samples: CatalogProductDownloadableLinkSampleEntityArray,
    }
}

magento_operation! {
    /// Adds a link or sample. `resource_type` is `link` or `sample`; the reply is the new id.
    operation "catalogProductDownloadableLinkAdd" {
        request CatalogProductDownloadableLinkAddRequestParam => "catalogProductDownloadableLinkAddRequestParam" {
            session_id: String,
            product_id: String,
            resource: CatalogProductDownloadableLinkAddEntity,
            resource_type: String,
            store: String,
            identifier_type: String,
        }
        response CatalogProductDownloadableLinkAddResponseParam => "catalogProductDownloadableLinkAddResponseParam" {
            result: i32,
        }
    }

    operation "catalogProductDownloadableLinkList" {
        request CatalogProductDownloadableLinkListRequestParam => "catalogProductDownloadableLinkListRequestParam" {
            session_id: String,
            product_id: String,
            store: String,
            identifier_type: String,
        }
        response CatalogProductDownloadableLinkListResponseParam => "catalogProductDownloadableLinkListResponseParam" {
            result: CatalogProductDownloadableLinkListEntity,
        }
    }

    operation "catalogProductDownloadableLinkRemove" {
        request CatalogProductDownloadableLinkRemoveRequestParam => "catalogProductDownloadableLinkRemoveRequestParam" {
            session_id: String,
            link_id: String,
            resource_type: String,
        }
        response CatalogProductDownloadableLinkRemoveResponseParam => "catalogProductDownloadableLinkRemoveResponseParam" {
            result: bool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::{MagentoType, SoapRequest};

    #[test]
    fn test_link_with_sample_file() {
        let file = CatalogProductDownloadableLinkFileEntity::new()
            .with_name("manual.pdf")
            .with_base64_content("JVBERi0=");
        let link = CatalogProductDownloadableLinkAddEntity::new()
            .with_title("Manual")
            .with_is_unlimited(1)
            .with_kind("file")
            .with_file(file.clone())
            .with_sample(CatalogProductDownloadableLinkAddSampleEntity::new().with_kind("url").with_url("http://x"));

        assert_eq!(link.file, Some(file));
        assert_eq!(link.sample.and_then(|s| s.url).as_deref(), Some("http://x"));
        assert_eq!(link.number_of_downloads, None);
    }

    #[test]
    fn test_list_groups_links_and_samples() {
        let listing = CatalogProductDownloadableLinkListEntity::new()
            .with_links(CatalogProductDownloadableLinkEntityArray::from(vec![
                CatalogProductDownloadableLinkEntity::new().with_link_id("3"),
            ]))
            .with_samples(CatalogProductDownloadableLinkSampleEntityArray::new());

        assert_eq!(listing.links.as_ref().map(|l| l.len()), Some(1));
        assert!(listing.samples.as_ref().is_some_and(|s| s.is_empty()));
    }

    #[test]
    fn test_list_entity_schema_name() {
        assert_eq!(
            CatalogProductDownloadableLinkListEntity::XML_TYPE,
            "catalogProductDownloadableLinkListEntity"
        );
        assert_eq!(
            CatalogProductDownloadableLinkListRequestParam::element(),
            "catalogProductDownloadableLinkListRequestParam"
        );
    }
}
