//! Product images (`catalogProductAttributeMedia*`).

use super::common::ArrayOfString;

magento_array! {
    CatalogProductImageEntityArray => "catalogProductImageEntityArray" [CatalogProductImageEntity]
    CatalogProductAttributeMediaTypeEntityArray => "catalogProductAttributeMediaTypeEntityArray" [CatalogProductAttributeMediaTypeEntity]
}

magento_entity! {
    /// Image attached to a product. `types` lists the roles it plays
    /// (`image`, `small_image`, `thumbnail`).
    CatalogProductImageEntity => "catalogProductImageEntity" {
        file: String,
        label: String,
        position: String,
        exclude: String,
        url: String,
        types: ArrayOfString,
    }

    /// Base64 encoded image upload.
    CatalogProductImageFileEntity => "catalogProductImageFileEntity" {
        content: String,
        mime: String,
        name: String,
    }

    CatalogProductAttributeMediaCreateEntity => "catalogProductAttributeMediaCreateEntity" {
        file: CatalogProductImageFileEntity,
        label: String,
        position: String,
        types: ArrayOfString,
        exclude: String,
        remove: String,
    }

    CatalogProductAttributeMediaTypeEntity => "catalogProductAttributeMediaTypeEntity" {
        code: String,
        scope: String,
    }
}

magento_operation! {
    operation "catalogProductAttributeMediaCurrentStore" {
        request CatalogProductAttributeMediaCurrentStoreRequestParam => "catalogProductAttributeMediaCurrentStoreRequestParam" {
            session_id: String,
            store: String,
        }
        response CatalogProductAttributeMediaCurrentStoreResponseParam => "catalogProductAttributeMediaCurrentStoreResponseParam" {
            result: i32,
        }
    }

    /// Images of one product, in gallery order.
    operation "catalogProductAttributeMediaList" {
        request CatalogProductAttributeMediaListRequestParam => "catalogProductAttributeMediaListRequestParam" {
            session_id: String,
            product_id: String,
            store: String,
            identifier_type: String,
        }
        response CatalogProductAttributeMediaListResponseParam => "catalogProductAttributeMediaListResponseParam" {
            result: CatalogProductImageEntityArray,
        }
    }

    operation "catalogProductAttributeMediaInfo" {
        request CatalogProductAttributeMediaInfoRequestParam => "catalogProductAttributeMediaInfoRequestParam" {
            session_id: String,
            product_id: String,
            file: String,
            store: String,
            identifier_type: String,
        }
        response CatalogProductAttributeMediaInfoResponseParam => "catalogProductAttributeMediaInfoResponseParam" {
            result: CatalogProductImageEntity,
        }
    }

    operation "catalogProductAttributeMediaTypes" {
        request CatalogProductAttributeMediaTypesRequestParam => "catalogProductAttributeMediaTypesRequestParam" {
            session_id: String,
            set_id: String,
        }
        response CatalogProductAttributeMediaTypesResponseParam => "catalogProductAttributeMediaTypesResponseParam" {
            result: CatalogProductAttributeMediaTypeEntityArray,
        }
    }

    /// Uploads an image. The reply is the stored file name.
    operation "catalogProductAttributeMediaCreate" {
        request CatalogProductAttributeMediaCreateRequestParam => "catalogProductAttributeMediaCreateRequestParam" {
            session_id: String,
            product_id: String,
            data: CatalogProductAttributeMediaCreateEntity,
            store: String,
            identifier_type: String,
        }
        response CatalogProductAttributeMediaCreateResponseParam => "catalogProductAttributeMediaCreateResponseParam" {
            result: String,
        }
    }

    operation "catalogProductAttributeMediaUpdate" {
        request CatalogProductAttributeMediaUpdateRequestParam => "catalogProductAttributeMediaUpdateRequestParam" {
            session_id: String,
            product_id: String,
            file: String,
            data: CatalogProductAttributeMediaCreateEntity,
            store: String,
            identifier_type: String,
        }
        response CatalogProductAttributeMediaUpdateResponseParam => "catalogProductAttributeMediaUpdateResponseParam" {
            result: bool,
        }
    }

    operation "catalogProductAttributeMediaRemove" {
        request CatalogProductAttributeMediaRemoveRequestParam => "catalogProductAttributeMediaRemoveRequestParam" {
            session_id: String,
            product_id: String,
            file: String,
            identifier_type: String,
        }
        response CatalogProductAttributeMediaRemoveResponseParam => "catalogProductAttributeMediaRemoveResponseParam" {
            result: bool,
        }
    }
}

impl CatalogProductImageEntityArray {
    /// URL of the first image. Later images are not consulted, even when the first
    /// one has no url.
    pub fn first_url(&self) -> Option<&str> {
        self.complex_object_array.first().and_then(|image| image.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_url() {
        let images: CatalogProductImageEntityArray = vec![
            CatalogProductImageEntity::new().with_file("/a.jpg").with_url("http://img/a.jpg"),
            CatalogProductImageEntity::new().with_file("/b.jpg").with_url("http://img/b.jpg"),
        ]
        .into();
        assert_eq!(images.first_url(), Some("http://img/a.jpg"));
        assert_eq!(CatalogProductImageEntityArray::new().first_url(), None);
    }

    #[test]
    fn test_first_image_without_url() {
        let images: CatalogProductImageEntityArray = vec![
            CatalogProductImageEntity::new().with_file("/a.jpg"),
            CatalogProductImageEntity::new().with_url("http://img/b.jpg"),
        ]
        .into();
        assert_eq!(images.first_url(), None);
    }
}
