//! Session handling and API introspection (`login`, `endSession`, `resources`, ...).

use super::common::{ArrayOfExistsFaltures, ArrayOfString};

magento_array! {
    ArrayOfApis => "ArrayOfApis" [ApiEntity]
    ArrayOfApiMethods => "ArrayOfApiMethods" [ApiMethodEntity]
}

magento_entity! {
    /// One API resource as reported by `resources`.
    ApiEntity => "apiEntity" {
        title: String,
        name: String,
        aliases: ArrayOfString,
        methods: ArrayOfApiMethods,
    }

    ApiMethodEntity => "apiMethodEntity" {
        title: String,
        path: String,
        name: String,
        aliases: ArrayOfString,
    }

    MagentoInfoEntity => "magentoInfoEntity" {
        magento_version: String,
        magento_edition: String,
    }
}

magento_operation! {
    /// Opens an API session. `api_key` is the API user's key, not the admin password.
    operation "login" {
        request LoginParam => "loginParam" {
            username: String,
            api_key: String,
        }
        response LoginResponseParam => "loginResponseParam" {
            result: String,
        }
    }

    operation "endSession" {
        request EndSessionParam => "endSessionParam" {
            session_id: String,
        }
        response EndSessionResponseParam => "endSessionResponseParam" {
            result: bool,
        }
    }

    operation "startSession" {
        request StartSessionParam => "startSessionParam" {}
        response StartSessionResponseParam => "startSessionResponseParam" {
            result: String,
        }
    }

    operation "magentoInfo" {
        request MagentoInfoRequestParam => "magentoInfoRequestParam" {
            session_id: String,
        }
        response MagentoInfoResponseParam => "magentoInfoResponseParam" {
            result: MagentoInfoEntity,
        }
    }

    operation "resources" {
        request ResourcesRequestParam => "resourcesRequestParam" {
            session_id: String,
        }
        response ResourcesResponseParam => "resourcesResponseParam" {
            result: ArrayOfApis,
        }
    }

    operation "globalFaults" {
        request GlobalFaultsParam => "globalFaultsParam" {
            session_id: String,
        }
        response GlobalFaultsResponseParam => "globalFaultsResponseParam" {
            result: ArrayOfExistsFaltures,
        }
    }

    operation "resourceFaults" {
        request ResourceFaultsParam => "resourceFaultsParam" {
            resource_name: String,
            session_id: String,
        }
        response ResourceFaultsResponseParam => "resourceFaultsResponseParam" {
            result: ArrayOfExistsFaltures,
        }
    }

    /// Generic v1-style call. `args` is passed through untouched.
    operation "call" {
        request CallParam => "callParam" {
            session_id: String,
            resource_path: String,
            args: String,
        }
        response CallResponseParam => "callResponseParam" {
            result: String,
        }
    }

    operation "multiCall" {
        request MultiCallParam => "multiCallParam" {
            session_id: String,
            calls: ArrayOfString,
            options: String,
        }
        response MultiCallResponseParam => "multiCallResponseParam" {
            result: ArrayOfString,
        }
    }
}

impl LoginParam {
    pub fn credentials(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new().with_username(username).with_api_key(api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ws::SoapRequest;

    #[test]
    fn test_login_param_fields() {
        let login = LoginParam::credentials("magento", "secret");
        assert_eq!(login.username.as_deref(), Some("magento"));
        assert_eq!(login.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_operation_metadata() {
        assert_eq!(LoginParam::OPERATION, "login");
        assert_eq!(LoginParam::element(), "loginParam");
        assert_eq!(EndSessionParam::element(), "endSessionParam");
        assert_eq!(ResourceFaultsParam::OPERATION, "resourceFaults");
    }

    #[test]
    fn test_empty_start_session_param() {
        assert_eq!(StartSessionParam::new(), StartSessionParam::default());
    }
}
