//! Declarative macros that stamp out the Magento complex types.
//!
//! Every Magento record has the same shape: a flat list of optional elements, each
//! of which is a scalar, another record, or an `…Array` wrapper. Writing that out by
//! hand for a few hundred types would bury the interesting parts of the schema, so
//! the field lists live in the resource modules and the plumbing lives here.

/// Declares one or more Magento records.
///
/// Every field becomes a public `Option<T>` that is skipped on output when absent,
/// and gets a `with_<field>` builder. Field attributes are passed through, so wire
/// names that are not valid Rust identifiers are mapped with `#[serde(rename = ..)]`.
///
/// Each record also gets a test that sets every field and reads it back.
macro_rules! magento_entity {
    ($(
        $(#[$meta:meta])*
        $name:ident => $xml:literal {
            $( $(#[$fmeta:meta])* $field:ident : $ty:ty ),* $(,)?
        }
    )*) => {
        $(
            #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
            $(#[$meta])*
            pub struct $name {
                $(
                    $(#[$fmeta])*
                    #[serde(default, skip_serializing_if = "Option::is_none")]
                    pub $field: Option<$ty>,
                )*
            }

            impl $name {
                /// Creates an instance with every element absent.
                pub fn new() -> Self {
                    Self::default()
                }

                paste::paste! {
                    $(
                        #[doc = concat!("Sets `", stringify!($field), "` and returns the record.")]
                        pub fn [<with_ $field>](mut self, value: impl Into<$ty>) -> Self {
                            self.$field = Some(value.into());
                            self
                        }
                    )*
                }
            }

            impl $crate::ws::MagentoType for $name {
                const XML_TYPE: &'static str = $xml;
            }

            paste::paste! {
                #[cfg(test)]
                #[test]
                #[allow(unused_mut, unused_variables, unused_imports)]
                fn [<test_ $name:snake _fields_read_back>]() {
                    use $crate::ws::SampleValue;

                    let empty = $name::new();
                    $( assert_eq!(empty.$field, None); )*

                    let filled = $name::new()
                        $( .[<with_ $field>](<$ty as SampleValue>::sample()) )*;
                    $( assert_eq!(filled.$field, Some(<$ty as SampleValue>::sample())); )*

                    let mut cleared = filled.clone();
                    $( cleared.$field = None; )*
                    assert_eq!(cleared, empty);
                }
            }
        )*
    };
}

/// Declares WS-I list wrappers.
///
/// The WS-I binding never puts a bare sequence on the wire. Lists travel inside a
/// record whose only child, `complexObjectArray`, repeats once per item.
macro_rules! magento_array {
    ($(
        $(#[$meta:meta])*
        $name:ident => $xml:literal [$item:ty]
    )*) => {
        $(
            #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
            $(#[$meta])*
            pub struct $name {
                #[serde(rename = "complexObjectArray", default)]
                pub complex_object_array: Vec<$item>,
            }

            impl $name {
                pub fn new() -> Self {
                    Self::default()
                }

                pub fn items(&self) -> &[$item] {
                    &self.complex_object_array
                }

                pub fn push(&mut self, item: $item) {
                    self.complex_object_array.push(item);
                }

                pub fn len(&self) -> usize {
                    self.complex_object_array.len()
                }

                pub fn is_empty(&self) -> bool {
                    self.complex_object_array.is_empty()
                }

                pub fn into_vec(self) -> Vec<$item> {
                    self.complex_object_array
                }
            }

            impl From<Vec<$item>> for $name {
                fn from(items: Vec<$item>) -> Self {
                    Self { complex_object_array: items }
                }
            }

            impl FromIterator<$item> for $name {
                fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                    Self { complex_object_array: iter.into_iter().collect() }
                }
            }

            impl IntoIterator for $name {
                type Item = $item;
                type IntoIter = std::vec::IntoIter<$item>;

                fn into_iter(self) -> Self::IntoIter {
                    self.complex_object_array.into_iter()
                }
            }

            impl<'a> IntoIterator for &'a $name {
                type Item = &'a $item;
                type IntoIter = std::slice::Iter<'a, $item>;

                fn into_iter(self) -> Self::IntoIter {
                    self.complex_object_array.iter()
                }
            }

            impl $crate::ws::MagentoType for $name {
                const XML_TYPE: &'static str = $xml;
            }
        )*
    };
}

/// Declares request/response element pairs for Magento operations.
///
/// Operation parameters use camelCase element names (`sessionId`, `productId`),
/// so both records are declared with `rename_all = "camelCase"`. The few snake_case
/// parameters carry an explicit rename. The request also implements
/// [`SoapRequest`](crate::ws::SoapRequest), which ties it to its reply.
macro_rules! magento_operation {
    ($(
        $(#[$meta:meta])*
        operation $op:literal {
            request $req:ident => $req_xml:literal {
                $( $(#[$qmeta:meta])* $qfield:ident : $qty:ty ),* $(,)?
            }
            response $resp:ident => $resp_xml:literal {
                $( $(#[$smeta:meta])* $sfield:ident : $sty:ty ),* $(,)?
            }
        }
    )*) => {
        $(
            magento_entity! {
                $(#[$meta])*
                #[serde(rename_all = "camelCase")]
                $req => $req_xml {
                    $( $(#[$qmeta])* $qfield : $qty ),*
                }

                #[doc = concat!("Reply element of the `", $op, "` operation.")]
                #[serde(rename_all = "camelCase")]
                $resp => $resp_xml {
                    $( $(#[$smeta])* $sfield : $sty ),*
                }
            }

            impl $crate::ws::SoapRequest for $req {
                const OPERATION: &'static str = $op;
                type Response = $resp;
            }
        )*
    };
}
