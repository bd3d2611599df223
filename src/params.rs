use serde::{Serialize, Serializer};
use std::fmt::Debug;
use std::time::SystemTime;

/// HTTP verb of an Alpaca call.
///
/// Property reads are `GET`s with parameters in the query string,
/// everything else is a `PUT` with a form-encoded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Put,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Put => Self::PUT,
        }
    }
}

/// A value that can be sent as an Alpaca request parameter.
pub(crate) trait ASCOMParam {
    fn into_param_value(self) -> String;
}

impl ASCOMParam for String {
    fn into_param_value(self) -> String {
        self
    }
}

impl ASCOMParam for &str {
    fn into_param_value(self) -> String {
        self.to_owned()
    }
}

impl ASCOMParam for bool {
    fn into_param_value(self) -> String {
        (if self { "True" } else { "False" }).to_owned()
    }
}

macro_rules! simple_ascom_param {
    ($($ty:ty),*) => {
        $(
            impl ASCOMParam for $ty {
                fn into_param_value(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

simple_ascom_param!(i32, f64);

impl ASCOMParam for SystemTime {
    fn into_param_value(self) -> String {
        crate::api::AlpacaTime::from(self).to_string()
    }
}

/// Derive-style macro for integer-coded protocol enums.
///
/// Use with `#[macro_rules_derive(ASCOMEnumParam)]` on enums that also derive `IntoPrimitive`.
macro_rules! ASCOMEnumParam {
    ($(# $attr:tt)* $pub:vis enum $name:ident $variants:tt) => {
        impl $crate::params::ASCOMParam for $name {
            fn into_param_value(self) -> String {
                let primitive: <Self as num_enum::TryFromPrimitive>::Primitive = self.into();
                $crate::params::ASCOMParam::into_param_value(primitive)
            }
        }
    };
}
pub(crate) use ASCOMEnumParam;

/// Named parameters of a single Alpaca call, in insertion order.
#[derive(Default, Clone, PartialEq)]
pub(crate) struct RequestParameters(Vec<(&'static str, String)>);

impl RequestParameters {
    pub(crate) fn insert(&mut self, name: &'static str, value: impl ASCOMParam) {
        debug_assert!(
            self.get(name).is_none(),
            "parameter {name} is already set"
        );
        self.0.push((name, value.into_param_value()));
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl Debug for RequestParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.0.iter().map(|(k, v)| (k, v))).finish()
    }
}

impl Serialize for RequestParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}
