/// Defines a device trait from `#[http(...)]`-annotated method signatures
/// and implements it for [`DeviceClient`](crate::client::DeviceClient).
///
/// Every method maps onto one Alpaca endpoint:
///
/// ```ignore
/// #[http("sitelatitude", method = Put)]
/// async fn set_site_latitude(&self, #[http("SiteLatitude")] site_latitude: f64) -> AlpacaResult<()>;
/// ```
///
/// `via = Type` decodes the `Value` as `Type` and converts it into the declared return type.
macro_rules! rpc_trait {
    (@decode $return_type:ty) => ($return_type);
    (@decode $return_type:ty, $via:ty) => ($via);

    (
        $(# $attr:tt)*
        $pub:vis trait $trait_name:ident: $trait_parents:ty {
            $(
                $(#[doc = $doc:literal])*
                #[http($method_path:literal, method = $http_method:ident $(, via = $via:ty)?)]
                $(# $method_attr:tt)*
                async fn $method_name:ident(
                    & $self:ident $(, #[http($param_query:literal)] $param:ident: $param_ty:ty)* $(,)?
                ) -> AlpacaResult<$return_type:ty>;
            )*
        }
    ) => (paste::paste! {
        $(# $attr)*
        #[async_trait::async_trait]
        $pub trait $trait_name: $trait_parents {
            $(
                $(#[doc = $doc])*
                ///
                #[doc = concat!("Alpaca endpoint: `", stringify!($http_method), " ", $method_path, "`.")]
                $(# $method_attr)*
                async fn $method_name(
                    & $self $(, $param: $param_ty)*
                ) -> $crate::AlpacaResult<$return_type>;
            )*
        }

        #[async_trait::async_trait]
        impl $trait_name for $crate::client::DeviceClient {
            $(
                async fn $method_name(
                    & $self $(, $param: $param_ty)*
                ) -> $crate::AlpacaResult<$return_type> {
                    #[allow(unused_mut)]
                    let mut params = $crate::params::RequestParameters::default();
                    $(
                        params.insert($param_query, $param);
                    )*

                    $self
                        .exec_action::<rpc_trait!(@decode $return_type $(, $via)?)>(
                            $crate::params::Method::$http_method,
                            $method_path,
                            params,
                        )
                        .await
                        $(.map(<$via>::into))?
                }
            )*
        }
    });
}

/// Declares the device category modules together with [`DeviceType`](crate::api::DeviceType),
/// [`TypedDevice`](crate::api::TypedDevice) and the typed handle constructors on
/// [`Client`](crate::Client).
macro_rules! rpc_mod {
    ($(# $cfg:tt $trait_name:ident = $path:literal,)*) => (paste::paste! {
        $(
            # $cfg
            #[doc = "Types related to [`" $trait_name "`] devices."]
            pub mod [<$trait_name:snake>];

            # $cfg
            pub use [<$trait_name:snake>]::$trait_name;
        )*

        /// Alpaca device category.
        ///
        /// Displays as the lower-case path segment used in device URLs.
        #[derive(PartialOrd, Ord, PartialEq, Eq, Hash, Clone, Copy, Debug, derive_more::Display)]
        pub enum DeviceType {
            $(
                # $cfg
                #[doc = "`" $path "` devices."]
                #[display($path)]
                $trait_name,
            )*
        }

        impl std::str::FromStr for DeviceType {
            type Err = eyre::Report;

            fn from_str(s: &str) -> eyre::Result<Self> {
                $(
                    # $cfg
                    if s.eq_ignore_ascii_case($path) {
                        return Ok(Self::$trait_name);
                    }
                )*
                eyre::bail!("Unknown Alpaca device type {s:?}")
            }
        }

        /// A tagged enum wrapper for a type-erased device handle.
        #[derive(Clone, Debug)]
        #[allow(missing_docs)] // self-explanatory variants
        pub enum TypedDevice {
            $(
                # $cfg
                $trait_name(std::sync::Arc<dyn $trait_name>),
            )*
        }

        impl TypedDevice {
            /// Category of the wrapped device.
            pub const fn device_type(&self) -> DeviceType {
                match *self {
                    $(
                        # $cfg
                        Self::$trait_name(_) => DeviceType::$trait_name,
                    )*
                }
            }

            /// Access the methods common to all devices.
            pub fn as_device(&self) -> std::sync::Arc<dyn Device> {
                match *self {
                    $(
                        # $cfg
                        Self::$trait_name(ref device) => std::sync::Arc::clone(device) as std::sync::Arc<dyn Device>,
                    )*
                }
            }
        }

        impl $crate::Client {
            $(
                # $cfg
                #[doc = "Handle to the [`" $trait_name "`] with the given device number on this server."]
                pub fn [<$trait_name:snake>](&self, device_number: u32) -> std::sync::Arc<dyn $trait_name> {
                    std::sync::Arc::new(self.device_client(DeviceType::$trait_name, device_number))
                }
            )*

            /// Handle to a device whose category is only known at runtime.
            pub fn device(&self, device_type: DeviceType, device_number: u32) -> TypedDevice {
                let device = std::sync::Arc::new(self.device_client(device_type, device_number));
                match device_type {
                    $(
                        # $cfg
                        DeviceType::$trait_name => TypedDevice::$trait_name(device),
                    )*
                }
            }
        }
    });
}
