use serde::Deserialize;
use std::borrow::Cow;
use thiserror::Error;

/// Alpaca representation of an ASCOM error code.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ASCOMErrorCode(i64);

impl TryFrom<i64> for ASCOMErrorCode {
    type Error = eyre::Error;

    /// Convert a raw error code into an `ASCOMErrorCode` if it's in the valid range.
    fn try_from(raw: i64) -> eyre::Result<Self> {
        let range = BASE..=MAX;
        eyre::ensure!(
            raw == 0 || range.contains(&raw),
            "Error code {raw:#X} is out of valid range ({range:#X?})"
        );
        Ok(Self(raw))
    }
}

/// The starting value for error numbers.
const BASE: i64 = 0x400;
/// The starting value for driver-specific error numbers.
const DRIVER_BASE: i64 = 0x500;
/// The maximum value for error numbers.
const MAX: i64 = 0xFFF;

impl ASCOMErrorCode {
    /// Get the driver-specific error code.
    ///
    /// Returns `Ok` with `0`-based driver error code if this is a driver error.
    /// Returns `Err` with raw error code if not a driver error.
    pub const fn as_driver_error(self) -> Result<i64, i64> {
        if self.0 >= DRIVER_BASE && self.0 <= MAX {
            Ok(self.0 - DRIVER_BASE)
        } else {
            Err(self.0)
        }
    }

    /// Get the raw error code.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Whether this code signals success.
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }
}

/// Error reported by the remote device in the `ErrorNumber` / `ErrorMessage` envelope fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ASCOM error {code}: {message}")]
pub struct ASCOMError {
    /// Error number.
    pub code: ASCOMErrorCode,
    /// Error message.
    pub message: Cow<'static, str>,
}

impl ASCOMError {
    /// Create a new `ASCOMError` from given error code and a message.
    pub fn new(code: ASCOMErrorCode, message: impl std::fmt::Display) -> Self {
        Self {
            code,
            message: message.to_string().into(),
        }
    }
}

macro_rules! ascom_error_codes {
    ($(#[doc = $doc:literal] $name:ident = $value:literal,)*) => {
        impl ASCOMErrorCode {
            $(
                #[doc = $doc]
                pub const $name: Self = Self($value);
            )*
        }

        impl std::fmt::Debug for ASCOMErrorCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match *self {
                    $(
                        Self::$name => f.write_str(stringify!($name)),
                    )*
                    _ => match self.as_driver_error() {
                        Ok(driver_code) => write!(f, "DRIVER_ERROR[{driver_code}]"),
                        Err(raw_code) => write!(f, "{raw_code:#X}"),
                    },
                }
            }
        }

        impl std::fmt::Display for ASCOMErrorCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Debug::fmt(self, f)
            }
        }
    };
}

ascom_error_codes! {
    #[doc = "Success"]
    OK = 0,
    #[doc = "The requested action is not implemented in this driver"]
    ACTION_NOT_IMPLEMENTED = 0x40C,
    #[doc = "The requested operation can not be undertaken at this time"]
    INVALID_OPERATION = 0x40B,
    #[doc = "Invalid value"]
    INVALID_VALUE = 0x401,
    #[doc = "The attempted operation is invalid because the mount is currently in a Parked state"]
    INVALID_WHILE_PARKED = 0x408,
    #[doc = "The attempted operation is invalid because the mount is currently in a Slaved state"]
    INVALID_WHILE_SLAVED = 0x409,
    #[doc = "The communications channel is not connected"]
    NOT_CONNECTED = 0x407,
    #[doc = "Property or method not implemented"]
    NOT_IMPLEMENTED = 0x400,
    #[doc = "A value has not been set"]
    VALUE_NOT_SET = 0x402,
}

/// Any failure of an Alpaca call.
///
/// [`AlpacaError::Device`] is the remote kind: the request made it to the device
/// and the device refused it. Every other variant is a connection-level failure
/// where no valid answer was obtained.
#[derive(Debug, Error)]
pub enum AlpacaError {
    /// Non-zero `ErrorNumber` returned by the device.
    #[error(transparent)]
    Device(#[from] ASCOMError),

    /// The request URL could not be built.
    #[error("Could not build request URL: {0}")]
    Url(#[from] url::ParseError),

    /// Network-level failure while talking to the server.
    #[error("Alpaca request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with an HTTP error status (typically 400 or 500) and a text body.
    #[error("Server responded with {status}: {message}")]
    Status {
        /// HTTP status of the response.
        status: reqwest::StatusCode,
        /// Response body, as sent by the server.
        message: String,
    },

    /// The response was not a valid Alpaca JSON envelope for the expected value type.
    #[error("Invalid Alpaca response: {0:#}")]
    InvalidResponse(eyre::Report),
}

impl AlpacaError {
    /// Whether the device itself reported this error.
    pub const fn is_device(&self) -> bool {
        matches!(self, Self::Device(_))
    }

    /// Whether this is a connection-level failure rather than a device error.
    pub const fn is_connection(&self) -> bool {
        !self.is_device()
    }

    /// ASCOM error code reported by the device, if any.
    pub const fn device_code(&self) -> Option<ASCOMErrorCode> {
        match self {
            Self::Device(err) => Some(err.code),
            _ => None,
        }
    }
}

/// Result type for Alpaca calls.
pub type AlpacaResult<T = ()> = Result<T, AlpacaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_and_driver_codes() {
        assert_eq!(ASCOMErrorCode::NOT_IMPLEMENTED.to_string(), "NOT_IMPLEMENTED");
        assert_eq!(ASCOMErrorCode(0x503).to_string(), "DRIVER_ERROR[3]");
        assert_eq!(ASCOMErrorCode(0x4AA).to_string(), "0x4AA");
        assert_eq!(ASCOMErrorCode(0x8004_0400).to_string(), "0x80040400");
    }

    #[test]
    fn validates_raw_range() {
        assert!(ASCOMErrorCode::try_from(0).is_ok());
        assert!(ASCOMErrorCode::try_from(0x400).is_ok());
        assert!(ASCOMErrorCode::try_from(0xFFF).is_ok());
        assert!(ASCOMErrorCode::try_from(0x3FF).is_err());
        assert!(ASCOMErrorCode::try_from(0x1000).is_err());
    }

    #[test]
    fn device_error_message() {
        let err = AlpacaError::from(ASCOMError::new(
            ASCOMErrorCode::INVALID_WHILE_PARKED,
            "Mount is parked",
        ));
        assert!(err.is_device());
        assert!(!err.is_connection());
        assert_eq!(err.device_code(), Some(ASCOMErrorCode::INVALID_WHILE_PARKED));
        assert_eq!(err.to_string(), "ASCOM error INVALID_WHILE_PARKED: Mount is parked");
    }
}
