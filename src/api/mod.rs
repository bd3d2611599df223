/*!
ASCOM Alpaca device interfaces.

Every category trait here ([`Telescope`], [`Focuser`], ...) extends [`Device`] with
the methods of the corresponding ASCOM interface. Each trait method issues exactly one
Alpaca request; handles are obtained from [`Client`](crate::Client), e.g.
[`Client::telescope`](crate::Client::telescope).

## URLs and parameters

Device URLs have the form `http(s)://host:port/api/v1/{device_type}/{device_number}/{method}`,
for example `http://192.168.1.89:7843/api/v1/focuser/1/stepsize`. Device types and method
names are lower-case; parameter names are sent in the casing shown on each method.

Property reads are sent as `GET` with parameters in the query string, commands and property
writes as `PUT` with a form-encoded body. Booleans are sent as `True` / `False`, enumerations
as their integer codes and dates as ISO-8601 UTC strings (see [`AlpacaTime`]).

## Status codes and ASCOM errors

A `200` response carries the JSON envelope; a non-zero `ErrorNumber` in it is surfaced as
[`AlpacaError::Device`](crate::AlpacaError::Device). `400` and `500` responses carry a text
error message and become [`AlpacaError::Status`](crate::AlpacaError::Status).
*/

mod time_repr;
pub use time_repr::AlpacaTime;

#[cfg(any(feature = "camera", feature = "telescope"))]
mod camera_telescope_shared;

/// Types related to the general [`Device`] trait.
pub mod device;
pub use device::{Device, DeviceExt};

rpc_mod! {
    #[cfg(feature = "camera")]
    Camera = "camera",

    #[cfg(feature = "cover_calibrator")]
    CoverCalibrator = "covercalibrator",

    #[cfg(feature = "dome")]
    Dome = "dome",

    #[cfg(feature = "filter_wheel")]
    FilterWheel = "filterwheel",

    #[cfg(feature = "focuser")]
    Focuser = "focuser",

    #[cfg(feature = "observing_conditions")]
    ObservingConditions = "observingconditions",

    #[cfg(feature = "rotator")]
    Rotator = "rotator",

    #[cfg(feature = "safety_monitor")]
    SafetyMonitor = "safetymonitor",

    #[cfg(feature = "switch")]
    Switch = "switch",

    #[cfg(feature = "telescope")]
    Telescope = "telescope",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_types_round_trip_through_path_segments() {
        assert_eq!(DeviceType::Telescope.to_string(), "telescope");
        assert_eq!(DeviceType::CoverCalibrator.to_string(), "covercalibrator");
        assert_eq!(
            "ObservingConditions".parse::<DeviceType>().expect("known type"),
            DeviceType::ObservingConditions
        );
        assert!("toaster".parse::<DeviceType>().is_err());
    }

    #[test]
    fn typed_device_reports_its_type() {
        let client = crate::Client::new("http://localhost:11111").expect("valid base URL");
        let device = client.device(DeviceType::Switch, 1);
        assert_eq!(device.device_type(), DeviceType::Switch);
        assert!(matches!(device, TypedDevice::Switch(_)));
        let _: std::sync::Arc<dyn Device> = device.as_device();
    }
}
