use crate::AlpacaResult;
use macro_rules_attribute::apply;
use serde::Deserialize;
use std::fmt::Debug;

/// ASCOM methods common to all devices.
#[apply(rpc_trait)]
pub trait Device: Debug + Send + Sync {
    /// Invokes the specified device-specific custom action.
    ///
    /// The list of supported actions can be discovered through [`supported_actions`](Self::supported_actions).
    #[http("action", method = Put)]
    async fn action(
        &self,
        #[http("Action")] action: String,
        #[http("Parameters")] parameters: String,
    ) -> AlpacaResult<String>;

    /// Transmits an arbitrary string to the device and does not wait for a response.
    ///
    /// Optionally, protocol framing characters may be added to the string before transmission.
    #[http("commandblind", method = Put)]
    #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
    async fn command_blind(
        &self,
        #[http("Command")] command: String,
        #[http("Raw")] raw: bool,
    ) -> AlpacaResult<()>;

    /// Transmits an arbitrary string to the device and waits for a boolean response.
    #[http("commandbool", method = Put)]
    #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
    async fn command_bool(
        &self,
        #[http("Command")] command: String,
        #[http("Raw")] raw: bool,
    ) -> AlpacaResult<bool>;

    /// Transmits an arbitrary string to the device and waits for a string response.
    #[http("commandstring", method = Put)]
    #[deprecated(note = "Use the more flexible Action and SupportedActions mechanic.")]
    async fn command_string(
        &self,
        #[http("Command")] command: String,
        #[http("Raw")] raw: bool,
    ) -> AlpacaResult<String>;

    /// Retrieves the connected state of the device.
    #[http("connected", method = Get)]
    async fn connected(&self) -> AlpacaResult<bool>;

    /// Sets the connected state of the device.
    #[http("connected", method = Put)]
    async fn set_connected(&self, #[http("Connected")] connected: bool) -> AlpacaResult<()>;

    /// Starts an asynchronous connect; completion is signalled by [`connecting`](Self::connecting) turning false.
    ///
    /// _Platform 7 onward._
    #[http("connect", method = Put)]
    async fn connect(&self) -> AlpacaResult<()>;

    /// Starts an asynchronous disconnect.
    ///
    /// _Platform 7 onward._
    #[http("disconnect", method = Put)]
    async fn disconnect(&self) -> AlpacaResult<()>;

    /// Returns true while the device is connecting or disconnecting.
    ///
    /// _Platform 7 onward._
    #[http("connecting", method = Get)]
    async fn connecting(&self) -> AlpacaResult<bool>;

    /// The description of the device.
    #[http("description", method = Get)]
    async fn description(&self) -> AlpacaResult<String>;

    /// All operational values of the device that are currently known.
    ///
    /// _Platform 7 onward._
    #[http("devicestate", method = Get)]
    async fn device_state(&self) -> AlpacaResult<Vec<DeviceStateItem>>;

    /// The description of the driver.
    #[http("driverinfo", method = Get)]
    async fn driver_info(&self) -> AlpacaResult<String>;

    /// A string containing only the major and minor version of the driver, in the form "n.n".
    #[http("driverversion", method = Get)]
    async fn driver_version(&self) -> AlpacaResult<String>;

    /// The version of the ASCOM device interface contract this device implements.
    #[http("interfaceversion", method = Get)]
    async fn interface_version(&self) -> AlpacaResult<i32>;

    /// The name of the device.
    #[http("name", method = Get)]
    async fn name(&self) -> AlpacaResult<String>;

    /// Returns the list of action names supported by this driver.
    #[http("supportedactions", method = Get)]
    async fn supported_actions(&self) -> AlpacaResult<Vec<String>>;
}

/// A named operational value reported by [`Device::device_state`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceStateItem {
    /// The property name, in the casing of the interface definition.
    pub name: String,

    /// The value of the property.
    ///
    /// Dates are sent as ISO-8601 strings and can be parsed with [`AlpacaTime`](crate::AlpacaTime).
    pub value: serde_json::Value,
}

/// Conveniences built on top of [`Device`] methods.
#[async_trait::async_trait]
pub trait DeviceExt: Device {
    /// [`driver_info`](Device::driver_info) split into its comma-separated fields.
    async fn driver_info_parts(&self) -> AlpacaResult<Vec<String>> {
        Ok(self
            .driver_info()
            .await?
            .split(',')
            .map(|part| part.trim().to_owned())
            .collect())
    }
}

impl<T: ?Sized + Device> DeviceExt for T {}
