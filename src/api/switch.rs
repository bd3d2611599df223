use super::Device;
use macro_rules_attribute::apply;

/// Switch Specific Methods.
///
/// Switches are addressed by `id`, from 0 to [`max_switch`](Self::max_switch) - 1.
#[apply(rpc_trait)]
pub trait Switch: Device + Send + Sync {
    /// The number of switch devices managed by this driver.
    #[http("maxswitch", method = Get)]
    async fn max_switch(&self) -> AlpacaResult<i32>;

    /// Whether the switch supports asynchronous operation.
    ///
    /// _Platform 7 onward._
    #[http("canasync", method = Get)]
    async fn can_async(&self, #[http("Id")] id: i32) -> AlpacaResult<bool>;

    /// Reports if the specified switch device can be written to, default true.
    #[http("canwrite", method = Get)]
    async fn can_write(&self, #[http("Id")] id: i32) -> AlpacaResult<bool>;

    /// Return the state of switch device id as a boolean.
    #[http("getswitch", method = Get)]
    async fn get_switch(&self, #[http("Id")] id: i32) -> AlpacaResult<bool>;

    /// Gets the description of the specified switch device.
    #[http("getswitchdescription", method = Get)]
    async fn get_switch_description(&self, #[http("Id")] id: i32) -> AlpacaResult<String>;

    /// Gets the name of the specified switch device.
    #[http("getswitchname", method = Get)]
    async fn get_switch_name(&self, #[http("Id")] id: i32) -> AlpacaResult<String>;

    /// Gets the value of the specified switch device as a double.
    #[http("getswitchvalue", method = Get)]
    async fn get_switch_value(&self, #[http("Id")] id: i32) -> AlpacaResult<f64>;

    /// Gets the minimum value of the specified switch device as a double.
    #[http("minswitchvalue", method = Get)]
    async fn min_switch_value(&self, #[http("Id")] id: i32) -> AlpacaResult<f64>;

    /// Gets the maximum value of the specified switch device as a double.
    #[http("maxswitchvalue", method = Get)]
    async fn max_switch_value(&self, #[http("Id")] id: i32) -> AlpacaResult<f64>;

    /// Sets a switch controller device to the specified state, true or false, asynchronously.
    ///
    /// _Platform 7 onward._
    #[http("setasync", method = Put)]
    async fn set_async(
        &self,
        #[http("Id")] id: i32,
        #[http("State")] state: bool,
    ) -> AlpacaResult<()>;

    /// Sets a switch controller device to the specified value asynchronously.
    ///
    /// _Platform 7 onward._
    #[http("setasyncvalue", method = Put)]
    async fn set_async_value(
        &self,
        #[http("Id")] id: i32,
        #[http("Value")] value: f64,
    ) -> AlpacaResult<()>;

    /// Sets a switch controller device to the specified state, true or false.
    #[http("setswitch", method = Put)]
    async fn set_switch(
        &self,
        #[http("Id")] id: i32,
        #[http("State")] state: bool,
    ) -> AlpacaResult<()>;

    /// Sets a switch device name to the specified value.
    #[http("setswitchname", method = Put)]
    async fn set_switch_name(
        &self,
        #[http("Id")] id: i32,
        #[http("Name")] name: String,
    ) -> AlpacaResult<()>;

    /// Sets a switch device value to the specified value.
    #[http("setswitchvalue", method = Put)]
    async fn set_switch_value(
        &self,
        #[http("Id")] id: i32,
        #[http("Value")] value: f64,
    ) -> AlpacaResult<()>;

    /// True if the state of the specified switch has finished changing.
    ///
    /// _Platform 7 onward._
    #[http("statechangecomplete", method = Get)]
    async fn state_change_complete(&self, #[http("Id")] id: i32) -> AlpacaResult<bool>;

    /// Returns the step size that this device supports (the difference between successive values of the device).
    #[http("switchstep", method = Get)]
    async fn switch_step(&self, #[http("Id")] id: i32) -> AlpacaResult<f64>;
}
