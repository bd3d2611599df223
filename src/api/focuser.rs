use super::Device;
use macro_rules_attribute::apply;

/// Focuser Specific Methods.
#[apply(rpc_trait)]
pub trait Focuser: Device + Send + Sync {
    /// True if the focuser is capable of absolute position; that is, being commanded to a specific step location.
    #[http("absolute", method = Get)]
    async fn absolute(&self) -> AlpacaResult<bool>;

    /// True if the focuser is currently moving to a new position.
    #[http("ismoving", method = Get)]
    async fn is_moving(&self) -> AlpacaResult<bool>;

    /// Maximum increment size allowed by the focuser.
    #[http("maxincrement", method = Get)]
    async fn max_increment(&self) -> AlpacaResult<i32>;

    /// Maximum step position permitted.
    #[http("maxstep", method = Get)]
    async fn max_step(&self) -> AlpacaResult<i32>;

    /// Current focuser position, in steps.
    #[http("position", method = Get)]
    async fn position(&self) -> AlpacaResult<i32>;

    /// Step size (microns) for the focuser.
    #[http("stepsize", method = Get)]
    async fn step_size(&self) -> AlpacaResult<f64>;

    /// The state of temperature compensation mode (if available), else always False.
    #[http("tempcomp", method = Get)]
    async fn temp_comp(&self) -> AlpacaResult<bool>;

    /// Sets the state of temperature compensation mode.
    #[http("tempcomp", method = Put)]
    async fn set_temp_comp(&self, #[http("TempComp")] temp_comp: bool) -> AlpacaResult<()>;

    /// True if focuser has temperature compensation available.
    #[http("tempcompavailable", method = Get)]
    async fn temp_comp_available(&self) -> AlpacaResult<bool>;

    /// Current ambient temperature as measured by the focuser.
    #[http("temperature", method = Get)]
    async fn temperature(&self) -> AlpacaResult<f64>;

    /// Immediately stop any focuser motion due to a previous [`move_`](Self::move_) method call.
    #[http("halt", method = Put)]
    async fn halt(&self) -> AlpacaResult<()>;

    /// Moves the focuser by the specified amount or to the specified position depending on the value of the [`absolute`](Self::absolute) property.
    #[http("move", method = Put)]
    async fn move_(&self, #[http("Position")] position: i32) -> AlpacaResult<()>;
}
