use super::Device;
use macro_rules_attribute::apply;

/// Rotator Specific Methods.
#[apply(rpc_trait)]
pub trait Rotator: Device + Send + Sync {
    /// True if the Rotator supports the [`reverse`](Self::reverse) method.
    #[http("canreverse", method = Get)]
    async fn can_reverse(&self) -> AlpacaResult<bool>;

    /// True if the rotator is currently moving to a new position.
    #[http("ismoving", method = Get)]
    async fn is_moving(&self) -> AlpacaResult<bool>;

    /// Returns the raw mechanical position of the rotator in degrees.
    #[http("mechanicalposition", method = Get)]
    async fn mechanical_position(&self) -> AlpacaResult<f64>;

    /// Current instantaneous Rotator position, in degrees.
    #[http("position", method = Get)]
    async fn position(&self) -> AlpacaResult<f64>;

    /// Returns the rotator’s Reverse state.
    #[http("reverse", method = Get)]
    async fn reverse(&self) -> AlpacaResult<bool>;

    /// Sets the rotator’s Reverse state.
    #[http("reverse", method = Put)]
    async fn set_reverse(&self, #[http("Reverse")] reverse: bool) -> AlpacaResult<()>;

    /// The minimum StepSize, in degrees.
    #[http("stepsize", method = Get)]
    async fn step_size(&self) -> AlpacaResult<f64>;

    /// The destination position angle for [`move_`](Self::move_) and [`move_absolute`](Self::move_absolute).
    #[http("targetposition", method = Get)]
    async fn target_position(&self) -> AlpacaResult<f64>;

    /// Immediately stop any Rotator motion due to a previous Move or MoveAbsolute method call.
    #[http("halt", method = Put)]
    async fn halt(&self) -> AlpacaResult<()>;

    /// Causes the rotator to move Position degrees relative to the current Position value.
    #[http("move", method = Put)]
    async fn move_(&self, #[http("Position")] position: f64) -> AlpacaResult<()>;

    /// Causes the rotator to move the absolute position of Position degrees.
    #[http("moveabsolute", method = Put)]
    async fn move_absolute(&self, #[http("Position")] position: f64) -> AlpacaResult<()>;

    /// Causes the rotator to move the mechanical position of Position degrees.
    #[http("movemechanical", method = Put)]
    async fn move_mechanical(&self, #[http("Position")] position: f64) -> AlpacaResult<()>;

    /// Causes the rotator to sync to the position of Position degrees.
    #[http("sync", method = Put)]
    async fn sync(&self, #[http("Position")] position: f64) -> AlpacaResult<()>;
}
