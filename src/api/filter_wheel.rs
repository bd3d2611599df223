use super::Device;
use macro_rules_attribute::apply;

/// FilterWheel Specific Methods.
#[apply(rpc_trait)]
pub trait FilterWheel: Device + Send + Sync {
    /// An integer array of filter focus offsets.
    #[http("focusoffsets", method = Get)]
    async fn focus_offsets(&self) -> AlpacaResult<Vec<i32>>;

    /// The names of the filters.
    #[http("names", method = Get)]
    async fn names(&self) -> AlpacaResult<Vec<String>>;

    /// Returns the current filter wheel position, or -1 while the wheel is moving.
    #[http("position", method = Get)]
    async fn position(&self) -> AlpacaResult<i32>;

    /// Sets the filter wheel position.
    #[http("position", method = Put)]
    async fn set_position(&self, #[http("Position")] position: i32) -> AlpacaResult<()>;
}
