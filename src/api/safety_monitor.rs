use super::Device;
use macro_rules_attribute::apply;

/// SafetyMonitor Specific Methods.
#[apply(rpc_trait)]
pub trait SafetyMonitor: Device + Send + Sync {
    /// Indicates whether the monitored state is safe for use.
    #[http("issafe", method = Get)]
    async fn is_safe(&self) -> AlpacaResult<bool>;
}
