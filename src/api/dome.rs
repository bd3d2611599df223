use super::Device;
use macro_rules_attribute::apply;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Dome Specific Methods.
#[apply(rpc_trait)]
pub trait Dome: Device + Send + Sync {
    /// The dome altitude (degrees, horizon zero and increasing positive to 90 zenith).
    #[http("altitude", method = Get)]
    async fn altitude(&self) -> AlpacaResult<f64>;

    /// Indicates whether the dome is in the home position.
    #[http("athome", method = Get)]
    async fn at_home(&self) -> AlpacaResult<bool>;

    /// True if the dome is in the programmed park position.
    #[http("atpark", method = Get)]
    async fn at_park(&self) -> AlpacaResult<bool>;

    /// The dome azimuth (degrees, North zero and increasing clockwise, i.e., 90 East, 180 South, 270 West).
    #[http("azimuth", method = Get)]
    async fn azimuth(&self) -> AlpacaResult<f64>;

    /// True if the dome can move to the home position.
    #[http("canfindhome", method = Get)]
    async fn can_find_home(&self) -> AlpacaResult<bool>;

    /// True if the dome is capable of programmed parking.
    #[http("canpark", method = Get)]
    async fn can_park(&self) -> AlpacaResult<bool>;

    /// True if driver is capable of setting the dome altitude.
    #[http("cansetaltitude", method = Get)]
    async fn can_set_altitude(&self) -> AlpacaResult<bool>;

    /// True if driver is capable of setting the dome azimuth.
    #[http("cansetazimuth", method = Get)]
    async fn can_set_azimuth(&self) -> AlpacaResult<bool>;

    /// True if driver is capable of setting the dome park position.
    #[http("cansetpark", method = Get)]
    async fn can_set_park(&self) -> AlpacaResult<bool>;

    /// True if driver is capable of automatically operating shutter.
    #[http("cansetshutter", method = Get)]
    async fn can_set_shutter(&self) -> AlpacaResult<bool>;

    /// True if driver is capable of slaving to a telescope.
    #[http("canslave", method = Get)]
    async fn can_slave(&self) -> AlpacaResult<bool>;

    /// True if driver is capable of synchronizing the dome azimuth position using the [`sync_to_azimuth`](Self::sync_to_azimuth) method.
    #[http("cansyncazimuth", method = Get)]
    async fn can_sync_azimuth(&self) -> AlpacaResult<bool>;

    /// Returns the status of the dome shutter or roll-off roof.
    #[http("shutterstatus", method = Get)]
    async fn shutter_status(&self) -> AlpacaResult<ShutterState>;

    /// True if the dome is slaved to the telescope in its hardware, else False.
    #[http("slaved", method = Get)]
    async fn slaved(&self) -> AlpacaResult<bool>;

    /// Enables or disables slaving of the dome to the telescope.
    #[http("slaved", method = Put)]
    async fn set_slaved(&self, #[http("Slaved")] slaved: bool) -> AlpacaResult<()>;

    /// True if any part of the dome is currently moving, False if all dome components are steady.
    #[http("slewing", method = Get)]
    async fn slewing(&self) -> AlpacaResult<bool>;

    /// Calling this method will immediately disable hardware slewing (Slaved will become False).
    #[http("abortslew", method = Put)]
    async fn abort_slew(&self) -> AlpacaResult<()>;

    /// Close the shutter or otherwise shield telescope from the sky.
    #[http("closeshutter", method = Put)]
    async fn close_shutter(&self) -> AlpacaResult<()>;

    /// After Home position is established initializes Azimuth to the default value and sets the AtHome flag.
    #[http("findhome", method = Put)]
    async fn find_home(&self) -> AlpacaResult<()>;

    /// Open shutter or otherwise expose telescope to the sky.
    #[http("openshutter", method = Put)]
    async fn open_shutter(&self) -> AlpacaResult<()>;

    /// After assuming programmed park position, sets AtPark flag.
    #[http("park", method = Put)]
    async fn park(&self) -> AlpacaResult<()>;

    /// Set the current azimuth, altitude position of dome to be the park position.
    #[http("setpark", method = Put)]
    async fn set_park(&self) -> AlpacaResult<()>;

    /// Slew the dome to the given altitude position.
    #[http("slewtoaltitude", method = Put)]
    async fn slew_to_altitude(&self, #[http("Altitude")] altitude: f64) -> AlpacaResult<()>;

    /// Slew the dome to the given azimuth position.
    #[http("slewtoazimuth", method = Put)]
    async fn slew_to_azimuth(&self, #[http("Azimuth")] azimuth: f64) -> AlpacaResult<()>;

    /// Synchronize the current position of the dome to the given azimuth.
    #[http("synctoazimuth", method = Put)]
    async fn sync_to_azimuth(&self, #[http("Azimuth")] azimuth: f64) -> AlpacaResult<()>;
}

/// Indicates the current state of the shutter or roof.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Serialize_repr,
    Deserialize_repr,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(i32)]
pub enum ShutterState {
    /// The shutter or roof is open.
    Open = 0,

    /// The shutter or roof is closed.
    Closed = 1,

    /// The shutter or roof is opening.
    Opening = 2,

    /// The shutter or roof is closing.
    Closing = 3,

    /// The shutter or roof has encountered a problem.
    Error = 4,
}
