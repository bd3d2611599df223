use super::Device;
use crate::api::AlpacaTime;
use crate::params::ASCOMEnumParam;
use macro_rules_attribute::{apply, macro_rules_derive};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::Deserialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::ops::RangeInclusive;
use std::time::SystemTime;

pub use super::camera_telescope_shared::GuideDirection;

/// Telescope Specific Methods.
#[apply(rpc_trait)]
pub trait Telescope: Device + Send + Sync {
    /// The alignment mode of the mount (Alt/Az, Polar, German Polar).
    #[http("alignmentmode", method = Get)]
    async fn alignment_mode(&self) -> AlpacaResult<AlignmentMode>;

    /// The altitude above the local horizon of the mount's current position (degrees, positive up).
    #[http("altitude", method = Get)]
    async fn altitude(&self) -> AlpacaResult<f64>;

    /// The area of the telescope's aperture, taking into account any obstructions (square meters).
    #[http("aperturearea", method = Get)]
    async fn aperture_area(&self) -> AlpacaResult<f64>;

    /// The telescope's effective aperture diameter (meters).
    #[http("aperturediameter", method = Get)]
    async fn aperture_diameter(&self) -> AlpacaResult<f64>;

    /// True if the mount is stopped in the Home position.
    ///
    /// Set only following a [`find_home`](Self::find_home) operation, and reset with any slew operation.
    #[http("athome", method = Get)]
    async fn at_home(&self) -> AlpacaResult<bool>;

    /// True if the telescope has been put into the parked state by [`park`](Self::park).
    #[http("atpark", method = Get)]
    async fn at_park(&self) -> AlpacaResult<bool>;

    /// The azimuth at the local horizon of the mount's current position (degrees, North-referenced, positive East/clockwise).
    #[http("azimuth", method = Get)]
    async fn azimuth(&self) -> AlpacaResult<f64>;

    /// True if this telescope is capable of programmed finding its home position.
    #[http("canfindhome", method = Get)]
    async fn can_find_home(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of programmed parking.
    #[http("canpark", method = Get)]
    async fn can_park(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of software-pulsed guiding.
    #[http("canpulseguide", method = Get)]
    async fn can_pulse_guide(&self) -> AlpacaResult<bool>;

    /// True if the [`declination_rate`](Self::declination_rate) property can be changed.
    #[http("cansetdeclinationrate", method = Get)]
    async fn can_set_declination_rate(&self) -> AlpacaResult<bool>;

    /// True if the guide rate properties used for pulse guiding can be adjusted.
    #[http("cansetguiderates", method = Get)]
    async fn can_set_guide_rates(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of programmed setting of its park position.
    #[http("cansetpark", method = Get)]
    async fn can_set_park(&self) -> AlpacaResult<bool>;

    /// True if the [`side_of_pier`](Self::side_of_pier) property can be set.
    #[http("cansetpierside", method = Get)]
    async fn can_set_pier_side(&self) -> AlpacaResult<bool>;

    /// True if the [`right_ascension_rate`](Self::right_ascension_rate) property can be changed.
    #[http("cansetrightascensionrate", method = Get)]
    async fn can_set_right_ascension_rate(&self) -> AlpacaResult<bool>;

    /// True if the [`tracking`](Self::tracking) property can be changed.
    #[http("cansettracking", method = Get)]
    async fn can_set_tracking(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of programmed slewing (synchronous or asynchronous) to equatorial coordinates.
    #[http("canslew", method = Get)]
    async fn can_slew(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of synchronous slewing to local horizontal coordinates.
    #[http("canslewaltaz", method = Get)]
    async fn can_slew_alt_az(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of asynchronous slewing to local horizontal coordinates.
    #[http("canslewaltazasync", method = Get)]
    async fn can_slew_alt_az_async(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of asynchronous slewing to equatorial coordinates.
    #[http("canslewasync", method = Get)]
    async fn can_slew_async(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of programmed synching to equatorial coordinates.
    #[http("cansync", method = Get)]
    async fn can_sync(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of programmed synching to local horizontal coordinates.
    #[http("cansyncaltaz", method = Get)]
    async fn can_sync_alt_az(&self) -> AlpacaResult<bool>;

    /// True if this telescope is capable of programmed unparking.
    #[http("canunpark", method = Get)]
    async fn can_unpark(&self) -> AlpacaResult<bool>;

    /// The declination (degrees) of the mount's current equatorial coordinates.
    #[http("declination", method = Get)]
    async fn declination(&self) -> AlpacaResult<f64>;

    /// The declination tracking rate (arcseconds per SI second).
    #[http("declinationrate", method = Get)]
    async fn declination_rate(&self) -> AlpacaResult<f64>;

    /// Sets the declination tracking rate (arcseconds per SI second).
    #[http("declinationrate", method = Put)]
    async fn set_declination_rate(
        &self,
        #[http("DeclinationRate")] declination_rate: f64,
    ) -> AlpacaResult<()>;

    /// True if the telescope or driver applies atmospheric refraction to coordinates.
    #[http("doesrefraction", method = Get)]
    async fn does_refraction(&self) -> AlpacaResult<bool>;

    /// Causes the telescope or driver to apply atmospheric refraction to coordinates.
    #[http("doesrefraction", method = Put)]
    async fn set_does_refraction(
        &self,
        #[http("DoesRefraction")] does_refraction: bool,
    ) -> AlpacaResult<()>;

    /// Equatorial coordinate system used by this telescope.
    #[http("equatorialsystem", method = Get)]
    async fn equatorial_system(&self) -> AlpacaResult<EquatorialCoordinateType>;

    /// The telescope's focal length (meters).
    #[http("focallength", method = Get)]
    async fn focal_length(&self) -> AlpacaResult<f64>;

    /// The current declination movement rate offset for pulse guiding (degrees/sec).
    #[http("guideratedeclination", method = Get)]
    async fn guide_rate_declination(&self) -> AlpacaResult<f64>;

    /// Sets the current declination movement rate offset for pulse guiding (degrees/sec).
    #[http("guideratedeclination", method = Put)]
    async fn set_guide_rate_declination(
        &self,
        #[http("GuideRateDeclination")] guide_rate_declination: f64,
    ) -> AlpacaResult<()>;

    /// The current right ascension movement rate offset for pulse guiding (degrees/sec).
    #[http("guideraterightascension", method = Get)]
    async fn guide_rate_right_ascension(&self) -> AlpacaResult<f64>;

    /// Sets the current right ascension movement rate offset for pulse guiding (degrees/sec).
    #[http("guideraterightascension", method = Put)]
    async fn set_guide_rate_right_ascension(
        &self,
        #[http("GuideRateRightAscension")] guide_rate_right_ascension: f64,
    ) -> AlpacaResult<()>;

    /// True if a [`pulse_guide`](Self::pulse_guide) command is in progress.
    #[http("ispulseguiding", method = Get)]
    async fn is_pulse_guiding(&self) -> AlpacaResult<bool>;

    /// The right ascension (hours) of the mount's current equatorial coordinates.
    #[http("rightascension", method = Get)]
    async fn right_ascension(&self) -> AlpacaResult<f64>;

    /// The right ascension tracking rate (seconds per sidereal second).
    #[http("rightascensionrate", method = Get)]
    async fn right_ascension_rate(&self) -> AlpacaResult<f64>;

    /// Sets the right ascension tracking rate (seconds per sidereal second).
    #[http("rightascensionrate", method = Put)]
    async fn set_right_ascension_rate(
        &self,
        #[http("RightAscensionRate")] right_ascension_rate: f64,
    ) -> AlpacaResult<()>;

    /// Indicates the pointing state of the mount.
    #[http("sideofpier", method = Get)]
    async fn side_of_pier(&self) -> AlpacaResult<PierSide>;

    /// Sets the pointing state of the mount.
    #[http("sideofpier", method = Put)]
    async fn set_side_of_pier(
        &self,
        #[http("SideOfPier")] side_of_pier: PierSide,
    ) -> AlpacaResult<()>;

    /// The local apparent sidereal time from the telescope's internal clock (hours, sidereal).
    #[http("siderealtime", method = Get)]
    async fn sidereal_time(&self) -> AlpacaResult<f64>;

    /// The elevation above mean sea level (meters) of the site at which the telescope is located.
    #[http("siteelevation", method = Get)]
    async fn site_elevation(&self) -> AlpacaResult<f64>;

    /// Sets the elevation above mean sea level (metres) of the site at which the telescope is located.
    #[http("siteelevation", method = Put)]
    async fn set_site_elevation(
        &self,
        #[http("SiteElevation")] site_elevation: f64,
    ) -> AlpacaResult<()>;

    /// The geodetic(map) latitude (degrees, positive North, WGS84) of the site at which the telescope is located.
    #[http("sitelatitude", method = Get)]
    async fn site_latitude(&self) -> AlpacaResult<f64>;

    /// Sets the observing site's latitude (degrees).
    #[http("sitelatitude", method = Put)]
    async fn set_site_latitude(
        &self,
        #[http("SiteLatitude")] site_latitude: f64,
    ) -> AlpacaResult<()>;

    /// The longitude (degrees, positive East, WGS84) of the site at which the telescope is located.
    #[http("sitelongitude", method = Get)]
    async fn site_longitude(&self) -> AlpacaResult<f64>;

    /// Sets the observing site's longitude (degrees, positive East, WGS84).
    #[http("sitelongitude", method = Put)]
    async fn set_site_longitude(
        &self,
        #[http("SiteLongitude")] site_longitude: f64,
    ) -> AlpacaResult<()>;

    /// True if telescope is currently moving in response to one of the Slew methods or [`move_axis`](Self::move_axis).
    #[http("slewing", method = Get)]
    async fn slewing(&self) -> AlpacaResult<bool>;

    /// The post-slew settling time (sec.).
    #[http("slewsettletime", method = Get)]
    async fn slew_settle_time(&self) -> AlpacaResult<i32>;

    /// Sets the post-slew settling time (integer sec.).
    #[http("slewsettletime", method = Put)]
    async fn set_slew_settle_time(
        &self,
        #[http("SlewSettleTime")] slew_settle_time: i32,
    ) -> AlpacaResult<()>;

    /// The declination (degrees, positive North) for the target of an equatorial slew or sync operation.
    #[http("targetdeclination", method = Get)]
    async fn target_declination(&self) -> AlpacaResult<f64>;

    /// Sets the declination (degrees, positive North) for the target of an equatorial slew or sync operation.
    #[http("targetdeclination", method = Put)]
    async fn set_target_declination(
        &self,
        #[http("TargetDeclination")] target_declination: f64,
    ) -> AlpacaResult<()>;

    /// The right ascension (hours) for the target of an equatorial slew or sync operation.
    #[http("targetrightascension", method = Get)]
    async fn target_right_ascension(&self) -> AlpacaResult<f64>;

    /// Sets the right ascension (hours) for the target of an equatorial slew or sync operation.
    #[http("targetrightascension", method = Put)]
    async fn set_target_right_ascension(
        &self,
        #[http("TargetRightAscension")] target_right_ascension: f64,
    ) -> AlpacaResult<()>;

    /// Returns the state of the telescope's sidereal tracking drive.
    #[http("tracking", method = Get)]
    async fn tracking(&self) -> AlpacaResult<bool>;

    /// Sets the state of the telescope's sidereal tracking drive.
    #[http("tracking", method = Put)]
    async fn set_tracking(&self, #[http("Tracking")] tracking: bool) -> AlpacaResult<()>;

    /// The current tracking rate of the telescope's sidereal drive.
    #[http("trackingrate", method = Get)]
    async fn tracking_rate(&self) -> AlpacaResult<DriveRate>;

    /// Sets the tracking rate of the telescope's sidereal drive.
    #[http("trackingrate", method = Put)]
    async fn set_tracking_rate(
        &self,
        #[http("TrackingRate")] tracking_rate: DriveRate,
    ) -> AlpacaResult<()>;

    /// Returns an array of supported [`DriveRate`] values that describe the permissible values of the [`tracking_rate`](Self::tracking_rate) property for this telescope type.
    #[http("trackingrates", method = Get)]
    async fn tracking_rates(&self) -> AlpacaResult<Vec<DriveRate>>;

    /// The UTC date/time of the telescope's internal clock.
    #[http("utcdate", method = Get, via = AlpacaTime)]
    async fn utc_date(&self) -> AlpacaResult<SystemTime>;

    /// The UTC date/time of the telescope's internal clock.
    ///
    /// Sent as an ISO-8601 string with seven fractional digits and a `Z` suffix.
    #[http("utcdate", method = Put)]
    async fn set_utc_date(&self, #[http("UTCDate")] utc_date: SystemTime) -> AlpacaResult<()>;

    /// Immediately Stops a slew in progress.
    #[http("abortslew", method = Put)]
    async fn abort_slew(&self) -> AlpacaResult<()>;

    /// The rates at which the telescope may be moved about the specified axis by the [`move_axis`](Self::move_axis) method.
    #[http("axisrates", method = Get, via = AxisRates)]
    async fn axis_rates(
        &self,
        #[http("Axis")] axis: TelescopeAxis,
    ) -> AlpacaResult<Vec<RangeInclusive<f64>>>;

    /// True if this telescope can move the requested axis.
    #[http("canmoveaxis", method = Get)]
    async fn can_move_axis(&self, #[http("Axis")] axis: TelescopeAxis) -> AlpacaResult<bool>;

    /// Predicts the pointing state that a German equatorial mount will be in if it slews to the given coordinates.
    #[http("destinationsideofpier", method = Get)]
    async fn destination_side_of_pier(
        &self,
        #[http("RightAscension")] right_ascension: f64,
        #[http("Declination")] declination: f64,
    ) -> AlpacaResult<PierSide>;

    /// Locates the telescope's "home" position (synchronous).
    #[http("findhome", method = Put)]
    async fn find_home(&self) -> AlpacaResult<()>;

    /// Move the telescope in one axis at the given rate.
    #[http("moveaxis", method = Put)]
    async fn move_axis(
        &self,
        #[http("Axis")] axis: TelescopeAxis,
        #[http("Rate")] rate: f64,
    ) -> AlpacaResult<()>;

    /// Move the telescope to its park position, stop all motion (or restrict to a small safe range), and set [`at_park`](Self::at_park) to true.
    #[http("park", method = Put)]
    async fn park(&self) -> AlpacaResult<()>;

    /// Moves the scope in the given direction for the given interval or time at the rate given by the corresponding guide rate property.
    #[http("pulseguide", method = Put)]
    async fn pulse_guide(
        &self,
        #[http("Direction")] direction: GuideDirection,
        #[http("Duration")] duration: i32,
    ) -> AlpacaResult<()>;

    /// Sets the telescope's park position to be its current position.
    #[http("setpark", method = Put)]
    async fn set_park(&self) -> AlpacaResult<()>;

    /// Move the telescope to the given local horizontal coordinates, return when slew is complete.
    #[http("slewtoaltaz", method = Put)]
    #[deprecated(note = "Use `slew_to_alt_az_async` instead.")]
    async fn slew_to_alt_az(
        &self,
        #[http("Azimuth")] azimuth: f64,
        #[http("Altitude")] altitude: f64,
    ) -> AlpacaResult<()>;

    /// Move the telescope to the given local horizontal coordinates, return immediately after the slew starts.
    ///
    /// The client can poll the [`slewing`](Self::slewing) method to determine when the mount reaches the intended coordinates.
    #[http("slewtoaltazasync", method = Put)]
    async fn slew_to_alt_az_async(
        &self,
        #[http("Azimuth")] azimuth: f64,
        #[http("Altitude")] altitude: f64,
    ) -> AlpacaResult<()>;

    /// Move the telescope to the given equatorial coordinates, return when slew is complete.
    #[http("slewtocoordinates", method = Put)]
    #[deprecated(note = "Use `slew_to_coordinates_async` instead.")]
    async fn slew_to_coordinates(
        &self,
        #[http("RightAscension")] right_ascension: f64,
        #[http("Declination")] declination: f64,
    ) -> AlpacaResult<()>;

    /// Move the telescope to the given equatorial coordinates, return immediately after the slew starts.
    #[http("slewtocoordinatesasync", method = Put)]
    async fn slew_to_coordinates_async(
        &self,
        #[http("RightAscension")] right_ascension: f64,
        #[http("Declination")] declination: f64,
    ) -> AlpacaResult<()>;

    /// Move the telescope to the [`target_right_ascension`](Self::target_right_ascension) and [`target_declination`](Self::target_declination) equatorial coordinates, return when slew is complete.
    #[http("slewtotarget", method = Put)]
    #[deprecated(note = "Use `slew_to_target_async` instead.")]
    async fn slew_to_target(&self) -> AlpacaResult<()>;

    /// Move the telescope to the target equatorial coordinates, return immediately after the slew starts.
    #[http("slewtotargetasync", method = Put)]
    async fn slew_to_target_async(&self) -> AlpacaResult<()>;

    /// Matches the scope's local horizontal coordinates to the given local horizontal coordinates.
    #[http("synctoaltaz", method = Put)]
    async fn sync_to_alt_az(
        &self,
        #[http("Azimuth")] azimuth: f64,
        #[http("Altitude")] altitude: f64,
    ) -> AlpacaResult<()>;

    /// Matches the scope's equatorial coordinates to the given equatorial coordinates.
    #[http("synctocoordinates", method = Put)]
    async fn sync_to_coordinates(
        &self,
        #[http("RightAscension")] right_ascension: f64,
        #[http("Declination")] declination: f64,
    ) -> AlpacaResult<()>;

    /// Matches the scope's equatorial coordinates to the target equatorial coordinates.
    #[http("synctotarget", method = Put)]
    async fn sync_to_target(&self) -> AlpacaResult<()>;

    /// Takes telescope out of the Parked state.
    #[http("unpark", method = Put)]
    async fn unpark(&self) -> AlpacaResult<()>;
}

/// The alignment mode (geometry) of the mount.
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
pub enum AlignmentMode {
    /// Altitude-Azimuth type mount.
    AltAz = 0,

    /// Polar (equatorial) mount other than German equatorial.
    Polar = 1,

    /// German equatorial type mount.
    GermanPolar = 2,
}

/// The equatorial coordinate system used by the mount.
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
pub enum EquatorialCoordinateType {
    /// Custom or unknown equinox and/or reference frame.
    Other = 0,

    /// Topocentric coordinates.
    Topocentric = 1,

    /// J2000 equator/equinox.
    J2000 = 2,

    /// J2050 equator/equinox.
    J2050 = 3,

    /// B1950 equinox, FK4 reference frame.
    B1950 = 4,
}

/// Pointing state of the mount.
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
#[macro_rules_derive(ASCOMEnumParam)]
#[repr(i32)]
pub enum PierSide {
    /// Normal pointing state - Mount on the East side of pier (looking West).
    East = 0,

    /// Through the pole pointing state - Mount on the West side of pier (looking East).
    West = 1,

    /// Unknown or indeterminate.
    Unknown = -1,
}

/// One of the standard drive rates.
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
#[macro_rules_derive(ASCOMEnumParam)]
#[repr(i32)]
pub enum DriveRate {
    /// Sidereal tracking rate (15.041 arcseconds per second).
    Sidereal = 0,

    /// Lunar tracking rate (14.685 arcseconds per second).
    Lunar = 1,

    /// Solar tracking rate (15.0 arcseconds per second).
    Solar = 2,

    /// King tracking rate (15.0369 arcseconds per second).
    King = 3,
}

/// Telescope axis.
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
#[macro_rules_derive(ASCOMEnumParam)]
#[repr(i32)]
pub enum TelescopeAxis {
    /// Primary axis (e.g., Right Ascension or Azimuth).
    Primary = 0,

    /// Secondary axis (e.g., Declination or Altitude).
    Secondary = 1,

    /// Tertiary axis (e.g. imager rotator/de-rotator).
    Tertiary = 2,
}

/// Wire form of a single axis rate range (degrees per second).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AxisRate {
    minimum: f64,
    maximum: f64,
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct AxisRates(Vec<AxisRate>);

impl From<AxisRates> for Vec<RangeInclusive<f64>> {
    fn from(axis_rates: AxisRates) -> Self {
        axis_rates
            .0
            .into_iter()
            .map(|axis_rate| axis_rate.minimum..=axis_rate.maximum)
            .collect()
    }
}
