use super::Device;
use crate::api::AlpacaTime;
use macro_rules_attribute::apply;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::time::SystemTime;

pub use super::camera_telescope_shared::GuideDirection;

/// Camera Specific Methods.
///
/// Image download (`imagearray`) is not part of this client.
#[apply(rpc_trait)]
pub trait Camera: Device + Send + Sync {
    /// Returns the X offset of the Bayer matrix, as defined in [`sensor_type`](Self::sensor_type).
    #[http("bayeroffsetx", method = Get)]
    async fn bayer_offset_x(&self) -> AlpacaResult<i32>;

    /// Returns the Y offset of the Bayer matrix, as defined in [`sensor_type`](Self::sensor_type).
    #[http("bayeroffsety", method = Get)]
    async fn bayer_offset_y(&self) -> AlpacaResult<i32>;

    /// Returns the binning factor for the X axis.
    #[http("binx", method = Get)]
    async fn bin_x(&self) -> AlpacaResult<i32>;

    /// Sets the binning factor for the X axis.
    #[http("binx", method = Put)]
    async fn set_bin_x(&self, #[http("BinX")] bin_x: i32) -> AlpacaResult<()>;

    /// Returns the binning factor for the Y axis.
    #[http("biny", method = Get)]
    async fn bin_y(&self) -> AlpacaResult<i32>;

    /// Sets the binning factor for the Y axis.
    #[http("biny", method = Put)]
    async fn set_bin_y(&self, #[http("BinY")] bin_y: i32) -> AlpacaResult<()>;

    /// Returns the current camera operational state.
    #[http("camerastate", method = Get)]
    async fn camera_state(&self) -> AlpacaResult<CameraState>;

    /// Returns the width of the CCD camera chip in unbinned pixels.
    #[http("cameraxsize", method = Get)]
    async fn camera_xsize(&self) -> AlpacaResult<i32>;

    /// Returns the height of the CCD camera chip in unbinned pixels.
    #[http("cameraysize", method = Get)]
    async fn camera_ysize(&self) -> AlpacaResult<i32>;

    /// Returns true if the camera can abort exposures; false if not.
    #[http("canabortexposure", method = Get)]
    async fn can_abort_exposure(&self) -> AlpacaResult<bool>;

    /// Returns a flag showing whether this camera supports asymmetric binning.
    #[http("canasymmetricbin", method = Get)]
    async fn can_asymmetric_bin(&self) -> AlpacaResult<bool>;

    /// Indicates whether the camera has a fast readout mode.
    #[http("canfastreadout", method = Get)]
    async fn can_fast_readout(&self) -> AlpacaResult<bool>;

    /// If true, the camera's cooler power setting can be read.
    #[http("cangetcoolerpower", method = Get)]
    async fn can_get_cooler_power(&self) -> AlpacaResult<bool>;

    /// Returns a flag indicating whether this camera supports pulse guiding.
    #[http("canpulseguide", method = Get)]
    async fn can_pulse_guide(&self) -> AlpacaResult<bool>;

    /// Returns a flag indicating whether this camera supports setting the CCD temperature.
    #[http("cansetccdtemperature", method = Get)]
    async fn can_set_ccd_temperature(&self) -> AlpacaResult<bool>;

    /// Returns a flag indicating whether this camera can stop an exposure that is in progress.
    #[http("canstopexposure", method = Get)]
    async fn can_stop_exposure(&self) -> AlpacaResult<bool>;

    /// Returns the current CCD temperature in degrees Celsius.
    #[http("ccdtemperature", method = Get)]
    async fn ccd_temperature(&self) -> AlpacaResult<f64>;

    /// Returns the current cooler on/off state.
    #[http("cooleron", method = Get)]
    async fn cooler_on(&self) -> AlpacaResult<bool>;

    /// Turns on and off the camera cooler.
    #[http("cooleron", method = Put)]
    async fn set_cooler_on(&self, #[http("CoolerOn")] cooler_on: bool) -> AlpacaResult<()>;

    /// Returns the present cooler power level, in percent.
    #[http("coolerpower", method = Get)]
    async fn cooler_power(&self) -> AlpacaResult<f64>;

    /// Returns the gain of the camera in photoelectrons per A/D unit.
    #[http("electronsperadu", method = Get)]
    async fn electrons_per_adu(&self) -> AlpacaResult<f64>;

    /// Returns the maximum exposure time supported by [`start_exposure`](Self::start_exposure).
    #[http("exposuremax", method = Get)]
    async fn exposure_max(&self) -> AlpacaResult<f64>;

    /// Returns the minimum exposure time supported by [`start_exposure`](Self::start_exposure).
    #[http("exposuremin", method = Get)]
    async fn exposure_min(&self) -> AlpacaResult<f64>;

    /// Returns the smallest increment in exposure time supported by [`start_exposure`](Self::start_exposure).
    #[http("exposureresolution", method = Get)]
    async fn exposure_resolution(&self) -> AlpacaResult<f64>;

    /// Returns whenther Fast Readout Mode is enabled.
    #[http("fastreadout", method = Get)]
    async fn fast_readout(&self) -> AlpacaResult<bool>;

    /// Sets whether Fast Readout Mode is enabled.
    #[http("fastreadout", method = Put)]
    async fn set_fast_readout(&self, #[http("FastReadout")] fast_readout: bool) -> AlpacaResult<()>;

    /// Reports the full well capacity of the camera in electrons, at the current camera settings (binning, SetupDialog settings, etc.).
    #[http("fullwellcapacity", method = Get)]
    async fn full_well_capacity(&self) -> AlpacaResult<f64>;

    /// The camera's gain (GAIN VALUE MODE) OR the index of the selected camera gain description in the [`gains`](Self::gains) array (GAINS INDEX MODE).
    #[http("gain", method = Get)]
    async fn gain(&self) -> AlpacaResult<i32>;

    /// Sets the camera's gain.
    #[http("gain", method = Put)]
    async fn set_gain(&self, #[http("Gain")] gain: i32) -> AlpacaResult<()>;

    /// Returns the maximum value of Gain.
    #[http("gainmax", method = Get)]
    async fn gain_max(&self) -> AlpacaResult<i32>;

    /// Returns the Minimum value of Gain.
    #[http("gainmin", method = Get)]
    async fn gain_min(&self) -> AlpacaResult<i32>;

    /// Returns the Gains supported by the camera.
    #[http("gains", method = Get)]
    async fn gains(&self) -> AlpacaResult<Vec<String>>;

    /// Returns a flag indicating whether this camera has a mechanical shutter.
    #[http("hasshutter", method = Get)]
    async fn has_shutter(&self) -> AlpacaResult<bool>;

    /// Returns the current heat sink temperature (called "ambient temperature" by some manufacturers) in degrees Celsius.
    #[http("heatsinktemperature", method = Get)]
    async fn heat_sink_temperature(&self) -> AlpacaResult<f64>;

    /// Returns a flag indicating whether the image is ready to be downloaded from the camera.
    #[http("imageready", method = Get)]
    async fn image_ready(&self) -> AlpacaResult<bool>;

    /// Returns a flag indicating whether the camera is currrently in a [`pulse_guide`](Self::pulse_guide) operation.
    #[http("ispulseguiding", method = Get)]
    async fn is_pulse_guiding(&self) -> AlpacaResult<bool>;

    /// Reports the actual exposure duration in seconds (i.e. shutter open time).
    #[http("lastexposureduration", method = Get)]
    async fn last_exposure_duration(&self) -> AlpacaResult<f64>;

    /// Reports the actual exposure start in the FITS-standard CCYY-MM-DDThh:mm:ss[.sss...] format.
    #[http("lastexposurestarttime", method = Get, via = AlpacaTime)]
    async fn last_exposure_start_time(&self) -> AlpacaResult<SystemTime>;

    /// Reports the maximum ADU value the camera can produce.
    #[http("maxadu", method = Get)]
    async fn max_adu(&self) -> AlpacaResult<i32>;

    /// Returns the maximum allowed binning for the X camera axis.
    #[http("maxbinx", method = Get)]
    async fn max_bin_x(&self) -> AlpacaResult<i32>;

    /// Returns the maximum allowed binning for the Y camera axis.
    #[http("maxbiny", method = Get)]
    async fn max_bin_y(&self) -> AlpacaResult<i32>;

    /// Returns the current subframe width, if binning is active, value is in binned pixels.
    #[http("numx", method = Get)]
    async fn num_x(&self) -> AlpacaResult<i32>;

    /// Sets the current subframe width.
    #[http("numx", method = Put)]
    async fn set_num_x(&self, #[http("NumX")] num_x: i32) -> AlpacaResult<()>;

    /// Returns the current subframe height, if binning is active, value is in binned pixels.
    #[http("numy", method = Get)]
    async fn num_y(&self) -> AlpacaResult<i32>;

    /// Sets the current subframe height.
    #[http("numy", method = Put)]
    async fn set_num_y(&self, #[http("NumY")] num_y: i32) -> AlpacaResult<()>;

    /// Returns the camera's offset (OFFSET VALUE MODE) OR the index of the selected camera offset description in the [`offsets`](Self::offsets) array (OFFSETS INDEX MODE).
    #[http("offset", method = Get)]
    async fn offset(&self) -> AlpacaResult<i32>;

    /// Sets the camera's offset.
    #[http("offset", method = Put)]
    async fn set_offset(&self, #[http("Offset")] offset: i32) -> AlpacaResult<()>;

    /// Returns the maximum value of offset.
    #[http("offsetmax", method = Get)]
    async fn offset_max(&self) -> AlpacaResult<i32>;

    /// Returns the Minimum value of offset.
    #[http("offsetmin", method = Get)]
    async fn offset_min(&self) -> AlpacaResult<i32>;

    /// Returns the offsets supported by the camera.
    #[http("offsets", method = Get)]
    async fn offsets(&self) -> AlpacaResult<Vec<String>>;

    /// Returns the percentage of the current operation that is complete.
    #[http("percentcompleted", method = Get)]
    async fn percent_completed(&self) -> AlpacaResult<i32>;

    /// Returns the width of the CCD chip pixels in microns.
    #[http("pixelsizex", method = Get)]
    async fn pixel_size_x(&self) -> AlpacaResult<f64>;

    /// Returns the height of the CCD chip pixels in microns.
    #[http("pixelsizey", method = Get)]
    async fn pixel_size_y(&self) -> AlpacaResult<f64>;

    /// Index into the [`readout_modes`](Self::readout_modes) array of the currently selected readout mode.
    #[http("readoutmode", method = Get)]
    async fn readout_mode(&self) -> AlpacaResult<i32>;

    /// Sets the readout mode.
    #[http("readoutmode", method = Put)]
    async fn set_readout_mode(&self, #[http("ReadoutMode")] readout_mode: i32) -> AlpacaResult<()>;

    /// List of available readout modes.
    #[http("readoutmodes", method = Get)]
    async fn readout_modes(&self) -> AlpacaResult<Vec<String>>;

    /// The name of the sensor used within the camera.
    #[http("sensorname", method = Get)]
    async fn sensor_name(&self) -> AlpacaResult<String>;

    /// Returns a value indicating whether the sensor is monochrome, or what Bayer matrix it encodes.
    #[http("sensortype", method = Get)]
    async fn sensor_type(&self) -> AlpacaResult<SensorType>;

    /// Returns the current camera cooler setpoint in degrees Celsius.
    #[http("setccdtemperature", method = Get)]
    async fn set_ccd_temperature(&self) -> AlpacaResult<f64>;

    /// Set's the camera's cooler setpoint in degrees Celsius.
    #[http("setccdtemperature", method = Put)]
    async fn set_set_ccd_temperature(
        &self,
        #[http("SetCCDTemperature")] set_ccd_temperature: f64,
    ) -> AlpacaResult<()>;

    /// Sets the subframe start position for the X axis (0 based) and returns the current value.
    #[http("startx", method = Get)]
    async fn start_x(&self) -> AlpacaResult<i32>;

    /// Sets the current subframe X axis start position in binned pixels.
    #[http("startx", method = Put)]
    async fn set_start_x(&self, #[http("StartX")] start_x: i32) -> AlpacaResult<()>;

    /// Sets the subframe start position for the Y axis (0 based) and returns the current value.
    #[http("starty", method = Get)]
    async fn start_y(&self) -> AlpacaResult<i32>;

    /// Sets the current subframe Y axis start position in binned pixels.
    #[http("starty", method = Put)]
    async fn set_start_y(&self, #[http("StartY")] start_y: i32) -> AlpacaResult<()>;

    /// The Camera's sub exposure duration in seconds.
    ///
    /// _ICameraV3 and later._
    #[http("subexposureduration", method = Get)]
    async fn sub_exposure_duration(&self) -> AlpacaResult<f64>;

    /// Sets image sub exposure duration in seconds.
    #[http("subexposureduration", method = Put)]
    async fn set_sub_exposure_duration(
        &self,
        #[http("SubExposureDuration")] sub_exposure_duration: f64,
    ) -> AlpacaResult<()>;

    /// Aborts the current exposure, if any, and returns the camera to Idle state.
    #[http("abortexposure", method = Put)]
    async fn abort_exposure(&self) -> AlpacaResult<()>;

    /// Activates the Camera's mount control sytem to instruct the mount to move in a particular direction for a given period of time.
    #[http("pulseguide", method = Put)]
    async fn pulse_guide(
        &self,
        #[http("Direction")] direction: GuideDirection,
        #[http("Duration")] duration: i32,
    ) -> AlpacaResult<()>;

    /// Starts an exposure.
    ///
    /// Use [`image_ready`](Self::image_ready) to check when the exposure is complete.
    #[http("startexposure", method = Put)]
    async fn start_exposure(
        &self,
        #[http("Duration")] duration: f64,
        #[http("Light")] light: bool,
    ) -> AlpacaResult<()>;

    /// Stops the current exposure, if any.
    ///
    /// If an exposure is in progress, the readout process is initiated.
    #[http("stopexposure", method = Put)]
    async fn stop_exposure(&self) -> AlpacaResult<()>;
}

/// Camera state.
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
pub enum CameraState {
    /// At idle state, available to start exposure.
    Idle = 0,

    /// Exposure started but waiting (for shutter, trigger, filter wheel, etc.).
    Waiting = 1,

    /// Exposure currently in progress.
    Exposing = 2,

    /// Sensor array is being read out (digitized).
    Reading = 3,

    /// Downloading data to host.
    Download = 4,

    /// Camera error condition serious enough to prevent further operations.
    Error = 5,
}

/// The type of sensor in the camera.
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
pub enum SensorType {
    /// Single-plane monochrome sensor.
    Monochrome = 0,

    /// Multiple-plane color sensor.
    Color = 1,

    /// Single-plane Bayer matrix RGGB sensor.
    RGGB = 2,

    /// Single-plane Bayer matrix CMYG sensor.
    CMYG = 3,

    /// Single-plane Bayer matrix CMYG2 sensor.
    CMYG2 = 4,

    /// Single-plane Bayer matrix LRGB sensor.
    LRGB = 5,
}
