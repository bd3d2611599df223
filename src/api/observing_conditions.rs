use super::Device;
use macro_rules_attribute::apply;

/// ObservingConditions Specific Methods.
///
/// Sensor readings the device does not support return
/// [`ASCOMErrorCode::NOT_IMPLEMENTED`](crate::ASCOMErrorCode::NOT_IMPLEMENTED).
#[apply(rpc_trait)]
pub trait ObservingConditions: Device + Send + Sync {
    /// Gets the time period over which observations will be averaged.
    #[http("averageperiod", method = Get)]
    async fn average_period(&self) -> AlpacaResult<f64>;

    /// Sets the time period over which observations will be averaged.
    #[http("averageperiod", method = Put)]
    async fn set_average_period(
        &self,
        #[http("AveragePeriod")] average_period: f64,
    ) -> AlpacaResult<()>;

    /// Gets the percentage of the sky obscured by cloud.
    #[http("cloudcover", method = Get)]
    async fn cloud_cover(&self) -> AlpacaResult<f64>;

    /// Gets the atmospheric dew point at the observatory reported in °C.
    #[http("dewpoint", method = Get)]
    async fn dew_point(&self) -> AlpacaResult<f64>;

    /// Gets the atmospheric humidity (%) at the observatory.
    #[http("humidity", method = Get)]
    async fn humidity(&self) -> AlpacaResult<f64>;

    /// Gets the atmospheric pressure in hectoPascals at the observatory's altitude - NOT reduced to sea level.
    #[http("pressure", method = Get)]
    async fn pressure(&self) -> AlpacaResult<f64>;

    /// Gets the rain rate (mm/hour) at the observatory.
    #[http("rainrate", method = Get)]
    async fn rain_rate(&self) -> AlpacaResult<f64>;

    /// Gets the sky brightness at the observatory (Lux).
    #[http("skybrightness", method = Get)]
    async fn sky_brightness(&self) -> AlpacaResult<f64>;

    /// Gets the sky quality at the observatory (magnitudes per square arc second).
    #[http("skyquality", method = Get)]
    async fn sky_quality(&self) -> AlpacaResult<f64>;

    /// Gets the sky temperature(°C) at the observatory.
    #[http("skytemperature", method = Get)]
    async fn sky_temperature(&self) -> AlpacaResult<f64>;

    /// Gets the seeing at the observatory measured as star full width half maximum (FWHM) in arc secs.
    #[http("starfwhm", method = Get)]
    async fn star_fwhm(&self) -> AlpacaResult<f64>;

    /// Gets the temperature(°C) at the observatory.
    #[http("temperature", method = Get)]
    async fn temperature(&self) -> AlpacaResult<f64>;

    /// Gets the wind direction.
    ///
    /// The returned value must be between 0.0 and 360.0, interpreted according to the metereological standard, where a special value of 0.0 is returned when the wind speed is 0.0. Wind direction is measured clockwise from north, through east, where East=90.0, South=180.0, West=270.0 and North=360.0.
    #[http("winddirection", method = Get)]
    async fn wind_direction(&self) -> AlpacaResult<f64>;

    /// Gets the peak 3 second wind gust(m/s) at the observatory over the last 2 minutes.
    #[http("windgust", method = Get)]
    async fn wind_gust(&self) -> AlpacaResult<f64>;

    /// Gets the wind speed(m/s) at the observatory.
    #[http("windspeed", method = Get)]
    async fn wind_speed(&self) -> AlpacaResult<f64>;

    /// Forces the driver to immediately query its attached hardware to refresh sensor values.
    #[http("refresh", method = Put)]
    async fn refresh(&self) -> AlpacaResult<()>;

    /// Gets a description of the sensor with the name specified in the SensorName parameter.
    #[http("sensordescription", method = Get)]
    async fn sensor_description(
        &self,
        #[http("SensorName")] sensor_name: String,
    ) -> AlpacaResult<String>;

    /// Gets the time since the sensor specified in the SensorName parameter was last updated.
    #[http("timesincelastupdate", method = Get)]
    async fn time_since_last_update(
        &self,
        #[http("SensorName")] sensor_name: String,
    ) -> AlpacaResult<f64>;
}
