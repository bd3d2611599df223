mod support;

use alpaca_client::api::camera::CameraState;
use alpaca_client::api::telescope::{DriveRate, GuideDirection, PierSide, TelescopeAxis};
use alpaca_client::api::{
    Camera, Device, DeviceExt, ObservingConditions, Switch, Telescope,
};
use alpaca_client::{AlpacaTime, DeviceType, TypedDevice};
use serde_json::json;
use std::time::SystemTime;
use support::{device_path, param, received, request_params, setup, value_response, void_response};
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn enums_are_sent_as_codes_and_booleans_as_words() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .respond_with(void_response())
        .mount(&server)
        .await;

    let telescope = client.telescope(0);
    telescope
        .move_axis(TelescopeAxis::Secondary, 1.5)
        .await
        .expect("should succeed");
    telescope.set_tracking(true).await.expect("should succeed");
    telescope
        .set_tracking_rate(DriveRate::King)
        .await
        .expect("should succeed");
    telescope
        .set_side_of_pier(PierSide::Unknown)
        .await
        .expect("should succeed");
    telescope
        .pulse_guide(GuideDirection::West, 250)
        .await
        .expect("should succeed");

    let params = received(&server)
        .await
        .iter()
        .map(request_params)
        .collect::<Vec<_>>();

    assert_eq!(param(&params[0], "Axis"), Some("1"));
    assert_eq!(param(&params[0], "Rate"), Some("1.5"));
    assert_eq!(param(&params[1], "Tracking"), Some("True"));
    assert_eq!(param(&params[2], "TrackingRate"), Some("3"));
    assert_eq!(param(&params[3], "SideOfPier"), Some("-1"));
    assert_eq!(param(&params[4], "Direction"), Some("3"));
    assert_eq!(param(&params[4], "Duration"), Some("250"));
}

#[tokio::test]
async fn get_parameters_go_into_query_string() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(device_path("telescope/0", "destinationsideofpier")))
        .and(query_param("RightAscension", "12.5"))
        .and(query_param("Declination", "-45"))
        .respond_with(value_response(json!(1)))
        .expect(1)
        .mount(&server)
        .await;

    let side = client
        .telescope(0)
        .destination_side_of_pier(12.5, -45.0)
        .await
        .expect("should succeed");
    assert_eq!(side, PierSide::West);
}

#[tokio::test]
async fn string_parameters_are_url_encoded() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(device_path("observingconditions/0", "sensordescription")))
        .and(query_param("SensorName", "Sky Quality"))
        .respond_with(value_response(json!("SQM-LE")))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(
        client
            .observing_conditions(0)
            .sensor_description("Sky Quality".to_owned())
            .await
            .expect("should succeed"),
        "SQM-LE"
    );
}

#[tokio::test]
async fn utc_date_round_trips() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(device_path("telescope/0", "utcdate")))
        .respond_with(value_response(json!("2016-03-04T17:45:31.1234567Z")))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(device_path("telescope/0", "utcdate")))
        .respond_with(void_response())
        .mount(&server)
        .await;

    let telescope = client.telescope(0);
    let date = telescope.utc_date().await.expect("should succeed");
    let expected: AlpacaTime = "2016-03-04T17:45:31.1234567Z".parse().expect("valid date");
    assert_eq!(date, SystemTime::from(expected));

    telescope.set_utc_date(date).await.expect("should succeed");

    let requests = received(&server).await;
    let params = request_params(&requests[1]);
    assert_eq!(param(&params, "UTCDate"), Some("2016-03-04T17:45:31.1234567Z"));
}

#[tokio::test]
async fn exposure_start_time_accepts_fits_dates() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(device_path("camera/0", "lastexposurestarttime")))
        .respond_with(value_response(json!("2019-06-12T06:12:52.452")))
        .mount(&server)
        .await;

    let start = client
        .camera(0)
        .last_exposure_start_time()
        .await
        .expect("should succeed");
    assert_eq!(
        AlpacaTime::from(start).to_string(),
        "2019-06-12T06:12:52.4520000Z"
    );
}

#[tokio::test]
async fn camera_exposure_control() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(device_path("camera/0", "startexposure")))
        .respond_with(void_response())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(device_path("camera/0", "camerastate")))
        .respond_with(value_response(json!(2)))
        .mount(&server)
        .await;

    let camera = client.camera(0);
    camera.start_exposure(0.5, false).await.expect("should succeed");
    assert_eq!(
        camera.camera_state().await.expect("should succeed"),
        CameraState::Exposing
    );

    let params = request_params(&received(&server).await[0]);
    assert_eq!(param(&params, "Duration"), Some("0.5"));
    assert_eq!(param(&params, "Light"), Some("False"));
}

#[tokio::test]
async fn axis_rates_are_ranges() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(device_path("telescope/0", "axisrates")))
        .and(query_param("Axis", "0"))
        .respond_with(value_response(json!([
            { "Minimum": 0.0, "Maximum": 3.5 },
        ])))
        .mount(&server)
        .await;

    let rates = client
        .telescope(0)
        .axis_rates(TelescopeAxis::Primary)
        .await
        .expect("should succeed");
    assert_eq!(rates, [0.0..=3.5]);
}

#[tokio::test]
async fn switch_methods_address_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(device_path("switch/0", "setswitchvalue")))
        .respond_with(void_response())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(device_path("switch/0", "getswitchname")))
        .and(query_param("Id", "2"))
        .respond_with(value_response(json!("Dew heater")))
        .mount(&server)
        .await;

    let switch = client.switch(0);
    switch.set_switch_value(2, 0.75).await.expect("should succeed");
    assert_eq!(
        switch.get_switch_name(2).await.expect("should succeed"),
        "Dew heater"
    );

    let params = request_params(&received(&server).await[0]);
    assert_eq!(param(&params, "Id"), Some("2"));
    assert_eq!(param(&params, "Value"), Some("0.75"));
}

#[tokio::test]
async fn common_device_methods() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(device_path("focuser/0", "driverinfo")))
        .respond_with(value_response(json!("Focuser Simulator, Version 1.0, ASCOM")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(device_path("focuser/0", "supportedactions")))
        .respond_with(value_response(json!(["Reset", "Calibrate"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(device_path("focuser/0", "interfaceversion")))
        .respond_with(value_response(json!(4)))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(device_path("focuser/0", "action")))
        .respond_with(value_response(json!("done")))
        .mount(&server)
        .await;

    let TypedDevice::Focuser(focuser) = client.device(DeviceType::Focuser, 0) else {
        panic!("expected a focuser");
    };

    assert_eq!(
        focuser.driver_info_parts().await.expect("should succeed"),
        ["Focuser Simulator", "Version 1.0", "ASCOM"]
    );
    assert_eq!(
        focuser.supported_actions().await.expect("should succeed"),
        ["Reset", "Calibrate"]
    );
    assert_eq!(focuser.interface_version().await.expect("should succeed"), 4);
    assert_eq!(
        focuser
            .action("Reset".to_owned(), "{}".to_owned())
            .await
            .expect("should succeed"),
        "done"
    );
}

#[tokio::test]
async fn typed_devices_share_common_methods() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(device_path("safetymonitor/2", "name")))
        .respond_with(value_response(json!("Rain sensor")))
        .mount(&server)
        .await;

    let device = client.device("SafetyMonitor".parse().expect("known type"), 2);
    assert_eq!(device.device_type(), DeviceType::SafetyMonitor);
    assert_eq!(
        device.as_device().name().await.expect("should succeed"),
        "Rain sensor"
    );
}

#[tokio::test]
#[allow(deprecated)]
async fn legacy_commands_send_raw_flag() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path(device_path("telescope/0", "commandstring")))
        .respond_with(value_response(json!("OK#")))
        .mount(&server)
        .await;

    let reply = client
        .telescope(0)
        .command_string(":GR#".to_owned(), true)
        .await
        .expect("should succeed");
    assert_eq!(reply, "OK#");

    let params = request_params(&received(&server).await[0]);
    assert_eq!(param(&params, "Command"), Some(":GR#"));
    assert_eq!(param(&params, "Raw"), Some("True"));
}
