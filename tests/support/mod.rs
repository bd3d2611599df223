#![allow(dead_code)]

use alpaca_client::Client;
use serde_json::{Value, json};
use tracing_subscriber::prelude::*;
use wiremock::{MockServer, Request, ResponseTemplate};

pub(crate) const CLIENT_ID: u32 = 7;

fn no_tag(_: &tracing::Event<'_>) -> Option<tracing_forest::Tag> {
    None
}

#[ctor::ctor]
fn prepare_test_env() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("alpaca_client", tracing::Level::DEBUG),
        )
        .with(tracing_forest::ForestLayer::new(
            tracing_forest::printer::TestCapturePrinter::new(),
            no_tag,
        ))
        .try_init();
}

pub(crate) async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(server.uri())
        .expect("mock server URI is a valid base URL")
        .with_client_id(CLIENT_ID);
    (server, client)
}

pub(crate) fn device_path(device: &str, method: &str) -> String {
    format!("/api/v1/{device}/{method}")
}

/// Successful Alpaca envelope around `value`.
pub(crate) fn value_response(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ServerTransactionID": 1,
        "ErrorNumber": 0,
        "ErrorMessage": "",
        "Value": value,
    }))
}

/// Envelope of a method without a return value.
pub(crate) fn void_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ServerTransactionID": 1,
        "ErrorNumber": 0,
        "ErrorMessage": "",
    }))
}

/// Envelope carrying a device error.
pub(crate) fn error_response(error_number: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "ServerTransactionID": 1,
        "ErrorNumber": error_number,
        "ErrorMessage": message,
    }))
}

/// Parameters of a recorded request: the query string for `GET`, the form body for `PUT`.
pub(crate) fn request_params(request: &Request) -> Vec<(String, String)> {
    let encoded = if request.method.as_str() == "GET" {
        request.url.query().unwrap_or_default().as_bytes().to_vec()
    } else {
        request.body.clone()
    };
    url::form_urlencoded::parse(&encoded)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

pub(crate) fn param<'params>(params: &'params [(String, String)], name: &str) -> Option<&'params str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

pub(crate) async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
}
