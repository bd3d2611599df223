use crate::api::DeviceType;
use crate::params::{Method, RequestParameters};
use crate::response::{ResponseEnvelope, ValueResponse};
use crate::transaction::{RequestTransaction, RequestWithTransaction, TransactionCounter};
use crate::{AlpacaError, AlpacaResult};
use eyre::OptionExt;
use futures::TryFutureExt;
use mime::Mime;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{IntoUrl, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::Instrument;
use url::Url;

/// Address of a single Alpaca device: everything in the URL except the method name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: Url,
    api_version: u32,
    device_type: DeviceType,
    device_number: u32,
}

impl Endpoint {
    /// Create an endpoint under the given server base URL.
    pub const fn new(
        base_url: Url,
        api_version: u32,
        device_type: DeviceType,
        device_number: u32,
    ) -> Self {
        Self {
            base_url,
            api_version,
            device_type,
            device_number,
        }
    }

    /// Server base URL.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API version used in the `api/v{n}` path segment.
    pub const fn api_version(&self) -> u32 {
        self.api_version
    }

    /// Device category.
    pub const fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Zero-based device number within its category.
    pub const fn device_number(&self) -> u32 {
        self.device_number
    }

    /// Full URL of a device method, e.g. `http://host:port/api/v1/telescope/0/sitelatitude`.
    ///
    /// The method name is used as is; Alpaca method names are lower-case.
    pub fn url(&self, method: &str) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!(
            "api/v{}/{}/{}/{method}",
            self.api_version, self.device_type, self.device_number
        ))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}api/v{}/{}/{}",
            self.base_url, self.api_version, self.device_type, self.device_number
        )
    }
}

/// Connection to an Alpaca server.
///
/// Cloning is cheap and clones share the HTTP connection pool and the
/// `ClientID` / `ClientTransactionID` sequence.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_version: u32,
    transactions: Arc<TransactionCounter>,
}

impl Client {
    /// Create a client for the server at the given base URL, e.g. `http://localhost:11111/`.
    ///
    /// A base URL without a trailing slash is treated as if it had one.
    pub fn new(base_url: impl IntoUrl) -> eyre::Result<Self> {
        let mut base_url = base_url.into_url()?;
        eyre::ensure!(
            !base_url.cannot_be_a_base(),
            "{base_url} is not a valid base URL"
        );
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            api_version: 1,
            transactions: Arc::new(TransactionCounter::new()),
        })
    }

    /// Create a client for a server listening on the given address over plain HTTP.
    pub fn new_from_addr(addr: impl Into<SocketAddr>) -> eyre::Result<Self> {
        Self::new(format!("http://{}/", addr.into()))
    }

    /// Use a different Alpaca API version in device URLs (default is `1`).
    pub fn with_api_version(mut self, api_version: u32) -> Self {
        self.api_version = api_version;
        self
    }

    /// Use a preconfigured HTTP client, e.g. one with custom timeouts.
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Use a fixed `ClientID` instead of a random one.
    ///
    /// Restarts the transaction sequence of this client.
    pub fn with_client_id(mut self, client_id: u32) -> Self {
        self.transactions = Arc::new(TransactionCounter::with_client_id(client_id));
        self
    }

    /// Server base URL, always ending with `/`.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API version used in device URLs.
    pub const fn api_version(&self) -> u32 {
        self.api_version
    }

    /// `ClientID` sent with every request.
    pub fn client_id(&self) -> u32 {
        self.transactions.client_id()
    }

    /// Endpoint of the given device on this server.
    pub fn endpoint(&self, device_type: DeviceType, device_number: u32) -> Endpoint {
        Endpoint::new(
            self.base_url.clone(),
            self.api_version,
            device_type,
            device_number,
        )
    }

    pub(crate) fn device_client(&self, device_type: DeviceType, device_number: u32) -> DeviceClient {
        DeviceClient {
            http: self.http.clone(),
            endpoint: self.endpoint(device_type, device_number),
            transactions: Arc::clone(&self.transactions),
        }
    }
}

/// Implementation of every device trait on top of a single [`Endpoint`].
#[derive(Debug)]
pub(crate) struct DeviceClient {
    http: reqwest::Client,
    endpoint: Endpoint,
    transactions: Arc<TransactionCounter>,
}

impl DeviceClient {
    pub(crate) async fn exec_action<T: DeserializeOwned + 'static>(
        &self,
        method: Method,
        action: &str,
        params: RequestParameters,
    ) -> AlpacaResult<T> {
        let transaction = self.transactions.next();

        let span = tracing::debug_span!(
            "Alpaca transaction",
            device_type = %self.endpoint.device_type,
            device_number = self.endpoint.device_number,
            action,
            ?method,
            ?params,
            client_id = transaction.client_id,
            client_transaction_id = transaction.client_transaction_id,
        );

        self.send(method, action, transaction, &params)
            .inspect_err(|err| tracing::error!(%err, "Alpaca request failed"))
            .instrument(span)
            .await
    }

    async fn send<T: DeserializeOwned + 'static>(
        &self,
        method: Method,
        action: &str,
        transaction: RequestTransaction,
        params: &RequestParameters,
    ) -> AlpacaResult<T> {
        let add_params = match method {
            Method::Get => RequestBuilder::query,
            Method::Put => RequestBuilder::form,
        };
        let request = add_params(
            self.http.request(method.into(), self.endpoint.url(action)?),
            &RequestWithTransaction {
                transaction,
                params,
            },
        );

        let response = request.send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await?;
            return Err(status_error(status, body));
        }

        let mime_type = content_type(response.headers()).map_err(AlpacaError::InvalidResponse)?;
        let bytes = response.bytes().await?;
        let envelope = ResponseEnvelope::<T>::from_reqwest(&mime_type, &bytes)
            .map_err(AlpacaError::InvalidResponse)?;

        tracing::debug!(
            server_transaction_id = envelope.transaction.server_transaction_id,
            "Received response",
        );
        envelope.transaction.check_echo(transaction);

        envelope.result.map_err(AlpacaError::Device)
    }
}

fn content_type(headers: &HeaderMap) -> eyre::Result<Mime> {
    Ok(headers
        .get(CONTENT_TYPE)
        .ok_or_eyre("Missing Content-Type header")?
        .to_str()?
        .parse()?)
}

/// Servers answer 400 / 500 with a plain text body, but some wrap the message
/// in a JSON `Value` or even send a full envelope with a device error.
fn status_error(status: StatusCode, body: String) -> AlpacaError {
    if let Ok(ResponseEnvelope {
        result: Err(err), ..
    }) = ResponseEnvelope::<()>::from_json(body.as_bytes())
    {
        return AlpacaError::Device(err);
    }
    let message = serde_json::from_str::<ValueResponse<String>>(&body)
        .map_or(body, ValueResponse::into);
    AlpacaError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ASCOMErrorCode, DeviceType};

    fn telescope_endpoint(base_url: &str) -> Endpoint {
        Client::new(base_url)
            .expect("valid base URL")
            .endpoint(DeviceType::Telescope, 0)
    }

    #[test]
    fn builds_method_urls() {
        let endpoint = telescope_endpoint("http://192.168.1.89:7843/");
        assert_eq!(
            endpoint.url("sitelatitude").expect("valid URL").as_str(),
            "http://192.168.1.89:7843/api/v1/telescope/0/sitelatitude"
        );
        assert_eq!(
            endpoint.to_string(),
            "http://192.168.1.89:7843/api/v1/telescope/0"
        );
    }

    #[test]
    fn keeps_base_path_without_trailing_slash() {
        let endpoint = telescope_endpoint("http://localhost:11111/proxy");
        assert_eq!(
            endpoint.url("park").expect("valid URL").as_str(),
            "http://localhost:11111/proxy/api/v1/telescope/0/park"
        );
    }

    #[test]
    fn uses_configured_api_version_and_device() {
        let client = Client::new("http://localhost:11111")
            .expect("valid base URL")
            .with_api_version(2);
        let endpoint = client.endpoint(DeviceType::Focuser, 3);
        assert_eq!(endpoint.api_version(), 2);
        assert_eq!(endpoint.device_number(), 3);
        assert_eq!(
            endpoint.url("position").expect("valid URL").as_str(),
            "http://localhost:11111/api/v2/focuser/3/position"
        );
    }

    #[test]
    fn builds_from_socket_address() {
        let client = Client::new_from_addr(([127, 0, 0, 1], 11111)).expect("valid address");
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:11111/");
        assert_eq!(client.api_version(), 1);
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(Client::new("data:text/plain,hello").is_err());
        assert!(Client::new("not a url").is_err());
    }

    #[test]
    fn clones_share_transaction_sequence() {
        let client = Client::new("http://localhost:11111")
            .expect("valid base URL")
            .with_client_id(9);
        let first = client.device_client(DeviceType::Camera, 0);
        let second = client.clone().device_client(DeviceType::Dome, 0);
        assert_eq!(first.transactions.next().client_transaction_id, 1);
        assert_eq!(second.transactions.next().client_transaction_id, 2);
        assert_eq!(client.client_id(), 9);
    }

    #[test]
    fn status_errors_prefer_embedded_device_errors() {
        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"ErrorNumber":1025,"ErrorMessage":"Bad value"}"#.to_owned(),
        );
        assert_eq!(err.device_code(), Some(ASCOMErrorCode::INVALID_VALUE));

        let err = status_error(
            StatusCode::BAD_REQUEST,
            r#"{"Value":"Unknown device"}"#.to_owned(),
        );
        assert!(matches!(
            err,
            AlpacaError::Status { ref message, .. } if message == "Unknown device"
        ));

        let err = status_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Unknown device".to_owned(),
        );
        assert!(matches!(
            err,
            AlpacaError::Status { status, ref message }
                if status == StatusCode::INTERNAL_SERVER_ERROR && message == "Unknown device"
        ));
    }
}
