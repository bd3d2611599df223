use crate::transaction::ResponseTransaction;
use crate::{ASCOMError, ASCOMErrorCode};
use mime::Mime;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::any::TypeId;

#[derive(Debug, Deserialize)]
pub(crate) struct ValueResponse<T> {
    #[serde(rename = "Value")]
    value: T,
}

impl<T> ValueResponse<T> {
    pub(crate) fn into(self) -> T {
        self.value
    }
}

/// Everything in the Alpaca envelope except the `Value`.
#[derive(Debug, Deserialize)]
struct EnvelopeHeader {
    #[serde(flatten)]
    transaction: ResponseTransaction,
    #[serde(rename = "ErrorNumber", default)]
    error_number: ASCOMErrorCode,
    #[serde(rename = "ErrorMessage", default)]
    error_message: Option<String>,
}

/// A decoded Alpaca envelope: either the device's value or the error it reported.
#[derive(Debug)]
pub(crate) struct ResponseEnvelope<T> {
    pub(crate) transaction: ResponseTransaction,
    pub(crate) result: Result<T, ASCOMError>,
}

impl<T: DeserializeOwned + 'static> ResponseEnvelope<T> {
    pub(crate) fn from_json(bytes: &[u8]) -> eyre::Result<Self> {
        let header = serde_json::from_slice::<EnvelopeHeader>(bytes)?;

        let result = if header.error_number.is_ok() {
            Ok(decode_value(bytes)?)
        } else {
            Err(ASCOMError::new(
                header.error_number,
                header.error_message.unwrap_or_default(),
            ))
        };

        Ok(Self {
            transaction: header.transaction,
            result,
        })
    }

    pub(crate) fn from_reqwest(mime_type: &Mime, bytes: &[u8]) -> eyre::Result<Self> {
        eyre::ensure!(
            mime_type.essence_str() == mime::APPLICATION_JSON.as_ref(),
            "Expected JSON response, got {mime_type}"
        );
        match mime_type.get_param(mime::CHARSET) {
            Some(mime::UTF_8) | None => {}
            Some(charset) => eyre::bail!("Unsupported charset {charset}"),
        }
        Self::from_json(bytes)
    }
}

fn decode_value<T: DeserializeOwned + 'static>(bytes: &[u8]) -> serde_json::Result<T> {
    if TypeId::of::<T>() == TypeId::of::<()>() {
        // void methods may omit `Value` or put anything in it
        serde_json::from_slice(b"null")
    } else {
        serde_json::from_slice::<ValueResponse<T>>(bytes).map(ValueResponse::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_value_on_success() {
        let envelope = ResponseEnvelope::<f64>::from_json(
            br#"{"ClientTransactionID":3,"ServerTransactionID":17,"ErrorNumber":0,"ErrorMessage":"","Value":45.5}"#,
        )
        .expect("should decode");
        assert_eq!(envelope.transaction.client_transaction_id, Some(3));
        assert_eq!(envelope.transaction.server_transaction_id, Some(17));
        assert_eq!(envelope.result, Ok(45.5));
    }

    #[test]
    fn decodes_error_without_value() {
        let envelope = ResponseEnvelope::<bool>::from_json(
            br#"{"ErrorNumber":1031,"ErrorMessage":"Not connected"}"#,
        )
        .expect("should decode");
        let err = envelope.result.expect_err("should be an error");
        assert_eq!(err.code, ASCOMErrorCode::NOT_CONNECTED);
        assert_eq!(err.message, "Not connected");
    }

    #[test]
    fn keeps_com_error_numbers_beyond_i32() {
        let envelope = ResponseEnvelope::<i32>::from_json(
            br#"{"ErrorNumber":2147746816,"ErrorMessage":"COM failure","Value":0}"#,
        )
        .expect("should decode");
        let err = envelope.result.expect_err("should be an error");
        assert_eq!(err.code.raw(), 0x8004_0400);
        assert_eq!(err.message, "COM failure");
    }

    #[test]
    fn tolerates_missing_error_fields() {
        let envelope = ResponseEnvelope::<String>::from_json(br#"{"Value":"Simulator"}"#)
            .expect("should decode");
        assert_eq!(envelope.result.as_deref(), Ok("Simulator"));
        assert_eq!(envelope.transaction.client_transaction_id, None);
    }

    #[test]
    fn ignores_value_of_void_methods() {
        let envelope = ResponseEnvelope::<()>::from_json(
            br#"{"ErrorNumber":0,"ErrorMessage":"","Value":"whatever"}"#,
        )
        .expect("should decode");
        assert_eq!(envelope.result, Ok(()));
    }

    #[test]
    fn rejects_value_of_wrong_type() {
        assert!(ResponseEnvelope::<i32>::from_json(br#"{"ErrorNumber":0,"Value":"x"}"#).is_err());
        assert!(ResponseEnvelope::<i32>::from_json(br#"{"ErrorNumber":0}"#).is_err());
    }

    #[test]
    fn checks_content_type() {
        let body = br#"{"ErrorNumber":0,"Value":1}"#;
        let json: Mime = "application/json; charset=utf-8".parse().expect("valid mime");
        assert!(ResponseEnvelope::<i32>::from_reqwest(&json, body).is_ok());

        let text: Mime = "text/plain".parse().expect("valid mime");
        assert!(ResponseEnvelope::<i32>::from_reqwest(&text, body).is_err());

        let latin: Mime = "application/json; charset=latin1".parse().expect("valid mime");
        assert!(ResponseEnvelope::<i32>::from_reqwest(&latin, body).is_err());
    }
}
