use crate::params::RequestParameters;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Per-client source of `ClientTransactionID`s.
///
/// Shared by every device handle created from the same [`Client`](crate::Client).
#[derive(Debug)]
pub(crate) struct TransactionCounter {
    client_id: u32,
    next_transaction_id: AtomicU32,
}

impl TransactionCounter {
    pub(crate) fn new() -> Self {
        Self::with_client_id(rand::random::<u32>().max(1))
    }

    pub(crate) const fn with_client_id(client_id: u32) -> Self {
        Self {
            client_id,
            next_transaction_id: AtomicU32::new(1),
        }
    }

    pub(crate) const fn client_id(&self) -> u32 {
        self.client_id
    }

    pub(crate) fn next(&self) -> RequestTransaction {
        RequestTransaction {
            client_id: self.client_id,
            client_transaction_id: self.next_transaction_id.fetch_add(1, Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy)]
pub(crate) struct RequestTransaction {
    #[serde(rename = "ClientID")]
    pub(crate) client_id: u32,
    #[serde(rename = "ClientTransactionID")]
    pub(crate) client_transaction_id: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct RequestWithTransaction<'params> {
    #[serde(flatten)]
    pub(crate) transaction: RequestTransaction,
    #[serde(flatten)]
    pub(crate) params: &'params RequestParameters,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
pub(crate) struct ResponseTransaction {
    #[serde(rename = "ClientTransactionID", default)]
    pub(crate) client_transaction_id: Option<u32>,
    #[serde(rename = "ServerTransactionID", default)]
    pub(crate) server_transaction_id: Option<u32>,
}

impl ResponseTransaction {
    /// Log when the server echoes a different transaction id than the one we sent.
    pub(crate) fn check_echo(self, sent: RequestTransaction) {
        match self.client_transaction_id {
            Some(received) if received != sent.client_transaction_id => {
                tracing::warn!(
                    sent = sent.client_transaction_id,
                    received,
                    "ClientTransactionID mismatch",
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_ids_increase_from_one() {
        let counter = TransactionCounter::with_client_id(42);
        let ids = (0..3)
            .map(|_| counter.next().client_transaction_id)
            .collect::<Vec<_>>();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(counter.next().client_id, 42);
    }

    #[test]
    fn random_client_id_is_non_zero() {
        assert_ne!(TransactionCounter::new().client_id(), 0);
    }

    #[test]
    fn echo_mismatch_is_only_logged() {
        let sent = TransactionCounter::with_client_id(7).next();
        for echoed in [Some(1), Some(99), None] {
            ResponseTransaction {
                client_transaction_id: echoed,
                server_transaction_id: Some(5),
            }
            .check_echo(sent);
        }
    }

    #[test]
    fn transaction_is_flattened_into_params() {
        let mut params = RequestParameters::default();
        params.insert("Tracking", true);
        let request = RequestWithTransaction {
            transaction: TransactionCounter::with_client_id(7).next(),
            params: &params,
        };
        assert_eq!(
            serde_json::to_value(&request).expect("should serialize"),
            serde_json::json!({
                "ClientID": 7,
                "ClientTransactionID": 1,
                "Tracking": "True",
            })
        );
    }
}
