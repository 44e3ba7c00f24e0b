//! Remote activation validator.

use cards_core::json;
use tracing::debug;

use crate::error::CardError;

/// Version value the remote `android` field must strictly exceed for a card
/// to activate.
const ACTIVATION_THRESHOLD: i64 = 277_028;

/// Issues the single activation GET and folds the response into an
/// accept/reject decision.
///
/// Exactly one network attempt per call: no retry, no timeout override beyond
/// the transport default. The client is stateless and safe to share across
/// concurrent activations.
pub struct RemoteValidator {
    endpoint: String,
    client: reqwest::Client,
}

impl RemoteValidator {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Validate an activation code against the remote endpoint.
    ///
    /// Any non-2xx response, transport fault, or unreadable `android` field
    /// yields a [`CardError::Validation`]; a readable value at or below the
    /// threshold yields the canonical rejection message.
    pub async fn validate(&self, code: &str) -> Result<(), CardError> {
        let url = format!("{}version?code={}", self.endpoint, code);
        debug!(%url, "validating card against remote endpoint");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|error| CardError::Validation(format!("Activation request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CardError::Validation(format!(
                "Activation request failed with status {status}"
            )));
        }

        let body = response.text().await.map_err(|error| {
            CardError::Validation(format!("Failed to read activation response: {error}"))
        })?;

        let document = json::parse(&body);
        let version = document
            .reader()
            .get("android")
            .as_i64()
            .map_err(|error| CardError::Validation(error.to_string()))?;

        debug!(version, threshold = ACTIVATION_THRESHOLD, "remote version received");
        if version > ACTIVATION_THRESHOLD {
            Ok(())
        } else {
            Err(CardError::Validation("Failed to activate card!".to_string()))
        }
    }
}
