use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CACHE_CONTROL};
use tracing::debug;

use super::{DnsStatusError, IndicatorSettings, ProbeResult};

/// Asynchronous provider-confirmation probe.
///
/// One call, one answer: either a [`ProbeResult`] or a classified error.
/// Implementations never retry internally; the next network-change event is
/// the natural retry trigger.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    /// Query the diagnostic endpoint once.
    ///
    /// # Errors
    /// Returns [`DnsStatusError::ProbeUnreachable`] for transport failures
    /// and reportable variants for unexpected responses.
    async fn probe(&self) -> Result<ProbeResult, DnsStatusError>;
}

/// HTTPS-backed [`StatusProbe`] against the configured diagnostic endpoint.
///
/// Issues a single GET with `Accept: application/json` and
/// `Cache-Control: no-cache`, then reads the provider status and transport
/// protocol out of the JSON body using the configured field names.
pub struct HttpStatusProbe {
    client: reqwest::Client,
    settings: Arc<IndicatorSettings>,
}

impl HttpStatusProbe {
    /// Build a probe client for the given settings.
    ///
    /// # Errors
    /// Returns `DnsStatusError::ServiceInitializationFailed` if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(settings: Arc<IndicatorSettings>) -> Result<Self, DnsStatusError> {
        let client = reqwest::Client::builder()
            .timeout(settings.probe_timeout)
            .build()
            .map_err(|err| {
                DnsStatusError::ServiceInitializationFailed(format!(
                    "HTTP client construction failed: {err}"
                ))
            })?;

        Ok(Self { client, settings })
    }

    fn transport_error(&self, err: &reqwest::Error) -> DnsStatusError {
        DnsStatusError::ProbeUnreachable {
            url: self.settings.probe_url.clone(),
            reason: err.to_string(),
        }
    }

    fn parse(&self, body: &str) -> Result<ProbeResult, DnsStatusError> {
        let document: serde_json::Value = serde_json::from_str(body.trim()).map_err(|err| {
            DnsStatusError::MalformedProbeResponse {
                reason: err.to_string(),
            }
        })?;

        let status = document
            .get(&self.settings.status_field)
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| DnsStatusError::MissingProbeField {
                field: self.settings.status_field.clone(),
            })?;

        if !status.eq_ignore_ascii_case(&self.settings.confirmed_status) {
            debug!("probe reports a different provider: {status}");
            return Ok(ProbeResult {
                using_expected_provider: false,
                protocol: None,
                secure_protocol: false,
            });
        }

        let protocol = document
            .get(&self.settings.protocol_field)
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| DnsStatusError::MissingProbeField {
                field: self.settings.protocol_field.clone(),
            })?;

        Ok(ProbeResult {
            using_expected_provider: true,
            secure_protocol: self.settings.is_secure_protocol(protocol),
            protocol: Some(protocol.to_string()),
        })
    }
}

#[async_trait]
impl StatusProbe for HttpStatusProbe {
    async fn probe(&self) -> Result<ProbeResult, DnsStatusError> {
        let response = self
            .client
            .get(&self.settings.probe_url)
            .header(ACCEPT, "application/json")
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(|err| self.transport_error(&err))?;

        if !response.status().is_success() {
            return Err(DnsStatusError::ProbeRejected {
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(&err))?;

        self.parse(&body)
    }
}
