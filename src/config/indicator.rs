use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::dns_status::IndicatorSettings;

/// Settings for the DNS status indicator and its provider probe.
///
/// Everything the indicator compares against is configuration, not code:
/// the diagnostic endpoint, the JSON field names it reads, the value that
/// confirms the expected provider and the transports considered secure.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Diagnostic endpoint queried to confirm the DNS provider.
    pub probe_url: String,

    /// Probe request timeout in seconds.
    pub probe_timeout_secs: u64,

    /// Substring identifying the expected provider in a server name.
    pub expected_provider: String,

    /// JSON field carrying the provider confirmation value.
    pub status_field: String,

    /// JSON field carrying the transport protocol name.
    pub protocol_field: String,

    /// Value of the status field that confirms the expected provider.
    pub confirmed_status: String,

    /// Transport protocol names considered secure.
    pub secure_protocols: Vec<String>,
}

impl IndicatorConfig {
    /// Convert into the service-facing settings value.
    pub fn to_settings(&self) -> IndicatorSettings {
        IndicatorSettings {
            probe_url: self.probe_url.clone(),
            probe_timeout: Duration::from_secs(self.probe_timeout_secs),
            expected_provider: self.expected_provider.clone(),
            status_field: self.status_field.clone(),
            protocol_field: self.protocol_field.clone(),
            confirmed_status: self.confirmed_status.clone(),
            secure_protocols: self.secure_protocols.clone(),
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        let settings = IndicatorSettings::default();

        Self {
            probe_url: settings.probe_url,
            probe_timeout_secs: settings.probe_timeout.as_secs(),
            expected_provider: settings.expected_provider,
            status_field: settings.status_field,
            protocol_field: settings.protocol_field,
            confirmed_status: settings.confirmed_status,
            secure_protocols: settings.secure_protocols,
        }
    }
}
