//! DNS status types and classification rules.

use std::fmt;
use std::time::Duration;

/// OS-reported DNS configuration of the active network at one point in time.
///
/// A snapshot has no identity beyond its values; each network or
/// link-property change produces a fresh one that supersedes the last.
/// "No active network" is modeled as the absence of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSnapshot {
    /// Whether the OS has an active encrypted-DNS configuration.
    pub private_dns_active: bool,
    /// Hostname of the configured private DNS server, if the OS knows one.
    pub private_dns_server: Option<String>,
}

/// Outcome of the diagnostic HTTP probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// Whether the reporting endpoint confirms traffic is reaching the
    /// expected DNS provider.
    pub using_expected_provider: bool,
    /// Transport protocol reported by the endpoint. Absent when the
    /// endpoint does not confirm the provider.
    pub protocol: Option<String>,
    /// Whether `protocol` is a member of the configured secure set.
    pub secure_protocol: bool,
}

/// Security classification of the system's DNS path.
///
/// Levels derived from a snapshot alone are provisional; a completed probe
/// for the same snapshot generation may confirm or downgrade them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// No usable network, or private DNS is not configured.
    Inactive,
    /// Private DNS is active but the provider has not been confirmed.
    ActiveUnverified {
        /// Whether the configured server name matches the expected provider.
        provider_hinted: bool,
    },
    /// Provider confirmed, but over a transport outside the secure set.
    ActiveInsecure,
    /// Provider confirmed over a secure transport.
    ActiveSecure,
}

/// Icon shape a consumer should render for a status level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Checkmark-style success icon.
    Success,
    /// Cross-style failure icon.
    Failure,
}

/// Tint a consumer should apply to the status icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    /// No network or private DNS off.
    Red,
    /// Private DNS on, provider unknown.
    Yellow,
    /// Provider confirmed on an insecure transport.
    Orange,
    /// Provider matched or confirmed secure.
    Green,
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Orange => write!(f, "orange"),
            Self::Green => write!(f, "green"),
        }
    }
}

impl StatusLevel {
    /// Classify a snapshot without waiting for the probe.
    ///
    /// Private DNS being off lands in the same bucket as having no network
    /// at all; the probe never runs for either.
    pub fn from_snapshot(snapshot: Option<&NetworkSnapshot>, expected_provider: &str) -> Self {
        let Some(snapshot) = snapshot else {
            return Self::Inactive;
        };

        if !snapshot.private_dns_active {
            return Self::Inactive;
        }

        let provider_hinted = snapshot
            .private_dns_server
            .as_deref()
            .is_some_and(|server| contains_ignore_case(server, expected_provider));

        Self::ActiveUnverified { provider_hinted }
    }

    /// Apply a completed probe to the published state.
    ///
    /// Returns `None` when the probe carries no positive information about
    /// the expected provider; the provisional level then stands.
    pub fn refined(result: &ProbeResult) -> Option<Self> {
        if !result.using_expected_provider {
            return None;
        }

        if result.secure_protocol {
            Some(Self::ActiveSecure)
        } else {
            Some(Self::ActiveInsecure)
        }
    }

    /// Icon shape for this level.
    pub fn glyph(&self) -> Glyph {
        match self {
            Self::Inactive | Self::ActiveInsecure => Glyph::Failure,
            Self::ActiveUnverified { .. } | Self::ActiveSecure => Glyph::Success,
        }
    }

    /// Icon tint for this level.
    pub fn tint(&self) -> Tint {
        match self {
            Self::Inactive => Tint::Red,
            Self::ActiveUnverified {
                provider_hinted: true,
            }
            | Self::ActiveSecure => Tint::Green,
            Self::ActiveUnverified {
                provider_hinted: false,
            } => Tint::Yellow,
            Self::ActiveInsecure => Tint::Orange,
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "inactive"),
            Self::ActiveUnverified {
                provider_hinted: true,
            } => write!(f, "active (provider matched, unverified)"),
            Self::ActiveUnverified {
                provider_hinted: false,
            } => write!(f, "active (unverified)"),
            Self::ActiveInsecure => write!(f, "active (insecure transport)"),
            Self::ActiveSecure => write!(f, "secure"),
        }
    }
}

/// Externally supplied constants driving classification and the probe.
///
/// Everything the indicator compares against lives here rather than in
/// code: the provider marker, the probe endpoint, the JSON field names and
/// the secure-transport set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorSettings {
    /// Diagnostic endpoint queried to confirm the provider.
    pub probe_url: String,
    /// Per-request timeout for the probe.
    pub probe_timeout: Duration,
    /// Substring identifying the expected provider in a server name.
    pub expected_provider: String,
    /// JSON field carrying the provider confirmation value.
    pub status_field: String,
    /// JSON field carrying the transport protocol name.
    pub protocol_field: String,
    /// Value of `status_field` that confirms the expected provider.
    pub confirmed_status: String,
    /// Transport protocol names considered secure.
    pub secure_protocols: Vec<String>,
}

impl IndicatorSettings {
    /// Whether a reported protocol name is in the secure set.
    pub fn is_secure_protocol(&self, protocol: &str) -> bool {
        self.secure_protocols
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(protocol))
    }
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            probe_url: "https://test.nextdns.io".to_string(),
            probe_timeout: Duration::from_secs(10),
            expected_provider: "nextdns".to_string(),
            status_field: "status".to_string(),
            protocol_field: "protocol".to_string(),
            confirmed_status: "ok".to_string(),
            secure_protocols: vec![
                "DOH".to_string(),
                "DOT".to_string(),
                "DOQ".to_string(),
                "DNS-over-HTTPS".to_string(),
                "DNS-over-TLS".to_string(),
                "DNS-over-QUIC".to_string(),
            ],
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}
