/// DNS status service errors.
#[derive(thiserror::Error, Debug)]
pub enum DnsStatusError {
    /// Service startup failed before monitoring could begin
    #[error("Failed to initialize DNS status service: {0}")]
    ServiceInitializationFailed(String),

    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Probe endpoint could not be reached
    #[error("status probe could not reach {url}: {reason}")]
    ProbeUnreachable {
        /// Endpoint the probe was sent to.
        url: String,
        /// Transport-level failure description.
        reason: String,
    },

    /// Probe endpoint answered with a non-success HTTP status
    #[error("status probe rejected with HTTP {status}")]
    ProbeRejected {
        /// HTTP status code of the response.
        status: u16,
    },

    /// Probe response body was not the expected JSON shape
    #[error("failed to parse probe response: {reason}")]
    MalformedProbeResponse {
        /// Parse failure description.
        reason: String,
    },

    /// Probe response was valid JSON but lacked a required field
    #[error("probe response is missing field '{field}'")]
    MissingProbeField {
        /// Name of the absent field.
        field: String,
    },
}

/// How an error at an operation boundary should be handled.
///
/// Transient network failures carry no information about DNS security and
/// are only worth a local log line; everything else is handed to the
/// reporter. Neither kind may escape the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDisposition {
    /// Expected transient failure; log locally and move on.
    Ignorable,
    /// Unexpected failure; send to the error reporter, abort the operation.
    Reportable,
}

impl DnsStatusError {
    /// Classify this error for boundary handling.
    pub fn disposition(&self) -> ErrorDisposition {
        match self {
            Self::ProbeUnreachable { .. } => ErrorDisposition::Ignorable,
            Self::ServiceInitializationFailed(_)
            | Self::DbusError(_)
            | Self::ProbeRejected { .. }
            | Self::MalformedProbeResponse { .. }
            | Self::MissingProbeField { .. } => ErrorDisposition::Reportable,
        }
    }
}
