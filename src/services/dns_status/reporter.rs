use tracing::error;

use super::DnsStatusError;

/// Sink for failures the service cannot handle locally.
///
/// The service hands over either a classified error or a plain message and
/// moves on; what happens next (crash-reporting backend, local log,
/// nothing) is the host's decision.
pub trait ErrorReporter: Send + Sync {
    /// Report a classified error.
    fn report_error(&self, error: &DnsStatusError);

    /// Report a plain diagnostic message.
    fn report_message(&self, message: &str);
}

/// Default reporter forwarding everything to the tracing pipeline.
pub struct LogReporter;

impl ErrorReporter for LogReporter {
    fn report_error(&self, error: &DnsStatusError) {
        error!("DNS status failure: {error}");
    }

    fn report_message(&self, message: &str) {
        error!("DNS status failure: {message}");
    }
}
