//! Encrypted-DNS status monitoring.
//!
//! Watches the platform's DNS configuration, classifies it into a
//! [`StatusLevel`] and confirms the configured provider out-of-band through
//! an HTTPS probe. The classification from local data is published
//! immediately; the probe result refines it when it arrives, unless a newer
//! configuration change has superseded it in the meantime.

mod error;
mod monitoring;
/// Provider-confirmation probe contract and HTTPS implementation.
pub mod probe;
mod proxy;
/// Failure reporting seam.
pub mod reporter;
/// systemd-resolved-backed snapshot source.
pub mod resolved;
mod service;
/// Platform snapshot source contract.
pub mod source;
mod types;

#[cfg(test)]
mod tests;

pub use error::{DnsStatusError, ErrorDisposition};
pub use probe::{HttpStatusProbe, StatusProbe};
pub use reporter::{ErrorReporter, LogReporter};
pub use resolved::ResolvedSource;
pub use service::DnsStatusService;
pub use source::{NetworkSource, SnapshotEvent};
pub use types::{Glyph, IndicatorSettings, NetworkSnapshot, ProbeResult, StatusLevel, Tint};
