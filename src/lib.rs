//! dnsvigil - encrypted-DNS status monitoring for the desktop.
//!
//! dnsvigil watches the system's private-DNS configuration through
//! systemd-resolved, confirms the configured provider out-of-band with an
//! HTTPS diagnostic probe, and publishes a reactive security status that a
//! status bar, widget or the bundled CLI can render. The main pieces:
//!
//! - Reactive [`services::dns_status::DnsStatusService`] with a watchable
//!   status property
//! - Pluggable platform source, probe transport and error reporter
//! - TOML configuration with schema introspection
//! - CLI for one-shot and continuous status display
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dnsvigil::{DnsStatusService, IndicatorSettings};
//!
//! # async fn run() -> Result<(), dnsvigil::services::dns_status::DnsStatusError> {
//! let service = DnsStatusService::start(IndicatorSettings::default()).await?;
//! println!("DNS status: {}", service.current());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reactive services for system integration.
pub mod services;

/// Tracing setup for console and file logging.
pub mod tracing_config;

pub use crate::core::{DnsvigilError, Result};
pub use services::dns_status::{DnsStatusService, IndicatorSettings, StatusLevel};
