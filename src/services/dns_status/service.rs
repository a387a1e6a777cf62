use std::sync::{
    Arc, Mutex,
    atomic::{AtomicU64, Ordering},
};

use futures::Stream;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::services::common::Property;

use super::{
    DnsStatusError, IndicatorSettings, StatusLevel,
    monitoring::DnsStatusMonitoring,
    probe::{HttpStatusProbe, StatusProbe},
    reporter::{ErrorReporter, LogReporter},
    resolved::ResolvedSource,
    source::NetworkSource,
};

/// Publishes the security status of the system's DNS path.
///
/// Subscribes to platform DNS-configuration changes, classifies each change
/// synchronously from local data and refines the published level through an
/// asynchronous provider probe. After startup no failure terminates the
/// service; it runs until [`stop`](Self::stop) or drop.
pub struct DnsStatusService {
    /// Current security classification, readable and watchable at any time.
    pub status: Property<StatusLevel>,
    monitor: Mutex<Option<JoinHandle<()>>>,
    generation: Arc<AtomicU64>,
}

impl DnsStatusService {
    /// Start against systemd-resolved with the HTTPS probe and the
    /// tracing-backed reporter.
    ///
    /// # Errors
    /// Returns `DnsStatusError::ServiceInitializationFailed` or
    /// `DnsStatusError::DbusError` when the system bus or the resolve1
    /// interface is unavailable. A failure to read the initial snapshot is
    /// reported, not propagated.
    #[instrument(skip(settings))]
    pub async fn start(settings: IndicatorSettings) -> Result<Self, DnsStatusError> {
        let settings = Arc::new(settings);
        let source = ResolvedSource::connect().await?;
        let probe = HttpStatusProbe::new(Arc::clone(&settings))?;

        Self::start_with(
            settings,
            Arc::new(source),
            Arc::new(probe),
            Arc::new(LogReporter),
        )
        .await
    }

    /// Start with explicit collaborators.
    ///
    /// Hosts on other platforms substitute their own snapshot source, probe
    /// transport or error reporter here.
    ///
    /// # Errors
    /// Returns an error only when subscribing to the source's change
    /// notifications fails.
    pub async fn start_with(
        settings: Arc<IndicatorSettings>,
        source: Arc<dyn NetworkSource>,
        probe: Arc<dyn StatusProbe>,
        reporter: Arc<dyn ErrorReporter>,
    ) -> Result<Self, DnsStatusError> {
        let status = Property::new(StatusLevel::Inactive);
        let generation = Arc::new(AtomicU64::new(0));

        let handle = DnsStatusMonitoring::start(
            source,
            probe,
            settings,
            status.clone(),
            reporter,
            Arc::clone(&generation),
        )
        .await?;

        Ok(Self {
            status,
            monitor: Mutex::new(Some(handle)),
            generation,
        })
    }

    /// Current security classification.
    pub fn current(&self) -> StatusLevel {
        self.status.get()
    }

    /// Stream of classifications: the current one immediately, then each
    /// transition.
    pub fn watch(&self) -> impl Stream<Item = StatusLevel> + Send + 'static {
        self.status.watch()
    }

    /// Stop monitoring. Safe to call any number of times.
    ///
    /// In-flight probes are not cancelled; bumping the generation makes
    /// their results stale, so nothing is published after this returns.
    pub fn stop(&self) {
        let handle = match self.monitor.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => return,
        };
        let Some(handle) = handle else {
            return;
        };

        handle.abort();
        self.generation.fetch_add(1, Ordering::SeqCst);
        debug!("DNS status monitoring stopped");
    }
}

impl Drop for DnsStatusService {
    fn drop(&mut self) {
        self.stop();
    }
}
