use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use futures::StreamExt;
use tracing::debug;

use super::{
    DnsStatusError, ErrorDisposition, IndicatorSettings, NetworkSnapshot, StatusLevel,
    probe::StatusProbe, reporter::ErrorReporter, source::NetworkSource,
};
use crate::services::common::Property;

/// Consumes snapshot events and updates the published status.
///
/// Each snapshot is classified synchronously; when private DNS is active a
/// detached probe task is spawned, tagged with the snapshot's generation.
/// A probe result whose generation no longer matches is discarded, so a
/// slow probe can never overwrite a newer snapshot's state.
pub(crate) struct DnsStatusMonitoring;

impl DnsStatusMonitoring {
    pub(crate) async fn start(
        source: Arc<dyn NetworkSource>,
        probe: Arc<dyn StatusProbe>,
        settings: Arc<IndicatorSettings>,
        status: Property<StatusLevel>,
        reporter: Arc<dyn ErrorReporter>,
        generation: Arc<AtomicU64>,
    ) -> Result<tokio::task::JoinHandle<()>, DnsStatusError> {
        // One evaluation with whatever the platform reports right now. A
        // failed read is reported and must not keep the host from coming up.
        match source.snapshot().await {
            Ok(snapshot) => {
                Self::evaluate(snapshot, &probe, &settings, &status, &reporter, &generation);
            }
            Err(err) => Self::dispatch(&err, &reporter),
        }

        let mut changes = source.changes().await?;

        let handle = tokio::spawn(async move {
            while let Some(event) = changes.next().await {
                match event {
                    Ok(snapshot) => {
                        Self::evaluate(snapshot, &probe, &settings, &status, &reporter, &generation);
                    }
                    Err(err) => Self::dispatch(&err, &reporter),
                }
            }
            debug!("snapshot stream ended, DNS status monitoring stopped");
        });

        Ok(handle)
    }

    /// Publish the provisional level for a snapshot and let the probe
    /// refine it asynchronously.
    fn evaluate(
        snapshot: Option<NetworkSnapshot>,
        probe: &Arc<dyn StatusProbe>,
        settings: &Arc<IndicatorSettings>,
        status: &Property<StatusLevel>,
        reporter: &Arc<dyn ErrorReporter>,
        generation: &Arc<AtomicU64>,
    ) {
        let current = generation.fetch_add(1, Ordering::SeqCst) + 1;

        let provisional =
            StatusLevel::from_snapshot(snapshot.as_ref(), &settings.expected_provider);
        status.set(provisional);

        if !snapshot.is_some_and(|snapshot| snapshot.private_dns_active) {
            return;
        }

        let probe = Arc::clone(probe);
        let status = status.clone();
        let reporter = Arc::clone(reporter);
        let generation = Arc::clone(generation);

        tokio::spawn(async move {
            match probe.probe().await {
                Ok(result) => {
                    if generation.load(Ordering::SeqCst) != current {
                        debug!("discarding probe result for superseded generation {current}");
                        return;
                    }
                    if let Some(refined) = StatusLevel::refined(&result) {
                        status.set(refined);
                    }
                }
                Err(err) => Self::dispatch(&err, &reporter),
            }
        });
    }

    fn dispatch(error: &DnsStatusError, reporter: &Arc<dyn ErrorReporter>) {
        match error.disposition() {
            ErrorDisposition::Ignorable => debug!("transient network failure: {error}"),
            ErrorDisposition::Reportable => reporter.report_error(error),
        }
    }
}
