use async_trait::async_trait;
use futures::stream::BoxStream;

use super::{DnsStatusError, NetworkSnapshot};

/// Item yielded by a network-change stream.
///
/// `Ok(None)` means "no active network"; `Err` means the snapshot could not
/// be read for this event and the published state should be left alone.
pub type SnapshotEvent = Result<Option<NetworkSnapshot>, DnsStatusError>;

/// Platform source of DNS configuration snapshots.
///
/// The service needs exactly two things from a platform: the current
/// snapshot, and a stream of fresh snapshots on every relevant change.
/// [`ResolvedSource`](super::ResolvedSource) backs this with
/// systemd-resolved; hosts on other platforms provide their own.
#[async_trait]
pub trait NetworkSource: Send + Sync {
    /// Read the current snapshot, `None` when no network is active.
    async fn snapshot(&self) -> SnapshotEvent;

    /// Subscribe to configuration changes.
    ///
    /// Each event carries a freshly read snapshot. The stream ends when the
    /// platform source goes away; the service treats that as the end of
    /// monitoring, not as an error.
    ///
    /// # Errors
    /// Returns an error only when the subscription itself cannot be
    /// established, which is a startup failure for the service.
    async fn changes(&self) -> Result<BoxStream<'static, SnapshotEvent>, DnsStatusError>;
}
