use async_stream::stream;
use async_trait::async_trait;
use futures::{StreamExt, stream::BoxStream};
use tracing::{debug, warn};
use zbus::Connection;

use super::{
    DnsStatusError, NetworkSnapshot,
    proxy::ResolveManagerProxy,
    source::{NetworkSource, SnapshotEvent},
};

/// [`NetworkSource`] backed by systemd-resolved.
///
/// Strict DNS-over-TLS ("yes") counts as private DNS being active.
/// Opportunistic mode can silently fall back to plaintext, which is exactly
/// the condition the indicator exists to surface, so it counts as inactive.
pub struct ResolvedSource {
    proxy: ResolveManagerProxy<'static>,
}

impl ResolvedSource {
    /// Connect to the system bus and bind the resolve1 manager.
    ///
    /// # Errors
    /// Returns `DnsStatusError::ServiceInitializationFailed` if the system
    /// bus is unreachable and `DnsStatusError::DbusError` if the resolve1
    /// interface cannot be bound.
    pub async fn connect() -> Result<Self, DnsStatusError> {
        let connection = Connection::system().await.map_err(|err| {
            DnsStatusError::ServiceInitializationFailed(format!("D-Bus connection failed: {err}"))
        })?;

        Self::with_connection(&connection).await
    }

    /// Bind the resolve1 manager on an existing bus connection.
    ///
    /// # Errors
    /// Returns `DnsStatusError::DbusError` if proxy creation fails.
    pub async fn with_connection(connection: &Connection) -> Result<Self, DnsStatusError> {
        let proxy = ResolveManagerProxy::new(connection).await?;
        Ok(Self { proxy })
    }

    async fn read_snapshot(proxy: &ResolveManagerProxy<'static>) -> SnapshotEvent {
        let servers = proxy.dns_ex().await?;
        if servers.is_empty() {
            return Ok(None);
        }

        let mode = proxy.dns_over_tls().await?;

        let current = match proxy.current_dns_server_ex().await {
            Ok((_, _, _, _, name)) if !name.is_empty() => Some(name),
            Ok(_) => None,
            Err(err) => {
                warn!("Failed to read current DNS server: {err}");
                None
            }
        };
        let fallback = servers
            .into_iter()
            .map(|(_, _, _, _, name)| name)
            .find(|name| !name.is_empty());

        Ok(Some(NetworkSnapshot {
            private_dns_active: mode == "yes",
            private_dns_server: current.or(fallback),
        }))
    }
}

#[async_trait]
impl NetworkSource for ResolvedSource {
    async fn snapshot(&self) -> SnapshotEvent {
        Self::read_snapshot(&self.proxy).await
    }

    async fn changes(&self) -> Result<BoxStream<'static, SnapshotEvent>, DnsStatusError> {
        let proxy = self.proxy.clone();

        let stream = stream! {
            let mut tls_changes = proxy.receive_dns_over_tls_changed().await;
            let mut server_changes = proxy.receive_current_dns_server_ex_changed().await;

            loop {
                tokio::select! {
                    Some(_) = tls_changes.next() => {}
                    Some(_) = server_changes.next() => {}
                    else => break,
                }

                yield Self::read_snapshot(&proxy).await;
            }

            debug!("resolve1 property streams ended");
        };

        Ok(stream.boxed())
    }
}
