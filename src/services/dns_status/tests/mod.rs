//! Unit tests for DNS status classification.
//!
//! Pure-function coverage: snapshot classification, probe refinement and
//! error disposition. Service lifecycle is covered by integration tests.

#![allow(clippy::panic)]

use crate::services::dns_status::{
    DnsStatusError, ErrorDisposition, Glyph, IndicatorSettings, NetworkSnapshot, ProbeResult,
    StatusLevel, Tint,
};

fn snapshot(active: bool, server: Option<&str>) -> NetworkSnapshot {
    NetworkSnapshot {
        private_dns_active: active,
        private_dns_server: server.map(str::to_string),
    }
}

#[test]
fn no_network_is_inactive() {
    let level = StatusLevel::from_snapshot(None, "nextdns");

    assert_eq!(level, StatusLevel::Inactive);
    assert_eq!(level.glyph(), Glyph::Failure);
    assert_eq!(level.tint(), Tint::Red);
}

#[test]
fn private_dns_off_is_inactive_even_with_network() {
    let snap = snapshot(false, Some("dns.nextdns.io"));

    let level = StatusLevel::from_snapshot(Some(&snap), "nextdns");

    assert_eq!(level, StatusLevel::Inactive);
}

#[test]
fn matching_server_name_is_provider_hinted() {
    let snap = snapshot(true, Some("dns.nextdns.io"));

    let level = StatusLevel::from_snapshot(Some(&snap), "nextdns");

    assert_eq!(
        level,
        StatusLevel::ActiveUnverified {
            provider_hinted: true
        }
    );
    assert_eq!(level.glyph(), Glyph::Success);
    assert_eq!(level.tint(), Tint::Green);
}

#[test]
fn server_name_match_ignores_case() {
    let snap = snapshot(true, Some("abc123.DNS.NextDNS.io"));

    let level = StatusLevel::from_snapshot(Some(&snap), "nextdns");

    assert_eq!(
        level,
        StatusLevel::ActiveUnverified {
            provider_hinted: true
        }
    );
}

#[test]
fn other_server_name_is_unhinted_caution() {
    let snap = snapshot(true, Some("dns.quad9.net"));

    let level = StatusLevel::from_snapshot(Some(&snap), "nextdns");

    assert_eq!(
        level,
        StatusLevel::ActiveUnverified {
            provider_hinted: false
        }
    );
    assert_eq!(level.tint(), Tint::Yellow);
}

#[test]
fn missing_server_name_is_unhinted_caution() {
    let snap = snapshot(true, None);

    let level = StatusLevel::from_snapshot(Some(&snap), "nextdns");

    assert_eq!(
        level,
        StatusLevel::ActiveUnverified {
            provider_hinted: false
        }
    );
}

#[test]
fn confirmed_secure_probe_refines_to_secure() {
    let result = ProbeResult {
        using_expected_provider: true,
        protocol: Some("DNS-over-HTTPS".to_string()),
        secure_protocol: true,
    };

    assert_eq!(StatusLevel::refined(&result), Some(StatusLevel::ActiveSecure));
}

#[test]
fn confirmed_insecure_probe_refines_to_insecure() {
    let result = ProbeResult {
        using_expected_provider: true,
        protocol: Some("unencrypted".to_string()),
        secure_protocol: false,
    };

    let refined = StatusLevel::refined(&result);

    assert_eq!(refined, Some(StatusLevel::ActiveInsecure));
    assert_ne!(refined, Some(StatusLevel::ActiveSecure));
    assert_eq!(StatusLevel::ActiveInsecure.glyph(), Glyph::Failure);
    assert_eq!(StatusLevel::ActiveInsecure.tint(), Tint::Orange);
}

#[test]
fn unconfirmed_probe_changes_nothing() {
    let result = ProbeResult {
        using_expected_provider: false,
        protocol: None,
        secure_protocol: false,
    };

    assert_eq!(StatusLevel::refined(&result), None);
}

#[test]
fn secure_protocol_set_membership() {
    let settings = IndicatorSettings::default();

    assert!(settings.is_secure_protocol("DOH"));
    assert!(settings.is_secure_protocol("dot"));
    assert!(settings.is_secure_protocol("DNS-over-QUIC"));
    assert!(!settings.is_secure_protocol("UDP"));
    assert!(!settings.is_secure_protocol(""));
}

#[test]
fn empty_provider_marker_never_matches() {
    let snap = snapshot(true, Some("dns.nextdns.io"));

    let level = StatusLevel::from_snapshot(Some(&snap), "");

    assert_eq!(
        level,
        StatusLevel::ActiveUnverified {
            provider_hinted: false
        }
    );
}

#[test]
fn transient_probe_failures_are_ignorable() {
    let error = DnsStatusError::ProbeUnreachable {
        url: "https://test.nextdns.io".to_string(),
        reason: "connection timed out".to_string(),
    };

    assert_eq!(error.disposition(), ErrorDisposition::Ignorable);
}

#[test]
fn unexpected_failures_are_reportable() {
    let malformed = DnsStatusError::MalformedProbeResponse {
        reason: "expected value at line 1".to_string(),
    };
    let missing = DnsStatusError::MissingProbeField {
        field: "status".to_string(),
    };
    let rejected = DnsStatusError::ProbeRejected { status: 503 };

    assert_eq!(malformed.disposition(), ErrorDisposition::Reportable);
    assert_eq!(missing.disposition(), ErrorDisposition::Reportable);
    assert_eq!(rejected.disposition(), ErrorDisposition::Reportable);
}

#[test]
fn status_level_display_names() {
    assert_eq!(StatusLevel::Inactive.to_string(), "inactive");
    assert_eq!(StatusLevel::ActiveSecure.to_string(), "secure");
    assert_eq!(
        StatusLevel::ActiveUnverified {
            provider_hinted: false
        }
        .to_string(),
        "active (unverified)"
    );
}
