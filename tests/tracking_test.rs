///! Tests for the visitor-tracking helpers: client IP resolution, private
///! range detection, user-agent classification, and path filtering.
///!
///! Run with: `cargo test --test tracking_test`
use std::net::IpAddr;

use teknindo_backend::tracking::{agent, client_ip, is_private_ip, should_track};

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn forwarded_for_wins_and_takes_the_first_hop() {
    let resolved = client_ip(
        Some("203.0.113.7, 10.0.0.1, 172.16.0.9"),
        Some("198.51.100.2"),
        Some(ip("127.0.0.1")),
    );
    assert_eq!(resolved, Some(ip("203.0.113.7")));
}

#[test]
fn real_ip_is_the_fallback() {
    let resolved = client_ip(None, Some(" 198.51.100.2 "), Some(ip("127.0.0.1")));
    assert_eq!(resolved, Some(ip("198.51.100.2")));
}

#[test]
fn peer_address_is_the_last_resort() {
    assert_eq!(client_ip(None, None, Some(ip("9.9.9.9"))), Some(ip("9.9.9.9")));
    assert_eq!(client_ip(None, None, None), None);
}

#[test]
fn garbage_forwarded_header_falls_through() {
    let resolved = client_ip(Some("unknown"), None, Some(ip("203.0.113.9")));
    assert_eq!(resolved, Some(ip("203.0.113.9")));
}

#[test]
fn private_ranges_are_detected() {
    for addr in ["10.1.2.3", "172.16.5.5", "192.168.1.1", "127.0.0.1", "169.254.0.5", "::1", "fc00::1", "fe80::1"] {
        assert!(is_private_ip(&ip(addr)), "{addr} should be private");
    }
    for addr in ["8.8.8.8", "203.0.113.7", "2001:4860:4860::8888"] {
        assert!(!is_private_ip(&ip(addr)), "{addr} should be public");
    }
}

#[test]
fn only_public_pages_are_tracked() {
    assert!(should_track("/api/public/home"));
    assert!(should_track("/api/public/berita/instalasi-listrik"));
    assert!(!should_track("/api/admin/pesanan"));
    assert!(!should_track("/api/auth/login"));
    assert!(!should_track("/storage/services/logo.png"));
    assert!(!should_track("/api/public/assets/app.js"));
}

#[test]
fn desktop_chrome_is_classified() {
    let info = agent::parse(Some(
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ));
    assert_eq!(info.device, "desktop");
    assert_eq!(info.browser, "Chrome");
    assert_eq!(info.platform, "Windows");
}

#[test]
fn mobile_safari_is_classified() {
    let info = agent::parse(Some(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15 \
         (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1",
    ));
    assert_eq!(info.device, "mobile");
    assert_eq!(info.browser, "Safari");
    assert_eq!(info.platform, "iOS");
}

#[test]
fn crawlers_are_flagged_as_bots() {
    let info = agent::parse(Some(
        "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)",
    ));
    assert_eq!(info.device, "bot");
}

#[test]
fn missing_user_agent_is_unknown() {
    let info = agent::parse(None);
    assert_eq!(info.device, "unknown");
    assert_eq!(info.browser, "unknown");
    assert_eq!(info.platform, "unknown");
}
