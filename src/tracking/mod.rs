pub mod agent;
pub mod geo;
pub mod middleware;

use actix_web::dev::ServiceRequest;
use std::net::IpAddr;

/// Request metadata captured before the handler runs, persisted after the
/// response is sent.
#[derive(Debug, Clone)]
pub struct VisitMeta {
    pub ip: String,
    pub user_agent: Option<String>,
    pub url: String,
    pub method: String,
    pub referrer: Option<String>,
}

impl VisitMeta {
    pub fn from_request(req: &ServiceRequest) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        let ip = client_ip(
            header("X-Forwarded-For").as_deref(),
            header("X-Real-IP").as_deref(),
            req.peer_addr().map(|addr| addr.ip()),
        )
        .map(|ip| ip.to_string())
        .unwrap_or_else(|| "unknown".to_string());

        let url = match req.query_string() {
            "" => req.path().to_string(),
            qs => format!("{}?{}", req.path(), qs),
        };

        Self {
            ip,
            user_agent: header("User-Agent"),
            url,
            method: req.method().to_string(),
            referrer: header("Referer"),
        }
    }
}

/// Resolve the real client IP. `X-Forwarded-For` wins (first hop), then
/// `X-Real-IP`, then the peer address.
pub fn client_ip(
    forwarded_for: Option<&str>,
    real_ip: Option<&str>,
    peer: Option<IpAddr>,
) -> Option<IpAddr> {
    if let Some(list) = forwarded_for {
        if let Some(first) = list.split(',').next() {
            if let Ok(ip) = first.trim().parse() {
                return Some(ip);
            }
        }
    }
    if let Some(ip) = real_ip.and_then(|v| v.trim().parse().ok()) {
        return Some(ip);
    }
    peer
}

/// Private, loopback, and link-local addresses never reach the geolocation
/// provider.
pub fn is_private_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            v4.is_private() || v4.is_loopback() || v4.is_link_local() || v4.is_unspecified()
        }
        IpAddr::V6(v6) => {
            let segments = v6.segments();
            v6.is_loopback()
                || v6.is_unspecified()
                // fc00::/7 unique local
                || (segments[0] & 0xfe00) == 0xfc00
                // fe80::/10 link local
                || (segments[0] & 0xffc0) == 0xfe80
        }
    }
}

const SKIPPED_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".map", ".png", ".jpg", ".jpeg", ".webp", ".svg", ".ico", ".woff", ".woff2",
];

/// Only public page requests are tracked; admin, auth, and asset traffic is
/// not analytics.
pub fn should_track(path: &str) -> bool {
    if !path.starts_with("/api/public") {
        return false;
    }
    !SKIPPED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
