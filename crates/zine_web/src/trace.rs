//! Request logging with client address classification and bot detection,
//! mirroring what the reverse proxy would otherwise have to reconstruct from
//! access logs. Classification is plain string matching over the peer address
//! and the User-Agent header.

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

const BOT_MARKERS: &[&str] = &[
    "googlebot",
    "bingbot",
    "duckduckbot",
    "yandexbot",
    "baiduspider",
    "slurp",
    "crawler",
    "spider",
];

/// Buckets a peer address string for the access log.
pub fn classify_ip(ip: &str) -> &'static str {
    if ip == "::1" {
        "localhost (IPv6)"
    } else if ip == "127.0.0.1" {
        "localhost (IPv4)"
    } else if ip.starts_with("::ffff:") {
        "IPv4 mapped to IPv6"
    } else {
        "remote"
    }
}

/// Returns the matched marker when the User-Agent looks like crawler
/// traffic. Matching is case-insensitive substring search; the marker list
/// covers the major crawlers plus the generic "crawler"/"spider" tokens.
pub fn detect_bot(user_agent: &str) -> Option<&'static str> {
    let user_agent = user_agent.to_ascii_lowercase();
    BOT_MARKERS
        .iter()
        .find(|marker| user_agent.contains(*marker))
        .copied()
}

pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());
    let forwarded_for = header(&request, "x-forwarded-for");
    let user_agent = header(&request, "user-agent");

    let ip = ip.unwrap_or_else(|| "unknown".to_string());
    let bot = user_agent.as_deref().and_then(detect_bot);

    match (&forwarded_for, bot) {
        (Some(forwarded), Some(bot)) => info!(
            "🌐 {} {} from {} ({}) via {} 🤖 bot: {}",
            method,
            path,
            ip,
            classify_ip(&ip),
            forwarded,
            bot
        ),
        (Some(forwarded), None) => info!(
            "🌐 {} {} from {} ({}) via {}",
            method,
            path,
            ip,
            classify_ip(&ip),
            forwarded
        ),
        (None, Some(bot)) => info!(
            "🌐 {} {} from {} ({}) 🤖 bot: {}",
            method,
            path,
            ip,
            classify_ip(&ip),
            bot
        ),
        (None, None) => info!("🌐 {} {} from {} ({})", method, path, ip, classify_ip(&ip)),
    }

    next.run(request).await
}

fn header(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_loopback_and_mapped_addresses() {
        assert_eq!(classify_ip("::1"), "localhost (IPv6)");
        assert_eq!(classify_ip("127.0.0.1"), "localhost (IPv4)");
        assert_eq!(classify_ip("::ffff:10.0.0.7"), "IPv4 mapped to IPv6");
        assert_eq!(classify_ip("203.0.113.9"), "remote");
    }

    #[test]
    fn detects_major_crawlers_case_insensitively() {
        assert_eq!(
            detect_bot("Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)"),
            Some("googlebot")
        );
        assert_eq!(detect_bot("SomeSpider/1.0"), Some("spider"));
        assert_eq!(detect_bot("curl/8.5.0"), None);
        assert_eq!(
            detect_bot("Mozilla/5.0 (X11; Linux x86_64) Firefox/124.0"),
            None
        );
    }
}
