//! Client address extraction for ingestion.

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use std::convert::Infallible;
use std::net::SocketAddr;

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Best-effort client address of the current request.
///
/// Resolved as the first entry of `X-Forwarded-For` when that entry is
/// non-empty, otherwise the TCP peer address. `None` when neither is known
/// (for example when the router is served without connect info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub Option<String>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(Self(resolve_client_ip(&parts.headers, peer)))
    }
}

/// Picks the forwarded address if present, falling back to the peer.
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    forwarded_for(headers).or_else(|| peer.map(|addr| addr.ip().to_string()))
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_FORWARDED_FOR)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
