use axum::{
    extract::{Path, RawQuery, State},
    http::{HeaderMap, HeaderName, Method, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::{AppState, error::GatewayError};

/// Connection-scoped headers that must not cross the proxy in either
/// direction (RFC 9110 §7.6.1).
const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailers",
    "transfer-encoding",
    "upgrade",
];

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP_HEADERS.contains(&name.as_str())
}

/// Headers dropped from the outbound request on top of the hop-by-hop
/// set: the HTTP client sets `host` and `content-length` itself, and the
/// browser `origin` is meaningless to the upstream API.
pub fn filter_request_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        if is_hop_by_hop(name) {
            continue;
        }
        if matches!(name.as_str(), "host" | "content-length" | "origin") {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Strips hop-by-hop headers from the upstream response before it is
/// relayed to the browser.
pub fn filter_response_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for (name, value) in headers {
        if is_hop_by_hop(name) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Catch-all passthrough for `/api/battle-rap/*`: relays method, path,
/// query, filtered headers, and body to the upstream API, and relays the
/// upstream status, filtered headers, and body back verbatim.
pub async fn proxy_handler(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let mut url = format!("{}/{}", state.upstream_api_base_url, path);
    if let Some(query) = query {
        url.push('?');
        url.push_str(&query);
    }

    tracing::debug!(%method, %url, "proxying request upstream");

    let mut request = state
        .proxy_client
        .request(method, &url)
        .headers(filter_request_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let response_headers = filter_response_headers(upstream.headers());
    let payload = upstream.bytes().await?;

    let mut response = (status, payload).into_response();
    let headers_mut = response.headers_mut();
    headers_mut.clear();
    for (name, value) in &response_headers {
        headers_mut.append(name.clone(), value.clone());
    }
    Ok(response)
}
