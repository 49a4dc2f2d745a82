//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and dispatch to the page renderer or the asset provider.

use crate::config::AppState;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use crate::render::PageData;
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use std::borrow::Cow;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Request context encapsulating information needed for dispatch
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling
///
/// Never fails: every outcome, including render errors, maps to a
/// response so one bad request cannot affect the connection loop.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let response = if let Some(resp) = check_http_method(&method) {
        resp
    } else {
        let ctx = RequestContext {
            path: &path,
            is_head,
        };
        route_request(&ctx, &state)
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.http_version = version_str(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().exact().unwrap_or(0))
            .unwrap_or(usize::MAX);
        entry.user_agent = req
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method, returning an early response for non-GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path
///
/// Two route classes: anything under the static prefix goes to the
/// asset provider, the exact root path goes to the page renderer.
/// Everything else is a 404.
pub fn route_request(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    if state.assets.matches(ctx.path) {
        return serve_asset(ctx, state);
    }

    if ctx.path == "/" {
        return serve_page(ctx, state);
    }

    http::build_404_response()
}

/// Serve an embedded asset, 404 on lookup miss
fn serve_asset(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    match state.assets.get(ctx.path) {
        Some((data, content_type)) => {
            let body = match data {
                Cow::Borrowed(bytes) => Bytes::from_static(bytes),
                Cow::Owned(vec) => Bytes::from(vec),
            };
            http::build_asset_response(body, content_type, ctx.is_head)
        }
        None => http::build_404_response(),
    }
}

/// Render the page, mapping render failure to a generic 500
fn serve_page(ctx: &RequestContext<'_>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let data = PageData::from_config(&state.config.page);
    match state.renderer.render(&data) {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            // Log the detail, never leak it to the client
            logger::log_error(&format!("Template render failed: {e}"));
            http::build_500_response()
        }
    }
}

fn version_str(version: Version) -> &'static str {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
}
