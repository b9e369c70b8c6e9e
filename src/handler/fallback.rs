//! Fallback host processing
//!
//! The "normal" path a pass-through request falls into: method validation
//! and full HTML page rendering. This is intentionally the heavier route;
//! the interceptor exists so asset misses never get this far.

use crate::handler::pipeline::RequestContext;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response, StatusCode};

/// Dispatch a pass-through request to normal host processing
pub fn render(ctx: &RequestContext<'_>, method: &Method) -> Response<Full<Bytes>> {
    match *method {
        Method::GET | Method::HEAD => render_page(ctx),
        Method::OPTIONS => http::build_options_response(ctx.enable_cors),
        _ => http::build_405_response(),
    }
}

/// Render the homepage or the full 404 page
fn render_page(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    if ctx.path == "/" {
        http::build_html_response(homepage(), StatusCode::OK, ctx.is_head)
    } else {
        http::build_html_response(not_found_page(ctx.path), StatusCode::NOT_FOUND, ctx.is_head)
    }
}

/// Default homepage HTML
fn homepage() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>fast404 demo host</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: linear-gradient(135deg, #1f2937 0%, #111827 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #f9fafb;
            margin: 0;
        }
        .container {
            max-width: 560px;
            padding: 40px;
            background: rgba(255, 255, 255, 0.06);
            border-radius: 16px;
            border: 1px solid rgba(255, 255, 255, 0.12);
        }
        h1 { margin-top: 0; }
        code {
            background: rgba(255, 255, 255, 0.12);
            border-radius: 4px;
            padding: 2px 6px;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>fast404</h1>
        <p>This host answers asset misses before its page pipeline runs.</p>
        <p>Try <code>/images/logo.png</code> for a terse intercepted 404,
           or <code>/no-such-page</code> for this host's full 404 page.</p>
    </div>
</body>
</html>"#,
    )
}

/// Full 404 page HTML (the expensive render the interceptor avoids)
fn not_found_page(path: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>404 Not Found</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
            line-height: 1.6;
            background: linear-gradient(135deg, #1f2937 0%, #111827 100%);
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            color: #f9fafb;
            margin: 0;
        }}
        .container {{
            max-width: 560px;
            padding: 40px;
            background: rgba(255, 255, 255, 0.06);
            border-radius: 16px;
            border: 1px solid rgba(255, 255, 255, 0.12);
        }}
        h1 {{ margin-top: 0; font-size: 3em; }}
        code {{
            background: rgba(255, 255, 255, 0.12);
            border-radius: 4px;
            padding: 2px 6px;
        }}
    </style>
</head>
<body>
    <div class="container">
        <h1>404</h1>
        <p>No page lives at <code>{}</code>.</p>
        <p><a href="/" style="color:#4ade80">Back to the homepage</a></p>
    </div>
</body>
</html>"#,
        html_escape(path)
    )
}

/// Minimal HTML escaping for the echoed request path
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
