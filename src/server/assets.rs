//! Page client assets, compiled into the binary.

use axum::http::header;
use axum::response::{Html, IntoResponse};

pub static INDEX_HTML: &str = include_str!("../../static/index.html");
pub static STYLE_CSS: &str = include_str!("../../static/style.css");
pub static APP_JS: &str = include_str!("../../static/app.js");

pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn style_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLE_CSS,
    )
}

pub async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}
