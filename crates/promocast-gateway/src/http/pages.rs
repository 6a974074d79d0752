//! Embedded prototype pages. Each display variant is a self-contained HTML
//! file compiled into the binary, same pattern as the landing page.

use axum::response::Html;

static INDEX_HTML: &str = include_str!("../../static/index.html");
static TOAST_USER_DISMISS_HTML: &str = include_str!("../../static/toast-user-dismiss.html");
static TOAST_AUTO_DISMISS_HTML: &str = include_str!("../../static/toast-auto-dismiss.html");
static RIBBON_USER_DISMISS_HTML: &str = include_str!("../../static/ribbon-user-dismiss.html");
static RIBBON_AUTO_DISMISS_HTML: &str = include_str!("../../static/ribbon-auto-dismiss.html");
static REMOTE_HTML: &str = include_str!("../../static/remote.html");

/// Serve the landing page at `GET /`.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn toast_user_dismiss() -> Html<&'static str> {
    Html(TOAST_USER_DISMISS_HTML)
}

pub async fn toast_auto_dismiss() -> Html<&'static str> {
    Html(TOAST_AUTO_DISMISS_HTML)
}

pub async fn ribbon_user_dismiss() -> Html<&'static str> {
    Html(RIBBON_USER_DISMISS_HTML)
}

pub async fn ribbon_auto_dismiss() -> Html<&'static str> {
    Html(RIBBON_AUTO_DISMISS_HTML)
}

/// Serve the remote-control client at `GET /remote`.
pub async fn remote_handler() -> Html<&'static str> {
    Html(REMOTE_HTML)
}
