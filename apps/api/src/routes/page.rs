use axum::response::Html;

/// GET /
/// The single-page counselor UI with its five panels.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
