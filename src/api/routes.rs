//! API route configuration.

use crate::api::handlers::{
    delete_url_handler, get_url_handler, list_urls_handler, shorten_handler, stats_handler,
    update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Management API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /shorten`      - Create a short link
/// - `GET    /urls`         - Newest links (max 100)
/// - `GET    /urls/{code}`  - Full record
/// - `PUT    /urls/{code}`  - Replace the destination URL
/// - `DELETE /urls/{code}`  - Delete a link
/// - `GET    /stats/{code}` - Click count and creation time
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{code}",
            get(get_url_handler)
                .put(update_url_handler)
                .delete(delete_url_handler),
        )
        .route("/stats/{code}", get(stats_handler))
}
