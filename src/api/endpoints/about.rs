//! Informational page endpoint.

use axum::Json;

use crate::content::{about_page, AboutPage};

/// `GET /api/about` — the structured awareness page.
pub async fn page() -> Json<AboutPage> {
    Json(about_page())
}
