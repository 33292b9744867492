use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::dto::ProductResponse;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/", get(list_products))
}

/// All products grouped into categories.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_categories().await {
        Ok(categories) => {
            let body = categories
                .into_iter()
                .map(ProductResponse::from)
                .collect::<Vec<_>>();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => errors::listing_error_to_response(e),
    }
}
