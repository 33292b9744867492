use std::any::Any;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pcshop_catalog::CatalogError;

use crate::app::services::ListingError;

pub fn listing_error_to_response(err: ListingError) -> axum::response::Response {
    match err {
        ListingError::Store(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "store_error",
            format!("Database error: {e}"),
        ),
        ListingError::Catalog(e @ CatalogError::NotFound) => {
            json_error(StatusCode::NOT_FOUND, "not_found", e.to_string())
        }
        ListingError::Catalog(e @ CatalogError::AllCategoriesFailed { .. }) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "catalog_error", e.to_string())
        }
    }
}

/// Response for a panic caught while serving a request.
pub fn panic_to_response(panic: Box<dyn Any + Send + 'static>) -> axum::response::Response {
    let cause = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%cause, "request handler panicked");
    json_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "unexpected_error",
        format!("Unexpected error: {cause}"),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcshop_infra::StoreError;

    #[test]
    fn listing_errors_map_to_status_codes() {
        let cases = [
            (ListingError::Catalog(CatalogError::NotFound), StatusCode::NOT_FOUND),
            (
                ListingError::Catalog(CatalogError::AllCategoriesFailed { categories: 2 }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ListingError::Store(StoreError::Unavailable("pool closed".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(listing_error_to_response(err).status(), status);
        }
    }

    #[test]
    fn panic_payloads_become_500() {
        let res = panic_to_response(Box::new("boom"));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = panic_to_response(Box::new(String::from("boom")));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let res = panic_to_response(Box::new(42_u8));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
