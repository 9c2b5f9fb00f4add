use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid identifier {0:?}")]
    InvalidId(String),

    #[error("Category with id={0} not found")]
    CategoryNotFound(i32),

    #[error("Product {0} not found")]
    ProductNotFound(i32),

    #[error(transparent)]
    Repository(#[from] DbErr),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidId(raw) => {
                AppError::BadRequest(format!("invalid identifier {raw:?}"))
            }
            CatalogError::CategoryNotFound(id) => {
                AppError::NotFound(format!("Category with id={id} not found"))
            }
            CatalogError::ProductNotFound(id) => {
                AppError::NotFound(format!("Product {id} not found"))
            }
            CatalogError::Repository(err) => AppError::Database(err),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn not_found_variants_map_to_app_not_found() {
        let err = AppError::from(CatalogError::CategoryNotFound(42));
        assert!(
            matches!(&err, AppError::NotFound(msg) if msg == "Category with id=42 not found")
        );

        let err = AppError::from(CatalogError::ProductNotFound(7));
        assert!(matches!(&err, AppError::NotFound(_)));
    }

    #[test]
    fn invalid_id_maps_to_bad_request() {
        let err = AppError::from(CatalogError::InvalidId("abc".to_string()));
        assert!(matches!(&err, AppError::BadRequest(msg) if msg.contains("abc")));
    }

    #[test]
    fn repository_errors_keep_their_database_cause() {
        let err = AppError::from(CatalogError::Repository(DbErr::Custom(
            "boom".to_string(),
        )));
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn responses_carry_the_mapped_status() {
        let response = CatalogError::CategoryNotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = CatalogError::InvalidId("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
