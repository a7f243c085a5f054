use axum::response::{IntoResponse, Response};
use http::StatusCode;

#[derive(Debug, thiserror::Error)]
#[error("SQL error: {0}")]
pub struct Sqlx(#[source] pub sqlx::Error);

pub fn error_response(error: &dyn std::error::Error, status_code: StatusCode) -> Response {
	tracing::error!(%error, status = status_code.as_u16(), "request failed");
	IntoResponse::into_response((status_code, error.to_string()))
}

macro_rules! impl_response {
	($struct_name:ident, $status:ident) => {
		impl axum::response::IntoResponse for $struct_name {
			fn into_response(self) -> axum::response::Response {
				crate::error::error_response(&self, http::StatusCode::$status)
			}
		}
	};
}

impl_response!(Sqlx, INTERNAL_SERVER_ERROR);
