// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Server error types and HTTP response conversions.

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	/// No page for this path.
	#[error("Not found: {0}")]
	NotFound(String),

	#[error("Method not allowed: {0}")]
	MethodNotAllowed(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::NotFound(path) => (
				StatusCode::NOT_FOUND,
				ErrorResponse {
					error: "not_found".to_string(),
					message: format!("No page at {path}"),
				},
			),
			ServerError::MethodNotAllowed(method) => {
				tracing::debug!(method = %method, "method not allowed");
				(
					StatusCode::METHOD_NOT_ALLOWED,
					ErrorResponse {
						error: "method_not_allowed".to_string(),
						message: format!("{method} is not supported here"),
					},
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}
