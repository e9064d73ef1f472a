// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Health HTTP handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub locales: Vec<String>,
	pub base_locale: String,
}

/// GET /health - Liveness plus the locale configuration being served.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	let locales = &state.routing.locales;
	Json(HealthResponse {
		status: "ok",
		version: env!("CARGO_PKG_VERSION"),
		locales: locales.as_slice().to_vec(),
		base_locale: locales.base().to_string(),
	})
}
