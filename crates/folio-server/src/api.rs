// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Router construction and shared application state.

use std::sync::Arc;

use axum::{routing::get, Router};
use folio_server_config::ServerConfig;

use crate::{
	locale_middleware::LocaleRedirectLayer,
	routes::{health, pages},
	routing::LocaleRouting,
};

/// State shared by all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
	pub routing: Arc<LocaleRouting>,
}

impl AppState {
	pub fn new(config: &ServerConfig) -> Self {
		Self {
			routing: Arc::new(LocaleRouting::from_config(config)),
		}
	}
}

/// Build the application router with locale redirects applied.
///
/// `/health` is registered as a route; every other path falls through to the
/// page envelope handler, which serves locale-prefixed paths.
pub fn create_router(state: AppState) -> Router {
	let locale_layer = LocaleRedirectLayer::new(Arc::clone(&state.routing));

	Router::new()
		.route("/health", get(health::health_check))
		.fallback(pages::page_envelope)
		.layer(locale_layer)
		.with_state(state)
}
