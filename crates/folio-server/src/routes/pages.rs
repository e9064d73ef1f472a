// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Page envelope handler.
//!
//! Content for a page comes from the CMS and is rendered elsewhere; this
//! handler answers with what that layer is keyed by: the resolved locale, the
//! locale-independent page path and the locale switcher for the page.

use axum::{extract::State, http::Method, Json};
use folio_common_i18n::{localized_path, translation_links, Translation, TranslationLink};
use serde::Serialize;

use crate::{api::AppState, error::ServerError, extract::PathLocale};

#[derive(Debug, Serialize)]
pub struct PageEnvelope {
	pub locale: String,
	pub path: String,
	pub translations: Vec<TranslationLink>,
}

/// GET /{locale}/{*path} - Page envelope for a locale-prefixed path.
pub async fn page_envelope(
	method: Method,
	State(state): State<AppState>,
	page: PathLocale,
) -> Result<Json<PageEnvelope>, ServerError> {
	if method != Method::GET && method != Method::HEAD {
		return Err(ServerError::MethodNotAllowed(method.to_string()));
	}

	let locales = &state.routing.locales;

	// Without CMS translation metadata, every locale is assumed to serve the
	// same path.
	let translations: Vec<Translation> = locales
		.iter()
		.map(|language| Translation {
			language: language.to_string(),
			path: Some(localized_path(language, &page.rest)),
			title: None,
		})
		.collect();

	tracing::debug!(locale = %page.locale, path = %page.rest, "serving page envelope");

	Ok(Json(PageEnvelope {
		translations: translation_links(&translations, locales, &page.locale),
		locale: page.locale,
		path: page.rest,
	}))
}
