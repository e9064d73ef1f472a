// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Request extractors.

use axum::{extract::FromRequestParts, http::request::Parts};
use folio_common_i18n::strip_locale;

use crate::{api::AppState, error::ServerError};

/// The locale segment of a locale-prefixed request path.
///
/// This is what content lookups are keyed by. Requests whose first path
/// segment is not a supported locale are rejected with 404; behind
/// [`crate::locale_middleware::LocaleRedirectLayer`] that only happens for
/// exempt paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLocale {
	pub locale: String,
	/// Path after the locale segment, `/` for the locale's home.
	pub rest: String,
}

impl FromRequestParts<AppState> for PathLocale {
	type Rejection = ServerError;

	async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
		let path = parts.uri.path();
		strip_locale(path, state.routing.locales.as_slice())
			.map(|(locale, rest)| PathLocale {
				locale: locale.to_string(),
				rest: rest.to_string(),
			})
			.ok_or_else(|| ServerError::NotFound(path.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::Request;
	use folio_server_config::ServerConfig;

	async fn extract(uri: &str) -> Result<PathLocale, ServerError> {
		let state = AppState::new(&ServerConfig::default());
		let (mut parts, _) = Request::get(uri).body(()).unwrap().into_parts();
		PathLocale::from_request_parts(&mut parts, &state).await
	}

	#[tokio::test]
	async fn extracts_locale_and_rest() {
		let extracted = extract("/nl/works/boat?x=1").await.unwrap();
		assert_eq!(extracted.locale, "nl");
		assert_eq!(extracted.rest, "/works/boat");
	}

	#[tokio::test]
	async fn locale_home_has_root_rest() {
		let extracted = extract("/en").await.unwrap();
		assert_eq!(extracted.locale, "en");
		assert_eq!(extracted.rest, "/");
	}

	#[tokio::test]
	async fn rejects_unprefixed_path() {
		assert!(matches!(
			extract("/english-docs").await,
			Err(ServerError::NotFound(path)) if path == "/english-docs"
		));
	}
}
