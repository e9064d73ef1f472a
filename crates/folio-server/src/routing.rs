// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Locale routing decisions.
//!
//! Every inbound path is classified before normal routing runs:
//!
//! 1. Exempt paths (studio, API, well-known files) pass through untouched
//! 2. `/` redirects to `/<negotiated locale>`
//! 3. Paths whose first segment is a supported locale pass through
//! 4. Anything else redirects to `/<negotiated locale><path>`
//!
//! The decision is a pure function of the path, the configuration and the
//! negotiator, so it is tested here without building HTTP requests. The
//! [`crate::locale_middleware`] layer turns decisions into responses.

use folio_common_i18n::{localized_path, strip_locale, SupportedLocales};
use folio_server_config::{HttpConfig, I18nConfig, ServerConfig};
use http::StatusCode;

/// Status used for every locale redirect.
///
/// 308 keeps the request method and body and lets clients cache the mapping.
pub const REDIRECT_STATUS: StatusCode = StatusCode::PERMANENT_REDIRECT;

/// Outcome of [`decide`] for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
	/// Continue with normal routing.
	NoAction,
	/// Answer with a redirect to `target` and no body.
	RedirectTo { target: String, status: StatusCode },
}

/// Paths that bypass locale routing.
///
/// Prefixes are plain string prefixes and paths are compared for exact
/// equality; neither supports wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExemptPaths {
	prefixes: Vec<String>,
	paths: Vec<String>,
}

impl ExemptPaths {
	pub fn new(prefixes: Vec<String>, paths: Vec<String>) -> Self {
		Self { prefixes, paths }
	}

	pub fn is_exempt(&self, path: &str) -> bool {
		self.prefixes.iter().any(|p| path.starts_with(p.as_str())) || self.paths.iter().any(|p| p == path)
	}
}

impl From<&I18nConfig> for ExemptPaths {
	fn from(config: &I18nConfig) -> Self {
		Self::new(config.exempt_prefixes.clone(), config.exempt_paths.clone())
	}
}

/// Decide whether `path` needs a locale redirect.
///
/// `resolve_locale` is only called when a redirect is actually issued, so
/// header parsing is skipped for exempt and already-localized paths.
/// Paths that do not start with `/` (e.g. `OPTIONS *`) pass through.
///
/// # Example
///
/// ```
/// use folio_server::routing::{decide, ExemptPaths, RedirectDecision, REDIRECT_STATUS};
///
/// let supported = ["en", "nl"];
/// let exempt = ExemptPaths::new(vec!["/studio".into()], vec!["/favicon.ico".into()]);
///
/// assert_eq!(
/// 	decide("/english-docs", &supported, || "en", &exempt),
/// 	RedirectDecision::RedirectTo {
/// 		target: "/en/english-docs".to_string(),
/// 		status: REDIRECT_STATUS,
/// 	}
/// );
/// assert_eq!(decide("/nl/works", &supported, || "en", &exempt), RedirectDecision::NoAction);
/// assert_eq!(decide("/studio/desk", &supported, || "en", &exempt), RedirectDecision::NoAction);
/// ```
pub fn decide<'a, S, F>(
	path: &str,
	supported: &[S],
	resolve_locale: F,
	exempt: &ExemptPaths,
) -> RedirectDecision
where
	S: AsRef<str>,
	F: FnOnce() -> &'a str,
{
	if exempt.is_exempt(path) || !path.starts_with('/') {
		return RedirectDecision::NoAction;
	}

	if path != "/" && strip_locale(path, supported).is_some() {
		return RedirectDecision::NoAction;
	}

	RedirectDecision::RedirectTo {
		target: localized_path(resolve_locale(), path),
		status: REDIRECT_STATUS,
	}
}

/// Locale routing state shared by every request.
#[derive(Debug, Clone)]
pub struct LocaleRouting {
	pub locales: SupportedLocales,
	pub exempt: ExemptPaths,
	pub http: HttpConfig,
}

impl LocaleRouting {
	pub fn new(locales: SupportedLocales, exempt: ExemptPaths, http: HttpConfig) -> Self {
		Self {
			locales,
			exempt,
			http,
		}
	}

	pub fn from_config(config: &ServerConfig) -> Self {
		Self::new(
			config.i18n.locales.clone(),
			ExemptPaths::from(&config.i18n),
			config.http.clone(),
		)
	}

	/// [`decide`] against this configuration, negotiating from `accept_language`.
	pub fn decide(&self, path: &str, accept_language: Option<&str>) -> RedirectDecision {
		decide(
			path,
			self.locales.as_slice(),
			|| self.locales.negotiate(accept_language),
			&self.exempt,
		)
	}
}
