// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale routing configuration section.

use folio_common_i18n::{SupportedLocales, DEFAULT_BASE_LOCALE, DEFAULT_LOCALES};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Path prefixes that are never locale-prefixed (CMS studio, API, build assets).
pub const DEFAULT_EXEMPT_PREFIXES: &[&str] = &["/studio", "/api", "/_next/static", "/_next/image"];

/// Well-known files served as-is.
pub const DEFAULT_EXEMPT_PATHS: &[&str] = &[
	"/manifest.json",
	"/favicon.ico",
	"/sitemap.xml",
	"/robots.txt",
	"/health",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub locales: Option<Vec<String>>,
	#[serde(default)]
	pub base_locale: Option<String>,
	#[serde(default)]
	pub exempt_prefixes: Option<Vec<String>>,
	#[serde(default)]
	pub exempt_paths: Option<Vec<String>>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.locales.is_some() {
			self.locales = other.locales;
		}
		if other.base_locale.is_some() {
			self.base_locale = other.base_locale;
		}
		if other.exempt_prefixes.is_some() {
			self.exempt_prefixes = other.exempt_prefixes;
		}
		if other.exempt_paths.is_some() {
			self.exempt_paths = other.exempt_paths;
		}
	}

	/// Resolve and validate.
	///
	/// With locales configured but no base locale, the first configured
	/// locale becomes the base.
	pub fn finalize(self) -> Result<I18nConfig, ConfigError> {
		let (locales, base_locale) = match (self.locales, self.base_locale) {
			(Some(locales), Some(base)) => (locales, base),
			(Some(locales), None) => {
				let base = locales.first().cloned().unwrap_or_default();
				(locales, base)
			}
			(None, base) => (
				DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
				base.unwrap_or_else(|| DEFAULT_BASE_LOCALE.to_string()),
			),
		};
		let locales = SupportedLocales::new(locales, &base_locale)?;

		let exempt_prefixes = self
			.exempt_prefixes
			.unwrap_or_else(|| to_owned(DEFAULT_EXEMPT_PREFIXES));
		let exempt_paths = self
			.exempt_paths
			.unwrap_or_else(|| to_owned(DEFAULT_EXEMPT_PATHS));
		validate_exempt("exempt_prefixes", &exempt_prefixes)?;
		validate_exempt("exempt_paths", &exempt_paths)?;

		Ok(I18nConfig {
			locales,
			exempt_prefixes,
			exempt_paths,
		})
	}
}

fn to_owned(values: &[&str]) -> Vec<String> {
	values.iter().map(|v| v.to_string()).collect()
}

fn validate_exempt(key: &str, entries: &[String]) -> Result<(), ConfigError> {
	for entry in entries {
		// "/" would swallow every request, including the root redirect.
		if !entry.starts_with('/') || entry == "/" {
			return Err(ConfigError::Validation(format!(
				"i18n.{key} entries must be absolute paths other than \"/\", got {entry:?}"
			)));
		}
	}
	Ok(())
}

/// Locale routing configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct I18nConfig {
	pub locales: SupportedLocales,
	pub exempt_prefixes: Vec<String>,
	pub exempt_paths: Vec<String>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			locales: SupportedLocales::default(),
			exempt_prefixes: to_owned(DEFAULT_EXEMPT_PREFIXES),
			exempt_paths: to_owned(DEFAULT_EXEMPT_PATHS),
		}
	}
}
