// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locale set.

/// Locales served when nothing is configured.
pub const DEFAULT_LOCALES: &[&str] = &["en", "nl"];

/// Base locale used when nothing is configured.
pub const DEFAULT_BASE_LOCALE: &str = "en";

/// Errors raised while building a [`SupportedLocales`] set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
	#[error("at least one supported locale is required")]
	Empty,

	#[error("invalid locale identifier: {0:?}")]
	InvalidTag(String),

	#[error("duplicate locale: {0}")]
	Duplicate(String),

	#[error("base locale {0:?} is not one of the supported locales")]
	UnknownBase(String),
}

/// Ordered, non-empty set of locale identifiers with a designated base locale.
///
/// Built once at startup and shared read-only afterwards. Order matters: it is
/// the order locale switchers list their entries in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLocales {
	locales: Vec<String>,
	base: usize,
}

impl SupportedLocales {
	/// Validate and build a locale set.
	///
	/// Rejects an empty list, malformed identifiers, duplicates (compared
	/// ASCII case-insensitively) and a base locale that is not in the list.
	///
	/// # Example
	///
	/// ```
	/// use folio_common_i18n::{LocaleError, SupportedLocales};
	///
	/// let locales = SupportedLocales::new(["en", "nl"], "nl").unwrap();
	/// assert_eq!(locales.base(), "nl");
	///
	/// let err = SupportedLocales::new(["en", "EN"], "en").unwrap_err();
	/// assert_eq!(err, LocaleError::Duplicate("EN".to_string()));
	/// ```
	pub fn new<I, S>(locales: I, base: &str) -> Result<Self, LocaleError>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut validated: Vec<String> = Vec::new();
		for locale in locales {
			let locale = locale.into();
			if !is_valid_tag(&locale) {
				return Err(LocaleError::InvalidTag(locale));
			}
			if validated.iter().any(|l| l.eq_ignore_ascii_case(&locale)) {
				return Err(LocaleError::Duplicate(locale));
			}
			validated.push(locale);
		}

		if validated.is_empty() {
			return Err(LocaleError::Empty);
		}

		let base = validated
			.iter()
			.position(|l| l == base)
			.ok_or_else(|| LocaleError::UnknownBase(base.to_string()))?;

		Ok(Self {
			locales: validated,
			base,
		})
	}

	/// The fallback locale.
	pub fn base(&self) -> &str {
		&self.locales[self.base]
	}

	pub fn as_slice(&self) -> &[String] {
		&self.locales
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.locales.iter().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.locales.len()
	}

	/// Always false; kept for API symmetry with `len`.
	pub fn is_empty(&self) -> bool {
		self.locales.is_empty()
	}

	/// Exact membership test, as used for URL segments.
	pub fn contains(&self, locale: &str) -> bool {
		self.locales.iter().any(|l| l == locale)
	}
}

impl Default for SupportedLocales {
	fn default() -> Self {
		Self {
			locales: DEFAULT_LOCALES.iter().map(|l| l.to_string()).collect(),
			base: 0,
		}
	}
}

/// Check that a string is a plausible BCP 47 language tag.
///
/// Subtags are 1-8 ASCII alphanumerics separated by `-`, and the primary
/// subtag is alphabetic. This is a syntactic check only; registry validity
/// is not checked.
pub fn is_valid_tag(tag: &str) -> bool {
	let mut subtags = tag.split('-');
	let Some(primary) = subtags.next() else {
		return false;
	};
	if primary.is_empty() || primary.len() > 8 || !primary.bytes().all(|b| b.is_ascii_alphabetic()) {
		return false;
	}
	subtags.all(|s| !s.is_empty() && s.len() <= 8 && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_preserves_order() {
		let locales = SupportedLocales::new(["nl", "en", "de"], "en").unwrap();
		assert_eq!(locales.as_slice(), &["nl", "en", "de"]);
		assert_eq!(locales.base(), "en");
		assert_eq!(locales.len(), 3);
	}

	#[test]
	fn test_new_rejects_empty() {
		let result = SupportedLocales::new(Vec::<String>::new(), "en");
		assert_eq!(result.unwrap_err(), LocaleError::Empty);
	}

	#[test]
	fn test_new_rejects_unknown_base() {
		let result = SupportedLocales::new(["en", "nl"], "fr");
		assert_eq!(result.unwrap_err(), LocaleError::UnknownBase("fr".to_string()));
	}

	#[test]
	fn test_new_rejects_duplicates_case_insensitive() {
		let result = SupportedLocales::new(["en-US", "en-us"], "en-US");
		assert_eq!(result.unwrap_err(), LocaleError::Duplicate("en-us".to_string()));
	}

	#[test]
	fn test_new_rejects_invalid_tags() {
		for bad in ["", "en_US", "en-", "-en", "toolongtag", "1en", "en/nl", "*"] {
			let result = SupportedLocales::new([bad], bad);
			assert_eq!(
				result.unwrap_err(),
				LocaleError::InvalidTag(bad.to_string()),
				"expected {bad:?} to be rejected"
			);
		}
	}

	#[test]
	fn test_default_is_english_and_dutch() {
		let locales = SupportedLocales::default();
		assert_eq!(locales.as_slice(), &["en", "nl"]);
		assert_eq!(locales.base(), "en");
		assert!(!locales.is_empty());
	}

	#[test]
	fn test_contains_is_exact() {
		let locales = SupportedLocales::new(["en", "zh-Hant"], "en").unwrap();
		assert!(locales.contains("zh-Hant"));
		assert!(!locales.contains("zh-hant"));
		assert!(!locales.contains("EN"));
	}

	#[test]
	fn test_is_valid_tag() {
		assert!(is_valid_tag("en"));
		assert!(is_valid_tag("en-US"));
		assert!(is_valid_tag("zh-Hant-TW"));
		assert!(is_valid_tag("es-419"));
		assert!(is_valid_tag("x-private"));
		assert!(!is_valid_tag(""));
		assert!(!is_valid_tag("en--US"));
		assert!(!is_valid_tag("e n"));
		assert!(!is_valid_tag("419"));
	}
}
