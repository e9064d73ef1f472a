// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation.

use crate::accept_language::parse_accept_language;
use crate::locale::SupportedLocales;

/// Resolve the best supported locale for an `Accept-Language` header value.
///
/// Resolution order:
/// 1. Header entries by descending quality (header order on ties)
/// 2. For each entry, an exact match, then progressively shorter prefixes
///    of the tag (`zh-Hant-TW`, `zh-Hant`, `zh`), then the first supported
///    locale with the same language subtag (`en` finds `en-US`)
/// 3. A `*` entry ranks below every concrete tag whatever its quality, and
///    selects `base_locale`
/// 4. Nothing matched: `base_locale`
///
/// Matching ignores ASCII case and returns the supported locale's own
/// spelling. Malformed input never fails, it just contributes nothing.
///
/// # Arguments
///
/// * `accept_language` - Raw header value, possibly empty or malformed
/// * `supported` - Supported locale identifiers, in preference order
/// * `base_locale` - Fallback, expected to be one of `supported`
///
/// # Example
///
/// ```
/// use folio_common_i18n::resolve_locale;
///
/// let supported = ["en", "nl"];
///
/// assert_eq!(resolve_locale("nl,en;q=0.7", &supported, "en"), "nl");
/// assert_eq!(resolve_locale("fr;q=0.5,en;q=0.9", &["en", "fr"], "en"), "en");
/// assert_eq!(resolve_locale("nl-BE", &supported, "en"), "nl");
/// assert_eq!(resolve_locale("*, nl;q=0.5", &supported, "en"), "nl");
/// assert_eq!(resolve_locale("en", &["en-US", "nl"], "nl"), "en-US");
/// assert_eq!(resolve_locale("zz;;q=abc", &supported, "en"), "en");
/// assert_eq!(resolve_locale("", &supported, "en"), "en");
/// ```
pub fn resolve_locale<'a, S: AsRef<str>>(
	accept_language: &str,
	supported: &'a [S],
	base_locale: &'a str,
) -> &'a str {
	let mut wildcard = false;
	for preference in parse_accept_language(accept_language) {
		if preference.is_wildcard() {
			wildcard = true;
			continue;
		}
		if let Some(locale) =
			lookup(&preference.tag, supported).or_else(|| same_language(&preference.tag, supported))
		{
			return locale;
		}
	}

	if wildcard {
		tracing::trace!(accept_language, base_locale, "wildcard accepted, using base");
	} else {
		tracing::trace!(accept_language, base_locale, "no acceptable locale, using base");
	}
	base_locale
}

/// RFC 4647 style lookup: try the full tag, then strip trailing subtags.
/// A single-character subtag left dangling at the end (an extension or
/// private-use marker) is stripped along with what follows it.
fn lookup<'a, S: AsRef<str>>(tag: &str, supported: &'a [S]) -> Option<&'a str> {
	let mut candidate = tag;
	loop {
		if let Some(found) = supported
			.iter()
			.map(|l| l.as_ref())
			.find(|l| l.eq_ignore_ascii_case(candidate))
		{
			return Some(found);
		}

		let (mut head, _) = candidate.rsplit_once('-')?;
		if let Some((rest, singleton)) = head.rsplit_once('-') {
			if singleton.len() == 1 {
				head = rest;
			}
		}
		candidate = head;
	}
}

/// First supported locale sharing the tag's primary language subtag, so a
/// plain `en` still reaches a region-specific `en-US`.
fn same_language<'a, S: AsRef<str>>(tag: &str, supported: &'a [S]) -> Option<&'a str> {
	let language = primary_subtag(tag);
	supported
		.iter()
		.map(|l| l.as_ref())
		.find(|l| primary_subtag(l).eq_ignore_ascii_case(language))
}

fn primary_subtag(tag: &str) -> &str {
	tag.split('-').next().unwrap_or(tag)
}

impl SupportedLocales {
	/// Negotiate against this set, treating a missing header as empty.
	pub fn negotiate(&self, accept_language: Option<&str>) -> &str {
		resolve_locale(accept_language.unwrap_or_default(), self.as_slice(), self.base())
	}
}
