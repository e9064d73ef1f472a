// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! `Accept-Language` header parsing.

use crate::locale::is_valid_tag;

/// One acceptable language range from an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguagePreference {
	/// Language tag as sent by the client, or `*`.
	pub tag: String,
	/// Quality weight in `(0, 1]`.
	pub quality: f32,
}

impl LanguagePreference {
	pub fn is_wildcard(&self) -> bool {
		self.tag == "*"
	}
}

/// Parse an `Accept-Language` header value into preferences ordered by
/// descending quality.
///
/// The sort is stable, so entries with equal weight keep header order.
/// Entries with a malformed tag or quality, and entries with `q=0` (explicitly
/// not acceptable), are dropped. Parsing never fails; a hopeless header simply
/// yields an empty list.
///
/// # Example
///
/// ```
/// use folio_common_i18n::parse_accept_language;
///
/// let prefs = parse_accept_language("fr;q=0.5, en-GB, de;q=abc");
/// let tags: Vec<_> = prefs.iter().map(|p| p.tag.as_str()).collect();
/// assert_eq!(tags, ["en-GB", "fr"]);
/// ```
pub fn parse_accept_language(header: &str) -> Vec<LanguagePreference> {
	let mut preferences: Vec<LanguagePreference> = header.split(',').filter_map(parse_entry).collect();
	preferences.sort_by(|a, b| b.quality.total_cmp(&a.quality));
	preferences
}

fn parse_entry(entry: &str) -> Option<LanguagePreference> {
	let mut parts = entry.split(';');
	let tag = parts.next()?.trim();
	if tag != "*" && !is_valid_tag(tag) {
		return None;
	}

	let mut quality = 1.0;
	for param in parts {
		let Some((key, value)) = param.split_once('=') else {
			continue;
		};
		if key.trim().eq_ignore_ascii_case("q") {
			quality = parse_quality(value)?;
		}
	}

	if quality == 0.0 {
		return None;
	}

	Some(LanguagePreference {
		tag: tag.to_string(),
		quality,
	})
}

fn parse_quality(value: &str) -> Option<f32> {
	let q: f32 = value.trim().parse().ok()?;
	(q.is_finite() && (0.0..=1.0).contains(&q)).then_some(q)
}
