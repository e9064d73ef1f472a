// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-prefixed path helpers.

/// Prefix `path` with a locale segment.
///
/// ```
/// use folio_common_i18n::localized_path;
///
/// assert_eq!(localized_path("nl", "/"), "/nl");
/// assert_eq!(localized_path("nl", "/works"), "/nl/works");
/// assert_eq!(localized_path("nl", "works"), "/nl/works");
/// ```
pub fn localized_path(locale: &str, path: &str) -> String {
	match path {
		"" | "/" => format!("/{locale}"),
		p if p.starts_with('/') => format!("/{locale}{p}"),
		p => format!("/{locale}/{p}"),
	}
}

/// Split a path into its locale segment and the remainder.
///
/// The locale must be the whole first segment: `/en` and `/en/works` carry
/// `en`, `/english-docs` does not. Segment comparison is exact. The remainder
/// is `/` when the path is only the locale.
///
/// ```
/// use folio_common_i18n::strip_locale;
///
/// let supported = ["en", "nl"];
/// assert_eq!(strip_locale("/nl/works", &supported), Some(("nl", "/works")));
/// assert_eq!(strip_locale("/en", &supported), Some(("en", "/")));
/// assert_eq!(strip_locale("/english-docs", &supported), None);
/// ```
pub fn strip_locale<'a, 'p, S: AsRef<str>>(
	path: &'p str,
	supported: &'a [S],
) -> Option<(&'a str, &'p str)> {
	let segment = path.strip_prefix('/')?;
	supported.iter().map(|l| l.as_ref()).find_map(|locale| {
		match segment.strip_prefix(locale)? {
			"" => Some((locale, "/")),
			rest if rest.starts_with('/') => Some((locale, rest)),
			_ => None,
		}
	})
}

/// Characters CMS visual editing hides inside strings.
fn is_invisible(c: char) -> bool {
	matches!(c, '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FEFF}' | '\u{E0000}'..='\u{E007F}')
}

/// Remove invisible encoding characters from a CMS-provided string and trim it.
pub fn clean_path(value: &str) -> String {
	value.chars().filter(|c| !is_invisible(*c)).collect::<String>().trim().to_string()
}
