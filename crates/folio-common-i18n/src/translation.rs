// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale switcher link resolution.

use serde::{Deserialize, Serialize};

use crate::locale::SupportedLocales;
use crate::path::{clean_path, localized_path};

/// A document's counterpart in one language, as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
	pub language: String,
	#[serde(default)]
	pub path: Option<String>,
	#[serde(default)]
	pub title: Option<String>,
}

/// One entry of a locale switcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationLink {
	pub language: String,
	/// `None` renders as a disabled entry.
	pub href: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub is_current: bool,
}

/// Build the locale switcher for a document: one link per supported locale,
/// in configured order.
///
/// A locale with a known translation links to that translation. A locale
/// without one links to its home page. Translations in languages the site
/// does not serve are ignored; if a language appears twice the first entry
/// wins.
///
/// # Example
///
/// ```
/// use folio_common_i18n::{translation_links, SupportedLocales, Translation};
///
/// let locales = SupportedLocales::new(["en", "nl"], "en").unwrap();
/// let translations = vec![Translation {
/// 	language: "nl".to_string(),
/// 	path: Some("/nl/werk/boot".to_string()),
/// 	title: Some("Boot".to_string()),
/// }];
///
/// let links = translation_links(&translations, &locales, "nl");
/// assert_eq!(links[0].href.as_deref(), Some("/en"));
/// assert_eq!(links[1].href.as_deref(), Some("/nl/werk/boot"));
/// assert!(links[1].is_current);
/// ```
pub fn translation_links(
	translations: &[Translation],
	supported: &SupportedLocales,
	current_locale: &str,
) -> Vec<TranslationLink> {
	supported
		.iter()
		.map(|locale| {
			let is_current = locale == current_locale;
			match translations.iter().find(|t| t.language == locale) {
				Some(translation) => TranslationLink {
					language: locale.to_string(),
					href: translation
						.path
						.as_deref()
						.map(clean_path)
						.filter(|p| !p.is_empty()),
					title: translation.title.clone(),
					is_current,
				},
				None => TranslationLink {
					language: locale.to_string(),
					href: Some(localized_path(locale, "/")),
					title: None,
					is_current,
				},
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn translation(language: &str, path: Option<&str>) -> Translation {
		Translation {
			language: language.to_string(),
			path: path.map(str::to_string),
			title: Some(format!("title-{language}")),
		}
	}

	fn en_nl() -> SupportedLocales {
		SupportedLocales::new(["en", "nl"], "en").unwrap()
	}

	#[test]
	fn test_no_translations_links_to_locale_homes() {
		let links = translation_links(&[], &en_nl(), "en");
		assert_eq!(links.len(), 2);
		assert_eq!(links[0].language, "en");
		assert_eq!(links[0].href.as_deref(), Some("/en"));
		assert!(links[0].is_current);
		assert_eq!(links[1].language, "nl");
		assert_eq!(links[1].href.as_deref(), Some("/nl"));
		assert!(!links[1].is_current);
		assert!(links.iter().all(|l| l.title.is_none()));
	}

	#[test]
	fn test_translations_follow_configured_order() {
		let translations = vec![
			translation("nl", Some("/nl/werk")),
			translation("en", Some("/en/works")),
		];
		let links = translation_links(&translations, &en_nl(), "nl");
		let languages: Vec<_> = links.iter().map(|l| l.language.as_str()).collect();
		assert_eq!(languages, ["en", "nl"]);
		assert_eq!(links[0].href.as_deref(), Some("/en/works"));
		assert_eq!(links[0].title.as_deref(), Some("title-en"));
		assert_eq!(links[1].href.as_deref(), Some("/nl/werk"));
	}

	#[test]
	fn test_unsupported_languages_ignored() {
		let translations = vec![translation("de", Some("/de/arbeit"))];
		let links = translation_links(&translations, &en_nl(), "en");
		assert_eq!(links.len(), 2);
		assert!(links.iter().all(|l| l.language != "de"));
	}

	#[test]
	fn test_first_duplicate_wins() {
		let translations = vec![
			translation("nl", Some("/nl/eerste")),
			translation("nl", Some("/nl/tweede")),
		];
		let links = translation_links(&translations, &en_nl(), "en");
		assert_eq!(links[1].href.as_deref(), Some("/nl/eerste"));
	}

	#[test]
	fn test_missing_path_disables_link() {
		let translations = vec![
			translation("nl", None),
			translation("en", Some("\u{200B}")),
		];
		let links = translation_links(&translations, &en_nl(), "en");
		assert_eq!(links[0].href, None);
		assert_eq!(links[1].href, None);
		assert_eq!(links[1].title.as_deref(), Some("title-nl"));
	}

	#[test]
	fn test_href_is_cleaned() {
		let translations = vec![translation("nl", Some("/nl/\u{200C}werk\u{FEFF}"))];
		let links = translation_links(&translations, &en_nl(), "en");
		assert_eq!(links[1].href.as_deref(), Some("/nl/werk"));
	}

	#[test]
	fn test_link_serialization() {
		let link = TranslationLink {
			language: "nl".to_string(),
			href: None,
			title: None,
			is_current: false,
		};
		let json = serde_json::to_value(&link).unwrap();
		assert_eq!(
			json,
			serde_json::json!({ "language": "nl", "href": null, "is_current": false })
		);
	}

	#[test]
	fn test_translation_deserializes_without_optional_fields() {
		let t: Translation = serde_json::from_str(r#"{ "language": "en" }"#).unwrap();
		assert_eq!(t, translation_without_title("en"));
	}

	fn translation_without_title(language: &str) -> Translation {
		Translation {
			language: language.to_string(),
			path: None,
			title: None,
		}
	}
}
