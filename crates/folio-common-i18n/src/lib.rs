// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Folio.
//!
//! This crate holds the locale logic shared by the server and its
//! configuration. It has no HTTP dependencies so every function here can be
//! exercised with plain strings.
//!
//! - [`SupportedLocales`]: the ordered, validated set of locales a site serves,
//!   with one designated base locale
//! - [`parse_accept_language`]: quality-weighted `Accept-Language` parsing
//! - [`resolve_locale`]: negotiation of the best supported locale
//! - [`translation_links`]: the per-locale entries of a locale switcher
//! - [`localized_path`], [`strip_locale`], [`clean_path`]: path helpers
//!
//! # Example
//!
//! ```
//! use folio_common_i18n::{resolve_locale, SupportedLocales};
//!
//! let locales = SupportedLocales::new(["en", "nl"], "en").unwrap();
//!
//! // Highest quality supported tag wins
//! assert_eq!(locales.negotiate(Some("fr;q=0.5,nl;q=0.9")), "nl");
//!
//! // Nothing usable falls back to the base locale
//! assert_eq!(locales.negotiate(None), "en");
//!
//! // The free function works on any slice of locale identifiers
//! assert_eq!(resolve_locale("en-GB", &["en", "nl"], "nl"), "en");
//! ```

mod accept_language;
mod locale;
mod path;
mod resolve;
mod translation;

pub use accept_language::{parse_accept_language, LanguagePreference};
pub use locale::{is_valid_tag, LocaleError, SupportedLocales};
pub use path::{clean_path, localized_path, strip_locale};
pub use resolve::resolve_locale;
pub use translation::{translation_links, Translation, TranslationLink};

pub use locale::{DEFAULT_BASE_LOCALE, DEFAULT_LOCALES};
