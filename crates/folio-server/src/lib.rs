// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Folio portfolio site server.
//!
//! Serves locale-prefixed pages and redirects everything else to the visitor's
//! best locale:
//!
//! - [`routing`]: pure redirect decisions (exempt, root, prefix checks)
//! - [`locale_middleware`]: tower layer turning decisions into 308 responses
//! - [`extract::PathLocale`]: the locale segment handlers key content by
//! - [`routes`]: `/health` and the page envelope fallback

pub mod api;
pub mod error;
pub mod extract;
pub mod locale_middleware;
pub mod routes;
pub mod routing;

pub use api::{create_router, AppState};
pub use error::{ErrorResponse, ServerError};
pub use locale_middleware::LocaleRedirectLayer;
pub use routing::{decide, ExemptPaths, LocaleRouting, RedirectDecision, REDIRECT_STATUS};
