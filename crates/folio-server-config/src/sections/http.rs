// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HTTP listener and public URL configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// HTTP server configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
	pub host: String,
	pub port: u16,
	/// Public origin of the site, without a trailing slash.
	pub base_url: String,
	/// Emit `Location: <base_url>/<locale>/...` instead of a bare path.
	pub absolute_redirects: bool,
}

impl HttpConfig {
	/// `Location` header value for a locale redirect target path.
	pub fn redirect_location(&self, target: &str) -> String {
		if self.absolute_redirects {
			format!("{}{}", self.base_url, target)
		} else {
			target.to_string()
		}
	}
}

impl Default for HttpConfig {
	fn default() -> Self {
		HttpConfigLayer::default().finalize()
	}
}

/// HTTP configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HttpConfigLayer {
	#[serde(default)]
	pub host: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub absolute_redirects: Option<bool>,
}

impl HttpConfigLayer {
	pub fn merge(&mut self, other: HttpConfigLayer) {
		if other.host.is_some() {
			self.host = other.host;
		}
		if other.port.is_some() {
			self.port = other.port;
		}
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.absolute_redirects.is_some() {
			self.absolute_redirects = other.absolute_redirects;
		}
	}

	pub fn finalize(self) -> HttpConfig {
		let port = self.port.unwrap_or(DEFAULT_PORT);
		let base_url = self
			.base_url
			.map(|url| url.trim_end_matches('/').to_string())
			.unwrap_or_else(|| format!("http://localhost:{port}"));

		HttpConfig {
			host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
			port,
			base_url,
			absolute_redirects: self.absolute_redirects.unwrap_or(false),
		}
	}
}
