// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Tower layer that enforces locale-prefixed URLs.
//!
//! Wraps the router so every request is classified by
//! [`LocaleRouting::decide`] before it reaches a handler:
//!
//! - Pass-through requests go to the inner service unchanged
//! - Redirects are answered directly with the decision's status (308), a
//!   `Location` header and an empty body
//!
//! Redirect responses carry `Vary: Accept-Language` since the negotiated
//! target depends on that header.
//!
//! # Example
//!
//! ```ignore
//! use folio_server::locale_middleware::LocaleRedirectLayer;
//!
//! Router::new()
//!     .fallback(page_envelope)
//!     .layer(LocaleRedirectLayer::new(routing));
//! ```

use std::{
	future::Future,
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use axum::{
	body::Body,
	http::{
		header::{ACCEPT_LANGUAGE, LOCATION, VARY},
		HeaderMap, HeaderValue, Request, StatusCode,
	},
	response::Response,
};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::routing::{LocaleRouting, RedirectDecision};

/// Layer applying locale redirects in front of the wrapped service.
#[derive(Clone)]
pub struct LocaleRedirectLayer {
	routing: Arc<LocaleRouting>,
}

impl LocaleRedirectLayer {
	pub fn new(routing: Arc<LocaleRouting>) -> Self {
		Self { routing }
	}
}

impl<S> Layer<S> for LocaleRedirectLayer {
	type Service = LocaleRedirectService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		LocaleRedirectService {
			inner,
			routing: Arc::clone(&self.routing),
		}
	}
}

/// Service wrapper for [`LocaleRedirectLayer`].
#[derive(Clone)]
pub struct LocaleRedirectService<S> {
	inner: S,
	routing: Arc<LocaleRouting>,
}

impl<S> Service<Request<Body>> for LocaleRedirectService<S>
where
	S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
	S::Future: Send,
{
	type Response = Response;
	type Error = S::Error;
	type Future = LocaleRedirectFuture<S::Future>;

	// A redirect answers without calling `inner`, so the readiness reserved
	// here carries over to the next request on this service.
	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, req: Request<Body>) -> Self::Future {
		let path = req.uri().path();
		let accept_language = accept_language(req.headers());

		match self.routing.decide(path, accept_language.as_deref()) {
			RedirectDecision::NoAction => {
				tracing::trace!(path, "locale routing: pass through");
			}
			RedirectDecision::RedirectTo { target, status } => {
				let location = self.routing.http.redirect_location(&target);
				match HeaderValue::from_str(&location) {
					Ok(location) => {
						tracing::debug!(
							path,
							target = %target,
							status = status.as_u16(),
							accept_language = accept_language.as_deref().unwrap_or(""),
							"locale redirect"
						);
						return LocaleRedirectFuture::Redirect {
							resp: Some(redirect_response(status, location)),
						};
					}
					Err(e) => {
						tracing::warn!(path, target = %target, error = %e, "locale redirect target is not a valid header value, passing through");
					}
				}
			}
		}

		LocaleRedirectFuture::Inner {
			fut: self.inner.call(req),
		}
	}
}

/// All `Accept-Language` values joined as one list; `None` if absent or not
/// valid UTF-8.
fn accept_language(headers: &HeaderMap) -> Option<String> {
	let values: Vec<&str> = headers
		.get_all(ACCEPT_LANGUAGE)
		.iter()
		.filter_map(|v| v.to_str().ok())
		.collect();

	if values.is_empty() {
		None
	} else {
		Some(values.join(","))
	}
}

fn redirect_response(status: StatusCode, location: HeaderValue) -> Response {
	let mut resp = Response::new(Body::empty());
	*resp.status_mut() = status;
	resp.headers_mut().insert(LOCATION, location);
	resp
		.headers_mut()
		.insert(VARY, HeaderValue::from_static("accept-language"));
	resp
}

pin_project! {
	/// Future for [`LocaleRedirectService`].
	#[project = LocaleRedirectFutureProj]
	pub enum LocaleRedirectFuture<F> {
		Inner { #[pin] fut: F },
		Redirect { resp: Option<Response> },
	}
}

impl<F, E> Future for LocaleRedirectFuture<F>
where
	F: Future<Output = Result<Response, E>>,
{
	type Output = Result<Response, E>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match self.project() {
			LocaleRedirectFutureProj::Inner { fut } => fut.poll(cx),
			LocaleRedirectFutureProj::Redirect { resp } => {
				Poll::Ready(Ok(resp.take().expect("polled after completion")))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{routing::get, Router};
	use folio_common_i18n::SupportedLocales;
	use folio_server_config::{HttpConfigLayer, I18nConfig};
	use tower::ServiceExt;

	use crate::routing::ExemptPaths;

	fn routing(absolute: bool) -> Arc<LocaleRouting> {
		Arc::new(LocaleRouting::new(
			SupportedLocales::new(["en", "nl"], "en").unwrap(),
			ExemptPaths::from(&I18nConfig::default()),
			HttpConfigLayer {
				base_url: Some("https://portfolio.example".to_string()),
				absolute_redirects: Some(absolute),
				..Default::default()
			}
			.finalize(),
		))
	}

	fn app(absolute: bool) -> Router {
		Router::new()
			.route("/en/works", get(|| async { "works" }))
			.route("/studio/desk", get(|| async { "studio" }))
			.layer(LocaleRedirectLayer::new(routing(absolute)))
	}

	#[tokio::test]
	async fn root_redirects_with_negotiated_locale() {
		let req = Request::get("/")
			.header(ACCEPT_LANGUAGE, "nl,en;q=0.7")
			.body(Body::empty())
			.unwrap();

		let resp = app(false).oneshot(req).await.unwrap();
		assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
		assert_eq!(resp.headers()[LOCATION], "/nl");
		assert_eq!(resp.headers()[VARY], "accept-language");
	}

	#[tokio::test]
	async fn redirect_has_empty_body() {
		let req = Request::get("/works").body(Body::empty()).unwrap();

		let resp = app(false).oneshot(req).await.unwrap();
		assert_eq!(resp.headers()[LOCATION], "/en/works");
		let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
		assert!(body.is_empty());
	}

	#[tokio::test]
	async fn absolute_redirects_use_base_url() {
		let req = Request::get("/works").body(Body::empty()).unwrap();

		let resp = app(true).oneshot(req).await.unwrap();
		assert_eq!(resp.headers()[LOCATION], "https://portfolio.example/en/works");
	}

	#[tokio::test]
	async fn prefixed_path_reaches_handler() {
		let req = Request::get("/en/works")
			.header(ACCEPT_LANGUAGE, "nl")
			.body(Body::empty())
			.unwrap();

		let resp = app(false).oneshot(req).await.unwrap();
		assert_eq!(resp.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn exempt_path_reaches_handler() {
		let req = Request::get("/studio/desk").body(Body::empty()).unwrap();

		let resp = app(false).oneshot(req).await.unwrap();
		assert_eq!(resp.status(), StatusCode::OK);
	}

	#[tokio::test]
	async fn post_is_redirected_with_308() {
		let req = Request::post("/contact").body(Body::from("name=x")).unwrap();

		let resp = app(false).oneshot(req).await.unwrap();
		assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
		assert_eq!(resp.headers()[LOCATION], "/en/contact");
	}

	#[tokio::test]
	async fn query_string_is_not_carried_over() {
		let req = Request::get("/works?page=2").body(Body::empty()).unwrap();

		let resp = app(false).oneshot(req).await.unwrap();
		assert_eq!(resp.headers()[LOCATION], "/en/works");
	}

	/// Inner service that only accepts a call after its own `poll_ready`.
	struct ReadinessTracked {
		ready: bool,
		calls: Arc<std::sync::atomic::AtomicUsize>,
	}

	impl Clone for ReadinessTracked {
		fn clone(&self) -> Self {
			Self {
				ready: false,
				calls: Arc::clone(&self.calls),
			}
		}
	}

	impl Service<Request<Body>> for ReadinessTracked {
		type Response = Response;
		type Error = std::convert::Infallible;
		type Future = std::future::Ready<Result<Response, Self::Error>>;

		fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
			self.ready = true;
			Poll::Ready(Ok(()))
		}

		fn call(&mut self, _req: Request<Body>) -> Self::Future {
			assert!(self.ready, "inner service called before it was ready");
			self.ready = false;
			self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
			std::future::ready(Ok(Response::new(Body::empty())))
		}
	}

	#[tokio::test]
	async fn readiness_carries_over_redirects() {
		let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));
		let mut svc = LocaleRedirectLayer::new(routing(false)).layer(ReadinessTracked {
			ready: false,
			calls: Arc::clone(&calls),
		});

		let resp = svc
			.ready()
			.await
			.unwrap()
			.call(Request::get("/works").body(Body::empty()).unwrap())
			.await
			.unwrap();
		assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
		assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 0);

		for _ in 0..2 {
			let resp = svc
				.ready()
				.await
				.unwrap()
				.call(Request::get("/en/works").body(Body::empty()).unwrap())
				.await
				.unwrap();
			assert_eq!(resp.status(), StatusCode::OK);
		}
		assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
	}

	#[test]
	fn accept_language_joins_repeated_headers() {
		let mut headers = HeaderMap::new();
		headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("fr"));
		headers.append(ACCEPT_LANGUAGE, HeaderValue::from_static("nl;q=0.5"));
		assert_eq!(accept_language(&headers).as_deref(), Some("fr,nl;q=0.5"));
	}

	#[test]
	fn accept_language_ignores_non_utf8() {
		let mut headers = HeaderMap::new();
		headers.insert(
			ACCEPT_LANGUAGE,
			HeaderValue::from_bytes(b"nl\xff").unwrap(),
		);
		assert_eq!(accept_language(&headers), None);
		assert_eq!(accept_language(&HeaderMap::new()), None);
	}
}
