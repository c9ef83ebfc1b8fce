//! Transport primitives the decorator is built on.
//!
//! The module exposes [`HttpTransport`], the round-trip capability this crate both consumes
//! and provides. Requests and responses travel as fully buffered [`http`] messages so
//! implementations stay free to back them with any client stack. The trait takes requests by
//! shared reference: a transport must never mutate the caller's request, and anything it needs
//! to change has to happen on its own copy.

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::{ConfigError, TransportError};

/// Buffered outbound request handed to a transport.
pub type HttpRequest = http::Request<Vec<u8>>;
/// Buffered response produced by a transport.
pub type HttpResponse = http::Response<Vec<u8>>;

/// Boxed future returned by [`HttpTransport::round_trip`].
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<HttpResponse>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of executing a single request/response exchange.
///
/// Implementations must be `Send + Sync` so one transport can serve concurrent callers
/// behind an `Arc`, and the returned future must be `Send` for the lifetime of the
/// in-flight exchange. [`crate::transport::AuthenticatingTransport`] consumes this
/// capability for delegation and implements it itself, so decorators can stack.
pub trait HttpTransport
where
	Self: Send + Sync,
{
	/// Sends the request and resolves to the response, or to the transport's failure.
	fn round_trip<'a>(&'a self, request: &'a HttpRequest) -> TransportFuture<'a>;
}

/// Thin wrapper around [`ReqwestClient`] acting as the crate's default base transport.
///
/// The wrapper rebuilds each outbound request from the caller's buffered copy instead of
/// consuming it, then buffers the response body before handing it back.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Wraps an existing [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl std::ops::Deref for ReqwestTransport {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn round_trip<'a>(&'a self, request: &'a HttpRequest) -> TransportFuture<'a> {
		Box::pin(async move {
			let url = Url::parse(&request.uri().to_string())
				.map_err(|e| ConfigError::InvalidUri { source: e })?;
			let response = self
				.0
				.request(request.method().clone(), url)
				.version(request.version())
				.headers(request.headers().clone())
				.body(request.body().clone())
				.send()
				.await
				.map_err(TransportError::from)?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let mut buffered = HttpResponse::new(
				response.bytes().await.map_err(TransportError::from)?.to_vec(),
			);

			*buffered.status_mut() = status;
			*buffered.headers_mut() = headers;

			Ok(buffered)
		})
	}
}
