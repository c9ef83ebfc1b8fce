//! Authenticating transport decorator.
//!
//! [`AuthenticatingTransport`] wraps a base [`HttpTransport`] so every outbound request
//! carries a valid bearer credential. The credential is fetched through an
//! [`AssertionSigner`] on first use or after expiry, cached until it expires, and injected
//! into a derived copy of each request; the caller's request is never touched. The
//! decorator implements [`HttpTransport`] itself, so further layers can stack on top of it.

mod metrics;

pub use metrics::*;

// std
#[cfg(feature = "reqwest")] use std::sync::OnceLock;
// crates.io
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT};
// self
use crate::{
	_prelude::*,
	auth::{Credential, TokenSecret},
	error::ConfigError,
	http::{HttpRequest, HttpResponse, HttpTransport, TransportFuture},
	obs::{self, OpOutcome, OpSpan, TransportOp},
	signer::AssertionSigner,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestTransport;

/// `User-Agent` value identifying this client library on every derived request.
pub const USER_AGENT_VALUE: &str = "gitkit-go-client/0.1";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Decorates a base transport with automatic service-account credential management.
///
/// The decorator owns the only mutable state in the crate, a shared cell holding the
/// current [`Credential`]. Clones share that cell, so one instance can serve many
/// concurrent callers; the cell's async mutex is held across the whole
/// check-fetch-store sequence, which lets simultaneous refreshes piggy-back on a single
/// signer call. The signer and base transport are read-only collaborators behind `Arc`s.
#[derive(Clone)]
pub struct AuthenticatingTransport {
	/// Shared counters describing credential-cache behavior.
	pub refresh_metrics: Arc<RefreshMetrics>,
	signer: Arc<dyn AssertionSigner>,
	base: Option<Arc<dyn HttpTransport>>,
	credential: Arc<AsyncMutex<Option<Credential>>>,
	#[cfg(feature = "reqwest")]
	fallback: Arc<OnceLock<ReqwestTransport>>,
}
impl AuthenticatingTransport {
	/// Creates a decorator that delegates to the provided base transport.
	pub fn with_transport(signer: Arc<dyn AssertionSigner>, base: Arc<dyn HttpTransport>) -> Self {
		Self::build(signer, Some(base))
	}

	/// Seeds the credential cache, replacing any previously cached value.
	pub fn with_credential(self, credential: Credential) -> Self {
		*self.credential.lock_blocking() = Some(credential);

		self
	}

	/// Returns a snapshot of the cached credential, expired or not.
	pub async fn cached_credential(&self) -> Option<Credential> {
		self.credential.lock().await.clone()
	}

	/// Sends `request` with a valid bearer credential injected, delegating the exchange to
	/// the base transport.
	///
	/// The credential is refreshed first when absent or expired; a refresh failure aborts
	/// the call before anything reaches the wire. The caller's request is read, never
	/// mutated: the transport builds a derived copy with its own header map and overrides
	/// `Authorization`, `User-Agent`, and `Content-Type` on that copy only. The base
	/// transport's response or error is returned verbatim.
	pub async fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
		const OP: TransportOp = TransportOp::Send;

		let span = OpSpan::new(OP, "send");

		obs::record_op_outcome(OP, OpOutcome::Attempt);

		let result = span
			.instrument(async move {
				let base = self.base()?;
				let token = self.refresh_credential(base).await?;
				let derived = derive_request(request, &token)?;

				base.round_trip(&derived).await
			})
			.await;

		match &result {
			Ok(_) => obs::record_op_outcome(OP, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(OP, OpOutcome::Failure),
		}

		result
	}

	fn build(signer: Arc<dyn AssertionSigner>, base: Option<Arc<dyn HttpTransport>>) -> Self {
		Self {
			refresh_metrics: Default::default(),
			signer,
			base,
			credential: Arc::new(AsyncMutex::new(None)),
			#[cfg(feature = "reqwest")]
			fallback: Arc::new(OnceLock::new()),
		}
	}

	/// Resolves the transport used for both the token exchange and the delegated send.
	fn base(&self) -> Result<&dyn HttpTransport> {
		if let Some(transport) = &self.base {
			return Ok(transport.as_ref());
		}

		#[cfg(feature = "reqwest")]
		{
			Ok(self.fallback.get_or_init(ReqwestTransport::default))
		}
		#[cfg(not(feature = "reqwest"))]
		{
			Err(ConfigError::MissingTransport.into())
		}
	}

	/// Returns the cached token while it is still valid, otherwise fetches a replacement.
	///
	/// Holding the cache lock across the fetch keeps check-fetch-store atomic per call. A
	/// failed fetch leaves the previous record in place, expired or not, so a transient
	/// signer failure never discards a still-valid token.
	async fn refresh_credential(&self, base: &dyn HttpTransport) -> Result<TokenSecret> {
		const OP: TransportOp = TransportOp::Refresh;

		let mut cached = self.credential.lock().await;

		if let Some(credential) = cached.as_ref().filter(|current| !current.is_expired()) {
			self.refresh_metrics.record_cache_hit();

			return Ok(credential.access_token.clone());
		}

		let span = OpSpan::new(OP, "refresh_credential");

		obs::record_op_outcome(OP, OpOutcome::Attempt);
		self.refresh_metrics.record_attempt();

		match span.instrument(self.signer.fetch_credential(base)).await {
			Ok(fresh) => {
				obs::record_op_outcome(OP, OpOutcome::Success);
				self.refresh_metrics.record_success();

				let token = fresh.access_token.clone();

				*cached = Some(fresh);

				Ok(token)
			},
			Err(e) => {
				obs::record_op_outcome(OP, OpOutcome::Failure);
				self.refresh_metrics.record_failure();

				Err(e)
			},
		}
	}
}
#[cfg(feature = "reqwest")]
impl AuthenticatingTransport {
	/// Creates a decorator that resolves a default reqwest transport at call time.
	pub fn new(signer: Arc<dyn AssertionSigner>) -> Self {
		Self::build(signer, None)
	}
}
impl HttpTransport for AuthenticatingTransport {
	fn round_trip<'a>(&'a self, request: &'a HttpRequest) -> TransportFuture<'a> {
		Box::pin(self.send(request))
	}
}
impl Debug for AuthenticatingTransport {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthenticatingTransport")
			.field("base_configured", &self.base.is_some())
			.field("refresh_metrics", &self.refresh_metrics)
			.finish()
	}
}

/// Builds the request actually sent downstream: an independent copy of `request` whose
/// header map is freshly allocated, with the bearer credential and fixed client headers
/// overriding any caller-supplied values.
fn derive_request(request: &HttpRequest, token: &TokenSecret) -> Result<HttpRequest> {
	let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.expose()))
		.map_err(|e| ConfigError::AuthorizationValue { source: e })?;

	bearer.set_sensitive(true);

	let mut derived = HttpRequest::new(request.body().clone());

	*derived.method_mut() = request.method().clone();
	*derived.uri_mut() = request.uri().clone();
	*derived.version_mut() = request.version();
	*derived.headers_mut() = request.headers().clone();
	*derived.extensions_mut() = request.extensions().clone();

	let headers = derived.headers_mut();

	headers.insert(AUTHORIZATION, bearer);
	headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
	headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

	Ok(derived)
}
