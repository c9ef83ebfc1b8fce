//! Assertion-signing contract the transport consumes to mint fresh credentials.

// self
use crate::{_prelude::*, auth::Credential, http::HttpTransport};

/// Boxed future returned by [`AssertionSigner::fetch_credential`].
pub type SignerFuture<'a> = Pin<Box<dyn Future<Output = Result<Credential>> + 'a + Send>>;

/// Produces a fresh access credential by signing a service-account assertion and exchanging
/// it at the token endpoint.
///
/// The trait is the transport's only dependency on assertion mechanics. Implementations
/// receive the same [`HttpTransport`] the decorator resolved for API traffic, so the token
/// exchange rides the caller-configured stack instead of opening a second one. Failures
/// should surface as [`crate::error::CredentialFetchError`] variants; the decorator
/// propagates them untouched and never sends the pending request.
pub trait AssertionSigner
where
	Self: Send + Sync,
{
	/// Signs the assertion, performs the exchange over `http`, and resolves to the minted
	/// credential with its expiry.
	fn fetch_credential<'a>(&'a self, http: &'a dyn HttpTransport) -> SignerFuture<'a>;
}
