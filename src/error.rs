//! Error types shared across the transport, signer, and default HTTP stack.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Assertion signing or token-exchange failure; no request was sent.
	#[error(transparent)]
	CredentialFetch(#[from] CredentialFetchError),
	/// Base-transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// No base transport was configured and no default transport is available.
	#[error("No base transport is configured.")]
	MissingTransport,
	/// Access token cannot be encoded as an `Authorization` header value.
	#[error("Access token is not a valid header value.")]
	AuthorizationValue {
		/// Underlying header encoding failure.
		#[source]
		source: http::header::InvalidHeaderValue,
	},
	/// Request URI was rejected by the URL parser.
	#[cfg(feature = "reqwest")]
	#[error("Request URI is invalid.")]
	InvalidUri {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Failures raised while fetching a fresh credential from the assertion signer.
#[derive(Debug, ThisError)]
pub enum CredentialFetchError {
	/// Assertion could not be signed before the exchange.
	#[error("Assertion could not be signed.")]
	Signing {
		/// Signer-specific failure.
		#[source]
		source: BoxError,
	},
	/// Token endpoint rejected the assertion exchange.
	#[error("Token endpoint rejected the exchange: {message}.")]
	Exchange {
		/// Signer- or endpoint-supplied reason string.
		message: String,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Network failure while reaching the token endpoint.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl CredentialFetchError {
	/// Wraps a signer's assertion-signing failure.
	pub fn signing(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Signing { source: Box::new(src) }
	}

	/// Wraps a transport-specific failure raised during the exchange.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while sending the request.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while sending the request.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
