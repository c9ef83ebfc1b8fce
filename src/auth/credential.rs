//! Cached bearer-credential record and its expiry predicates.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Immutable access credential held by the transport.
///
/// A credential is produced by an assertion signer and replaced wholesale on refresh;
/// nothing mutates an existing record in place.
#[derive(Clone)]
pub struct Credential {
	/// Access token secret; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Instant at which the token stops being usable.
	pub expires_at: OffsetDateTime,
}
impl Credential {
	/// Creates a credential from a raw token and an absolute expiry instant.
	pub fn new(access_token: impl Into<String>, expires_at: OffsetDateTime) -> Self {
		Self { access_token: TokenSecret::new(access_token), expires_at }
	}

	/// Creates a credential that expires `ttl` after the current instant.
	pub fn with_ttl(access_token: impl Into<String>, ttl: Duration) -> Self {
		Self::new(access_token, OffsetDateTime::now_utc() + ttl)
	}

	/// Returns `true` if the credential is expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Returns `true` if the credential is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for Credential {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credential")
			.field("access_token", &"<redacted>")
			.field("expires_at", &self.expires_at)
			.finish()
	}
}
