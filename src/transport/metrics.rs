// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing credential-cache behavior.
///
/// The counters make the cache observable without exposing token material: a growing
/// `cache_hits` with zero `attempts` means the cached credential is still valid, while
/// `failures` with a nonzero `successes` history flags an expired-but-present record
/// that could not be replaced.
#[derive(Debug, Default)]
pub struct RefreshMetrics {
	cache_hits: AtomicU64,
	attempts: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
}
impl RefreshMetrics {
	/// Returns the number of sends that reused a cached, unexpired credential.
	pub fn cache_hits(&self) -> u64 {
		self.cache_hits.load(Ordering::Relaxed)
	}

	/// Returns the total number of refresh attempts against the assertion signer.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of refreshes that stored a fresh credential.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns the number of refreshes that failed and left the cache untouched.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}

	pub(crate) fn record_cache_hit(&self) {
		self.cache_hits.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_success(&self) {
		self.success.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_failure(&self) {
		self.failure.fetch_add(1, Ordering::Relaxed);
	}
}
