//! Optional observability helpers for the transport.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `gitkit_transport.op` with the `op` and
//!   `stage` fields.
//! - Enable `metrics` to increment the `gitkit_transport_op_total` counter for every
//!   attempt/success/failure, labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Transport operations observed by the decorator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransportOp {
	/// Credential refresh against the assertion signer.
	Refresh,
	/// Authenticated request delegation to the base transport.
	Send,
}
impl TransportOp {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			TransportOp::Refresh => "refresh",
			TransportOp::Send => "send",
		}
	}
}
impl Display for TransportOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpOutcome {
	/// Entry to a transport operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OpOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OpOutcome::Attempt => "attempt",
			OpOutcome::Success => "success",
			OpOutcome::Failure => "failure",
		}
	}
}
impl Display for OpOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
