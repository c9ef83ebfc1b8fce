//! Authenticating transport for the Identity Toolkit HTTP API: caches a service-account bearer
//! credential, refreshes it when absent or expired, and injects it into every outbound request.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod http;
pub mod obs;
pub mod signer;
pub mod transport;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	#[cfg(feature = "reqwest")] pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
#[cfg(test)] use {httpmock as _, parking_lot as _};
