//! Credential model shared by the transport and assertion signers.

mod credential;
mod secret;

pub use credential::*;
pub use secret::*;
