//! Base types and error handling.
//!
//! Provides the crate-wide error type:
//! - [`error::BridgeError`]: typed bridge failures with stable wire codes

pub mod error;
