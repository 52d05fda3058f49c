//! Chainauth Telemetry - logging setup for chainauth binaries.
//!
//! # Example
//!
//! ```rust,no_run
//! use chainauth_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), chainauth_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Compact)
//!     .with_directive("chainauth_audit=debug");
//!
//! setup_logging(&config)?;
//! tracing::info!("ledger ready");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{LogConfig, LogFormat, LogTarget, setup_default_logging, setup_logging};
