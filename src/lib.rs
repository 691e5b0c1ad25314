//! Ergonomic Rust client for the Datadog API
//!
//! This crate provides a user-friendly interface to the Datadog service level
//! objective, SLO correction, usage metering and synthetics endpoints, using
//! builder patterns powered by the `bon` crate.
//!
//! Responses decode into [`Decoded<T>`]: the typed model when the payload
//! fits it, or the raw JSON when it doesn't (for instance an enum value this
//! version does not know yet). Unknown keys are kept on every model.
//!
//! ```no_run
//! # async fn run() -> datadog_ergonomic::Result<()> {
//! use datadog_ergonomic::{DatadogClient, Decoded};
//!
//! let client = DatadogClient::from_env()?;
//! let slos = client
//!     .service_level_objectives()
//!     .list_slos()
//!     .limit(10)
//!     .call()
//!     .await?;
//! if let Some(list) = slos.typed() {
//!     for slo in list.data.iter().flatten().filter_map(Decoded::typed) {
//!         println!("{}", slo.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod apis;
pub mod client;
pub mod configuration;
pub mod error;
pub mod models;
mod request;
pub mod security;
pub mod unparsed;

pub use client::DatadogClient;
pub use error::{Error, ErrorKind, ErrorModel, ResponseError, Result};
pub use security::SecretString;
pub use unparsed::{Decoded, Model, UnparsedObject};
