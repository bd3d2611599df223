//! Thin async client for the [ASCOM Alpaca](https://ascom-standards.org/api/) device REST API.
//!
//! Each device call becomes one HTTP request to
//! `{base_url}/api/v{n}/{device_type}/{device_number}/{method}`:
//! property reads are `GET`s with a query string, commands and setters are `PUT`s
//! with a form body. The JSON envelope of the response is unwrapped into either the
//! `Value` or an [`AlpacaError`].
//!
//! ```no_run
//! use alpaca_client::Client;
//! use alpaca_client::api::Telescope;
//!
//! # async fn run() -> eyre::Result<()> {
//! let client = Client::new("http://localhost:11111/")?;
//! let telescope = client.telescope(0);
//!
//! telescope.set_connected(true).await?;
//! println!("Site latitude: {}", telescope.site_latitude().await?);
//! telescope.set_site_latitude(-30.5).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Device errors (non-zero `ErrorNumber`) and connection-level failures are kept
//! apart, see [`AlpacaError::is_device`] and [`AlpacaError::is_connection`].

#![warn(
    clippy::pedantic,
    clippy::nursery,
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::default_numeric_fallback,
    clippy::format_push_string,
    clippy::if_then_some_else_none,
    clippy::map_err_ignore,
    clippy::panic_in_result_fn,
    clippy::single_char_lifetime_names,
    clippy::str_to_string,
    clippy::unwrap_used,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    meta_variable_misuse,
    missing_copy_implementations,
    missing_debug_implementations,
    noop_method_call,
    single_use_lifetimes,
    unreachable_pub,
    unused_lifetimes,
    unused_macro_rules,
    unused_qualifications,
    unused_results
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::redundant_pub_crate,
    clippy::single_match_else
)]

#[macro_use]
mod macros;

pub mod api;
mod client;
mod errors;
mod params;
mod response;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{AlpacaTime, DeviceType, TypedDevice};
pub use client::{Client, Endpoint};
pub use errors::{ASCOMError, ASCOMErrorCode, AlpacaError, AlpacaResult};
