//! # NeverBounce Client
//! Asynchronous wrapper around the NeverBounce email verification HTTP API, providing a [`Client`] that authenticates with OAuth2 client credentials and checks single addresses for deliverability.
//!
//! ## Audience and uses
//! For Rust developers who need to verify email addresses at signup, before a send, or while cleaning a list: configure with [`ClientBuilder`], call [`Client::authenticate`] once, then check addresses with [`Client::validate_email`] or [`Client::check_email`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`, so ensure the chosen Tokio features (`rt-multi-thread` or `current_thread`) are available in your application.
//!
//! ## Out of scope
//! Not a bulk/batch verifier and not a token manager: there is no list endpoint support, no token refresh or expiry tracking, and no retry logic. Authentication happens when you ask for it; if the token expires server-side, the next check surfaces the service's error and you re-authenticate.
//!
//! ## Errors
//! Misconfiguration and missing authentication fail fast as [`Error::MissingCredentials`] and [`Error::NotAuthenticated`] without touching the network. Network calls surface transport failures as [`Error::Transport`]; shape or content issues become [`Error::EmptyBody`] or [`Error::Decode`]; an explicit service-side failure is [`Error::Service`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use neverbounce_client::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), neverbounce_client::Error> {
//!     let mut client = Client::new("api-username", "secret-key")?;
//!     client.authenticate().await?;
//!
//!     let outcome = client.check_email("someone@example.com").await?;
//!     println!("valid: {} (result code {})", outcome.valid, outcome.result);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::{Token, VerificationOutcome};

/// Result type alias for NeverBounce operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
