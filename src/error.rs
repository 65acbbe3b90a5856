//! Error types for NeverBounce API operations.

use reqwest::StatusCode;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// Each variant is a distinct failure category so callers can branch on
/// kind instead of parsing message text: configuration problems surface
/// before any request is made, transport and protocol problems describe
/// the exchange itself, and [`Error::Service`] means the service answered
/// but explicitly reported a failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client was constructed with an empty username or API key.
    ///
    /// Raised by [`Client::authenticate`](crate::Client::authenticate)
    /// before any network call.
    #[error("missing API username and/or API key")]
    MissingCredentials,

    /// A verification was attempted before a successful authentication.
    ///
    /// No request is issued; call
    /// [`Client::authenticate`](crate::Client::authenticate) first.
    #[error("not authenticated: authenticate() must be called before making API requests")]
    NotAuthenticated,

    /// The request could not be carried out at the transport level
    /// (connection refused, DNS failure, timeout).
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint answered with a non-200 status.
    ///
    /// Carries the status and the raw response body (possibly empty) for
    /// diagnostics.
    #[error("authentication rejected with status {status}: {body}")]
    Authentication {
        /// HTTP status returned by the token endpoint.
        status: StatusCode,
        /// Raw response body text, empty if none was sent.
        body: String,
    },

    /// The service answered 200 but sent no body to decode.
    #[error("no body received in response")]
    EmptyBody,

    /// The response body was present but did not match the expected JSON
    /// shape.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),

    /// The verification service processed the request but reported a
    /// failure (`success == false`), e.g. an expired token or exhausted
    /// credit.
    #[error("verification service error {code}: {message}")]
    Service {
        /// Service `error_code` field.
        code: i64,
        /// Service `error_msg` field.
        message: String,
    },
}
