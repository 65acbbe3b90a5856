//! Response types for the NeverBounce API.

use serde::Deserialize;

/// Bearer token issued by the OAuth2 client-credentials grant.
///
/// Stored by the client after a successful
/// [`authenticate`](crate::Client::authenticate) call and sent with every
/// verification request. `expires_in` is informational only; the client
/// performs no local expiry tracking or refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    /// The bearer credential itself.
    pub access_token: String,
    /// Lifetime in seconds as reported by the service.
    pub expires_in: u64,
    /// Token type, typically `"bearer"`.
    pub token_type: String,
    /// Granted scope.
    pub scope: String,
}

/// Result of verifying a single email address.
///
/// `valid` follows the service contract: result code `0` means the
/// address verified as deliverable, every other code (invalid,
/// disposable, catch-all, unknown, ...) is "not valid". The raw code is
/// kept alongside for callers that need the finer classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationOutcome {
    /// Whether the service classified the address as valid.
    pub valid: bool,
    /// Raw service result code; `0` is the "valid" sentinel.
    pub result: i64,
}

/// Wire shape of the single-email verification response.
#[derive(Debug, Deserialize)]
pub(crate) struct SingleCheckResponse {
    pub success: bool,
    #[serde(default)]
    pub result: i64,
    #[serde(default)]
    pub result_details: i64,
    #[serde(default)]
    pub execution_time: f64,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_msg: String,
}
