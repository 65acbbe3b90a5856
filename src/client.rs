//! NeverBounce async client implementation.

use crate::models::SingleCheckResponse;
use crate::{Error, Result, Token, VerificationOutcome};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Async client for the NeverBounce email verification API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom
/// settings like a request timeout or an alternate base URL.
///
/// The client starts without a token; call [`Client::authenticate`] once
/// before verifying addresses. The stored token is only ever written by
/// `authenticate`, so concurrent use requires external synchronization or
/// one client per task.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    username: String,
    api_key: String,
    token: Option<Token>,
    base_url: String,
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a new NeverBounce client with default settings.
    ///
    /// Credentials are stored verbatim and not validated until
    /// [`Client::authenticate`] is called. No network request is made.
    ///
    /// # Examples
    /// ```no_run
    /// # use neverbounce_client::Client;
    /// # fn main() -> Result<(), neverbounce_client::Error> {
    /// let client = Client::new("api-username", "secret-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().build(username, api_key)
    }

    /// Get the stored access token, if authenticated.
    ///
    /// Returns `None` until [`Client::authenticate`] has succeeded.
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Obtain an access token via the OAuth2 client-credentials grant.
    ///
    /// Issues a form-encoded POST to the token endpoint with HTTP Basic
    /// authentication. On success the decoded [`Token`] replaces any
    /// previously stored one; on failure the stored token is left
    /// untouched.
    ///
    /// # Errors
    /// * [`Error::MissingCredentials`] if the username or key is empty;
    ///   no request is issued.
    /// * [`Error::Authentication`] on a non-200 status, carrying the
    ///   status and raw body.
    /// * [`Error::Transport`], [`Error::EmptyBody`], [`Error::Decode`]
    ///   for transport and protocol failures.
    ///
    /// # Examples
    /// ```no_run
    /// # use neverbounce_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), neverbounce_client::Error> {
    /// let mut client = Client::new("api-username", "secret-key")?;
    /// client.authenticate().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn authenticate(&mut self) -> Result<()> {
        if self.username.is_empty() || self.api_key.is_empty() {
            return Err(Error::MissingCredentials);
        }

        let url = format!("{}{}", self.base_url, TOKEN_PATH);
        let form = [("grant_type", "client_credentials")];

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.username, Some(&self.api_key))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Authentication { status, body });
        }

        let token: Token = Self::decode_body(response).await?;
        info!(
            token_type = %token.token_type,
            scope = %token.scope,
            expires_in = token.expires_in,
            "successfully authenticated with NeverBounce"
        );
        self.token = Some(token);

        Ok(())
    }

    /// Verify a single email address.
    ///
    /// Sends the stored access token and the address as a form-encoded
    /// POST to the single-verification endpoint. The address is forwarded
    /// as-is; no local format checks are performed.
    ///
    /// # Returns
    /// A [`VerificationOutcome`] with the boolean verdict and the raw
    /// service result code (`0` means valid).
    ///
    /// # Errors
    /// * [`Error::NotAuthenticated`] if no token is stored; no request is
    ///   issued.
    /// * [`Error::Service`] if the service reports `success == false`,
    ///   e.g. for an expired token.
    /// * [`Error::Transport`], [`Error::EmptyBody`], [`Error::Decode`]
    ///   for transport and protocol failures.
    ///
    /// # Examples
    /// ```no_run
    /// # use neverbounce_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), neverbounce_client::Error> {
    /// let mut client = Client::new("api-username", "secret-key")?;
    /// client.authenticate().await?;
    /// let outcome = client.check_email("someone@example.com").await?;
    /// println!("valid: {}, code: {}", outcome.valid, outcome.result);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check_email(&self, address: &str) -> Result<VerificationOutcome> {
        let token = self.token.as_ref().ok_or(Error::NotAuthenticated)?;

        let url = format!("{}{}", self.base_url, SINGLE_PATH);
        let form = [
            ("access_token", token.access_token.as_str()),
            ("email", address),
        ];

        let response = self.http.post(&url).form(&form).send().await?;
        let check: SingleCheckResponse = Self::decode_body(response).await?;
        debug!(
            success = check.success,
            result = check.result,
            result_details = check.result_details,
            execution_time = check.execution_time,
            "verification response received"
        );

        if !check.success {
            return Err(Error::Service {
                code: check.error_code,
                message: check.error_msg,
            });
        }

        Ok(VerificationOutcome {
            valid: check.result == 0,
            result: check.result,
        })
    }

    /// Verify a single email address, reduced to a boolean.
    ///
    /// Convenience wrapper over [`Client::check_email`]: `true` for
    /// result code `0`, `false` for every other code. Callers that need
    /// to distinguish invalid from disposable or unknown should use
    /// `check_email` instead.
    ///
    /// # Examples
    /// ```no_run
    /// # use neverbounce_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), neverbounce_client::Error> {
    /// let mut client = Client::new("api-username", "secret-key")?;
    /// client.authenticate().await?;
    /// if client.validate_email("someone@example.com").await? {
    ///     println!("deliverable");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn validate_email(&self, address: &str) -> Result<bool> {
        Ok(self.check_email(address).await?.valid)
    }

    /// Read the response body and decode it, distinguishing an empty body
    /// from a malformed one.
    async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(Error::EmptyBody);
        }
        serde_json::from_str(&body).map_err(Error::Decode)
    }
}

const BASE_URL: &str = "https://api.neverbounce.com/v3";
const TOKEN_PATH: &str = "/access_token";
const SINGLE_PATH: &str = "/single";
const USER_AGENT_VALUE: &str = concat!("neverbounce-client/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a NeverBounce client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Production API base URL
    /// - `neverbounce-client/<version>` user agent
    /// - No request timeout
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
        }
    }

    /// Override the API base URL.
    ///
    /// Useful for testing against a local mock server. A trailing slash
    /// is trimmed so endpoint paths join cleanly.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a timeout applied to each request.
    ///
    /// The client itself never cancels or retries; this is plain reqwest
    /// timeout configuration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client with the given credentials.
    ///
    /// Stores the credentials verbatim and performs no network request;
    /// authentication happens on the first
    /// [`authenticate`](Client::authenticate) call.
    ///
    /// # Examples
    /// ```no_run
    /// # use neverbounce_client::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), neverbounce_client::Error> {
    /// let client = Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build("api-username", "secret-key")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self, username: impl Into<String>, api_key: impl Into<String>) -> Result<Client> {
        let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build()?;

        Ok(Client {
            http,
            username: username.into(),
            api_key: api_key.into(),
            token: None,
            base_url: self.base_url,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
