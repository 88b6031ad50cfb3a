/*
[INPUT]:  Credentials, client configuration, RPC method names and params
[OUTPUT]: Signed JSON-RPC calls and decoded success envelopes
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::http::id::{IdGenerator, UuidV4Generator};
use crate::http::signature::RequestSigner;
use crate::http::{ChangellyError, Result};
use crate::types::RpcRequest;
use crate::types::rpc::{RawRpcResponse, RpcResponse, RpcSuccess};

/// Production endpoint of the Changelly API
pub const DEFAULT_HOST: &str = "https://api.changelly.com";

const API_KEY_HEADER: &str = "api-key";
const SIGN_HEADER: &str = "sign";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    /// Whole-request deadline handed to the transport; none by default.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

/// API key pair issued by Changelly
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    /// Both parts are required; blank values are rejected.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let credentials = Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ChangellyError::Config("API key is required".to_string()));
        }
        if self.api_secret.trim().is_empty() {
            return Err(ChangellyError::Config("API secret is required".to_string()));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main client for the Changelly JSON-RPC API.
///
/// Holds no per-call state; share one instance (or an `Arc` of it) across
/// tasks.
pub struct ChangellyClient {
    http_client: Client,
    host: Url,
    api_key: HeaderValue,
    signer: RequestSigner,
    id_generator: Arc<dyn IdGenerator>,
}

impl fmt::Debug for ChangellyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangellyClient")
            .field("host", &self.host.as_str())
            .field("signer", &self.signer)
            .finish_non_exhaustive()
    }
}

impl ChangellyClient {
    /// Create a new client against the production host
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(Credentials::new(api_key, api_secret)?, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder.build()?;

        Self::with_http_client(credentials, config, http_client)
    }

    /// Create a client on top of an existing reqwest client.
    ///
    /// Timeouts in `config` are ignored here; they belong to `http_client`.
    pub fn with_http_client(
        credentials: Credentials,
        config: ClientConfig,
        http_client: Client,
    ) -> Result<Self> {
        credentials.validate()?;

        let host = Url::parse(&config.host)?;
        let mut api_key = HeaderValue::from_str(&credentials.api_key)
            .map_err(|err| ChangellyError::Config(format!("API key is not a valid header: {err}")))?;
        api_key.set_sensitive(true);
        let signer = RequestSigner::new(credentials.api_secret.as_bytes())?;

        Ok(Self {
            http_client,
            host,
            api_key,
            signer,
            id_generator: Arc::new(UuidV4Generator),
        })
    }

    /// Replace the request id source
    pub fn with_id_generator(mut self, generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Arc::new(generator);
        self
    }

    /// Base URL every call is posted to
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Send a signed JSON-RPC call and decode its `result` as `T`.
    ///
    /// The envelope is serialized once; those exact bytes are signed and sent.
    /// A response carrying an `error` member fails with
    /// [`ChangellyError::Upstream`]; nothing is retried.
    pub async fn send_request<P, T>(&self, method: &str, params: &P) -> Result<RpcSuccess<T>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(method, params).await?.into_result()
    }

    async fn call<P, T>(&self, method: &str, params: &P) -> Result<RpcResponse<T>>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let id = self.id_generator.next_id();
        let body = serde_json::to_string(&RpcRequest::new(&id, method, params))?;
        let signature = self.signer.sign(body.as_bytes());

        debug!(method, id = %id, "sending rpc request");
        trace!(method, id = %id, body = %body, "rpc request body");

        let response = self
            .http_client
            .post(self.host.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(API_KEY_HEADER, self.api_key.clone())
            .header(SIGN_HEADER, signature)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(method, id = %id, status = status.as_u16(), "received rpc response");

        let raw = match RawRpcResponse::from_slice(&bytes) {
            Ok(raw) => raw,
            Err(err) if !status.is_success() => {
                debug!(method, error = %err, "non-json error body");
                return Err(ChangellyError::unexpected_status(status, &bytes));
            }
            Err(err) => {
                return Err(ChangellyError::MalformedResponse(format!(
                    "body is not a JSON-RPC response: {err}"
                )));
            }
        };

        let response = raw.into_response()?;
        if let RpcResponse::Failure(failure) = &response {
            warn!(method, id = %id, code = failure.code, message = %failure.message, "rpc call rejected");
        }
        Ok(response)
    }
}
