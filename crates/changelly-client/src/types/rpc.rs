/*
[INPUT]:  JSON-RPC 2.0 request parts and raw response bytes
[OUTPUT]: Request envelope and the success/failure response union
[POS]:    Data layer - JSON-RPC framing shared by every call
[UPDATE]: When the envelope format or error shape changes
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{ChangellyError, Result};

pub const JSONRPC_VERSION: &str = "2.0";

/// Outbound JSON-RPC envelope. Field order is the serialized order.
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, P: ?Sized> {
    pub jsonrpc: &'static str,
    pub id: &'a str,
    pub method: &'a str,
    pub params: &'a P,
}

impl<'a, P: Serialize + ?Sized> RpcRequest<'a, P> {
    pub fn new(id: &'a str, method: &'a str, params: &'a P) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Successful call: `result` already mapped into the caller's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcSuccess<T> {
    pub jsonrpc: String,
    pub id: Value,
    pub result: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error member of a failed call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcFailure {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

/// A response envelope decided once: either the service answered with a
/// result, or it answered with an `error` member.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcResponse<T> {
    Success(RpcSuccess<T>),
    Failure(RpcFailure),
}

impl<T> RpcResponse<T> {
    /// Turn a failure into [`ChangellyError::Upstream`].
    pub fn into_result(self) -> Result<RpcSuccess<T>> {
        match self {
            RpcResponse::Success(success) => Ok(success),
            RpcResponse::Failure(failure) => Err(ChangellyError::Upstream {
                code: failure.code,
                message: failure.message,
            }),
        }
    }
}

/// Response body as it comes off the wire, before discrimination.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRpcResponse {
    #[serde(default)]
    jsonrpc: Option<String>,
    #[serde(default)]
    id: Value,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

impl RawRpcResponse {
    pub(crate) fn from_slice(body: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// An `error` member takes precedence over whatever `result` holds.
    pub(crate) fn into_response<T: DeserializeOwned>(self) -> Result<RpcResponse<T>> {
        if let Some(error) = self.error {
            return parse_rpc_error(error).map(RpcResponse::Failure);
        }

        let result = self.result.ok_or_else(|| {
            ChangellyError::MalformedResponse(
                "response carries neither `result` nor `error`".to_string(),
            )
        })?;

        Ok(RpcResponse::Success(RpcSuccess {
            jsonrpc: self.jsonrpc.unwrap_or_else(|| JSONRPC_VERSION.to_string()),
            id: self.id,
            result: serde_json::from_value(result)?,
            message: self.message,
        }))
    }
}

/// Accepts `{"code", "message"}` and bare-string error members.
fn parse_rpc_error(error: Value) -> Result<RpcFailure> {
    match error {
        Value::String(message) => Ok(RpcFailure { code: 0, message }),
        Value::Object(_) => serde_json::from_value::<RpcFailure>(error.clone()).map_err(|_| {
            ChangellyError::MalformedResponse(format!("non-standard JSON-RPC error: {error}"))
        }),
        other => Err(ChangellyError::MalformedResponse(format!(
            "non-standard JSON-RPC error: {other}"
        ))),
    }
}
