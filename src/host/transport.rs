//! JSON-RPC 2.0 message types exchanged with the launcher host.
//!
//! One message per line in each direction over stdio.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::StatusLensError;

/// Value of the `jsonrpc` member on every outgoing message.
pub const JSONRPC_VERSION: &str = "2.0";

/// A request or notification from the launcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version sent by the launcher; expected to be `"2.0"`.
    pub jsonrpc: String,
    /// Correlates the response with this request. Null or absent for
    /// notifications.
    #[serde(default)]
    pub id: Value,
    /// Plugin operation to invoke, e.g. `query` or `settings/update`.
    pub method: String,
    /// Method arguments, usually an object.
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Notifications carry no id and never get a response.
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }

    /// Returns the params object, or an empty object when absent.
    pub fn params_or_empty(&self) -> Value {
        self.params
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default()))
    }
}

/// The reply to a request. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Always `"2.0"`.
    pub jsonrpc: String,
    /// Copied from the request being answered; null if it could not be parsed.
    pub id: Value,
    /// Method output on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Failure details; omitted on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Builds a reply carrying `result`.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Builds a reply carrying an error with the given code and message.
    pub fn error(id: Value, code: ErrorCode, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: code.as_i32(),
                message,
                data: None,
            }),
        }
    }

    /// Maps a handler failure onto the closest JSON-RPC error code.
    pub fn from_error(id: Value, err: &StatusLensError) -> Self {
        let code = match err {
            StatusLensError::Protocol { .. } | StatusLensError::Json(_) => ErrorCode::InvalidParams,
            _ => ErrorCode::InternalError,
        };
        Self::error(id, code, err.to_string())
    }
}

/// The `error` member of a failed response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// One of the `ErrorCode` values.
    pub code: i32,
    /// Description suitable for the launcher's log.
    pub message: String,
    /// Extra structured detail; never set by this server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Error codes reserved by JSON-RPC 2.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The line was not valid JSON or not a request object.
    ParseError,
    /// The JSON was not a well-formed request.
    InvalidRequest,
    /// The plugin has no such method.
    MethodNotFound,
    /// Params were missing or had the wrong shape.
    InvalidParams,
    /// The plugin failed while handling a valid request.
    InternalError,
}

impl ErrorCode {
    /// Returns the numeric code sent on the wire.
    pub fn as_i32(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }
}
