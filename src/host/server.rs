//! Stdio server that lets an out-of-process launcher drive the plugin.
//!
//! Reads one JSON-RPC request per line from stdin and writes one response
//! per line to stdout. Logging goes to stderr so stdout carries only
//! protocol traffic.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, warn};

use crate::errors::{Result, StatusLensError};
use crate::plugin::{PluginContext, SettingOption, StatusPlugin};
use crate::types::{Query, Theme};

use super::transport::{ErrorCode, JsonRpcRequest, JsonRpcResponse};

/// Counters reported by `ping`.
#[derive(Default)]
struct ServerStats {
    total_requests: AtomicU64,
    queries: AtomicU64,
    errors: AtomicU64,
}

#[derive(Deserialize)]
struct ActivateParams {
    target_url: String,
}

#[derive(Deserialize)]
struct SettingsParams {
    #[serde(default)]
    options: Vec<SettingOption>,
}

#[derive(Deserialize)]
struct ThemeParams {
    theme: Theme,
}

/// The host server wrapping a `StatusPlugin`.
pub struct HostServer {
    plugin: StatusPlugin,
    stats: ServerStats,
}

impl HostServer {
    pub fn new(plugin: StatusPlugin) -> Self {
        Self {
            plugin,
            stats: ServerStats::default(),
        }
    }

    pub fn plugin(&self) -> &StatusPlugin {
        &self.plugin
    }

    /// Serves stdin/stdout until stdin closes or `dispose` is received.
    pub async fn run(&mut self) -> Result<()> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await
    }

    /// Serves requests from `reader`, writing responses to `writer`.
    pub async fn serve<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                Ok(request) => self.handle_request(&request),
                Err(e) => Some(JsonRpcResponse::error(
                    Value::Null,
                    ErrorCode::ParseError,
                    format!("failed to parse JSON-RPC request: {}", e),
                )),
            };

            if let Some(resp) = response {
                let json_line = match serde_json::to_string(&resp) {
                    Ok(s) => s,
                    Err(e) => {
                        error!("failed to serialize response: {}", e);
                        continue;
                    }
                };
                writer.write_all(json_line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }

            if self.plugin.is_disposed() {
                debug!("plugin disposed, stopping host server");
                break;
            }
        }

        Ok(())
    }

    /// Dispatches one request. Returns `None` for notifications.
    pub fn handle_request(&mut self, request: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        self.stats.total_requests.fetch_add(1, Ordering::Relaxed);
        let id = request.id.clone();

        let outcome = match request.method.as_str() {
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "initialize" => self.handle_initialize(request),
            "query" => self.handle_query(request),
            "activate" => self.handle_activate(request),
            "settings/update" => self.handle_settings_update(request),
            "theme/changed" => self.handle_theme_changed(request),
            "dispose" => {
                self.plugin.dispose();
                Ok(json!({}))
            }
            "ping" => Ok(self.stats_json()),
            _ => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                if request.is_notification() {
                    warn!("ignoring unknown notification '{}'", request.method);
                    return None;
                }
                return Some(JsonRpcResponse::error(
                    id,
                    ErrorCode::MethodNotFound,
                    format!("method not found: {}", request.method),
                ));
            }
        };

        if request.is_notification() {
            if let Err(e) = outcome {
                warn!("notification '{}' failed: {}", request.method, e);
            }
            return None;
        }

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                self.stats.errors.fetch_add(1, Ordering::Relaxed);
                JsonRpcResponse::from_error(id, &e)
            }
        })
    }

    fn handle_initialize(&mut self, request: &JsonRpcRequest) -> Result<Value> {
        let context: PluginContext = serde_json::from_value(request.params_or_empty())?;
        let metadata = self.plugin.initialize(&context)?;
        Ok(serde_json::to_value(metadata)?)
    }

    fn handle_query(&mut self, request: &JsonRpcRequest) -> Result<Value> {
        self.stats.queries.fetch_add(1, Ordering::Relaxed);
        let params = request.params_or_empty();
        if params.get("search").and_then(|v| v.as_str()).is_none() {
            return Err(StatusLensError::Protocol {
                message: "missing required parameter: search".to_string(),
            });
        }
        let query: Query = serde_json::from_value(params)?;
        let results = self.plugin.query(&query);
        Ok(json!({ "results": results }))
    }

    fn handle_activate(&mut self, request: &JsonRpcRequest) -> Result<Value> {
        let params: ActivateParams =
            serde_json::from_value(request.params_or_empty()).map_err(|e| {
                StatusLensError::Protocol {
                    message: format!("invalid activate params: {}", e),
                }
            })?;
        let success = self.plugin.open_url(&params.target_url);
        Ok(json!({ "success": success }))
    }

    fn handle_settings_update(&mut self, request: &JsonRpcRequest) -> Result<Value> {
        let params: SettingsParams = serde_json::from_value(request.params_or_empty())?;
        self.plugin.update_settings(&params.options)?;
        Ok(json!({ "reference_type": self.plugin.settings().reference_type }))
    }

    fn handle_theme_changed(&mut self, request: &JsonRpcRequest) -> Result<Value> {
        let params: ThemeParams = serde_json::from_value(request.params_or_empty())?;
        self.plugin.on_theme_changed(params.theme);
        Ok(json!({ "icon_path": self.plugin.icon_path() }))
    }

    /// Returns the request counters as JSON.
    pub fn stats_json(&self) -> Value {
        json!({
            "total_requests": self.stats.total_requests.load(Ordering::Relaxed),
            "queries": self.stats.queries.load(Ordering::Relaxed),
            "errors": self.stats.errors.load(Ordering::Relaxed),
        })
    }
}
