//! Out-of-process launcher host protocol.
//!
//! A launcher that cannot load Rust code in-process spawns `statuslens
//! serve` and talks JSON-RPC 2.0 over its stdio. Each method maps onto
//! one `StatusPlugin` lifecycle call.

/// Stdio server loop and method dispatch.
pub mod server;

/// JSON-RPC 2.0 message types.
pub mod transport;

pub use server::HostServer;
pub use transport::{ErrorCode, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
