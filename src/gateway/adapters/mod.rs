//! Adapter implementations for the HTTP transport port.

pub mod http;
pub mod scripted;

pub use http::ReqwestTransport;
pub use scripted::{ScriptedReply, ScriptedTransport, route_key};
