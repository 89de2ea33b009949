//! Port contracts for outbound HTTP.

mod transport;

pub use transport::{HttpTransport, OutboundRequest, TransportError, TransportResult};
