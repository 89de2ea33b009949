//! Gateway policy service.

mod gateway;

pub use gateway::AuthenticatedGateway;
