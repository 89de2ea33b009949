//! Domain model for outbound API calls.

mod error;
mod request;
mod response;

pub use error::{FailureKind, GENERIC_FAILURE_MESSAGE, GatewayError, GatewayResult, RequestFailure};
pub use request::{ApiRequest, HttpMethod};
pub use response::ApiResponse;
