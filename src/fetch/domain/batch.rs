//! Named batch members and their collected results.

use crate::gateway::domain::{ApiRequest, GatewayResult, RequestFailure};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// One named member of a fetch batch.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRequest {
    name: String,
    request: ApiRequest,
}

impl NamedRequest {
    /// Creates a named request.
    #[must_use]
    pub fn new(name: impl Into<String>, request: ApiRequest) -> Self {
        Self {
            name: name.into(),
            request,
        }
    }

    /// Creates a named `GET` request.
    #[must_use]
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, ApiRequest::get(path))
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the request.
    #[must_use]
    pub const fn request(&self) -> &ApiRequest {
        &self.request
    }

    /// Splits into name and request.
    #[must_use]
    pub fn into_parts(self) -> (String, ApiRequest) {
        (self.name, self.request)
    }
}

/// Settled results of a batch, indexed by member name.
///
/// Arrival order is not recorded; callers look results up by name.
#[derive(Debug, Clone, Default)]
pub struct BatchResults {
    results: BTreeMap<String, GatewayResult<Value>>,
}

impl BatchResults {
    /// Returns the raw result for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GatewayResult<Value>> {
        self.results.get(name)
    }

    /// Removes the result for `name` and decodes a success into `T`.
    ///
    /// Returns `None` when the batch had no member called `name`. A body that
    /// does not decode becomes a request failure.
    #[must_use]
    pub fn take<T: DeserializeOwned>(&mut self, name: &str) -> Option<GatewayResult<T>> {
        self.results.remove(name).map(|result| {
            result.and_then(|body| {
                serde_json::from_value(body).map_err(|err| RequestFailure::decode(err).into())
            })
        })
    }

    /// Returns the number of members that succeeded.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.results.values().filter(|result| result.is_ok()).count()
    }

    /// Returns the number of members that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.results.values().filter(|result| result.is_err()).count()
    }

    /// Returns the number of settled members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` when the batch was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the member names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.keys().map(String::as_str)
    }
}

impl FromIterator<(String, GatewayResult<Value>)> for BatchResults {
    fn from_iter<I: IntoIterator<Item = (String, GatewayResult<Value>)>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
