use serde_json::Value;
use std::fs;
use wiremock::{Match, Request};

/// # Panics
///
/// Will panic if a file can't be read or missing
#[must_use = "This function returns the body of the file as a string"]
pub fn body_from_file(path: &str) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}

/// # Panics
///
/// Will panic if the request body is not JSON
#[must_use]
pub fn body_as_json(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("Request body is not JSON")
}

pub struct RpcMethodMatcher(String);

impl RpcMethodMatcher {
    /// Specify the expected RPC method name.
    pub fn new<M: Into<String>>(method: M) -> Self {
        Self(method.into())
    }
}

/// Shorthand for [`RpcMethodMatcher::new`].
pub fn rpc_method<M: Into<String>>(method: M) -> RpcMethodMatcher {
    RpcMethodMatcher::new(method)
}

impl Match for RpcMethodMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body)
            .ok()
            .and_then(|body| body.get("method").cloned())
            .is_some_and(|method| method == self.0.as_str())
    }
}

pub struct ArgumentAbsentMatcher(String);

impl ArgumentAbsentMatcher {
    /// Specify the argument key that must not be sent.
    pub fn new<K: Into<String>>(key: K) -> Self {
        Self(key.into())
    }
}

/// Shorthand for [`ArgumentAbsentMatcher::new`].
pub fn argument_absent<K: Into<String>>(key: K) -> ArgumentAbsentMatcher {
    ArgumentAbsentMatcher::new(key)
}

impl Match for ArgumentAbsentMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<Value>(&request.body).is_ok_and(|body| {
            body.get("arguments")
                .is_none_or(|arguments| arguments.get(&self.0).is_none())
        })
    }
}
