//! Method channel wire surface.
//!
//! Requests arrive as a method name plus a JSON argument; replies are either
//! a JSON result or a coded error envelope. Dispatch goes through a closed
//! [`Method`] set with an explicit error branch: an unknown method name gets
//! a typed error reply instead of being silently dropped, so callers never
//! hang on their own timeout.

use std::sync::Arc;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::base::error::BridgeError;
use crate::bridge::CookieBridge;
use crate::cookies::store::CookieStore;

/// Channel name the cookie bridge registers on at bootstrap.
pub const DEFAULT_CHANNEL: &str = "app/native";

/// The closed set of methods the cookie bridge understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// `"getCookies"`: argument is a URL string, reply is a string map.
    GetCookies,
}

impl Method {
    /// Map a wire method name onto the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "getCookies" => Some(Method::GetCookies),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::GetCookies => "getCookies",
        }
    }
}

/// An incoming channel request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Value) -> Self {
        Self { method: method.into(), arguments }
    }
}

/// A handler bound to one channel name.
pub trait MethodHandler: Send + Sync {
    fn handle(&self, call: &MethodCall) -> Result<Value, BridgeError>;
}

impl MethodHandler for CookieBridge {
    fn handle(&self, call: &MethodCall) -> Result<Value, BridgeError> {
        match Method::from_name(&call.method) {
            Some(Method::GetCookies) => {
                let url = call.arguments.as_str().ok_or_else(|| {
                    BridgeError::invalid_arguments(&call.method, "expected a URL string")
                })?;
                let cookies = self.get_cookies(url)?;
                let map = cookies
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect();
                Ok(Value::Object(map))
            }
            None => {
                tracing::debug!(method = %call.method, "unrecognized method");
                Err(BridgeError::unrecognized_method(&call.method))
            }
        }
    }
}

/// Encode a handler result into the channel reply envelope.
///
/// Transports that cannot carry a Rust `Result` get `{"result": ...}` on
/// success and `{"error": {"code", "message"}}` on failure. Every call
/// produces exactly one of the two.
pub fn encode_response(result: Result<Value, BridgeError>) -> Value {
    match result {
        Ok(value) => json!({ "result": value }),
        Err(err) => json!({
            "error": {
                "code": err.code(),
                "message": err.to_string(),
            }
        }),
    }
}

/// Channel-name to handler table.
///
/// This is the process-wide bootstrap surface: the embedding application
/// builds one registry at startup (its equivalent of plugin registration)
/// and routes every incoming channel message through [`dispatch`] or
/// [`respond`].
///
/// [`dispatch`]: ChannelRegistry::dispatch
/// [`respond`]: ChannelRegistry::respond
#[derive(Default)]
pub struct ChannelRegistry {
    handlers: DashMap<String, Arc<dyn MethodHandler>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single bootstrap entry point: a registry with the cookie bridge
    /// installed on [`DEFAULT_CHANNEL`].
    pub fn with_defaults(store: Arc<dyn CookieStore>) -> Self {
        let registry = Self::new();
        registry.register(DEFAULT_CHANNEL, Arc::new(CookieBridge::new(store)));
        registry
    }

    pub fn register(&self, channel: impl Into<String>, handler: Arc<dyn MethodHandler>) {
        self.handlers.insert(channel.into(), handler);
    }

    /// Route a call to the handler bound to `channel`.
    pub fn dispatch(&self, channel: &str, call: &MethodCall) -> Result<Value, BridgeError> {
        match self.handlers.get(channel) {
            Some(handler) => handler.handle(call),
            None => Err(BridgeError::unrecognized_channel(channel)),
        }
    }

    /// Route a call and encode the reply envelope.
    pub fn respond(&self, channel: &str, call: &MethodCall) -> Value {
        encode_response(self.dispatch(channel, call))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names_roundtrip() {
        assert_eq!(Method::from_name("getCookies"), Some(Method::GetCookies));
        assert_eq!(Method::GetCookies.name(), "getCookies");
        assert_eq!(Method::from_name("setCookies"), None);
    }

    #[test]
    fn test_method_call_deserializes_without_arguments() {
        let call: MethodCall = serde_json::from_str(r#"{"method":"getCookies"}"#).unwrap();
        assert_eq!(call.method, "getCookies");
        assert_eq!(call.arguments, Value::Null);
    }

    #[test]
    fn test_error_envelope_shape() {
        let reply = encode_response(Err(BridgeError::unrecognized_method("ping")));
        assert_eq!(reply["error"]["code"], "unrecognized_method");
        assert_eq!(reply["error"]["message"], "unrecognized method: ping");
        assert!(reply.get("result").is_none());
    }

    #[test]
    fn test_success_envelope_shape() {
        let reply = encode_response(Ok(json!({"a": "1"})));
        assert_eq!(reply["result"]["a"], "1");
        assert!(reply.get("error").is_none());
    }
}
