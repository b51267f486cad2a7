use thiserror::Error;

/// Bridge failure modes.
///
/// Every failure the bridge can produce is a variant here, and every variant
/// carries a stable machine-readable code (see [`BridgeError::code`]) so the
/// channel error envelope stays checkable by the scripting side across
/// releases. "No cookies stored for this URL" is not an error; it is a valid
/// empty result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Dispatch received a method name outside the supported set.
    ///
    /// The caller always gets this back as a reply; the call is never
    /// silently dropped.
    #[error("unrecognized method: {method}")]
    UnrecognizedMethod { method: String },

    /// No handler is registered for the requested channel name.
    #[error("no handler registered for channel: {channel}")]
    UnrecognizedChannel { channel: String },

    /// The call payload did not have the shape the method expects.
    #[error("invalid arguments for {method}: {reason}")]
    InvalidArguments { method: String, reason: String },

    /// The cookie store backend is unreachable or uninitialized.
    #[error("cookie store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

impl BridgeError {
    pub fn unrecognized_method(method: impl Into<String>) -> Self {
        Self::UnrecognizedMethod { method: method.into() }
    }

    pub fn unrecognized_channel(channel: impl Into<String>) -> Self {
        Self::UnrecognizedChannel { channel: channel.into() }
    }

    pub fn invalid_arguments(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments { method: method.into(), reason: reason.into() }
    }

    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        Self::StoreUnavailable { reason: reason.into() }
    }

    /// Stable wire code used in the channel error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnrecognizedMethod { .. } => "unrecognized_method",
            Self::UnrecognizedChannel { .. } => "unrecognized_channel",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::StoreUnavailable { .. } => "store_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            BridgeError::unrecognized_method("getClipboard").code(),
            "unrecognized_method"
        );
        assert_eq!(
            BridgeError::unrecognized_channel("app/other").code(),
            "unrecognized_channel"
        );
        assert_eq!(
            BridgeError::invalid_arguments("getCookies", "expected a URL string").code(),
            "invalid_arguments"
        );
        assert_eq!(
            BridgeError::store_unavailable("webview not attached").code(),
            "store_unavailable"
        );
    }

    #[test]
    fn test_display_carries_detail() {
        let err = BridgeError::invalid_arguments("getCookies", "expected a URL string");
        assert_eq!(
            err.to_string(),
            "invalid arguments for getCookies: expected a URL string"
        );
    }
}
