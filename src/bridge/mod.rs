//! The cookie bridge: the native side of the method channel.

pub mod channel;

use std::sync::Arc;

use crate::base::error::BridgeError;
use crate::cookies::header::{parse_cookie_header, CookieMap};
use crate::cookies::store::CookieStore;

/// Native handler answering cookie lookups for the scripting layer.
///
/// Stateless per call: the store is read fresh on every invocation (no
/// caching, so the most recent store state always wins) and the returned map
/// has no lifecycle beyond the single response.
pub struct CookieBridge {
    store: Arc<dyn CookieStore>,
}

impl CookieBridge {
    pub fn new(store: Arc<dyn CookieStore>) -> Self {
        Self { store }
    }

    /// Look up the cookies visible to `url` as a name/value map.
    ///
    /// The URL string is handed to the store untouched; no syntax validation
    /// happens here. A URL with no stored cookies produces an empty map.
    /// Malformed header segments are dropped with a warning, never a
    /// failure. Store errors propagate to the caller as
    /// [`BridgeError::StoreUnavailable`].
    pub fn get_cookies(&self, url: &str) -> Result<CookieMap, BridgeError> {
        let Some(header) = self.store.cookie_header(url)? else {
            return Ok(CookieMap::new());
        };

        let parsed = parse_cookie_header(&header);
        for skipped in &parsed.skipped {
            tracing::warn!(
                segment = %skipped.raw,
                reason = ?skipped.reason,
                "skipping malformed cookie segment"
            );
        }

        Ok(parsed.cookies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedHeaderStore(Option<String>);

    impl CookieStore for FixedHeaderStore {
        fn cookie_header(&self, _url: &str) -> Result<Option<String>, BridgeError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_no_header_means_empty_map() {
        let bridge = CookieBridge::new(Arc::new(FixedHeaderStore(None)));
        let cookies = bridge.get_cookies("https://example.com/").unwrap();
        assert!(cookies.is_empty());
    }

    #[test]
    fn test_header_is_parsed() {
        let store = FixedHeaderStore(Some("a=1; b=2".to_string()));
        let bridge = CookieBridge::new(Arc::new(store));
        let cookies = bridge.get_cookies("https://example.com/").unwrap();
        assert_eq!(cookies["a"], "1");
        assert_eq!(cookies["b"], "2");
    }

    #[test]
    fn test_malformed_segment_does_not_fail_the_call() {
        let store = FixedHeaderStore(Some("a=1; broken".to_string()));
        let bridge = CookieBridge::new(Arc::new(store));
        let cookies = bridge.get_cookies("https://example.com/").unwrap();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies["a"], "1");
    }

    #[test]
    fn test_store_error_propagates() {
        struct DownStore;
        impl CookieStore for DownStore {
            fn cookie_header(&self, _url: &str) -> Result<Option<String>, BridgeError> {
                Err(BridgeError::store_unavailable("webview not attached"))
            }
        }

        let bridge = CookieBridge::new(Arc::new(DownStore));
        let err = bridge.get_cookies("https://example.com/").unwrap_err();
        assert!(matches!(err, BridgeError::StoreUnavailable { .. }));
    }
}
