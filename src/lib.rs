//! # cookiebridge
//!
//! A small native bridge that exposes browser cookie retrieval to an
//! embedding application's scripting layer over a named method channel.
//!
//! The scripting side sends a method name plus a URL; the native side queries
//! a cookie store for that URL, parses the serialized cookie header into a
//! name/value map, and replies. The channel transport itself (binary
//! messenger, JS bridge, IPC) is owned by the host platform; this crate is
//! the handler behind it.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use cookiebridge::bridge::channel::{ChannelRegistry, MethodCall, DEFAULT_CHANNEL};
//! use cookiebridge::cookies::store::MemoryCookieStore;
//! use url::Url;
//!
//! let store = Arc::new(MemoryCookieStore::new());
//! let url = Url::parse("https://example.com/").unwrap();
//! store.set_cookie(&url, "session=abc123");
//!
//! let registry = ChannelRegistry::with_defaults(store);
//! let call = MethodCall::new("getCookies", "https://example.com/".into());
//! let reply = registry.respond(DEFAULT_CHANNEL, &call);
//! assert_eq!(reply["result"]["session"], "abc123");
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`cookies`] - Cookie store seam and header parsing
//! - [`bridge`] - The bridge handler and its channel wire surface
//!
//! ## Behavior notes
//!
//! Two latent bugs of the classic mobile method-channel pattern are fixed
//! rather than reproduced: unrecognized method names answer with a typed
//! error instead of silently dropping the call, and malformed cookie header
//! segments are skipped with a recorded reason instead of faulting the whole
//! lookup.

pub mod base;
pub mod bridge;
pub mod cookies;
