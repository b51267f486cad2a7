//! Cookie storage and header parsing.
//!
//! Two halves:
//!
//! - **Header parsing** ([`header`]): the serialized `Cookie` request-header
//!   form (`name1=value1; name2=value2`) is what cookie stores hand back per
//!   URL; [`header::parse_cookie_header`] turns it into a name/value map
//!   without ever faulting on a malformed segment.
//! - **Storage** ([`store`]): the [`store::CookieStore`] trait is the seam
//!   to whatever the host platform keeps cookies in. The bundled
//!   [`store::MemoryCookieStore`] is an RFC 6265-style in-memory backend for
//!   standalone embedding and tests.

pub mod header;
pub mod store;
