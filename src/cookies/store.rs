//! Cookie store seam and the bundled in-memory backend.
//!
//! The bridge treats the cookie store as an external collaborator behind the
//! [`CookieStore`] trait: hand it an opaque URL string, get back the
//! serialized cookie header for that URL (or nothing). Host platforms with a
//! real store (a webview's cookie manager, a browser profile) implement the
//! trait; [`MemoryCookieStore`] covers standalone embedding and tests.

use crate::base::error::BridgeError;
use dashmap::DashMap;
use time::OffsetDateTime;
use url::Url;

/// Maximum cookies kept per domain before oldest-first eviction.
const MAX_COOKIES_PER_DOMAIN: usize = 50;

/// Source of serialized cookie headers, keyed by URL.
///
/// The URL is passed through opaquely: backends decide what they recognize,
/// and an unrecognized or unparseable URL is "no cookies", not an error.
/// `Ok(None)` means the store holds nothing for this URL. `Err` is reserved
/// for the backend itself being unreachable or uninitialized.
pub trait CookieStore: Send + Sync {
    fn cookie_header(&self, url: &str) -> Result<Option<String>, BridgeError>;
}

/// A single stored cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub domain: String,
    pub path: String,
    pub creation_time: OffsetDateTime,
    pub expiration_time: Option<OffsetDateTime>,
    pub secure: bool,
    pub host_only: bool,
}

impl StoredCookie {
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        // No expiry means a session cookie; it never expires here.
        self.expiration_time.is_some_and(|expiry| expiry < now)
    }

    /// RFC 6265 domain matching. Host-only cookies require an exact host;
    /// domain cookies suffix-match on a label boundary.
    fn domain_matches(&self, request_host: &str) -> bool {
        if self.host_only {
            return self.domain.eq_ignore_ascii_case(request_host);
        }
        domain_covers(&self.domain, request_host)
    }

    /// RFC 6265 path matching: exact, or prefix ending at a `/` boundary.
    fn path_matches(&self, request_path: &str) -> bool {
        if request_path == self.path {
            return true;
        }
        if request_path.starts_with(&self.path) {
            return self.path.ends_with('/')
                || request_path.as_bytes().get(self.path.len()) == Some(&b'/');
        }
        false
    }

    fn matches(&self, url: &Url, now: OffsetDateTime) -> bool {
        let host = url.host_str().unwrap_or("");
        self.domain_matches(host)
            && self.path_matches(url.path())
            && (!self.secure || url.scheme() == "https")
            && !self.is_expired(now)
    }
}

/// Check whether `cookie_domain` covers `request_host`: identical, or a
/// suffix separated by a dot (`example.com` covers `a.example.com`, never
/// `notexample.com`).
fn domain_covers(cookie_domain: &str, request_host: &str) -> bool {
    if request_host.eq_ignore_ascii_case(cookie_domain) {
        return true;
    }
    if request_host.len() <= cookie_domain.len() {
        return false;
    }
    let split = request_host.len() - cookie_domain.len();
    request_host.is_char_boundary(split)
        && request_host[..split].ends_with('.')
        && request_host[split..].eq_ignore_ascii_case(cookie_domain)
}

/// The request host plus each parent domain that could index a matching
/// cookie (for `foo.bar.example.com`: `bar.example.com`, `example.com`).
fn lookup_domains(host: &str) -> Vec<String> {
    let host = host.to_ascii_lowercase();
    let parts: Vec<&str> = host.split('.').collect();
    let mut domains = vec![host.clone()];
    for i in 1..parts.len().saturating_sub(1) {
        domains.push(parts[i..].join("."));
    }
    domains
}

/// In-memory cookie store with RFC 6265 matching.
///
/// Cookies are indexed by their domain; lookups walk the request host and
/// its parent domains, so a cookie set with `Domain=example.com` is visible
/// to `sub.example.com`. Same name and path replaces in place; each domain
/// is capped with oldest-first eviction.
#[derive(Default)]
pub struct MemoryCookieStore {
    store: DashMap<String, Vec<StoredCookie>>,
}

impl MemoryCookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `Set-Cookie` line in the context of `url` and store the
    /// result. Returns whether the cookie was accepted.
    ///
    /// An explicit `Domain=` attribute must cover the request host;
    /// mismatches are rejected the way browsers silently reject them.
    pub fn set_cookie(&self, url: &Url, set_cookie_line: &str) -> bool {
        let parsed = match cookie::Cookie::parse(set_cookie_line) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(line = set_cookie_line, %err, "failed to parse Set-Cookie line");
                return false;
            }
        };

        let request_host = url.host_str().unwrap_or("").to_ascii_lowercase();
        if request_host.is_empty() {
            return false;
        }

        let (domain, host_only) = match parsed.domain() {
            Some(d) => {
                let d = d.trim_start_matches('.').to_ascii_lowercase();
                if !domain_covers(&d, &request_host) {
                    tracing::warn!(domain = %d, host = %request_host, "rejecting cookie for foreign domain");
                    return false;
                }
                (d, false)
            }
            None => (request_host, true),
        };

        let now = OffsetDateTime::now_utc();
        let cookie = StoredCookie {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain: domain.clone(),
            path: parsed.path().unwrap_or("/").to_string(),
            creation_time: now,
            expiration_time: parsed.expires().and_then(|e| e.datetime()),
            secure: parsed.secure().unwrap_or(false),
            host_only,
        };

        let mut entry = self.store.entry(domain).or_default();

        // Same name and path replaces in place.
        entry.retain(|c| c.name != cookie.name || c.path != cookie.path);

        while entry.len() >= MAX_COOKIES_PER_DOMAIN {
            let oldest = entry
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| c.creation_time)
                .map(|(i, _)| i);
            match oldest {
                Some(idx) => {
                    entry.remove(idx);
                }
                None => break,
            }
        }

        entry.push(cookie);
        true
    }

    /// Cookies visible to `url`, ordered longest path first, then earliest
    /// creation.
    pub fn cookies_for_url(&self, url: &Url) -> Vec<StoredCookie> {
        let host = url.host_str().unwrap_or("");
        let now = OffsetDateTime::now_utc();

        let mut result = Vec::new();
        for domain in lookup_domains(host) {
            if let Some(entry) = self.store.get(&domain) {
                result.extend(entry.iter().filter(|c| c.matches(url, now)).cloned());
            }
        }

        result.sort_by(|a, b| {
            b.path
                .len()
                .cmp(&a.path.len())
                .then_with(|| a.creation_time.cmp(&b.creation_time))
        });

        result
    }

    pub fn cookie_count(&self) -> usize {
        self.store.iter().map(|e| e.value().len()).sum()
    }

    pub fn clear(&self) {
        self.store.clear();
    }
}

impl CookieStore for MemoryCookieStore {
    fn cookie_header(&self, url: &str) -> Result<Option<String>, BridgeError> {
        let url = match Url::parse(url) {
            Ok(url) => url,
            // Opaque pass-through: a URL the store cannot interpret has no
            // cookies, matching platform cookie-manager behavior.
            Err(_) => return Ok(None),
        };

        let cookies = self.cookies_for_url(&url);
        if cookies.is_empty() {
            return Ok(None);
        }

        let header = cookies
            .iter()
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ");
        Ok(Some(header))
    }
}
