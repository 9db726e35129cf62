//! Session cookie handling on raw `Cookie` / `Set-Cookie` headers.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};

pub const ACCESS_COOKIE: &str = "ft-access-token";
pub const REFRESH_COOKIE: &str = "ft-refresh-token";

/// One `Set-Cookie` write. An empty value with `max_age_secs == 0` clears
/// the cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: &'static str,
    pub value: String,
    pub max_age_secs: i64,
    pub secure: bool,
}

impl SetCookie {
    pub fn new(name: &'static str, value: String, max_age_secs: i64, secure: bool) -> Self {
        Self {
            name,
            value,
            max_age_secs,
            secure,
        }
    }

    pub fn clear(name: &'static str, secure: bool) -> Self {
        Self::new(name, String::new(), 0, secure)
    }

    pub fn is_removal(&self) -> bool {
        self.max_age_secs <= 0
    }

    pub fn header_value(&self) -> String {
        let mut header = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.name,
            self.value,
            self.max_age_secs.max(0)
        );
        if self.secure {
            header.push_str("; Secure");
        }
        header
    }
}

/// Iterate `name=value` pairs across every `Cookie` header
pub fn request_cookies(headers: &HeaderMap) -> impl Iterator<Item = (&str, &str)> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            Some((name.trim(), value.trim()))
        })
}

pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    request_cookies(headers)
        .find(|(cookie_name, _)| *cookie_name == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Rewrite the request's `Cookie` header so downstream handlers see the
/// rotated credentials, or none once they were rejected.
pub fn rewrite_request_cookies(headers: &mut HeaderMap, writes: &[SetCookie]) {
    if writes.is_empty() {
        return;
    }

    let mut pairs: Vec<String> = request_cookies(headers)
        .filter(|(name, _)| !writes.iter().any(|w| w.name == *name))
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    pairs.extend(
        writes
            .iter()
            .filter(|w| !w.is_removal())
            .map(|w| format!("{}={}", w.name, w.value)),
    );

    headers.remove(COOKIE);
    if pairs.is_empty() {
        return;
    }
    if let Ok(value) = HeaderValue::from_str(&pairs.join("; ")) {
        headers.insert(COOKIE, value);
    }
}

/// Append cookie writes to a response, skipping any cookie the handler
/// already set itself (a fresh login outranks a rejected old session).
pub fn append_set_cookies(headers: &mut HeaderMap, writes: &[SetCookie]) {
    let already_set: Vec<String> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split_once('=').map(|(name, _)| name.trim().to_string()))
        .collect();

    for write in writes {
        if already_set.iter().any(|name| name == write.name) {
            continue;
        }
        if let Ok(value) = HeaderValue::from_str(&write.header_value()) {
            headers.append(SET_COOKIE, value);
        }
    }
}
