//! Cookie Management Infrastructure
//!
//! Read-side cookie helpers. Session cookies are issued and verified by the
//! auth provider; this layer only looks at whether one is present.

use axum::http::{HeaderMap, header};

/// Prefix browsers enforce for cookies set with `Secure` on HTTPS origins
pub const SECURE_PREFIX: &str = "__Secure-";

/// All values sent for cookie `name`, in header order
///
/// Looks through every `Cookie` header, since HTTP/2 clients may split them.
/// Browsers repeat a name when cookies with different paths or domains match.
pub fn cookie_values<'a>(
    headers: &'a HeaderMap,
    name: &'a str,
) -> impl Iterator<Item = &'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(move |cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then_some(value)
        })
}

/// Extract the first value of cookie `name`
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    cookie_values(headers, name).next().map(str::to_string)
}

/// Whether the request carries a non-empty session cookie
///
/// Accepts both `name` and its `__Secure-` variant, under any of their
/// occurrences. The value is opaque and not verified here.
pub fn has_session_cookie(headers: &HeaderMap, name: &str) -> bool {
    let secure_name = format!("{SECURE_PREFIX}{name}");

    [name, secure_name.as_str()]
        .into_iter()
        .flat_map(|candidate| cookie_values(headers, candidate))
        .any(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(cookie: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(cookie));
        headers
    }

    #[test]
    fn test_extract_cookie() {
        let headers = headers_with("theme=dark; moneyger.session_token=abc.123; lang=en");

        assert_eq!(
            extract_cookie(&headers, "moneyger.session_token"),
            Some("abc.123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "lang"), Some("en".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_across_split_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("sid=xyz"));

        assert_eq!(extract_cookie(&headers, "sid"), Some("xyz".to_string()));
    }

    #[test]
    fn test_has_session_cookie() {
        assert!(has_session_cookie(&headers_with("sid=abc"), "sid"));
        assert!(has_session_cookie(&headers_with("__Secure-sid=abc"), "sid"));
        assert!(!has_session_cookie(&headers_with("sid="), "sid"));
        assert!(!has_session_cookie(&headers_with("other=abc"), "sid"));
        assert!(!has_session_cookie(&HeaderMap::new(), "sid"));
    }

    #[test]
    fn test_has_session_cookie_with_repeated_name() {
        assert!(has_session_cookie(&headers_with("sid=; sid=abc"), "sid"));
        assert!(has_session_cookie(&headers_with("__Secure-sid=; sid=abc"), "sid"));
        assert!(!has_session_cookie(&headers_with("sid=; sid= "), "sid"));

        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("sid="));
        headers.append(header::COOKIE, HeaderValue::from_static("sid=abc"));
        assert!(has_session_cookie(&headers, "sid"));
    }

    #[test]
    fn test_cookie_values_keeps_every_occurrence() {
        let headers = headers_with("sid=old; theme=dark; sid=new");
        let values: Vec<&str> = cookie_values(&headers, "sid").collect();

        assert_eq!(values, vec!["old", "new"]);
        assert_eq!(extract_cookie(&headers, "sid"), Some("old".to_string()));
    }

    #[test]
    fn test_cookie_name_must_match_exactly() {
        assert!(!has_session_cookie(&headers_with("xsid=abc"), "sid"));
        assert!(!has_session_cookie(&headers_with("sid_old=abc"), "sid"));
    }
}
