//! Session cookie handling.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use uuid::Uuid;

/// Reads the session id from the `Cookie` headers.
pub fn session_id(headers: &HeaderMap, cookie_name: &str) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to session `id`.
pub fn session_cookie(cookie_name: &str, id: Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", cookie_name, id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_finds_named_cookie_among_others() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; sid={}; lang=en", id)).unwrap(),
        );

        assert_eq!(session_id(&headers, "sid"), Some(id));
        assert_eq!(session_id(&headers, "other"), None);
    }

    #[test]
    fn test_garbage_id_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("sid=not-a-uuid"));

        assert_eq!(session_id(&headers, "sid"), None);
    }

    #[test]
    fn test_cookie_round_trips() {
        let id = Uuid::new_v4();
        let set = session_cookie("sid", id);
        let mut headers = HeaderMap::new();
        let pair = set.split(';').next().unwrap();
        headers.insert(COOKIE, HeaderValue::from_str(pair).unwrap());

        assert_eq!(session_id(&headers, "sid"), Some(id));
        assert!(set.contains("HttpOnly"));
    }
}
