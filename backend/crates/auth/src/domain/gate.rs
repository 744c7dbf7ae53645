//! Request Gate
//!
//! Pure decision over a request path and session-cookie presence.
//!
//! Every path is either [`PathClass::Public`] or [`PathClass::Protected`].
//! Public paths are matched with a single segment-aware prefix test against
//! an explicit list: `/login` matches `/login` and `/login/step-2` but not
//! `/loginx`. Anything not on the list, `/` included, is protected.
//!
//! The cookie is never verified here. Handlers behind the gate that need the
//! user ask the auth provider.

/// Pages reachable without a session
pub const PUBLIC_PAGES: &[&str] = &[
    "/login",
    "/register",
    "/reset-password",
    "/forgot-password",
];

/// Framework-internal asset paths
pub const FRAMEWORK_ASSETS: &[&str] = &["/_next/static", "/_next/image", "/assets", "/favicon.ico"];

/// API routes authenticate on their own
pub const API_PREFIX: &str = "/api";

/// Default session cookie name
pub const DEFAULT_SESSION_COOKIE: &str = "moneyger.session_token";

/// Default redirect target for anonymous requests
pub const DEFAULT_LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    Public,
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Pass the request through
    Allow,
    /// Send the browser to `location`
    Redirect { location: String },
}

/// Gate configuration
#[derive(Debug, Clone)]
pub struct GatePolicy {
    /// Cookie whose presence marks a signed-in browser
    pub session_cookie_name: String,
    /// Redirect target; always treated as public
    pub login_path: String,
    /// Public path prefixes
    pub public_paths: Vec<String>,
}

impl Default for GatePolicy {
    fn default() -> Self {
        let public_paths = PUBLIC_PAGES
            .iter()
            .chain(FRAMEWORK_ASSETS)
            .chain(std::iter::once(&API_PREFIX))
            .map(|path| path.to_string())
            .collect();

        Self {
            session_cookie_name: DEFAULT_SESSION_COOKIE.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            public_paths,
        }
    }
}

impl GatePolicy {
    /// Classify a request path
    pub fn classify(&self, path: &str) -> PathClass {
        let is_public = self
            .public_paths
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.login_path.as_str()))
            .any(|prefix| matches_prefix(path, prefix));

        if is_public {
            PathClass::Public
        } else {
            PathClass::Protected
        }
    }

    /// Decide what to do with a request
    pub fn decide(&self, path: &str, has_session: bool) -> GateDecision {
        match (self.classify(path), has_session) {
            (PathClass::Public, _) | (PathClass::Protected, true) => GateDecision::Allow,
            (PathClass::Protected, false) => GateDecision::Redirect {
                location: self.login_path.clone(),
            },
        }
    }
}

/// `path` が `prefix` と一致するか、その直後に新しいセグメントが続くか
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        // "/" would make every path public
        return false;
    }

    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROTECTED: &[&str] = &[
        "/",
        "",
        "/dashboard",
        "/categories/42",
        "/settings/currency",
        "/loginx",
        "/apis",
        "/registered",
    ];

    const PUBLIC: &[&str] = &[
        "/login",
        "/login/",
        "/register",
        "/reset-password",
        "/forgot-password",
        "/_next/static/chunks/main.js",
        "/_next/image",
        "/assets/logo.svg",
        "/favicon.ico",
        "/api",
        "/api/auth/password-strength",
    ];

    #[test]
    fn test_every_path_has_exactly_one_class() {
        let policy = GatePolicy::default();
        for path in PUBLIC {
            assert_eq!(policy.classify(path), PathClass::Public, "{path}");
        }
        for path in PROTECTED {
            assert_eq!(policy.classify(path), PathClass::Protected, "{path}");
        }
    }

    #[test]
    fn test_protected_without_session_redirects_to_login() {
        let policy = GatePolicy::default();
        for path in PROTECTED {
            assert_eq!(
                policy.decide(path, false),
                GateDecision::Redirect {
                    location: "/login".to_string()
                },
                "{path}"
            );
        }
    }

    #[test]
    fn test_protected_with_session_is_allowed() {
        let policy = GatePolicy::default();
        for path in PROTECTED {
            assert_eq!(policy.decide(path, true), GateDecision::Allow, "{path}");
        }
    }

    #[test]
    fn test_public_is_allowed_regardless_of_session() {
        let policy = GatePolicy::default();
        for path in PUBLIC {
            assert_eq!(policy.decide(path, false), GateDecision::Allow, "{path}");
            assert_eq!(policy.decide(path, true), GateDecision::Allow, "{path}");
        }
    }

    #[test]
    fn test_custom_login_path_is_always_public() {
        let policy = GatePolicy {
            login_path: "/sign-in".to_string(),
            public_paths: Vec::new(),
            ..GatePolicy::default()
        };

        assert_eq!(policy.classify("/sign-in"), PathClass::Public);
        assert_eq!(
            policy.decide("/", false),
            GateDecision::Redirect {
                location: "/sign-in".to_string()
            }
        );
    }

    #[test]
    fn test_matches_prefix() {
        assert!(matches_prefix("/login", "/login"));
        assert!(matches_prefix("/login/otp", "/login"));
        assert!(matches_prefix("/login", "/login/"));
        assert!(!matches_prefix("/login-help", "/login"));
        assert!(!matches_prefix("/", "/login"));
        assert!(!matches_prefix("/anything", "/"));
    }
}
