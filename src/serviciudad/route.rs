use std::fmt;

/// Page identity, resolved once when a page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Login,
    Other,
}

impl Page {
    /// Resolves a request path: `/`, `index.html` and directory paths are the main
    /// page, `login.html` is the login page. An empty path is neither.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if path.ends_with("login.html") {
            Self::Login
        } else if path == "/" || path.ends_with('/') || path.ends_with("index.html") {
            Self::Main
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Main => "index.html",
            Self::Login => "login.html",
            Self::Other => "",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Login => write!(f, "login"),
            Self::Other => write!(f, "other"),
        }
    }
}
