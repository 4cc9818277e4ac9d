use http::{HeaderMap, HeaderName, HeaderValue};

/// A response header set the applicator is benchmarked against.
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    headers: &'static [(&'static str, &'static str)],
}

impl TestCase {
    pub const fn new(name: &'static str, headers: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, headers }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Builds a fresh header map holding the case's headers.
    pub fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::with_capacity(self.headers.len() + 16);
        for &(name, value) in self.headers {
            map.append(HeaderName::from_static(name), HeaderValue::from_static(value));
        }
        map
    }
}

pub static EMPTY: TestCase = TestCase::new("empty", &[]);

pub static TYPICAL: TestCase = TestCase::new(
    "typical",
    &[
        ("content-type", "application/json"),
        ("content-length", "1024"),
        ("date", "Sun, 19 Oct 2026 09:00:00 GMT"),
        ("x-powered-by", "micro-web"),
        ("set-cookie", "session=abc; HttpOnly; Secure"),
        ("set-cookie", "theme=dark"),
    ],
);

pub static PATCHED: TestCase = TestCase::new(
    "already_patched",
    &[
        ("strict-transport-security", "max-age=100"),
        ("content-security-policy", "default-src *"),
        ("x-frame-options", "SAMEORIGIN"),
        ("x-content-type-options", "nosniff"),
        ("referrer-policy", "unsafe-url"),
        ("x-powered-by", "micro-web"),
    ],
);
