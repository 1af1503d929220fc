//! Endpoints
//!
//! URLs of the catalog and checkout services relative to one configured base.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes escaped inside a single path segment: the WHATWG path set plus `/`, `%` and `\`.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Base URL of the storefront backend. An empty base means same-origin paths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Create endpoints under `base`; trailing slashes are ignored.
    pub fn new(base: impl AsRef<str>) -> Self {
        Self {
            base: base.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve an empty base against the page origin, keeping explicit bases.
    #[must_use]
    pub fn or_origin(self, origin: &str) -> Self {
        if self.is_same_origin() {
            Self::new(origin)
        } else {
            self
        }
    }

    /// Returns `true` when no base was configured.
    pub fn is_same_origin(&self) -> bool {
        self.base.is_empty()
    }

    /// `GET` product listing. The category filter is sent as a query parameter.
    pub fn products(&self) -> String {
        format!("{}/api/products", self.base)
    }

    /// `GET` single product by slug, escaped as one path segment.
    ///
    /// Returns `None` for slugs that would collapse into a parent path
    /// (empty, `.` or `..`); no product can be addressed by them.
    pub fn product(&self, slug: &str) -> Option<String> {
        if matches!(slug, "" | "." | "..") {
            return None;
        }

        Some(format!(
            "{}/api/products/{}",
            self.base,
            utf8_percent_encode(slug, SEGMENT)
        ))
    }

    /// `POST` checkout.
    pub fn checkout(&self) -> String {
        format!("{}/api/checkout", self.base)
    }
}
