//! Backend URL type.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::error::{Error, InvalidInputError};
use crate::types::StudentId;

/// Path of the student collection, relative to the backend base URL.
pub const STUDENTS_PATH: &str = "api/students";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

/// Where the student collection lives.
///
/// Either a REST backend (HTTPS, or plain HTTP on a loopback host) or a
/// local store addressed with `file://`.
///
/// ```
/// use roster_core::ApiUrl;
///
/// let api = ApiUrl::new("http://localhost:8080").unwrap();
/// assert_eq!(api.collection_url(), "http://localhost:8080/api/students");
///
/// let local = ApiUrl::new("file:///tmp/roster").unwrap();
/// assert!(local.is_local());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Parse and check a backend URL.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::ApiUrl`] when the text is not an absolute
    /// URL or names a scheme roster cannot talk to.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let reject = |reason: &str| -> Error {
            InvalidInputError::ApiUrl {
                value: raw.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let url = Url::parse(raw).map_err(|e| reject(&e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(reject("must be an absolute URL"));
        }

        match url.scheme() {
            "file" if url.path().is_empty() => Err(reject("file:// URL must have a path")),
            "file" => Ok(Self(url)),
            "https" | "http" => match url.host_str() {
                None => Err(reject("must have a host")),
                Some(host) if url.scheme() == "http" && !LOOPBACK_HOSTS.contains(&host) => {
                    Err(reject("must use HTTPS (HTTP allowed only for localhost)"))
                }
                Some(_) => Ok(Self(url)),
            },
            _ => Err(reject("must use HTTPS (HTTP allowed only for localhost)")),
        }
    }

    /// The collection root, e.g. `http://host/api/students`.
    pub fn collection_url(&self) -> String {
        // Url renders an empty path as "/".
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, STUDENTS_PATH)
    }

    /// A single record, e.g. `http://host/api/students/7`.
    pub fn record_url(&self, id: StudentId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// True for `file://` stores.
    pub fn is_local(&self) -> bool {
        self.0.scheme() == "file"
    }

    /// The store directory of a `file://` URL.
    pub fn to_file_path(&self) -> Option<PathBuf> {
        self.is_local()
            .then(|| self.0.to_file_path().ok())
            .flatten()
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}
