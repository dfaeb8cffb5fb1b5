//! Request and response shapes specific to the HTTP backend.

use serde::{Deserialize, Serialize};

/// Query parameters for a name search.
#[derive(Debug, Serialize)]
pub(crate) struct NameQuery<'a> {
    pub name: &'a str,
}

/// Error body returned by the backend on non-2xx responses.
///
/// Both fields are optional; some backends only send a `message`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
