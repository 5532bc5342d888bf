use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A single comment as returned by `GET /comments`.
///
/// `created_at` is a unix timestamp in milliseconds.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Comment {
    pub id         : String,
    pub created_at : i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by : Option<String>,
    /// Resolved author name, only present when the listing
    /// was requested with `expand=created_by`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author     : Option<String>,
    pub text       : String,
}

/// Uniform JSON body of all error responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
