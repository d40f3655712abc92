//! Error types for catalog loading and form validation.
//!
//! None of these are fatal to the page: a [`LoadError`] only selects the
//! built-in catalog, and a [`FormError`] is shown next to the form.

/// Why a remote catalog could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("works request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("works request returned status {0}")]
    Status(u16),
    /// The body was not a JSON array of works.
    #[error("works response could not be decoded: {0}")]
    Decode(String),
    /// The backend returned no works at all.
    #[error("works response was empty")]
    Empty,
}

/// Client-side validation failure of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A required field is blank after trimming.
    #[error("{0} is required")]
    Missing(&'static str),
    /// The email address has no `local@domain` shape.
    #[error("email address is not valid")]
    InvalidEmail,
}
