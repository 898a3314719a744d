use thiserror::Error;

/// Failures that keep a reply from reaching the page.
///
/// The transport variants display only the underlying description, so a
/// rendered message reads `Upload failed: Failed to fetch` rather than
/// repeating the variant name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortalError {
    /// The request never completed (offline, CORS, endpoint unreachable).
    #[error("{0}")]
    Network(String),

    /// The body arrived but was not JSON.
    #[error("{0}")]
    Decode(String),

    /// The browser refused to build the multipart payload.
    #[error("{0}")]
    Form(String),

    #[error("Missing element: {0}")]
    MissingElement(String),
}

impl PortalError {
    pub fn network(description: impl Into<String>) -> Self {
        Self::Network(description.into())
    }

    pub fn decode(description: impl Into<String>) -> Self {
        Self::Decode(description.into())
    }
}
