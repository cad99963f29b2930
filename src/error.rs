use thiserror::Error;

/// Errors produced while turning a remote URL into a [`Repository`](crate::Repository).
///
/// Every variant is terminal for the call that produced it; no partial record is
/// ever returned alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no network authority that could be extracted.
    #[error("could not parse url for host: {url}")]
    HostExtraction { url: String },

    /// The host does not belong to any supported provider.
    #[error("could not find parser for host: {host}")]
    UnknownProvider { host: String },

    /// The provider was found but none of its patterns matched the whole URL.
    #[error("could not match url: {url} to any pattern")]
    NoMatch { url: String },

    /// `parse` was called before a successful `register_parser`.
    #[error("no parser registered; call register_parser with a url first")]
    NotRegistered,
}
