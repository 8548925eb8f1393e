/// Failure of a single upstream lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The upstream API answered 404 for the requested name.
    #[error("not found")]
    NotFound,

    /// Any other 4xx/5xx status.
    #[error("HTTP {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Unexpected(String),
}
