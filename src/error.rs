use thiserror::Error;

/// Result type alias for name-keyed network queries.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors reported by name-keyed queries.
///
/// Invalid insertions are *not* errors: [`RouteNetwork::add_connection`](crate::network::RouteNetwork::add_connection)
/// signals them with a `false` return and leaves the store untouched.
/// Likewise an unreachable target is reported via
/// [`INFINITE_DISTANCE`](crate::flight::INFINITE_DISTANCE), not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("unknown city: {0}")]
    UnknownCity(String),
}
