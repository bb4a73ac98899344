//! Error taxonomy for configuration and dispatch.

use thiserror::Error;

use crate::signature::Signature;

/// A malformed definition or a semantic marker used in the wrong phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A typed placeholder appeared in a definition's parameter list.
    #[error("typed placeholder markers are only valid at call sites")]
    PlaceholderInDefinition,

    /// A variadic marker appeared among call arguments.
    #[error("variadic markers are only valid in definitions")]
    VariadicAtCall,

    /// A variadic marker declared an empty type list.
    #[error("variadic marker must declare at least one type")]
    EmptyVariadic,
}

/// A call-time signature matched no entry in either table.
///
/// Carries the attempted type sequence and arity so callers can see which
/// overload they expected to hit. Matching is a pure function of the
/// signature; retrying with unchanged inputs cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("no overload matches ({signature}) with {arity} argument(s)")]
    NoMatch {
        /// The classified types of the attempted call, in order.
        signature: Signature,
        /// The attempted argument count.
        arity: usize,
    },
}

/// Any engine failure: configuration misuse or an unmatched dispatch.
///
/// Returned where both kinds can arise (marker-aware calls); the narrower
/// entry points return the specific enum directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
