//! Semantic markers and their phase-checked resolution.
//!
//! Two marker kinds share one vocabulary, each valid only in its phase:
//!
//! - [`Marker::Variadic`] — definition-time. Expands its type list in
//!   place into the signature and forces the definition into the generic
//!   table, where run-collapsed keys make repetition count irrelevant.
//! - [`Marker::Placeholder`] — call-time. Supplies a declared type for
//!   classification while the handler receives the value model's absent
//!   value in that position.
//!
//! Using either marker in the other phase is a [`ConfigError`].

use crate::error::ConfigError;
use crate::identity::{Classify, TypeIdentity};
use crate::signature::Signature;

/// A semantic marker altering type classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Declares that this position's types may repeat any number of times
    /// at call time. Multiple types are sequential entries of the
    /// variadic segment.
    Variadic(Vec<TypeIdentity>),
    /// Stands in for an omitted value, carrying its declared type.
    Placeholder(TypeIdentity),
}

impl Marker {
    /// A variadic marker over the given declared types.
    pub fn variadic<T, I>(types: I) -> Self
    where
        T: Into<TypeIdentity>,
        I: IntoIterator<Item = T>,
    {
        Marker::Variadic(types.into_iter().map(Into::into).collect())
    }

    /// A typed placeholder for the given declared type.
    pub fn placeholder(ty: impl Into<TypeIdentity>) -> Self {
        Marker::Placeholder(ty.into())
    }
}

/// One entry of a definition's parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A concrete declared type.
    Is(TypeIdentity),
    /// A semantic marker (only [`Marker::Variadic`] is valid here).
    Marker(Marker),
}

impl Param {
    /// A concrete parameter of the given type.
    pub fn of(ty: impl Into<TypeIdentity>) -> Self {
        Param::Is(ty.into())
    }

    /// A variadic parameter segment over the given types.
    pub fn variadic<T, I>(types: I) -> Self
    where
        T: Into<TypeIdentity>,
        I: IntoIterator<Item = T>,
    {
        Param::Marker(Marker::variadic(types))
    }
}

impl From<TypeIdentity> for Param {
    fn from(ty: TypeIdentity) -> Self {
        Param::Is(ty)
    }
}

impl From<crate::identity::Tag> for Param {
    fn from(tag: crate::identity::Tag) -> Self {
        Param::Is(tag.into())
    }
}

impl From<crate::identity::ClassId> for Param {
    fn from(class: crate::identity::ClassId) -> Self {
        Param::Is(class.into())
    }
}

impl From<Marker> for Param {
    fn from(marker: Marker) -> Self {
        Param::Marker(marker)
    }
}

/// One actual argument of a dispatch call.
#[derive(Debug, Clone)]
pub enum Arg<V> {
    /// A present value, classified by inspection.
    Value(V),
    /// A semantic marker (only [`Marker::Placeholder`] is valid here).
    Marker(Marker),
}

impl<V> Arg<V> {
    /// A present argument value.
    pub fn value(value: impl Into<V>) -> Self {
        Arg::Value(value.into())
    }

    /// A typed placeholder: classify as `ty`, hand the handler an absent
    /// value so it can apply its own default.
    pub fn placeholder(ty: impl Into<TypeIdentity>) -> Self {
        Arg::Marker(Marker::placeholder(ty))
    }
}

/// Expand one definition parameter into signature positions.
///
/// Returns whether the parameter forces the definition into the generic
/// table. Rejects placeholders (wrong phase) and empty variadic lists.
pub(crate) fn expand_param(param: Param, signature: &mut Signature) -> Result<bool, ConfigError> {
    match param {
        Param::Is(identity) => {
            signature.push(identity);
            Ok(false)
        }
        Param::Marker(Marker::Variadic(types)) => {
            if types.is_empty() {
                return Err(ConfigError::EmptyVariadic);
            }
            for identity in types {
                signature.push(identity);
            }
            Ok(true)
        }
        Param::Marker(Marker::Placeholder(_)) => Err(ConfigError::PlaceholderInDefinition),
    }
}

/// Resolve one call argument to its classification and the value the
/// handler will receive.
///
/// Placeholders classify as their declared type and substitute
/// [`Classify::absent`]; variadic markers are rejected (wrong phase).
pub(crate) fn resolve_arg<V: Classify>(arg: Arg<V>) -> Result<(TypeIdentity, V), ConfigError> {
    match arg {
        Arg::Value(value) => {
            let identity = value.classify();
            Ok((identity, value))
        }
        Arg::Marker(Marker::Placeholder(identity)) => Ok((identity, V::absent())),
        Arg::Marker(Marker::Variadic(_)) => Err(ConfigError::VariadicAtCall),
    }
}
