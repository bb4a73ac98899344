//! Call-time resolution against a finalized overload group.
//!
//! # Algorithm
//!
//! 1. Classify each actual argument (typed placeholders contribute their
//!    declared type and substitute the absent value), producing the call
//!    signature and the argument list the handler will receive.
//! 2. Within the fixed-arity bound, look up the exact table first — exact
//!    match takes precedence — then strip run lengths and fall back to
//!    the generic table.
//! 3. Above the bound no exact entry can exist; encode the generic key
//!    directly.
//! 4. Invoke the single matched handler, or fail with the attempted
//!    signature and arity. No handler is ever invoked speculatively.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::builder::Handler;
use crate::encode::{encode_exact, encode_generic, strip_run_lengths, ExactKey, GenericKey};
use crate::error::{DispatchError, Error};
use crate::identity::Classify;
use crate::registry::{TypeCode, TypeRegistry};
use crate::semantic::{resolve_arg, Arg};
use crate::signature::Signature;

/// A finalized, read-only overload group.
///
/// Produced by [`OverloadBuilder::finalize`](crate::OverloadBuilder::finalize);
/// every call is an independent, side-effect-free read, so a dispatcher
/// may be shared across threads freely.
pub struct Dispatcher<V> {
    registry: TypeRegistry,
    exact: FxHashMap<ExactKey, Handler<V>>,
    generic: FxHashMap<GenericKey, Handler<V>>,
    max_fixed_arity: usize,
}

impl<V: Classify> Dispatcher<V> {
    pub(crate) fn new(
        registry: TypeRegistry,
        exact: FxHashMap<ExactKey, Handler<V>>,
        generic: FxHashMap<GenericKey, Handler<V>>,
        max_fixed_arity: usize,
    ) -> Self {
        Self {
            registry,
            exact,
            generic,
            max_fixed_arity,
        }
    }

    /// Dispatch plain argument values.
    pub fn call(&self, args: Vec<V>) -> Result<V, DispatchError> {
        let signature = args.iter().map(Classify::classify).collect();
        self.dispatch(signature, args)
    }

    /// Dispatch arguments that may carry call-time markers.
    ///
    /// Typed placeholders classify as their declared type while the
    /// handler receives [`Classify::absent`] in that position.
    pub fn call_with(&self, args: Vec<Arg<V>>) -> Result<V, Error> {
        let mut signature = Signature::with_capacity(args.len());
        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            let (identity, value) = resolve_arg(arg)?;
            signature.push(identity);
            values.push(value);
        }
        self.dispatch(signature, values).map_err(Error::from)
    }

    /// The largest parameter count among exact (non-variadic) definitions.
    ///
    /// Calls at or below this arity are eligible for the exact table;
    /// calls above it go straight to the generic table.
    pub fn max_fixed_arity(&self) -> usize {
        self.max_fixed_arity
    }

    /// Number of exact-signature overloads in the group.
    pub fn exact_overloads(&self) -> usize {
        self.exact.len()
    }

    /// Number of generic (variadic-shaped) overloads in the group.
    pub fn generic_overloads(&self) -> usize {
        self.generic.len()
    }

    /// Resolve the call signature to a handler and invoke it.
    fn dispatch(&self, signature: Signature, args: Vec<V>) -> Result<V, DispatchError> {
        let arity = signature.len();

        // An identity never seen during building has no code; nothing can
        // match it, which is the same failure as an unmatched key.
        let codes: Option<Vec<TypeCode>> = signature
            .iter()
            .map(|identity| self.registry.code_of(identity))
            .collect();
        let Some(codes) = codes else {
            trace!(%signature, arity, "argument type was never registered");
            return Err(DispatchError::NoMatch { signature, arity });
        };

        match self.lookup(&codes, arity) {
            Some(handler) => Ok((**handler)(args)),
            None => {
                trace!(%signature, arity, "no overload matched");
                Err(DispatchError::NoMatch { signature, arity })
            }
        }
    }

    /// Two-tier table lookup. Exact match takes precedence.
    fn lookup(&self, codes: &[TypeCode], arity: usize) -> Option<&Handler<V>> {
        if arity <= self.max_fixed_arity {
            let exact_key = encode_exact(codes);
            if let Some(handler) = self.exact.get(&exact_key) {
                trace!(key = exact_key.as_str(), "exact overload matched");
                return Some(handler);
            }
            let generic_key = strip_run_lengths(&exact_key);
            let found = self.generic.get(&generic_key);
            if found.is_some() {
                trace!(key = generic_key.as_str(), "generic overload matched");
            }
            found
        } else {
            let generic_key = encode_generic(codes);
            let found = self.generic.get(&generic_key);
            if found.is_some() {
                trace!(key = generic_key.as_str(), "generic overload matched");
            }
            found
        }
    }
}
