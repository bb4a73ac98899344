//! Definition accumulation: the building phase of an overload group.
//!
//! An [`OverloadBuilder`] owns the group's registry, both lookup tables,
//! and the max fixed arity counter while they are still mutable. Each
//! [`add`](OverloadBuilder::add) call registers one signature + handler;
//! [`finalize`](OverloadBuilder::finalize) consumes the builder and hands
//! the frozen group to a [`Dispatcher`], after which no mutating API
//! exists.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::encode::{encode_exact, encode_generic, ExactKey, GenericKey};
use crate::error::ConfigError;
use crate::identity::Classify;
use crate::registry::{TypeCode, TypeRegistry};
use crate::semantic::{expand_param, Param};
use crate::signature::Signature;

/// A registered overload handler.
///
/// Receives the substituted argument list and returns the call's result.
/// Handlers are shared (`Arc`) so the finalized tables stay cheap to hand
/// across threads.
pub type Handler<V> = Arc<dyn Fn(Vec<V>) -> V + Send + Sync>;

/// Accumulates overload definitions for one group.
pub struct OverloadBuilder<V> {
    registry: TypeRegistry,
    exact: FxHashMap<ExactKey, Handler<V>>,
    generic: FxHashMap<GenericKey, Handler<V>>,
    max_fixed_arity: usize,
}

impl<V> std::fmt::Debug for OverloadBuilder<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverloadBuilder")
            .field("exact", &self.exact.len())
            .field("generic", &self.generic.len())
            .field("max_fixed_arity", &self.max_fixed_arity)
            .finish()
    }
}

impl<V: Classify> OverloadBuilder<V> {
    /// An empty group with no definitions.
    pub fn new() -> Self {
        Self {
            registry: TypeRegistry::new(),
            exact: FxHashMap::default(),
            generic: FxHashMap::default(),
            max_fixed_arity: 0,
        }
    }

    /// Register one definition: a parameter list and its handler.
    ///
    /// Parameters are processed left to right; variadic markers expand in
    /// place and route the definition to the generic table, everything
    /// else is interned as a concrete position. Non-generic definitions
    /// key the exact table and raise the max fixed arity. Registering a
    /// signature that encodes to an existing key overwrites the previous
    /// handler — last write wins.
    pub fn add<P, I, F>(mut self, params: I, handler: F) -> Result<Self, ConfigError>
    where
        P: Into<Param>,
        I: IntoIterator<Item = P>,
        F: Fn(Vec<V>) -> V + Send + Sync + 'static,
    {
        let mut signature = Signature::new();
        let mut generic = false;
        for param in params {
            generic |= expand_param(param.into(), &mut signature)?;
        }

        let codes: Vec<TypeCode> = signature
            .iter()
            .map(|identity| self.registry.intern(identity))
            .collect();
        let handler: Handler<V> = Arc::new(handler);

        if generic {
            let key = encode_generic(&codes);
            debug!(key = key.as_str(), %signature, "registered generic overload");
            self.generic.insert(key, handler);
        } else {
            let key = encode_exact(&codes);
            debug!(key = key.as_str(), %signature, "registered exact overload");
            self.exact.insert(key, handler);
            self.max_fixed_arity = self.max_fixed_arity.max(signature.len());
        }

        Ok(self)
    }

    /// Freeze the group and return its dispatcher.
    ///
    /// Consumes the builder; further definition is structurally
    /// impossible.
    pub fn finalize(self) -> Dispatcher<V> {
        Dispatcher::new(self.registry, self.exact, self.generic, self.max_fixed_arity)
    }
}

impl<V: Classify> Default for OverloadBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
