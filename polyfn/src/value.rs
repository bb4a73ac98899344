//! Reference value model for dispatch.
//!
//! [`Value`] covers the primitive vocabulary of [`Tag`] plus per-class
//! object identity through [`Obj`]. The engine itself never names `Value`;
//! it only sees the [`Classify`] impl, so hosts are free to substitute
//! their own value type.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::identity::{ClassId, Classify, Tag, TypeIdentity};

/// A dynamically typed runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value. Classifies as [`Tag::Unit`].
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
    /// An opaque host object carrying class identity.
    Object(Obj),
}

/// An opaque host object with class identity.
///
/// Holds the erased value behind an `Arc` together with the class token
/// captured at construction. Classification uses the token; the payload is
/// only reachable through [`Obj::downcast_ref`].
#[derive(Clone)]
pub struct Obj {
    class: ClassId,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Obj {
    /// Wrap a host value, capturing its class token.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            class: ClassId::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// The class token captured at construction.
    pub fn class(&self) -> ClassId {
        self.class
    }

    /// Borrow the payload as `T`, if this object holds a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for Obj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Obj").field("class", &self.class.name()).finish()
    }
}

impl PartialEq for Obj {
    /// Object equality is identity: same allocation, not same contents.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Classify for Value {
    fn classify(&self) -> TypeIdentity {
        match self {
            Value::Unit => TypeIdentity::Prim(Tag::Unit),
            Value::Bool(_) => TypeIdentity::Prim(Tag::Bool),
            Value::Int(_) => TypeIdentity::Prim(Tag::Int),
            Value::Float(_) => TypeIdentity::Prim(Tag::Float),
            Value::Str(_) => TypeIdentity::Prim(Tag::Str),
            Value::Bytes(_) => TypeIdentity::Prim(Tag::Bytes),
            Value::List(_) => TypeIdentity::Prim(Tag::List),
            Value::Map(_) => TypeIdentity::Prim(Tag::Map),
            Value::Object(obj) => TypeIdentity::Class(obj.class()),
        }
    }

    fn absent() -> Self {
        Value::Unit
    }
}

impl Value {
    /// Wrap a host object, capturing its class identity.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Value::Object(Obj::new(value))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Obj> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
