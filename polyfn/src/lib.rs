//! # Polyfn
//!
//! Runtime multiple-dispatch resolution over signature-keyed overload
//! tables.
//!
//! An overload group is configured once — each definition declares an
//! ordered list of parameter types and a handler — and then finalized into
//! an immutable [`Dispatcher`]. At call time the dispatcher classifies the
//! actual arguments, encodes their type sequence into a compact key, and
//! selects the single matching handler: exact-arity signatures first, then
//! variadic-shaped ("generic") signatures whose keys collapse repetition.
//!
//! # Overview
//!
//! 1. **Classify**: every value maps to a [`TypeIdentity`] — a primitive
//!    [`Tag`] or a per-class token ([`ClassId`]) — via the [`Classify`]
//!    trait. [`Value`] is the bundled reference value model.
//! 2. **Intern**: the group's [`TypeRegistry`] assigns each distinct
//!    identity a stable integer code in first-seen order.
//! 3. **Encode**: a signature's codes become an exact key (run lengths
//!    preserved) and a generic key (run lengths collapsed).
//! 4. **Resolve**: exact table first, generic fallback, or a typed
//!    [`DispatchError`] carrying the attempted signature.
//!
//! # Example
//!
//! ```
//! use polyfn::{OverloadBuilder, Param, Tag, Value};
//!
//! let adder = OverloadBuilder::new()
//!     .add([Param::of(Tag::Int), Param::of(Tag::Int)], |args: Vec<Value>| {
//!         let a = args[0].as_int().unwrap_or(0);
//!         let b = args[1].as_int().unwrap_or(0);
//!         Value::Int(a + b)
//!     })?
//!     .add([Param::of(Tag::Str), Param::of(Tag::Str)], |args: Vec<Value>| {
//!         let mut joined = args[0].as_str().unwrap_or_default().to_string();
//!         joined.push('-');
//!         joined.push_str(args[1].as_str().unwrap_or_default());
//!         Value::Str(joined)
//!     })?
//!     .finalize();
//!
//! assert_eq!(adder.call(vec![Value::Int(1), Value::Int(2)])?, Value::Int(3));
//! assert_eq!(adder.call(vec![Value::from("a"), Value::from("b")])?, Value::from("a-b"));
//! # Ok::<(), polyfn::Error>(())
//! ```
//!
//! Configuration is single-owner by construction; the finalized dispatcher
//! is immutable and `Send + Sync`, so calls may run concurrently.

pub mod builder;
pub mod dispatch;
pub mod encode;
pub mod error;
pub mod identity;
pub mod registry;
pub mod semantic;
pub mod signature;
pub mod value;

pub use builder::{Handler, OverloadBuilder};
pub use dispatch::Dispatcher;
pub use encode::{ExactKey, GenericKey};
pub use error::{ConfigError, DispatchError, Error};
pub use identity::{ClassId, Classify, Tag, TypeIdentity};
pub use registry::{TypeCode, TypeRegistry};
pub use semantic::{Arg, Marker, Param};
pub use signature::Signature;
pub use value::{Obj, Value};
