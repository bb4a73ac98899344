//! Type registry: interning of type identities to integer codes.
//!
//! Codes are the alphabet for signature keys. They are assigned once, in
//! first-seen order, starting from [`TypeRegistry::FIRST_CODE`], and are
//! never reused or reassigned within the lifetime of one overload group.
//! The registry grows only while the group is being built; the finalized
//! dispatcher holds it read-only.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::identity::TypeIdentity;

/// A registry-assigned integer code for one type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCode(u32);

impl TypeCode {
    /// The raw code value.
    pub fn get(self) -> u32 {
        self.0
    }
}

/// Interns [`TypeIdentity`] values to stable [`TypeCode`]s.
///
/// Primitive-tag identities and class-token identities share one table;
/// the identity's own equality decides collisions. There is no removal
/// operation.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    codes: IndexMap<TypeIdentity, TypeCode, FxBuildHasher>,
}

impl TypeRegistry {
    /// The code assigned to the first identity seen.
    pub const FIRST_CODE: u32 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identity's code, allocating the next one on first sight.
    pub fn intern(&mut self, identity: TypeIdentity) -> TypeCode {
        let next = TypeCode(Self::FIRST_CODE + self.codes.len() as u32);
        *self.codes.entry(identity).or_insert(next)
    }

    /// Look up an identity without allocating.
    ///
    /// Call-time classification uses this: an identity that was never part
    /// of any definition has no code and cannot match any table.
    pub fn code_of(&self, identity: TypeIdentity) -> Option<TypeCode> {
        self.codes.get(&identity).copied()
    }

    /// Number of interned identities.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Interned identities in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeIdentity, TypeCode)> + '_ {
        self.codes.iter().map(|(&identity, &code)| (identity, code))
    }
}
