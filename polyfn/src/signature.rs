//! Ordered type-identity sequences.

use std::fmt;

use crate::identity::TypeIdentity;

/// An ordered sequence of type identities, one per parameter position.
///
/// Definition-side signatures have variadic markers already expanded;
/// call-side signatures are the classified argument types. `Display`
/// renders the comma-separated identity names, which is what dispatch
/// failures report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature(Vec<TypeIdentity>);

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Append one position.
    pub fn push(&mut self, identity: TypeIdentity) {
        self.0.push(identity);
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeIdentity> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<TypeIdentity>> for Signature {
    fn from(identities: Vec<TypeIdentity>) -> Self {
        Self(identities)
    }
}

impl FromIterator<TypeIdentity> for Signature {
    fn from_iter<I: IntoIterator<Item = TypeIdentity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, identity) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{identity}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Tag;

    #[test]
    fn test_display_joins_identity_names() {
        let sig: Signature = [Tag::Int.into(), Tag::Str.into()].into_iter().collect();
        assert_eq!(sig.to_string(), "int, str");
    }

    #[test]
    fn test_empty_signature_displays_empty() {
        assert_eq!(Signature::new().to_string(), "");
    }
}
