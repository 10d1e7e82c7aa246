//! Type descriptions of binary layouts.
//!
//! Types are immutable and shared (`Arc`), carry no data and perform no I/O.
//! A layout is a tree of three kinds:
//! - [`SimpleType`]: fixed-width scalar
//! - [`CompoundType`]: named, ordered members
//! - [`SequenceType`]: homogeneous run whose count is fixed or resolved per instance

mod compound;
mod sequence;
mod simple;

#[cfg(test)]
mod compound_tests;

use std::sync::Arc;

pub use compound::{CompoundMember, CompoundType};
pub use sequence::{CountRule, ElementCount, SequenceType};
pub use simple::SimpleType;

/// Closed set of type kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TypeKind {
    Simple,
    Compound,
    Sequence,
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Simple => "scalar",
            Self::Compound => "compound",
            Self::Sequence => "sequence",
        })
    }
}

/// A layout type.
#[derive(Clone, Debug)]
pub enum Type {
    Simple(SimpleType),
    Compound(Arc<CompoundType>),
    Sequence(Arc<SequenceType>),
}

impl Type {
    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Simple(_) => TypeKind::Simple,
            Self::Compound(_) => TypeKind::Compound,
            Self::Sequence(_) => TypeKind::Sequence,
        }
    }

    /// Display name: the scalar name, the compound name, or `element[count]`.
    pub fn name(&self) -> String {
        match self {
            Self::Simple(t) => t.name().to_string(),
            Self::Compound(t) => t.name().to_string(),
            Self::Sequence(t) => t.name(),
        }
    }

    /// Size in bytes when it does not depend on instance data.
    pub fn static_size(&self) -> Option<u64> {
        match self {
            Self::Simple(t) => Some(t.byte_width() as u64),
            Self::Compound(t) => t.static_size(),
            Self::Sequence(t) => t.static_size(),
        }
    }

    /// Lower bound of the size of any instance.
    ///
    /// Sequences with a resolved count contribute zero.
    pub fn min_size(&self) -> u64 {
        match self {
            Self::Simple(t) => t.byte_width() as u64,
            Self::Compound(t) => t
                .members()
                .iter()
                .fold(0u64, |acc, m| acc.saturating_add(m.ty().min_size())),
            Self::Sequence(t) => match t.element_count() {
                ElementCount::Fixed(n) => (*n as u64).saturating_mul(t.element_type().min_size()),
                ElementCount::Resolved(_) => 0,
            },
        }
    }

    pub fn as_simple(&self) -> Option<SimpleType> {
        match self {
            Self::Simple(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Arc<CompoundType>> {
        match self {
            Self::Compound(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Arc<SequenceType>> {
        match self {
            Self::Sequence(t) => Some(t),
            _ => None,
        }
    }
}

impl From<SimpleType> for Type {
    fn from(t: SimpleType) -> Self {
        Self::Simple(t)
    }
}

impl From<CompoundType> for Type {
    fn from(t: CompoundType) -> Self {
        Self::Compound(Arc::new(t))
    }
}

impl From<Arc<CompoundType>> for Type {
    fn from(t: Arc<CompoundType>) -> Self {
        Self::Compound(t)
    }
}

impl From<SequenceType> for Type {
    fn from(t: SequenceType) -> Self {
        Self::Sequence(Arc::new(t))
    }
}

impl From<Arc<SequenceType>> for Type {
    fn from(t: Arc<SequenceType>) -> Self {
        Self::Sequence(t)
    }
}
