use crate::error::{Error, Result};

use super::{
    CollectionData, CompoundInstance, MemberIndex, MemberInstance, MemberLookup, SequenceInstance,
};

#[derive(Clone, Copy)]
enum Parent<'a, 'ctx> {
    Root,
    Compound(&'a CompoundInstance<'ctx>),
    Sequence(&'a SequenceInstance<'ctx>),
}

/// What an element-count rule can observe while a sequence is being bound.
///
/// Only the members that precede the sequence inside its parent are visible.
/// They are resolved on demand; later members and the sequence itself are
/// not, so a rule cannot observe state that depends on its own outcome.
pub struct Siblings<'a, 'ctx> {
    parent: Parent<'a, 'ctx>,
    limit: usize,
}

impl<'a, 'ctx> Siblings<'a, 'ctx> {
    /// No parent: nothing is visible.
    pub(crate) fn root() -> Self {
        Self {
            parent: Parent::Root,
            limit: 0,
        }
    }

    pub(crate) fn of_compound(parent: &'a CompoundInstance<'ctx>, limit: usize) -> Self {
        Self {
            parent: Parent::Compound(parent),
            limit,
        }
    }

    pub(crate) fn of_sequence(parent: &'a SequenceInstance<'ctx>, limit: usize) -> Self {
        Self {
            parent: Parent::Sequence(parent),
            limit,
        }
    }

    /// Number of visible members.
    pub fn len(&self) -> usize {
        self.limit
    }

    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }

    pub fn member(&self, member: impl MemberIndex) -> Result<&'a MemberInstance<'ctx>> {
        let index = member
            .resolve_index(self)
            .map_err(|err| self.layout_error(err.to_string()))?;
        if index >= self.limit {
            return Err(self.layout_error(format!(
                "member {index} is not visible to a count rule ({} preceding members)",
                self.limit
            )));
        }
        match self.parent {
            Parent::Root => Err(self.layout_error("a root instance has no siblings")),
            Parent::Compound(compound) => compound.member_instance(index),
            Parent::Sequence(sequence) => sequence.member_instance(index),
        }
    }

    /// Integer value of a visible scalar member.
    pub fn get_long(&self, member: impl MemberIndex) -> Result<i64> {
        self.scalar_of(member)?.get_long()
    }

    pub fn get_double(&self, member: impl MemberIndex) -> Result<f64> {
        self.scalar_of(member)?.get_double()
    }

    fn scalar_of(&self, member: impl MemberIndex) -> Result<&'a super::ScalarMember<'ctx>> {
        let instance = self.member(member)?;
        instance.as_scalar().ok_or_else(|| {
            self.layout_error(format!(
                "count source at {:#x} is a {}, not a scalar",
                instance.position(),
                instance.kind()
            ))
        })
    }

    /// Layout error attributed to the parent type.
    pub fn layout_error(&self, message: impl Into<String>) -> Error {
        Error::layout(self.type_name(), message)
    }
}

impl MemberLookup for Siblings<'_, '_> {
    fn member_index(&self, name: &str) -> Option<usize> {
        match self.parent {
            Parent::Compound(compound) => compound.member_index(name),
            Parent::Root | Parent::Sequence(_) => None,
        }
    }

    fn type_name(&self) -> String {
        match self.parent {
            Parent::Root => "<root>".to_string(),
            Parent::Compound(compound) => compound.compound_type().name().to_string(),
            Parent::Sequence(sequence) => sequence.sequence_type().name(),
        }
    }
}
