use std::sync::Arc;

use log::trace;

use crate::context::DataContext;
use crate::error::{Error, Result};
use crate::types::{Type, TypeKind};

use super::{CollectionData, CompoundInstance, ScalarMember, SequenceInstance, Siblings};

/// A resolved member of a compound or an element of a sequence.
#[derive(Debug)]
pub enum MemberInstance<'ctx> {
    Scalar(ScalarMember<'ctx>),
    Compound(CompoundInstance<'ctx>),
    Sequence(SequenceInstance<'ctx>),
}

impl<'ctx> MemberInstance<'ctx> {
    /// Bind `ty` at `position`. Sequences evaluate their count rule here.
    pub(crate) fn resolve(
        ctx: &'ctx DataContext,
        ty: &Type,
        position: u64,
        siblings: &Siblings<'_, 'ctx>,
    ) -> Result<Self> {
        trace!("bind {} at {position:#x}", ty.name());
        Ok(match ty {
            Type::Simple(simple) => Self::Scalar(ScalarMember::new(ctx, position, *simple)),
            Type::Compound(compound) => {
                Self::Compound(CompoundInstance::new(ctx, Arc::clone(compound), position))
            }
            Type::Sequence(sequence) => Self::Sequence(SequenceInstance::resolve(
                ctx,
                Arc::clone(sequence),
                position,
                siblings,
            )?),
        })
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Simple,
            Self::Compound(_) => TypeKind::Compound,
            Self::Sequence(_) => TypeKind::Sequence,
        }
    }

    pub fn position(&self) -> u64 {
        match self {
            Self::Scalar(s) => s.position(),
            Self::Compound(c) => c.position(),
            Self::Sequence(s) => s.position(),
        }
    }

    /// Byte size. Dynamic containers resolve all their members to answer.
    pub fn size(&self) -> Result<u64> {
        match self {
            Self::Scalar(s) => Ok(s.simple_type().byte_width() as u64),
            Self::Compound(c) => c.size(),
            Self::Sequence(s) => s.size(),
        }
    }

    pub fn type_name(&self) -> String {
        match self {
            Self::Scalar(s) => s.simple_type().name().to_string(),
            Self::Compound(c) => c.compound_type().name().to_string(),
            Self::Sequence(s) => s.sequence_type().name(),
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarMember<'ctx>> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&CompoundInstance<'ctx>> {
        match self {
            Self::Compound(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&SequenceInstance<'ctx>> {
        match self {
            Self::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn flush(&self) -> Result<()> {
        match self {
            Self::Scalar(s) => s.flush(),
            Self::Compound(c) => c.flush(),
            Self::Sequence(s) => s.flush(),
        }
    }

    /// First byte after this member, where its successor starts.
    pub(crate) fn end(&self, owner: &str) -> Result<u64> {
        let position = self.position();
        position
            .checked_add(self.size()?)
            .ok_or_else(|| Error::layout(owner, format!("member at {position:#x} overflows")))
    }
}
