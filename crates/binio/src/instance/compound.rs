use std::cell::Cell;
use std::sync::Arc;

use log::trace;

use crate::context::DataContext;
use crate::error::{Error, Result};
use crate::types::CompoundType;

use super::slots::Slots;
use super::{CollectionData, MemberInstance, MemberLookup, Siblings};

/// Lazily-resolved view of a compound at a position.
///
/// Member `k` starts where member `k - 1` ends, so accessing member `k`
/// resolves members `0..=k` in order. Each member is resolved at most once
/// and the same instance is returned on every later access.
pub struct CompoundInstance<'ctx> {
    ctx: &'ctx DataContext,
    ty: Arc<CompoundType>,
    position: u64,
    slots: Slots<'ctx>,
    size: Cell<Option<u64>>,
}

impl<'ctx> CompoundInstance<'ctx> {
    pub(crate) fn new(ctx: &'ctx DataContext, ty: Arc<CompoundType>, position: u64) -> Self {
        Self {
            ctx,
            slots: Slots::new(ty.member_count()),
            size: Cell::new(ty.static_size()),
            ty,
            position,
        }
    }

    pub fn compound_type(&self) -> &Arc<CompoundType> {
        &self.ty
    }

    /// Index of the member named `name` (case-sensitive).
    pub fn member_index(&self, name: &str) -> Option<usize> {
        self.ty.member_index(name)
    }

    pub fn member_count(&self) -> usize {
        self.ty.member_count()
    }

    pub fn is_resolved(&self, index: usize) -> bool {
        self.slots.get(index).is_some()
    }

    fn resolve_next(&self) -> Result<()> {
        let index = self.slots.filled();
        let position = match index.checked_sub(1) {
            None => self.position,
            Some(prev) => self.slots.ensure(prev).end(self.ty.name())?,
        };
        let member = &self.ty.members()[index];
        trace!(
            "resolve {}.{} at {position:#x}",
            self.ty.name(),
            member.name()
        );
        let instance = MemberInstance::resolve(
            self.ctx,
            member.ty(),
            position,
            &Siblings::of_compound(self, index),
        )?;
        self.slots.fill(index, instance);
        Ok(())
    }
}

impl MemberLookup for CompoundInstance<'_> {
    fn member_index(&self, name: &str) -> Option<usize> {
        self.ty.member_index(name)
    }

    fn type_name(&self) -> String {
        self.ty.name().to_string()
    }
}

impl<'ctx> CollectionData<'ctx> for CompoundInstance<'ctx> {
    fn context(&self) -> &'ctx DataContext {
        self.ctx
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn element_count(&self) -> usize {
        self.ty.member_count()
    }

    fn resolved_count(&self) -> usize {
        self.slots.filled()
    }

    fn member_instance(&self, index: usize) -> Result<&MemberInstance<'ctx>> {
        let count = self.ty.member_count();
        if index >= count {
            return Err(Error::IndexOutOfRange {
                index,
                count,
                collection: self.ty.name().to_string(),
            });
        }
        while self.slots.filled() <= index {
            self.resolve_next()?;
        }
        Ok(self.slots.ensure(index))
    }

    fn size(&self) -> Result<u64> {
        if let Some(size) = self.size.get() {
            return Ok(size);
        }
        let size = match self.ty.member_count().checked_sub(1) {
            None => 0,
            Some(last) => self.member_instance(last)?.end(self.ty.name())? - self.position,
        };
        self.size.set(Some(size));
        Ok(size)
    }

    fn flush(&self) -> Result<()> {
        self.slots.iter().try_for_each(|member| member.flush())
    }
}

impl std::fmt::Debug for CompoundInstance<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundInstance")
            .field("type", &self.ty.name())
            .field("position", &self.position)
            .field("resolved", &self.slots.filled())
            .finish()
    }
}
