use std::cell::Cell;
use std::sync::Arc;

use log::trace;

use crate::context::DataContext;
use crate::error::{Error, Result};
use crate::types::{ElementCount, SequenceType};

use super::slots::Slots;
use super::{CollectionData, MemberInstance, MemberLookup, Siblings};

/// Lazily-resolved view of a sequence at a position.
///
/// The element count is fixed when the instance is created. Elements of a
/// statically sized type are positioned directly; otherwise element `k`
/// resolves elements `0..=k` like compound members.
pub struct SequenceInstance<'ctx> {
    ctx: &'ctx DataContext,
    ty: Arc<SequenceType>,
    position: u64,
    count: usize,
    element_size: Option<u64>,
    slots: Slots<'ctx>,
    size: Cell<Option<u64>>,
}

impl<'ctx> SequenceInstance<'ctx> {
    /// Bind `ty` at `position`, evaluating its count rule against `siblings`.
    pub(crate) fn resolve(
        ctx: &'ctx DataContext,
        ty: Arc<SequenceType>,
        position: u64,
        siblings: &Siblings<'_, 'ctx>,
    ) -> Result<Self> {
        let count = match ty.element_count() {
            ElementCount::Fixed(count) => *count,
            ElementCount::Resolved(rule) => {
                let count = rule.resolve(siblings)?;
                trace!("{} resolved to {count} elements", ty.name());
                count
            }
        };
        check_fits(ctx, &ty, position, count)?;
        let element_size = ty.element_type().static_size();
        let size = element_size.and_then(|size| size.checked_mul(count as u64));
        Ok(Self {
            ctx,
            position,
            count,
            element_size,
            slots: Slots::new(count),
            size: Cell::new(size),
            ty,
        })
    }

    pub fn sequence_type(&self) -> &Arc<SequenceType> {
        &self.ty
    }

    pub fn is_resolved(&self, index: usize) -> bool {
        self.slots.get(index).is_some()
    }

    fn element_position(&self, index: usize, element_size: u64) -> Result<u64> {
        element_size
            .checked_mul(index as u64)
            .and_then(|offset| self.position.checked_add(offset))
            .ok_or_else(|| {
                let message = format!("element {index} position overflows");
                Error::layout(self.ty.name(), message)
            })
    }

    fn bind(&self, index: usize, position: u64) -> Result<&MemberInstance<'ctx>> {
        let instance = MemberInstance::resolve(
            self.ctx,
            self.ty.element_type(),
            position,
            &Siblings::of_sequence(self, index),
        )?;
        Ok(self.slots.fill(index, instance))
    }

    fn resolve_next(&self) -> Result<()> {
        let index = self.slots.filled();
        let position = match index.checked_sub(1) {
            None => self.position,
            Some(prev) => self.slots.ensure(prev).end(&self.ty.name())?,
        };
        self.bind(index, position)?;
        Ok(())
    }
}

/// Reject counts that cannot fit in the remaining resource.
///
/// Every element is charged at least one byte, so the slot table never
/// outgrows the resource even for zero-size elements.
fn check_fits(ctx: &DataContext, ty: &SequenceType, position: u64, count: usize) -> Result<()> {
    if count == 0 {
        return Ok(());
    }
    let min = ty.element_type().min_size().max(1);
    let extent = ctx.extent()?;
    let available = extent.saturating_sub(position);
    if (count as u64).saturating_mul(min) > available {
        return Err(Error::layout(
            ty.name(),
            format!(
                "{count} elements of at least {min} bytes at {position:#x} exceed resource extent {extent:#x}"
            ),
        ));
    }
    Ok(())
}

impl MemberLookup for SequenceInstance<'_> {
    fn member_index(&self, _name: &str) -> Option<usize> {
        None
    }

    fn type_name(&self) -> String {
        self.ty.name()
    }
}

impl<'ctx> CollectionData<'ctx> for SequenceInstance<'ctx> {
    fn context(&self) -> &'ctx DataContext {
        self.ctx
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn element_count(&self) -> usize {
        self.count
    }

    fn resolved_count(&self) -> usize {
        self.slots.filled()
    }

    fn member_instance(&self, index: usize) -> Result<&MemberInstance<'ctx>> {
        if index >= self.count {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.count,
                collection: self.ty.name(),
            });
        }
        if let Some(element) = self.slots.get(index) {
            return Ok(element);
        }
        match self.element_size {
            Some(size) => {
                let position = self.element_position(index, size)?;
                self.bind(index, position)
            }
            None => {
                while self.slots.filled() <= index {
                    self.resolve_next()?;
                }
                Ok(self.slots.ensure(index))
            }
        }
    }

    fn size(&self) -> Result<u64> {
        if let Some(size) = self.size.get() {
            return Ok(size);
        }
        let size = match self.count.checked_sub(1) {
            None => 0,
            Some(last) => self.member_instance(last)?.end(&self.ty.name())? - self.position,
        };
        self.size.set(Some(size));
        Ok(size)
    }

    fn flush(&self) -> Result<()> {
        self.slots.iter().try_for_each(|member| member.flush())
    }
}

impl std::fmt::Debug for SequenceInstance<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceInstance")
            .field("type", &self.ty.name())
            .field("position", &self.position)
            .field("count", &self.count)
            .field("resolved", &self.slots.filled())
            .finish()
    }
}
