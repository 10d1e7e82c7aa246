//! Lazily-resolved data instances.
//!
//! Instances bind types to positions in a [`DataContext`]'s resource. A
//! compound or sequence resolves its members on first access and caches them
//! for its own lifetime; scalar values are read on first access and written
//! back on [`CollectionData::flush`].
//!
//! All access goes through `&self`: resolution state lives in once-cells, so
//! references handed out for member `k` stay valid while members after `k`
//! are resolved.

mod compound;
mod member;
mod scalar;
mod sequence;
mod siblings;
pub(crate) mod slots;

#[cfg(test)]
mod sequence_tests;

pub use compound::CompoundInstance;
pub use member::MemberInstance;
pub use scalar::ScalarMember;
pub use sequence::SequenceInstance;
pub use siblings::Siblings;

use crate::context::DataContext;
use crate::error::{Error, Result};
use crate::types::TypeKind;
use crate::value::Value;

/// Name resolution for [`MemberIndex`].
pub trait MemberLookup {
    /// Index of the member named `name`, if the collection has named members.
    fn member_index(&self, name: &str) -> Option<usize>;

    fn type_name(&self) -> String;
}

/// Something that selects a member: a position or a name.
pub trait MemberIndex {
    fn resolve_index(&self, lookup: &dyn MemberLookup) -> Result<usize>;
}

impl MemberIndex for usize {
    fn resolve_index(&self, _lookup: &dyn MemberLookup) -> Result<usize> {
        Ok(*self)
    }
}

impl MemberIndex for &str {
    fn resolve_index(&self, lookup: &dyn MemberLookup) -> Result<usize> {
        lookup
            .member_index(self)
            .ok_or_else(|| Error::UnknownMember {
                name: (*self).to_string(),
                compound: lookup.type_name(),
            })
    }
}

impl MemberIndex for String {
    fn resolve_index(&self, lookup: &dyn MemberLookup) -> Result<usize> {
        self.as_str().resolve_index(lookup)
    }
}

impl MemberIndex for &String {
    fn resolve_index(&self, lookup: &dyn MemberLookup) -> Result<usize> {
        self.as_str().resolve_index(lookup)
    }
}

macro_rules! scalar_accessors {
    ($($get:ident / $set:ident: $ty:ty;)*) => {
        $(
            #[doc = concat!("Read a scalar member as `", stringify!($ty), "`.")]
            fn $get(&self, member: impl MemberIndex) -> Result<$ty> {
                self.scalar(member)?.$get()
            }

            #[doc = concat!("Write a scalar member from `", stringify!($ty), "`. Takes effect on flush.")]
            fn $set(&self, member: impl MemberIndex, value: $ty) -> Result<()> {
                self.scalar(member)?.$set(value);
                Ok(())
            }
        )*
    };
}

/// Shared behavior of compound and sequence instances.
///
/// Members are addressed by [`MemberIndex`]: a `usize` position, or a name
/// for compounds. Typed getters and setters fail with
/// [`Error::KindMismatch`] when the member is not a scalar.
pub trait CollectionData<'ctx>: MemberLookup + Sized {
    fn context(&self) -> &'ctx DataContext;

    /// Offset of the first byte in the resource.
    fn position(&self) -> u64;

    /// Number of members (compound) or elements (sequence).
    fn element_count(&self) -> usize;

    /// Number of members resolved so far.
    fn resolved_count(&self) -> usize;

    /// Resolve member `index`, and for positional layouts every member before it.
    fn member_instance(&self, index: usize) -> Result<&MemberInstance<'ctx>>;

    /// Byte size; for dynamic layouts this resolves every member.
    fn size(&self) -> Result<u64>;

    /// Write pending scalar values of every resolved member back to the resource.
    ///
    /// Unresolved members are never touched. Flushing twice without
    /// intervening writes performs no further writes.
    fn flush(&self) -> Result<()>;

    fn member(&self, member: impl MemberIndex) -> Result<&MemberInstance<'ctx>> {
        let index = member.resolve_index(self)?;
        self.member_instance(index)
    }

    fn scalar(&self, member: impl MemberIndex) -> Result<&ScalarMember<'ctx>> {
        let index = member.resolve_index(self)?;
        let instance = self.member_instance(index)?;
        instance
            .as_scalar()
            .ok_or_else(|| self.kind_mismatch(index, TypeKind::Simple, instance.kind()))
    }

    fn get_compound(&self, member: impl MemberIndex) -> Result<&CompoundInstance<'ctx>> {
        let index = member.resolve_index(self)?;
        let instance = self.member_instance(index)?;
        instance
            .as_compound()
            .ok_or_else(|| self.kind_mismatch(index, TypeKind::Compound, instance.kind()))
    }

    fn get_sequence(&self, member: impl MemberIndex) -> Result<&SequenceInstance<'ctx>> {
        let index = member.resolve_index(self)?;
        let instance = self.member_instance(index)?;
        instance
            .as_sequence()
            .ok_or_else(|| self.kind_mismatch(index, TypeKind::Sequence, instance.kind()))
    }

    scalar_accessors! {
        get_byte / set_byte: i8;
        get_ubyte / set_ubyte: u8;
        get_short / set_short: i16;
        get_ushort / set_ushort: u16;
        get_int / set_int: i32;
        get_uint / set_uint: u32;
        get_long / set_long: i64;
        get_ulong / set_ulong: u64;
        get_float / set_float: f32;
        get_double / set_double: f64;
    }

    fn get_value(&self, member: impl MemberIndex) -> Result<Value> {
        self.scalar(member)?.value()
    }

    fn set_value(&self, member: impl MemberIndex, value: Value) -> Result<()> {
        self.scalar(member)?.set_value(value);
        Ok(())
    }

    #[doc(hidden)]
    fn kind_mismatch(&self, index: usize, expected: TypeKind, actual: TypeKind) -> Error {
        Error::KindMismatch {
            index,
            collection: self.type_name(),
            expected,
            actual,
        }
    }
}
