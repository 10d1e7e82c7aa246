//! binio: lazily-resolved read/write views over structured binary data.
//!
//! A [`DataFormat`] describes a layout with [`SimpleType`], [`CompoundType`] and
//! [`SequenceType`]. Opening it against a resource yields a [`DataContext`];
//! its [`data`](DataContext::data) root resolves member offsets on demand,
//! forward from the last resolved member, and buffers writes until
//! [`flush`](CollectionData::flush).
//!
//! # Example
//!
//! ```
//! use binio::{CollectionData, CompoundMember, CompoundType, DataFormat, SequenceType, SimpleType};
//!
//! let record = CompoundType::new(
//!     "Record",
//!     vec![
//!         CompoundMember::new("count", SimpleType::INT),
//!         CompoundMember::new("values", SequenceType::counted_by(SimpleType::SHORT, "count")),
//!     ],
//! );
//! let context = DataFormat::new(record).open_bytes(vec![0, 0, 0, 2, 0, 7, 0, 9]);
//! let data = context.data();
//!
//! assert_eq!(data.get_int("count")?, 2);
//! assert_eq!(data.get_sequence("values")?.get_short(1usize)?, 9);
//! # Ok::<(), binio::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod context;
pub mod dump;
pub mod error;
pub mod format;
pub mod instance;
pub mod io;
pub mod path;
pub mod types;
pub mod value;

mod invariants;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod test_utils;

pub use binio_core::{ByteOrder, Colors, ScalarKind};
pub use context::DataContext;
pub use dump::{Dumper, dump, dump_types};
pub use error::{Error, ErrorKind, Result};
pub use format::DataFormat;
pub use instance::{
    CollectionData, CompoundInstance, MemberIndex, MemberInstance, MemberLookup, ScalarMember,
    SequenceInstance, Siblings,
};
pub use io::{AccessStats, FileHandler, IoHandler, MemoryHandler, MmapHandler, TracingHandler};
pub use path::{FieldPath, PathSegment};
pub use types::{
    CompoundMember, CompoundType, CountRule, ElementCount, SequenceType, SimpleType, Type,
    TypeKind,
};
pub use value::Value;
