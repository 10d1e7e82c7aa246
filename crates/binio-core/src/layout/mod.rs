//! Layout descriptions loaded from JSON.
//!
//! This module only mirrors the file format. Turning a `RawLayout` into engine
//! types (and rejecting unknown references or cycles) is done by the `binio`
//! crate.

mod json;


pub use json::{LayoutError, RawCount, RawLayout, RawMember, RawType, RawTypeDef, parse_layout};
