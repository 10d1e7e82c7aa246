//! JSON deserialization for layout files.
//!
//! A layout file names a root compound and a table of type definitions:
//!
//! ```json
//! {
//!   "name": "samples",
//!   "byteOrder": "little",
//!   "root": "File",
//!   "types": {
//!     "Point": { "type": "COMPOUND", "members": [
//!       { "name": "x", "type": "float" },
//!       { "name": "y", "type": "float" }
//!     ]},
//!     "File": { "type": "COMPOUND", "members": [
//!       { "name": "count", "type": "int" },
//!       { "name": "points", "type": {
//!         "type": "SEQUENCE", "element": "Point", "count": { "member": "count" }
//!       }}
//!     ]}
//!   }
//! }
//! ```
//!
//! Type references are either a string (a scalar name or the name of an entry
//! in `types`) or an inline definition tagged with `type`.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::ByteOrder;

/// Error during layout parsing.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a layout file.
pub fn parse_layout(json: &str) -> Result<RawLayout, LayoutError> {
    Ok(serde_json::from_str(json)?)
}

/// Raw layout file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLayout {
    pub name: String,
    #[serde(default)]
    pub byte_order: ByteOrder,
    /// Name of the root compound in `types`.
    pub root: String,
    /// Named definitions in file order. IndexMap keeps declaration order.
    #[serde(default)]
    pub types: IndexMap<String, RawType>,
}

impl RawLayout {
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        parse_layout(json)
    }
}

/// A type reference or an inline definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawType {
    /// Scalar kind name or named definition.
    Named(String),
    Def(RawTypeDef),
}

/// Inline structured definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RawTypeDef {
    Compound { members: Vec<RawMember> },
    Sequence {
        element: Box<RawType>,
        count: RawCount,
    },
}

/// Compound member declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawType,
}

/// Element count of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Fixed(u64),
    /// Count is the value of an earlier sibling member.
    Member { member: String },
}
