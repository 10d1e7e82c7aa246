//! Data formats: a root compound type, a byte order and named type definitions.

use std::path::Path;
use std::sync::Arc;

use binio_core::{ByteOrder, RawCount, RawLayout, RawType, RawTypeDef, ScalarKind};
use indexmap::IndexMap;
use log::debug;

use crate::context::DataContext;
use crate::error::{Error, Result};
use crate::io::{FileHandler, IoHandler, MemoryHandler};
use crate::types::{CompoundMember, CompoundType, SequenceType, SimpleType, Type};

/// Description of a binary format that can be opened against resources.
///
/// Cloning is cheap: types are shared.
#[derive(Clone, Debug)]
pub struct DataFormat {
    name: String,
    root: Arc<CompoundType>,
    byte_order: ByteOrder,
    type_defs: IndexMap<String, Type>,
}

impl DataFormat {
    /// Big-endian format named after its root type.
    pub fn new(root: impl Into<Arc<CompoundType>>) -> Self {
        let root = root.into();
        Self {
            name: root.name().to_string(),
            root,
            byte_order: ByteOrder::default(),
            type_defs: IndexMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_type(&self) -> &Arc<CompoundType> {
        &self.root
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Register a named type definition.
    pub fn add_type_def(&mut self, name: impl Into<String>, ty: impl Into<Type>) -> Result<()> {
        let name = name.into();
        if self.type_defs.contains_key(&name) {
            return Err(Error::layout(&self.name, format!("type '{name}' is already defined")));
        }
        self.type_defs.insert(name, ty.into());
        Ok(())
    }

    pub fn type_def(&self, name: &str) -> Option<&Type> {
        self.type_defs.get(name)
    }

    /// Named definitions in registration order.
    pub fn type_defs(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.type_defs.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Build a format from a parsed layout file.
    pub fn from_layout(layout: &RawLayout) -> Result<Self> {
        let mut resolver = Resolver {
            layout,
            resolved: IndexMap::new(),
            in_progress: Vec::new(),
        };
        for name in layout.types.keys() {
            if ScalarKind::from_name(name).is_some() {
                return Err(Error::layout(
                    &layout.name,
                    format!("type '{name}' shadows a scalar type"),
                ));
            }
            resolver.named(name)?;
        }

        let root = match resolver.named(&layout.root)? {
            Type::Compound(root) => root,
            other => {
                let (root, kind) = (&layout.root, other.kind());
                return Err(Error::layout(
                    &layout.name,
                    format!("root type '{root}' is a {kind}, not a compound"),
                ));
            }
        };

        // Resolution order follows references; keep declaration order instead.
        let type_defs: IndexMap<String, Type> = layout
            .types
            .keys()
            .filter_map(|name| Some((name.clone(), resolver.resolved.get(name)?.clone())))
            .collect();
        debug!(
            "loaded layout '{}' with {} type definitions",
            layout.name,
            type_defs.len()
        );
        Ok(Self {
            name: layout.name.clone(),
            root,
            byte_order: layout.byte_order,
            type_defs,
        })
    }

    /// Parse and build a format from layout JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_layout(&RawLayout::from_json(json)?)
    }

    /// Open this format against a resource.
    pub fn create_context(&self, handler: impl IoHandler + 'static) -> DataContext {
        DataContext::new(self.clone(), handler)
    }

    /// Open an existing file for reading and writing.
    pub fn open_file(&self, path: impl AsRef<Path>) -> Result<DataContext> {
        Ok(self.create_context(FileHandler::open(path)?))
    }

    pub fn open_file_read_only(&self, path: impl AsRef<Path>) -> Result<DataContext> {
        Ok(self.create_context(FileHandler::open_read_only(path)?))
    }

    /// Open an in-memory block.
    pub fn open_bytes(&self, bytes: impl Into<Vec<u8>>) -> DataContext {
        self.create_context(MemoryHandler::new(bytes.into()))
    }
}

/// Turns raw layout types into shared [`Type`]s, resolving each named
/// definition once.
struct Resolver<'a> {
    layout: &'a RawLayout,
    resolved: IndexMap<String, Type>,
    /// Named definitions currently being resolved, outermost first.
    in_progress: Vec<&'a str>,
}

impl<'a> Resolver<'a> {
    fn named(&mut self, name: &str) -> Result<Type> {
        if let Some(kind) = ScalarKind::from_name(name) {
            return Ok(SimpleType::new(kind).into());
        }
        if let Some(ty) = self.resolved.get(name) {
            return Ok(ty.clone());
        }

        let layout = self.layout;
        let Some((key, raw)) = layout.types.get_key_value(name) else {
            return Err(Error::layout(&layout.name, format!("unknown type '{name}'")));
        };
        if self.in_progress.contains(&key.as_str()) {
            let mut cycle = self.in_progress.join(" -> ");
            cycle.push_str(" -> ");
            cycle.push_str(key);
            return Err(Error::layout(&layout.name, format!("type cycle: {cycle}")));
        }

        self.in_progress.push(key);
        let ty = self.resolve(key, raw);
        self.in_progress.pop();
        let ty = ty?;
        self.resolved.insert(key.clone(), ty.clone());
        Ok(ty)
    }

    /// Resolve `raw`, naming inline definitions after `path`.
    fn resolve(&mut self, path: &str, raw: &'a RawType) -> Result<Type> {
        match raw {
            RawType::Named(name) => self.named(name),
            RawType::Def(def) => self.definition(path, def),
        }
    }

    fn definition(&mut self, path: &str, def: &'a RawTypeDef) -> Result<Type> {
        match def {
            RawTypeDef::Compound { members } => {
                let mut resolved = Vec::with_capacity(members.len());
                for member in members {
                    let ty = self.resolve(&format!("{path}.{}", member.name), &member.ty)?;
                    resolved.push(CompoundMember::new(&member.name, ty));
                }
                Ok(CompoundType::try_new(path, resolved)?.into())
            }
            RawTypeDef::Sequence { element, count } => {
                let element = self.resolve(&format!("{path}[]"), element)?;
                let sequence = match count {
                    RawCount::Fixed(count) => {
                        let count = usize::try_from(*count).map_err(|_| {
                            Error::layout(path, format!("element count {count} is too large"))
                        })?;
                        SequenceType::new(element, count)
                    }
                    RawCount::Member { member } => SequenceType::counted_by(element, member),
                };
                Ok(sequence.into())
            }
        }
    }
}
