use indexmap::IndexMap;

use super::Type;
use crate::error::{Error, Result};

/// One named member of a compound.
#[derive(Clone, Debug)]
pub struct CompoundMember {
    name: String,
    ty: Type,
}

impl CompoundMember {
    pub fn new(name: impl Into<String>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Size in bytes, or `None` when the member is unbound (sized per instance).
    pub fn static_size(&self) -> Option<u64> {
        self.ty.static_size()
    }
}

/// Record type with a fixed, ordered set of uniquely named members.
#[derive(Clone, Debug)]
pub struct CompoundType {
    name: String,
    members: Vec<CompoundMember>,
    /// Member name to declaration index.
    index: IndexMap<String, usize>,
    /// Sum of member sizes when every member has a static size.
    static_size: Option<u64>,
}

impl CompoundType {
    /// Create a compound type.
    ///
    /// # Panics
    /// Panics if two members share a name. Use [`try_new`](Self::try_new)
    /// for descriptions that come from untrusted input.
    pub fn new(name: impl Into<String>, members: Vec<CompoundMember>) -> Self {
        match Self::try_new(name, members) {
            Ok(ty) => ty,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a compound type, rejecting duplicate member names.
    pub fn try_new(name: impl Into<String>, members: Vec<CompoundMember>) -> Result<Self> {
        let name = name.into();

        let mut index = IndexMap::with_capacity(members.len());
        for (i, member) in members.iter().enumerate() {
            if index.insert(member.name().to_string(), i).is_some() {
                let message = format!("duplicate member '{}'", member.name());
                return Err(Error::layout(name, message));
            }
        }

        let static_size = members.iter().try_fold(0u64, |acc, m| {
            m.static_size().and_then(|size| acc.checked_add(size))
        });

        Ok(Self {
            name,
            members,
            index,
            static_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[CompoundMember] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn member(&self, index: usize) -> Option<&CompoundMember> {
        self.members.get(index)
    }

    /// Declaration-order index of a member. Case-sensitive exact match.
    pub fn member_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn static_size(&self) -> Option<u64> {
        self.static_size
    }
}
