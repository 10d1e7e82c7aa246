//! Dotted field paths such as `header.values[3].x`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::instance::{CollectionData, CompoundInstance, MemberInstance, ScalarMember};
use crate::value::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    /// Compound member by name.
    Member(String),
    /// Member or element by position.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member(name) => f.write_str(name),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

/// Address of a member below a root compound.
///
/// A path is a member name followed by any number of `.name` or `[index]`
/// steps. Indices also address compound members by position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    text: String,
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn parse(text: &str) -> Result<Self> {
        let error = |message: String| Error::InvalidPath {
            path: text.to_string(),
            message,
        };

        let mut segments = Vec::new();
        let mut rest = text;
        loop {
            let end = rest.find(['.', '[']).unwrap_or(rest.len());
            let (name, tail) = rest.split_at(end);
            if name.is_empty() {
                return Err(error("expected a member name".to_string()));
            }
            segments.push(PathSegment::Member(name.to_string()));
            rest = tail;

            while let Some(after) = rest.strip_prefix('[') {
                let close = after
                    .find(']')
                    .ok_or_else(|| error("unclosed '['".to_string()))?;
                let digits = &after[..close];
                let index = digits
                    .parse()
                    .map_err(|_| error(format!("invalid index '{digits}'")))?;
                segments.push(PathSegment::Index(index));
                rest = &after[close + 1..];
            }

            if rest.is_empty() {
                break;
            }
            rest = rest
                .strip_prefix('.')
                .ok_or_else(|| error(format!("expected '.' or '[' before '{rest}'")))?;
        }

        Ok(Self {
            text: text.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Member the path names, resolving every member on the way.
    pub fn resolve_member<'a, 'ctx>(
        &self,
        root: &'a CompoundInstance<'ctx>,
    ) -> Result<&'a MemberInstance<'ctx>> {
        let mut current: Option<&'a MemberInstance<'ctx>> = None;
        for segment in &self.segments {
            let next = match current {
                None => step(root, segment)?,
                Some(MemberInstance::Compound(compound)) => step(compound, segment)?,
                Some(MemberInstance::Sequence(sequence)) => match segment {
                    PathSegment::Index(_) => step(sequence, segment)?,
                    PathSegment::Member(name) => {
                        return Err(self.error(format!("'{name}' applied to a sequence")));
                    }
                },
                Some(MemberInstance::Scalar(_)) => {
                    return Err(self.error(format!("'{segment}' applied to a scalar")));
                }
            };
            current = Some(next);
        }
        current.ok_or_else(|| self.error("empty path".to_string()))
    }

    /// Scalar the path names.
    pub fn resolve<'a, 'ctx>(
        &self,
        root: &'a CompoundInstance<'ctx>,
    ) -> Result<&'a ScalarMember<'ctx>> {
        let member = self.resolve_member(root)?;
        member
            .as_scalar()
            .ok_or_else(|| self.error(format!("names a {}, not a scalar", member.kind())))
    }

    pub fn read_value(&self, root: &CompoundInstance<'_>) -> Result<Value> {
        self.resolve(root)?.value()
    }

    /// Parse `text` as the declared scalar kind and store it. Takes effect on flush.
    pub fn write_value(&self, root: &CompoundInstance<'_>, text: &str) -> Result<Value> {
        let scalar = self.resolve(root)?;
        let value = Value::parse(text, scalar.simple_type().kind())?;
        scalar.set_value(value);
        Ok(value)
    }

    fn error(&self, message: String) -> Error {
        Error::InvalidPath {
            path: self.text.clone(),
            message,
        }
    }
}

fn step<'a, 'ctx, C>(collection: &'a C, segment: &PathSegment) -> Result<&'a MemberInstance<'ctx>>
where
    C: CollectionData<'ctx>,
{
    match segment {
        PathSegment::Member(name) => collection.member(name.as_str()),
        PathSegment::Index(index) => collection.member(*index),
    }
}

impl FromStr for FieldPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
