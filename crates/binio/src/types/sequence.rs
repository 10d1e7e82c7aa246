use std::fmt;
use std::sync::Arc;

use super::Type;
use crate::error::Result;
use crate::instance::Siblings;

type ResolveFn = dyn Fn(&Siblings<'_, '_>) -> Result<usize> + Send + Sync;

/// Size-resolution rule for a sequence whose element count lives in the data.
///
/// The rule runs once, when the sequence instance is created, and may only
/// observe siblings that precede the sequence in its parent collection.
#[derive(Clone)]
pub struct CountRule {
    description: String,
    resolve: Arc<ResolveFn>,
}

impl CountRule {
    /// Create a rule from a closure.
    ///
    /// `description` is shown in the sequence's type name (`double[description]`).
    pub fn new<F>(description: impl Into<String>, resolve: F) -> Self
    where
        F: Fn(&Siblings<'_, '_>) -> Result<usize> + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            resolve: Arc::new(resolve),
        }
    }

    /// Count is the integer value of the preceding sibling `name`.
    pub fn member(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), move |siblings| {
            let value = siblings.get_long(name.as_str())?;
            usize::try_from(value).map_err(|_| {
                siblings.layout_error(format!("element count from '{name}' is negative: {value}"))
            })
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn resolve(&self, siblings: &Siblings<'_, '_>) -> Result<usize> {
        (self.resolve)(siblings)
    }
}

impl fmt::Debug for CountRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CountRule").field(&self.description).finish()
    }
}

/// Element count of a sequence type.
#[derive(Clone, Debug)]
pub enum ElementCount {
    Fixed(usize),
    /// Resolved per instance.
    Resolved(CountRule),
}

/// Homogeneous run of elements.
#[derive(Clone, Debug)]
pub struct SequenceType {
    element: Type,
    count: ElementCount,
}

impl SequenceType {
    /// Sequence with a fixed element count.
    pub fn new(element: impl Into<Type>, count: usize) -> Self {
        Self {
            element: element.into(),
            count: ElementCount::Fixed(count),
        }
    }

    /// Sequence whose count is computed by `rule`.
    pub fn with_count_rule(element: impl Into<Type>, rule: CountRule) -> Self {
        Self {
            element: element.into(),
            count: ElementCount::Resolved(rule),
        }
    }

    /// Sequence whose count is the value of the preceding sibling `member`.
    pub fn counted_by(element: impl Into<Type>, member: impl Into<String>) -> Self {
        Self::with_count_rule(element, CountRule::member(member))
    }

    pub fn element_type(&self) -> &Type {
        &self.element
    }

    pub fn element_count(&self) -> &ElementCount {
        &self.count
    }

    pub fn fixed_count(&self) -> Option<usize> {
        match self.count {
            ElementCount::Fixed(n) => Some(n),
            ElementCount::Resolved(_) => None,
        }
    }

    pub fn name(&self) -> String {
        match &self.count {
            ElementCount::Fixed(n) => format!("{}[{n}]", self.element.name()),
            ElementCount::Resolved(rule) => {
                format!("{}[{}]", self.element.name(), rule.description())
            }
        }
    }

    /// `count * element size` when both are known statically.
    pub fn static_size(&self) -> Option<u64> {
        let count = self.fixed_count()?;
        self.element.static_size()?.checked_mul(count as u64)
    }
}
