//! Terminal styling for dumps and type listings.

/// ANSI escape sequences keyed by what they highlight.
///
/// `Colors::OFF` has every field empty, so format strings can interpolate the
/// fields unconditionally.
#[derive(Clone, Copy, Debug, Default)]
pub struct Colors {
    /// Member and type names (blue).
    pub name: &'static str,
    /// Decoded scalar values (green).
    pub value: &'static str,
    /// Offsets, sizes and elision markers (dim).
    pub meta: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        value: "\x1b[32m",
        meta: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        value: "",
        meta: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
