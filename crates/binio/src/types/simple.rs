use binio_core::ScalarKind;

/// Fixed-width scalar type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SimpleType {
    kind: ScalarKind,
}

impl SimpleType {
    pub const BYTE: Self = Self::new(ScalarKind::Byte);
    pub const UBYTE: Self = Self::new(ScalarKind::UByte);
    pub const SHORT: Self = Self::new(ScalarKind::Short);
    pub const USHORT: Self = Self::new(ScalarKind::UShort);
    pub const INT: Self = Self::new(ScalarKind::Int);
    pub const UINT: Self = Self::new(ScalarKind::UInt);
    pub const LONG: Self = Self::new(ScalarKind::Long);
    pub const ULONG: Self = Self::new(ScalarKind::ULong);
    pub const FLOAT: Self = Self::new(ScalarKind::Float);
    pub const DOUBLE: Self = Self::new(ScalarKind::Double);

    pub const fn new(kind: ScalarKind) -> Self {
        Self { kind }
    }

    /// Look up a scalar type by layout name (`int`, `uint16`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        ScalarKind::from_name(name).map(Self::new)
    }

    pub fn kind(self) -> ScalarKind {
        self.kind
    }

    pub fn name(self) -> &'static str {
        self.kind.name()
    }

    pub fn byte_width(self) -> usize {
        self.kind.byte_width()
    }

    pub fn is_signed(self) -> bool {
        self.kind.is_signed()
    }

    pub fn is_float(self) -> bool {
        self.kind.is_float()
    }

    /// Mask covering the low `byte_width` bytes.
    pub(crate) fn mask(self) -> u64 {
        match self.byte_width() {
            8 => u64::MAX,
            w => (1u64 << (w * 8)) - 1,
        }
    }
}
