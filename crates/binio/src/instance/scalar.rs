use std::cell::Cell;

use binio_core::ScalarKind;

use crate::context::DataContext;
use crate::error::Result;
use crate::types::SimpleType;
use crate::value::Value;

/// Scalar binding: one typed field at a fixed position.
///
/// The value is read from the resource on first access and cached. Writes
/// replace the cached value and mark the binding dirty; nothing reaches the
/// resource until [`flush`](Self::flush).
///
/// Accessors convert between the declared type and the requested one the way
/// Rust's `as` does: integers are truncated or sign/zero-extended, floats are
/// rounded toward zero and saturated when read as integers.
pub struct ScalarMember<'ctx> {
    ctx: &'ctx DataContext,
    position: u64,
    ty: SimpleType,
    /// Raw bits, zero-extended from `ty.byte_width()` bytes.
    value: Cell<Option<u64>>,
    dirty: Cell<bool>,
}

impl<'ctx> ScalarMember<'ctx> {
    pub(crate) fn new(ctx: &'ctx DataContext, position: u64, ty: SimpleType) -> Self {
        Self {
            ctx,
            position,
            ty,
            value: Cell::new(None),
            dirty: Cell::new(false),
        }
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn simple_type(&self) -> SimpleType {
        self.ty
    }

    /// Whether a written value awaits flush.
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Whether the value has been read or written.
    pub fn is_loaded(&self) -> bool {
        self.value.get().is_some()
    }

    fn raw(&self) -> Result<u64> {
        if let Some(bits) = self.value.get() {
            return Ok(bits);
        }
        let bits = self.ctx.read_raw(self.position, self.ty)?;
        self.value.set(Some(bits));
        Ok(bits)
    }

    fn store(&self, bits: u64) {
        self.value.set(Some(bits & self.ty.mask()));
        self.dirty.set(true);
    }

    fn int_value(&self) -> Result<i64> {
        let raw = self.raw()?;
        Ok(match self.ty.kind() {
            ScalarKind::Byte => raw as u8 as i8 as i64,
            ScalarKind::UByte => raw as u8 as i64,
            ScalarKind::Short => raw as u16 as i16 as i64,
            ScalarKind::UShort => raw as u16 as i64,
            ScalarKind::Int => raw as u32 as i32 as i64,
            ScalarKind::UInt => raw as u32 as i64,
            ScalarKind::Long | ScalarKind::ULong => raw as i64,
            ScalarKind::Float => f32::from_bits(raw as u32) as i64,
            ScalarKind::Double => f64::from_bits(raw) as i64,
        })
    }

    fn float_value(&self) -> Result<f64> {
        Ok(match self.ty.kind() {
            ScalarKind::Float => f32::from_bits(self.raw()? as u32) as f64,
            ScalarKind::Double => f64::from_bits(self.raw()?),
            ScalarKind::ULong => self.raw()? as f64,
            _ => self.int_value()? as f64,
        })
    }

    fn set_int_value(&self, value: i64) {
        match self.ty.kind() {
            ScalarKind::Float => self.store((value as f32).to_bits() as u64),
            ScalarKind::Double => self.store((value as f64).to_bits()),
            _ => self.store(value as u64),
        }
    }

    fn set_float_value(&self, value: f64) {
        match self.ty.kind() {
            ScalarKind::Float => self.store((value as f32).to_bits() as u64),
            ScalarKind::Double => self.store(value.to_bits()),
            ScalarKind::ULong => self.store(value as u64),
            _ => self.store(value as i64 as u64),
        }
    }

    pub fn get_byte(&self) -> Result<i8> {
        Ok(self.int_value()? as i8)
    }

    pub fn get_ubyte(&self) -> Result<u8> {
        Ok(self.int_value()? as u8)
    }

    pub fn get_short(&self) -> Result<i16> {
        Ok(self.int_value()? as i16)
    }

    pub fn get_ushort(&self) -> Result<u16> {
        Ok(self.int_value()? as u16)
    }

    pub fn get_int(&self) -> Result<i32> {
        Ok(self.int_value()? as i32)
    }

    pub fn get_uint(&self) -> Result<u32> {
        Ok(self.int_value()? as u32)
    }

    pub fn get_long(&self) -> Result<i64> {
        self.int_value()
    }

    pub fn get_ulong(&self) -> Result<u64> {
        match self.ty.kind() {
            ScalarKind::Float | ScalarKind::Double => Ok(self.float_value()? as u64),
            _ => Ok(self.int_value()? as u64),
        }
    }

    pub fn get_float(&self) -> Result<f32> {
        Ok(self.float_value()? as f32)
    }

    pub fn get_double(&self) -> Result<f64> {
        self.float_value()
    }

    pub fn set_byte(&self, value: i8) {
        self.set_int_value(value as i64);
    }

    pub fn set_ubyte(&self, value: u8) {
        self.set_int_value(value as i64);
    }

    pub fn set_short(&self, value: i16) {
        self.set_int_value(value as i64);
    }

    pub fn set_ushort(&self, value: u16) {
        self.set_int_value(value as i64);
    }

    pub fn set_int(&self, value: i32) {
        self.set_int_value(value as i64);
    }

    pub fn set_uint(&self, value: u32) {
        self.set_int_value(value as i64);
    }

    pub fn set_long(&self, value: i64) {
        self.set_int_value(value);
    }

    pub fn set_ulong(&self, value: u64) {
        match self.ty.kind() {
            ScalarKind::Float | ScalarKind::Double => self.set_float_value(value as f64),
            _ => self.store(value),
        }
    }

    pub fn set_float(&self, value: f32) {
        self.set_float_value(value as f64);
    }

    pub fn set_double(&self, value: f64) {
        self.set_float_value(value);
    }

    /// Value in the representation matching the declared kind.
    pub fn value(&self) -> Result<Value> {
        let kind = self.ty.kind();
        Ok(match kind {
            ScalarKind::Float => Value::Float(self.get_float()?),
            ScalarKind::Double => Value::Double(self.get_double()?),
            _ if kind.is_signed() => Value::Int(self.get_long()?),
            _ => Value::UInt(self.get_ulong()?),
        })
    }

    pub fn set_value(&self, value: Value) {
        match value {
            Value::Int(v) => self.set_long(v),
            Value::UInt(v) => self.set_ulong(v),
            Value::Float(v) => self.set_float(v),
            Value::Double(v) => self.set_double(v),
        }
    }

    /// Write the cached value back if dirty.
    pub fn flush(&self) -> Result<()> {
        if !self.dirty.get() {
            return Ok(());
        }
        if let Some(bits) = self.value.get() {
            self.ctx.write_raw(self.position, self.ty, bits)?;
        }
        self.dirty.set(false);
        Ok(())
    }
}

impl std::fmt::Debug for ScalarMember<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarMember")
            .field("position", &self.position)
            .field("type", &self.ty.name())
            .field("dirty", &self.dirty.get())
            .finish()
    }
}
