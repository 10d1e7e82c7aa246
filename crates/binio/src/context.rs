//! Data context: the owner of one backing resource.
//!
//! The context is the only place where bytes are read or written. It knows the
//! byte order of the resource and converts between raw scalar bits and bytes,
//! but has no knowledge of layouts beyond creating root instances.

use std::cell::RefCell;
use std::sync::Arc;

use binio_core::ByteOrder;
use log::debug;

use crate::error::{Error, Result};
use crate::format::DataFormat;
use crate::instance::{CompoundInstance, SequenceInstance, Siblings};
use crate::io::IoHandler;
use crate::types::{CompoundType, SequenceType, SimpleType};

/// Handle to one backing resource opened with a [`DataFormat`].
///
/// Instances created from a context borrow it, so the context outlives every
/// view into its data. A context and its instances are meant for one thread at
/// a time; open independent contexts for concurrent access.
pub struct DataContext {
    format: DataFormat,
    handler: RefCell<Box<dyn IoHandler>>,
}

impl DataContext {
    pub fn new(format: DataFormat, handler: impl IoHandler + 'static) -> Self {
        debug!(
            "open context for format '{}' ({} byte order)",
            format.name(),
            format.byte_order()
        );
        Self {
            format,
            handler: RefCell::new(Box::new(handler)),
        }
    }

    pub fn format(&self) -> &DataFormat {
        &self.format
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.format.byte_order()
    }

    /// Root compound of the format, positioned at offset 0.
    ///
    /// Every call creates an independent view with its own resolution cache and
    /// pending writes.
    pub fn data(&self) -> CompoundInstance<'_> {
        self.create_compound(self.format.root_type().clone(), 0)
    }

    /// Root compound of an arbitrary type at an arbitrary offset.
    pub fn create_compound(&self, ty: Arc<CompoundType>, position: u64) -> CompoundInstance<'_> {
        CompoundInstance::new(self, ty, position)
    }

    /// Root sequence at an arbitrary offset.
    ///
    /// A count rule sees no siblings here, so rule-counted sequences fail with
    /// a layout error unless the rule does not consult siblings.
    pub fn create_sequence(
        &self,
        ty: Arc<SequenceType>,
        position: u64,
    ) -> Result<SequenceInstance<'_>> {
        SequenceInstance::resolve(self, ty, position, &Siblings::root())
    }

    /// Current size of the resource in bytes.
    pub fn extent(&self) -> Result<u64> {
        Ok(self.handler.borrow().extent()?)
    }

    /// Read raw bytes at `position`.
    pub fn read_bytes(&self, position: u64, buf: &mut [u8]) -> Result<()> {
        let mut handler = self.handler.borrow_mut();
        check_extent(handler.extent()?, position, buf.len())?;
        handler.read_at(position, buf)?;
        Ok(())
    }

    /// Write raw bytes at `position`. The resource never grows.
    pub fn write_bytes(&self, position: u64, buf: &[u8]) -> Result<()> {
        let mut handler = self.handler.borrow_mut();
        check_extent(handler.extent()?, position, buf.len())?;
        handler.write_at(position, buf)?;
        Ok(())
    }

    /// Read a scalar as raw bits, zero-extended to 64 bits.
    pub fn read_raw(&self, position: u64, ty: SimpleType) -> Result<u64> {
        let mut buf = [0u8; 8];
        let bytes = &mut buf[..ty.byte_width()];
        self.read_bytes(position, bytes)?;
        Ok(decode(bytes, self.byte_order()))
    }

    /// Write the low `byte_width` bytes of `bits` as a scalar.
    pub fn write_raw(&self, position: u64, ty: SimpleType, bits: u64) -> Result<()> {
        let width = ty.byte_width();
        let buf = encode(bits, width, self.byte_order());
        self.write_bytes(position, &buf[..width])
    }

    /// Commit the resource to durable storage.
    ///
    /// Instance `flush()` writes pending values into the resource; this call
    /// makes the resource itself durable.
    pub fn flush(&self) -> Result<()> {
        debug!("sync resource of format '{}'", self.format.name());
        self.handler.borrow_mut().flush()?;
        Ok(())
    }

    /// Sync and release the resource.
    pub fn close(self) -> Result<Box<dyn IoHandler>> {
        self.flush()?;
        debug!("close context for format '{}'", self.format.name());
        Ok(self.handler.into_inner())
    }
}

impl std::fmt::Debug for DataContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataContext")
            .field("format", &self.format.name())
            .field("byte_order", &self.byte_order())
            .finish()
    }
}

fn check_extent(extent: u64, position: u64, len: usize) -> Result<()> {
    match position.checked_add(len as u64) {
        Some(end) if end <= extent => Ok(()),
        _ => Err(Error::OutOfBounds {
            position,
            len,
            extent,
        }),
    }
}

fn decode(bytes: &[u8], order: ByteOrder) -> u64 {
    match order {
        ByteOrder::Big => bytes.iter().fold(0, |acc, &b| (acc << 8) | b as u64),
        ByteOrder::Little => bytes.iter().rev().fold(0, |acc, &b| (acc << 8) | b as u64),
    }
}

fn encode(bits: u64, width: usize, order: ByteOrder) -> [u8; 8] {
    let mut buf = bits.to_le_bytes();
    if order == ByteOrder::Big {
        buf[..width].reverse();
    }
    buf
}
