//! Backing resources.
//!
//! An [`IoHandler`] is a byte-addressable store with random access by absolute
//! offset. Handlers know nothing about layouts; [`DataContext`](crate::DataContext)
//! owns one and translates typed accesses into byte ranges.

mod file;
mod memory;
mod mmap;
mod tracing;

#[cfg(test)]
mod mmap_tests;
#[cfg(test)]
mod tracing_tests;

use std::io;

pub use file::FileHandler;
pub use memory::MemoryHandler;
pub use mmap::MmapHandler;
pub use tracing::{AccessStats, TracingHandler};

/// Random-access byte store.
pub trait IoHandler: Send {
    /// Fill `buf` with the bytes starting at `position`.
    fn read_at(&mut self, position: u64, buf: &mut [u8]) -> io::Result<()>;

    /// Overwrite the bytes starting at `position` with `buf`.
    fn write_at(&mut self, position: u64, buf: &[u8]) -> io::Result<()>;

    /// Current size of the resource in bytes.
    fn extent(&self) -> io::Result<u64>;

    /// Commit written bytes to durable storage.
    fn flush(&mut self) -> io::Result<()>;
}

impl<H: IoHandler + ?Sized> IoHandler for Box<H> {
    fn read_at(&mut self, position: u64, buf: &mut [u8]) -> io::Result<()> {
        (**self).read_at(position, buf)
    }

    fn write_at(&mut self, position: u64, buf: &[u8]) -> io::Result<()> {
        (**self).write_at(position, buf)
    }

    fn extent(&self) -> io::Result<u64> {
        (**self).extent()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Byte range `[position, position + len)` as slice indices, if it lies within `extent`.
pub(crate) fn byte_range(position: u64, len: usize, extent: u64) -> Option<std::ops::Range<usize>> {
    let end = position.checked_add(len as u64)?;
    if end > extent {
        return None;
    }
    Some(usize::try_from(position).ok()?..usize::try_from(end).ok()?)
}

pub(crate) fn out_of_extent(position: u64, len: usize, extent: u64) -> io::Error {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("{len} bytes at offset {position:#x} exceed extent {extent:#x}"),
    )
}

pub(crate) fn read_only() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "resource is read-only")
}
