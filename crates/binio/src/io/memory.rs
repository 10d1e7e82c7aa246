use std::io;

use super::{IoHandler, byte_range, out_of_extent};

/// In-memory block of fixed size.
#[derive(Clone, Debug, Default)]
pub struct MemoryHandler {
    data: Vec<u8>,
}

impl MemoryHandler {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Zero-filled block of `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self { data: vec![0; len] }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

impl From<Vec<u8>> for MemoryHandler {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl IoHandler for MemoryHandler {
    fn read_at(&mut self, position: u64, buf: &mut [u8]) -> io::Result<()> {
        let extent = self.data.len() as u64;
        let range = byte_range(position, buf.len(), extent)
            .ok_or_else(|| out_of_extent(position, buf.len(), extent))?;
        buf.copy_from_slice(&self.data[range]);
        Ok(())
    }

    fn write_at(&mut self, position: u64, buf: &[u8]) -> io::Result<()> {
        let extent = self.data.len() as u64;
        let range = byte_range(position, buf.len(), extent)
            .ok_or_else(|| out_of_extent(position, buf.len(), extent))?;
        self.data[range].copy_from_slice(buf);
        Ok(())
    }

    fn extent(&self) -> io::Result<u64> {
        Ok(self.data.len() as u64)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
