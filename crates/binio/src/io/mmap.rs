use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use memmap2::{Mmap, MmapMut};

use super::{IoHandler, byte_range, out_of_extent, read_only};

/// File accessed through a memory mapping.
///
/// Pages are faulted in on first access, so opening a large file is cheap.
pub struct MmapHandler {
    map: Mapping,
}

enum Mapping {
    ReadOnly(Mmap),
    ReadWrite(MmapMut),
}

impl MmapHandler {
    /// Map an existing file for reading and writing.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        // SAFETY: the mapping is only reached through this handler. Changes to
        // the file by other processes while mapped are outside our contract.
        let map = unsafe { MmapMut::map_mut(&file)? };
        Ok(Self {
            map: Mapping::ReadWrite(map),
        })
    }

    pub fn open_read_only(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        // SAFETY: see `open`.
        let map = unsafe { Mmap::map(&file)? };
        Ok(Self {
            map: Mapping::ReadOnly(map),
        })
    }

    pub fn is_writable(&self) -> bool {
        matches!(self.map, Mapping::ReadWrite(_))
    }

    fn bytes(&self) -> &[u8] {
        match &self.map {
            Mapping::ReadOnly(m) => &m[..],
            Mapping::ReadWrite(m) => &m[..],
        }
    }
}

impl std::fmt::Debug for MmapHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MmapHandler")
            .field("len", &self.bytes().len())
            .field("writable", &self.is_writable())
            .finish()
    }
}

impl IoHandler for MmapHandler {
    fn read_at(&mut self, position: u64, buf: &mut [u8]) -> io::Result<()> {
        let bytes = self.bytes();
        let extent = bytes.len() as u64;
        let range = byte_range(position, buf.len(), extent)
            .ok_or_else(|| out_of_extent(position, buf.len(), extent))?;
        buf.copy_from_slice(&bytes[range]);
        Ok(())
    }

    fn write_at(&mut self, position: u64, buf: &[u8]) -> io::Result<()> {
        let Mapping::ReadWrite(map) = &mut self.map else {
            return Err(read_only());
        };
        let extent = map.len() as u64;
        let range = byte_range(position, buf.len(), extent)
            .ok_or_else(|| out_of_extent(position, buf.len(), extent))?;
        map[range].copy_from_slice(buf);
        Ok(())
    }

    fn extent(&self) -> io::Result<u64> {
        Ok(self.bytes().len() as u64)
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.map {
            Mapping::ReadOnly(_) => Ok(()),
            Mapping::ReadWrite(map) => map.flush(),
        }
    }
}
