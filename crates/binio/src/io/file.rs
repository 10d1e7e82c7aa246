use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::{IoHandler, byte_range, out_of_extent, read_only};

/// File accessed through seek + read/write.
///
/// The extent is the file length at open time; accesses never grow the file.
#[derive(Debug)]
pub struct FileHandler {
    file: File,
    len: u64,
    writable: bool,
}

impl FileHandler {
    /// Open an existing file for reading and writing.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Self::from_file(file, true)
    }

    pub fn open_read_only(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Self::from_file(file, false)
    }

    /// Create (or truncate) a zero-filled file of `len` bytes.
    pub fn create(path: impl AsRef<Path>, len: u64) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(len)?;
        Self::from_file(file, true)
    }

    fn from_file(file: File, writable: bool) -> io::Result<Self> {
        let len = file.metadata()?.len();
        Ok(Self {
            file,
            len,
            writable,
        })
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    fn check_range(&self, position: u64, len: usize) -> io::Result<()> {
        byte_range(position, len, self.len)
            .map(|_| ())
            .ok_or_else(|| out_of_extent(position, len, self.len))
    }
}

impl IoHandler for FileHandler {
    fn read_at(&mut self, position: u64, buf: &mut [u8]) -> io::Result<()> {
        self.check_range(position, buf.len())?;
        self.file.seek(SeekFrom::Start(position))?;
        self.file.read_exact(buf)
    }

    fn write_at(&mut self, position: u64, buf: &[u8]) -> io::Result<()> {
        if !self.writable {
            return Err(read_only());
        }
        self.check_range(position, buf.len())?;
        self.file.seek(SeekFrom::Start(position))?;
        self.file.write_all(buf)
    }

    fn extent(&self) -> io::Result<u64> {
        Ok(self.len)
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.writable {
            return Ok(());
        }
        self.file.flush()?;
        self.file.sync_data()
    }
}
