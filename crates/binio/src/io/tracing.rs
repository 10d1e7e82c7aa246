use std::io;

use log::trace;

use super::IoHandler;

/// Access counters kept by [`TracingHandler`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessStats {
    pub reads: usize,
    pub writes: usize,
    pub bytes_read: u64,
    pub bytes_written: u64,
    pub flushes: usize,
}

/// Decorator that logs every access at `trace` level and counts them.
#[derive(Debug)]
pub struct TracingHandler<H> {
    inner: H,
    stats: AccessStats,
}

impl<H: IoHandler> TracingHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            stats: AccessStats::default(),
        }
    }

    pub fn stats(&self) -> AccessStats {
        self.stats
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: IoHandler> IoHandler for TracingHandler<H> {
    fn read_at(&mut self, position: u64, buf: &mut [u8]) -> io::Result<()> {
        trace!("read {} bytes at {position:#x}", buf.len());
        self.inner.read_at(position, buf)?;
        self.stats.reads += 1;
        self.stats.bytes_read += buf.len() as u64;
        Ok(())
    }

    fn write_at(&mut self, position: u64, buf: &[u8]) -> io::Result<()> {
        trace!("write {} bytes at {position:#x}", buf.len());
        self.inner.write_at(position, buf)?;
        self.stats.writes += 1;
        self.stats.bytes_written += buf.len() as u64;
        Ok(())
    }

    fn extent(&self) -> io::Result<u64> {
        self.inner.extent()
    }

    fn flush(&mut self) -> io::Result<()> {
        trace!("flush ({} writes so far)", self.stats.writes);
        self.inner.flush()?;
        self.stats.flushes += 1;
        Ok(())
    }
}
