//! Shared fixtures for unit tests.

use std::io;
use std::sync::{Arc, Mutex};

use crate::format::DataFormat;
use crate::io::{IoHandler, MemoryHandler};
use crate::types::{CompoundMember, CompoundType, SequenceType, SimpleType};

/// Accesses observed by a [`RecordingHandler`].
#[derive(Debug, Default)]
pub(crate) struct AccessLog {
    pub reads: Vec<(u64, usize)>,
    pub writes: Vec<(u64, Vec<u8>)>,
    pub flushes: usize,
}

/// Memory handler that records every access into a log the test keeps.
pub(crate) struct RecordingHandler {
    inner: MemoryHandler,
    log: Arc<Mutex<AccessLog>>,
}

impl RecordingHandler {
    pub(crate) fn new(data: Vec<u8>) -> (Self, Arc<Mutex<AccessLog>>) {
        let log = Arc::new(Mutex::new(AccessLog::default()));
        let handler = Self {
            inner: MemoryHandler::new(data),
            log: Arc::clone(&log),
        };
        (handler, log)
    }
}

impl IoHandler for RecordingHandler {
    fn read_at(&mut self, position: u64, buf: &mut [u8]) -> io::Result<()> {
        self.log.lock().unwrap().reads.push((position, buf.len()));
        self.inner.read_at(position, buf)
    }

    fn write_at(&mut self, position: u64, buf: &[u8]) -> io::Result<()> {
        self.log
            .lock()
            .unwrap()
            .writes
            .push((position, buf.to_vec()));
        self.inner.write_at(position, buf)
    }

    fn extent(&self) -> io::Result<u64> {
        self.inner.extent()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.log.lock().unwrap().flushes += 1;
        self.inner.flush()
    }
}

/// `{ a: int, b: int, c: int }`
pub(crate) fn three_ints() -> DataFormat {
    DataFormat::new(CompoundType::new(
        "Triple",
        vec![
            CompoundMember::new("a", SimpleType::INT),
            CompoundMember::new("b", SimpleType::INT),
            CompoundMember::new("c", SimpleType::INT),
        ],
    ))
}

/// `{ count: int, values: double[count], trailer: short }`
pub(crate) fn counted_doubles() -> DataFormat {
    DataFormat::new(CompoundType::new(
        "Samples",
        vec![
            CompoundMember::new("count", SimpleType::INT),
            CompoundMember::new(
                "values",
                SequenceType::counted_by(SimpleType::DOUBLE, "count"),
            ),
            CompoundMember::new("trailer", SimpleType::SHORT),
        ],
    ))
}

/// Big-endian bytes of `count`, then `count` doubles, then a short.
pub(crate) fn counted_doubles_bytes(values: &[f64], trailer: i16) -> Vec<u8> {
    let mut bytes = (values.len() as i32).to_be_bytes().to_vec();
    for value in values {
        bytes.extend_from_slice(&value.to_be_bytes());
    }
    bytes.extend_from_slice(&trailer.to_be_bytes());
    bytes
}
