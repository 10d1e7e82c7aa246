use super::{AccessStats, IoHandler, MemoryHandler, TracingHandler};

#[test]
fn counts_successful_accesses() {
    let mut handler = TracingHandler::new(MemoryHandler::zeroed(16));

    handler.write_at(0, &[1, 2, 3, 4]).unwrap();
    handler.write_at(8, &[5]).unwrap();
    handler.read_at(0, &mut [0u8; 2]).unwrap();
    handler.flush().unwrap();

    assert_eq!(
        handler.stats(),
        AccessStats {
            reads: 1,
            writes: 2,
            bytes_read: 2,
            bytes_written: 5,
            flushes: 1,
        }
    );
    assert_eq!(handler.inner().as_slice()[8], 5);
}

#[test]
fn failed_accesses_are_not_counted() {
    let mut handler = TracingHandler::new(MemoryHandler::zeroed(2));

    assert!(handler.read_at(1, &mut [0u8; 4]).is_err());
    assert!(handler.write_at(3, &[0]).is_err());

    assert_eq!(handler.stats(), AccessStats::default());
    assert_eq!(handler.into_inner().into_inner(), vec![0, 0]);
}
