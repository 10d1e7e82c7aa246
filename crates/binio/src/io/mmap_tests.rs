use std::io::ErrorKind;

use tempfile::TempDir;

use super::{IoHandler, MmapHandler};

#[test]
fn mapped_writes_reach_the_file_on_flush() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mapped.bin");
    std::fs::write(&path, [0u8; 6]).unwrap();

    let mut handler = MmapHandler::open(&path).unwrap();
    assert!(handler.is_writable());
    assert_eq!(handler.extent().unwrap(), 6);

    handler.write_at(2, &[1, 2, 3]).unwrap();
    let mut buf = [0u8; 4];
    handler.read_at(1, &mut buf).unwrap();
    assert_eq!(buf, [0, 1, 2, 3]);

    handler.flush().unwrap();
    drop(handler);
    assert_eq!(std::fs::read(&path).unwrap(), vec![0, 0, 1, 2, 3, 0]);
}

#[test]
fn read_only_mapping_rejects_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ro.bin");
    std::fs::write(&path, [4, 5, 6]).unwrap();

    let mut handler = MmapHandler::open_read_only(&path).unwrap();

    let err = handler.write_at(0, &[1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::PermissionDenied);

    let err = handler.read_at(2, &mut [0u8; 2]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
}
