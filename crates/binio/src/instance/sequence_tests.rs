use std::sync::Arc;

use crate::error::ErrorKind;
use crate::format::DataFormat;
use crate::instance::CollectionData;
use crate::test_utils::{RecordingHandler, counted_doubles, counted_doubles_bytes};
use crate::types::{CompoundMember, CompoundType, CountRule, SequenceType, SimpleType};

/// `{ n: ubyte, chunks: Chunk[n] }` where `Chunk = { len: ubyte, data: ubyte[len] }`.
fn chunked() -> DataFormat {
    let chunk = CompoundType::new(
        "Chunk",
        vec![
            CompoundMember::new("len", SimpleType::UBYTE),
            CompoundMember::new("data", SequenceType::counted_by(SimpleType::UBYTE, "len")),
        ],
    );
    DataFormat::new(CompoundType::new(
        "Chunked",
        vec![
            CompoundMember::new("n", SimpleType::UBYTE),
            CompoundMember::new("chunks", SequenceType::counted_by(chunk, "n")),
        ],
    ))
}

#[test]
fn counted_sequence_reads_its_count_from_a_sibling() {
    let bytes = counted_doubles_bytes(&[0.5, 1.5, 2.5], -1);
    let context = counted_doubles().open_bytes(bytes);
    let data = context.data();

    let values = data.get_sequence("values").unwrap();
    assert_eq!(values.element_count(), 3);
    assert_eq!(values.position(), 4);
    assert_eq!(values.get_double(2).unwrap(), 2.5);
    assert_eq!(values.size().unwrap(), 24);

    let err = values.member(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DataAccess);
    insta::assert_snapshot!(err, @"index 3 is out of range for 'double[count]' with 3 elements");

    assert_eq!(data.get_short("trailer").unwrap(), -1);
}

#[test]
fn empty_counted_sequence() {
    let bytes = counted_doubles_bytes(&[], 9);
    let context = counted_doubles().open_bytes(bytes);
    let data = context.data();

    let values = data.get_sequence("values").unwrap();
    assert_eq!(values.element_count(), 0);
    assert_eq!(values.size().unwrap(), 0);
    assert!(values.member(0).is_err());
    assert_eq!(data.member("trailer").unwrap().position(), 4);
}

#[test]
fn fixed_size_elements_are_positioned_directly() {
    let bytes = counted_doubles_bytes(&[0.0; 600], 0);
    let context = counted_doubles().open_bytes(bytes);
    let data = context.data();
    let values = data.get_sequence("values").unwrap();

    let element = values.member(500).unwrap();

    assert_eq!(element.position(), 4 + 500 * 8);
    assert_eq!(values.resolved_count(), 1);
    assert!(values.is_resolved(500));
    assert!(!values.is_resolved(499));
    assert!(std::ptr::eq(element, values.member(500).unwrap()));
}

#[test]
fn variable_size_elements_resolve_forward() {
    let bytes = vec![3, 2, 0xa, 0xb, 0, 1, 0xc, 0xee];
    let context = chunked().open_bytes(bytes);
    let data = context.data();
    let chunks = data.get_sequence("chunks").unwrap();

    let last = chunks.get_compound(2).unwrap();
    assert_eq!(chunks.resolved_count(), 3);
    assert_eq!(last.position(), 5);
    let last_data = last.get_sequence("data").unwrap();
    assert_eq!(last_data.get_ubyte(0).unwrap(), 0xc);

    let first = chunks.get_compound(0).unwrap();
    let first_data = first.get_sequence("data").unwrap();
    assert_eq!(first_data.get_ubyte(1).unwrap(), 0xb);
    assert_eq!(chunks.get_compound(1).unwrap().size().unwrap(), 1);
    assert_eq!(chunks.size().unwrap(), 6);
    assert_eq!(data.size().unwrap(), 7);
}

#[test]
fn negative_count_is_a_layout_error() {
    let mut bytes = counted_doubles_bytes(&[1.0], 0);
    bytes[..4].copy_from_slice(&(-2i32).to_be_bytes());
    let context = counted_doubles().open_bytes(bytes);
    let data = context.data();

    let err = data.get_sequence("values").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Layout);
    insta::assert_snapshot!(err, @"layout error in 'Samples': element count from 'count' is negative: -2");
    assert_eq!(data.resolved_count(), 1);
}

#[test]
fn count_larger_than_resource_is_a_layout_error() {
    let mut bytes = counted_doubles_bytes(&[1.0, 2.0], 0);
    bytes[..4].copy_from_slice(&1000i32.to_be_bytes());
    let context = counted_doubles().open_bytes(bytes);
    let data = context.data();

    let err = data.member("trailer").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Layout);
    insta::assert_snapshot!(err, @"layout error in 'double[count]': 1000 elements of at least 8 bytes at 0x4 exceed resource extent 0x16");
}

#[cfg(target_pointer_width = "64")]
#[test]
fn fixed_count_larger_than_resource_is_a_layout_error() {
    let huge = SequenceType::new(SimpleType::UBYTE, 1 << 40);
    let root = CompoundType::new("Huge", vec![CompoundMember::new("s", huge)]);
    let format = DataFormat::new(root);
    let context = format.open_bytes(vec![0; 4]);
    let data = context.data();

    let err = data.get_sequence("s").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Layout);
    insta::assert_snapshot!(err, @"layout error in 'ubyte[1099511627776]': 1099511627776 elements of at least 1 bytes at 0x0 exceed resource extent 0x4");
}

fn zero_size_elements() -> DataFormat {
    let empty = CompoundType::new("Empty", vec![]);
    DataFormat::new(CompoundType::new(
        "Markers",
        vec![
            CompoundMember::new("n", SimpleType::UINT),
            CompoundMember::new("marks", SequenceType::counted_by(empty, "n")),
        ],
    ))
}

#[test]
fn zero_size_elements_are_bounded_by_the_resource() {
    let context = zero_size_elements().open_bytes(vec![0xff; 4]);
    let data = context.data();

    let err = data.get_sequence("marks").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Layout);
    insta::assert_snapshot!(err, @"layout error in 'Empty[n]': 4294967295 elements of at least 1 bytes at 0x4 exceed resource extent 0x4");
}

#[test]
fn zero_size_elements_within_the_resource() {
    let context = zero_size_elements().open_bytes(vec![0, 0, 0, 2, 0, 0]);
    let data = context.data();

    let marks = data.get_sequence("marks").unwrap();

    assert_eq!(marks.element_count(), 2);
    assert_eq!(marks.member(1).unwrap().position(), 4);
    assert_eq!(marks.size().unwrap(), 0);
}

#[test]
fn count_rule_cannot_see_later_members() {
    let format = DataFormat::new(CompoundType::new(
        "Backwards",
        vec![
            CompoundMember::new("values", SequenceType::counted_by(SimpleType::INT, "count")),
            CompoundMember::new("count", SimpleType::INT),
        ],
    ));
    let context = format.open_bytes(vec![0; 8]);

    let err = context.data().member(1).unwrap_err();

    insta::assert_snapshot!(err, @"layout error in 'Backwards': member 1 is not visible to a count rule (0 preceding members)");
}

#[test]
fn count_rule_naming_unknown_member() {
    let format = DataFormat::new(CompoundType::new(
        "Typo",
        vec![
            CompoundMember::new("count", SimpleType::INT),
            CompoundMember::new("values", SequenceType::counted_by(SimpleType::INT, "cnt")),
        ],
    ));
    let context = format.open_bytes(vec![0; 4]);

    let err = context.data().member("values").unwrap_err();

    insta::assert_snapshot!(err, @"layout error in 'Typo': 'cnt' is not a member of compound 'Typo'");
}

#[test]
fn custom_rule_combines_siblings() {
    let rule = CountRule::new("rows*cols", |siblings| {
        let rows = siblings.get_long("rows")?;
        let cols = siblings.get_long("cols")?;
        usize::try_from(rows * cols).map_err(|_| siblings.layout_error("negative size"))
    });
    let cells = SequenceType::with_count_rule(SimpleType::BYTE, rule);
    let format = DataFormat::new(CompoundType::new(
        "Grid",
        vec![
            CompoundMember::new("rows", SimpleType::UBYTE),
            CompoundMember::new("cols", SimpleType::UBYTE),
            CompoundMember::new("cells", cells),
            CompoundMember::new("end", SimpleType::UBYTE),
        ],
    ));
    let context = format.open_bytes(vec![2, 3, 1, 2, 3, 4, 5, 6, 0xff]);
    let data = context.data();

    assert_eq!(data.get_sequence("cells").unwrap().element_count(), 6);
    assert_eq!(data.get_ubyte("end").unwrap(), 0xff);
}

#[test]
fn sequence_flush_writes_dirty_elements() {
    let (handler, log) = RecordingHandler::new(counted_doubles_bytes(&[0.0, 0.0], 0));
    let context = counted_doubles().create_context(handler);
    let data = context.data();
    let values = data.get_sequence("values").unwrap();

    values.set_double(1, 1.0).unwrap();
    values.get_double(0).unwrap();
    data.flush().unwrap();

    assert_eq!(
        log.lock().unwrap().writes,
        vec![(12, 1.0f64.to_be_bytes().to_vec())]
    );
}

#[test]
fn root_sequence_at_offset() {
    let context = counted_doubles().open_bytes(vec![0, 1, 0, 2, 0, 3]);
    let ty = Arc::new(SequenceType::new(SimpleType::SHORT, 2));

    let shorts = context.create_sequence(ty, 2).unwrap();

    assert_eq!(shorts.get_short(0).unwrap(), 2);
    assert_eq!(shorts.get_short(1).unwrap(), 3);
}

#[test]
fn root_sequence_with_counted_size_has_no_siblings() {
    let context = counted_doubles().open_bytes(vec![0; 8]);
    let ty = Arc::new(SequenceType::counted_by(SimpleType::INT, "count"));

    let err = context.create_sequence(ty, 0).unwrap_err();

    insta::assert_snapshot!(err, @"layout error in '<root>': 'count' is not a member of compound '<root>'");
}
