use crate::error::ErrorKind;
use crate::types::{CompoundMember, CompoundType, SequenceType, SimpleType, Type, TypeKind};

fn point() -> CompoundType {
    CompoundType::new(
        "Point",
        vec![
            CompoundMember::new("x", SimpleType::FLOAT),
            CompoundMember::new("y", SimpleType::FLOAT),
        ],
    )
}

#[test]
fn static_size_sums_members() {
    let header = CompoundType::new(
        "Header",
        vec![
            CompoundMember::new("magic", SimpleType::UINT),
            CompoundMember::new("flags", SimpleType::UBYTE),
            CompoundMember::new("origin", point()),
            CompoundMember::new("scale", SimpleType::DOUBLE),
        ],
    );

    assert_eq!(header.static_size(), Some(4 + 1 + 8 + 8));
    assert_eq!(header.member_count(), 4);
    assert_eq!(header.member(2).map(CompoundMember::name), Some("origin"));
    assert!(header.member(4).is_none());
}

#[test]
fn counted_member_makes_size_dynamic() {
    let record = CompoundType::new(
        "Record",
        vec![
            CompoundMember::new("n", SimpleType::SHORT),
            CompoundMember::new("items", SequenceType::counted_by(point(), "n")),
            CompoundMember::new("crc", SimpleType::UINT),
        ],
    );

    assert_eq!(record.static_size(), None);
    assert_eq!(record.members()[0].static_size(), Some(2));
    assert_eq!(record.members()[1].static_size(), None);
    assert_eq!(Type::from(record).min_size(), 6);
}

#[test]
fn member_index_is_exact_and_case_sensitive() {
    let point = point();

    assert_eq!(point.member_index("x"), Some(0));
    assert_eq!(point.member_index("y"), Some(1));
    assert_eq!(point.member_index("X"), None);
    assert_eq!(point.member_index("z"), None);
}

#[test]
fn member_index_on_a_wide_compound() {
    let members = (0..1000)
        .map(|i| CompoundMember::new(format!("f{i}"), SimpleType::UBYTE))
        .collect();
    let wide = CompoundType::new("Wide", members);

    assert_eq!(wide.member_index("f0"), Some(0));
    assert_eq!(wide.member_index("f999"), Some(999));
    assert_eq!(wide.member_index("f1000"), None);
    assert_eq!(wide.members()[731].name(), "f731");
}

#[test]
fn empty_compound_has_zero_size() {
    let empty = CompoundType::new("Empty", vec![]);

    assert_eq!(empty.static_size(), Some(0));
    assert_eq!(empty.member_count(), 0);
}

#[test]
fn try_new_rejects_duplicate_names() {
    let err = CompoundType::try_new(
        "Broken",
        vec![
            CompoundMember::new("a", SimpleType::INT),
            CompoundMember::new("a", SimpleType::SHORT),
        ],
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Layout);
    insta::assert_snapshot!(err, @"layout error in 'Broken': duplicate member 'a'");
}

#[test]
#[should_panic(expected = "duplicate member 'b'")]
fn new_panics_on_duplicate_names() {
    CompoundType::new(
        "Broken",
        vec![
            CompoundMember::new("b", SimpleType::INT),
            CompoundMember::new("b", SimpleType::INT),
        ],
    );
}

#[test]
fn type_wraps_kinds() {
    let ty = Type::from(point());

    assert_eq!(ty.kind(), TypeKind::Compound);
    assert_eq!(ty.name(), "Point");
    assert!(ty.as_compound().is_some());
    assert!(ty.as_sequence().is_none());
    let ulong = Type::from(SimpleType::ULONG);
    assert_eq!(ulong.as_simple(), Some(SimpleType::ULONG));
}
