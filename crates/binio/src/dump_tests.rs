use indoc::indoc;

use binio_core::Colors;

use crate::dump::{Dumper, dump, dump_types};
use crate::format::DataFormat;

fn samples() -> DataFormat {
    DataFormat::from_json(indoc! {r#"
        {
          "name": "samples",
          "byteOrder": "little",
          "root": "File",
          "types": {
            "Point": { "type": "COMPOUND", "members": [
              { "name": "x", "type": "float" },
              { "name": "y", "type": "float" }
            ]},
            "File": { "type": "COMPOUND", "members": [
              { "name": "version", "type": "ushort" },
              { "name": "count", "type": "ubyte" },
              { "name": "points", "type": {
                "type": "SEQUENCE", "element": "Point", "count": { "member": "count" }
              }},
              { "name": "tail", "type": { "type": "SEQUENCE", "element": "byte", "count": 2 } }
            ]}
          }
        }
    "#})
    .unwrap()
}

fn samples_bytes() -> Vec<u8> {
    let mut bytes = vec![3, 0, 2];
    for value in [1.0f32, -0.5, 2.5, 0.0] {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes.extend_from_slice(&[0xff, 5]);
    bytes
}

#[test]
fn dump_instance_tree() {
    let context = samples().open_bytes(samples_bytes());

    let res = dump(&context.data(), Colors::OFF).unwrap();

    insta::assert_snapshot!(res, @r"
    File @0x0
      version: 3
      count: 2
      points: Point[count] @0x3 (2 elements)
        [0]: Point @0x3
          x: 1.0
          y: -0.5
        [1]: Point @0xb
          x: 2.5
          y: 0.0
      tail: byte[2] @0x13 (2 elements)
        [0]: -1
        [1]: 5
    ");
}

#[test]
fn dump_elides_long_sequences() {
    let context = samples().open_bytes(samples_bytes());

    let res = Dumper::new(Colors::OFF)
        .with_limit(1)
        .dump(&context.data())
        .unwrap();

    insta::assert_snapshot!(res, @r"
    File @0x0
      version: 3
      count: 2
      points: Point[count] @0x3 (2 elements)
        [0]: Point @0x3
          x: 1.0
          y: -0.5
        ... (1 more)
      tail: byte[2] @0x13 (2 elements)
        [0]: -1
        ... (1 more)
    ");
}

#[test]
fn dump_with_colors() {
    let format = DataFormat::from_json(indoc! {r#"
        { "name": "one", "root": "R", "types": {
            "R": { "type": "COMPOUND", "members": [ { "name": "v", "type": "byte" } ] }
        } }
    "#})
    .unwrap();
    let context = format.open_bytes(vec![7]);

    let res = dump(&context.data(), Colors::ON).unwrap();

    assert_eq!(
        res,
        "\x1b[34mR\x1b[0m \x1b[2m@0x0\x1b[0m\n  \x1b[34mv\x1b[0m: \x1b[32m7\x1b[0m\n"
    );
}

#[test]
fn dump_propagates_read_errors() {
    let context = samples().open_bytes(vec![3, 0, 2, 0]);

    let err = dump(&context.data(), Colors::OFF).unwrap_err();

    insta::assert_snapshot!(err, @"layout error in 'Point[count]': 2 elements of at least 8 bytes at 0x3 exceed resource extent 0x4");
}

#[test]
fn dump_type_definitions() {
    let res = dump_types(&samples(), Colors::OFF);

    insta::assert_snapshot!(res, @r"
    format samples (little endian, root File)
    Point = { x: float, y: float }  ; 8 bytes
    File = { version: ushort, count: ubyte, points: Point[count], tail: byte[2] }  ; dynamic
    ");
}
