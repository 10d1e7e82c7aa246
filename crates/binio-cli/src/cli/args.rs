//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so commands compose the same
//! definition instead of repeating it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON layout file (positional).
pub fn layout_path_arg() -> Arg {
    Arg::new("layout_path")
        .value_name("LAYOUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON layout describing the file format")
}

/// Binary data file (positional).
pub fn data_path_arg() -> Arg {
    Arg::new("data_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Binary file to read")
}

/// Field path such as `header.points[2].x` (positional).
pub fn field_path_arg() -> Arg {
    Arg::new("field_path")
        .value_name("PATH")
        .required(true)
        .help("Path to a scalar member, e.g. header.points[2].x")
}

/// New scalar value (positional).
pub fn value_arg() -> Arg {
    Arg::new("value")
        .value_name("VALUE")
        .required(true)
        .allow_hyphen_values(true)
        .help("Value to store (decimal, 0x-prefixed hex, or float)")
}

/// Sequence element limit (--limit).
pub fn limit_arg() -> Arg {
    Arg::new("limit")
        .long("limit")
        .value_name("N")
        .default_value("16")
        .value_parser(value_parser!(usize))
        .help("Elements shown per sequence before eliding the rest")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .global(true)
        .help("Colorize output")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
}
