//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("binio")
        .about("Inspect and patch binary files described by JSON layouts")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .arg(color_arg())
        .subcommand(types_command())
        .subcommand(dump_command())
        .subcommand(get_command())
        .subcommand(set_command())
}

/// List the type definitions of a layout.
pub fn types_command() -> Command {
    Command::new("types")
        .about("List type definitions with their static sizes")
        .after_help(
            r#"EXAMPLES:
  binio types wav.json
  binio types wav.json --color never"#,
        )
        .arg(layout_path_arg())
}

/// Print the decoded tree of a file.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Decode a file and print its member tree")
        .after_help(
            r#"EXAMPLES:
  binio dump wav.json sound.wav
  binio dump wav.json sound.wav --limit 4
  binio -vvv dump wav.json sound.wav   # trace every read"#,
        )
        .arg(layout_path_arg())
        .arg(data_path_arg())
        .arg(limit_arg())
}

/// Print one scalar.
pub fn get_command() -> Command {
    Command::new("get")
        .about("Print a single scalar value")
        .after_help(
            r#"EXAMPLES:
  binio get wav.json sound.wav header.channels
  binio get wav.json sound.wav samples[10]"#,
        )
        .arg(layout_path_arg())
        .arg(data_path_arg())
        .arg(field_path_arg())
}

/// Overwrite one scalar in place.
pub fn set_command() -> Command {
    Command::new("set")
        .about("Write a single scalar value in place")
        .after_help(
            r#"EXAMPLES:
  binio set wav.json sound.wav header.channels 1
  binio set wav.json sound.wav samples[0] -0x10"#,
        )
        .arg(layout_path_arg())
        .arg(data_path_arg().help("Binary file to modify"))
        .arg(field_path_arg())
        .arg(value_arg())
}
