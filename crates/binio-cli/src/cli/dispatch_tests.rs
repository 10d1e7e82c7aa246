//! Tests for CLI dispatch logic: global flags, defaults and params extraction.

use std::path::PathBuf;

use log::LevelFilter;

use super::*;

fn sub_matches(argv: &[&str]) -> (String, clap::ArgMatches) {
    let matches = build_cli().try_get_matches_from(argv).unwrap();
    let (name, m) = matches.subcommand().unwrap();
    (name.to_string(), m.clone())
}

#[test]
fn dump_params_with_defaults() {
    let (name, m) = sub_matches(&["binio", "dump", "wav.json", "sound.wav"]);
    let params = DumpParams::from_matches(&m);

    assert_eq!(name, "dump");
    assert_eq!(params.layout_path, PathBuf::from("wav.json"));
    assert_eq!(params.data_path, PathBuf::from("sound.wav"));
    assert_eq!(params.limit, 16);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn dump_limit_and_color() {
    let (_, m) = sub_matches(&[
        "binio", "dump", "wav.json", "sound.wav", "--limit", "3", "--color", "never",
    ]);
    let params = DumpParams::from_matches(&m);

    assert_eq!(params.limit, 3);
    assert_eq!(params.color, ColorChoice::Never);
    assert!(!params.color.should_colorize());
}

#[test]
fn color_is_global() {
    let (_, m) = sub_matches(&["binio", "--color", "always", "types", "wav.json"]);
    let params = TypesParams::from_matches(&m);

    assert_eq!(params.color, ColorChoice::Always);
    assert!(params.color.should_colorize());
}

#[test]
fn verbosity_is_global() {
    let matches = build_cli()
        .try_get_matches_from(["binio", "get", "-vv", "a.json", "a.bin", "x"])
        .unwrap();
    assert_eq!(log_level(matches.get_count("verbose")), LevelFilter::Debug);

    let matches = build_cli()
        .try_get_matches_from(["binio", "-vvv", "types", "a.json"])
        .unwrap();
    assert_eq!(log_level(matches.get_count("verbose")), LevelFilter::Trace);

    assert_eq!(log_level(0), LevelFilter::Warn);
    assert_eq!(log_level(1), LevelFilter::Info);
}

#[test]
fn get_params() {
    let (_, m) = sub_matches(&["binio", "get", "wav.json", "sound.wav", "points[2].x"]);
    let params = GetParams::from_matches(&m);

    assert_eq!(params.field_path, "points[2].x");
}

#[test]
fn set_accepts_negative_values() {
    let (_, m) = sub_matches(&["binio", "set", "wav.json", "sound.wav", "gain", "-3"]);
    let params = SetParams::from_matches(&m);

    assert_eq!(params.field_path, "gain");
    assert_eq!(params.value, "-3");
}

#[test]
fn set_requires_a_value() {
    let result =
        build_cli().try_get_matches_from(["binio", "set", "wav.json", "sound.wav", "gain"]);

    assert!(result.is_err());
}

#[test]
fn invalid_limit_is_rejected() {
    let result = build_cli()
        .try_get_matches_from(["binio", "dump", "wav.json", "sound.wav", "--limit", "x"]);

    assert!(result.is_err());
}

#[test]
fn subcommand_is_required() {
    assert!(build_cli().try_get_matches_from(["binio"]).is_err());
}

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}
