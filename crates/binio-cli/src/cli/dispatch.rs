//! Dispatch logic: extract params from `ArgMatches` and convert them to
//! command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::get::GetArgs;
use crate::commands::set::SetArgs;
use crate::commands::types::TypesArgs;

pub struct TypesParams {
    pub layout_path: PathBuf,
    pub color: ColorChoice,
}

impl TypesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout_path: required_path(m, "layout_path"),
            color: parse_color(m),
        }
    }
}

impl From<TypesParams> for TypesArgs {
    fn from(p: TypesParams) -> Self {
        Self {
            layout_path: p.layout_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub layout_path: PathBuf,
    pub data_path: PathBuf,
    pub limit: usize,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout_path: required_path(m, "layout_path"),
            data_path: required_path(m, "data_path"),
            limit: m
                .get_one::<usize>("limit")
                .copied()
                .unwrap_or(binio::dump::DEFAULT_LIMIT),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            layout_path: p.layout_path,
            data_path: p.data_path,
            limit: p.limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct GetParams {
    pub layout_path: PathBuf,
    pub data_path: PathBuf,
    pub field_path: String,
}

impl GetParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout_path: required_path(m, "layout_path"),
            data_path: required_path(m, "data_path"),
            field_path: m
                .get_one::<String>("field_path")
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl From<GetParams> for GetArgs {
    fn from(p: GetParams) -> Self {
        Self {
            layout_path: p.layout_path,
            data_path: p.data_path,
            field_path: p.field_path,
        }
    }
}

pub struct SetParams {
    pub layout_path: PathBuf,
    pub data_path: PathBuf,
    pub field_path: String,
    pub value: String,
}

impl SetParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            layout_path: required_path(m, "layout_path"),
            data_path: required_path(m, "data_path"),
            field_path: m
                .get_one::<String>("field_path")
                .cloned()
                .unwrap_or_default(),
            value: m.get_one::<String>("value").cloned().unwrap_or_default(),
        }
    }
}

impl From<SetParams> for SetArgs {
    fn from(p: SetParams) -> Self {
        Self {
            layout_path: p.layout_path,
            data_path: p.data_path,
            field_path: p.field_path,
            value: p.value,
        }
    }
}

// Positionals are `required(true)`, so clap has already rejected a missing one.
fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id).cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
