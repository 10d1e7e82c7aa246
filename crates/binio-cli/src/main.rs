mod cli;
mod commands;

use cli::{DumpParams, GetParams, SetParams, TypesParams, build_cli, init_logging};

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("types", m)) => commands::types::run(TypesParams::from_matches(m).into()),
        Some(("dump", m)) => commands::dump::run(DumpParams::from_matches(m).into()),
        Some(("get", m)) => commands::get::run(GetParams::from_matches(m).into()),
        Some(("set", m)) => commands::set::run(SetParams::from_matches(m).into()),
        _ => unreachable!("clap should have caught this"),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
