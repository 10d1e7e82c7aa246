use std::path::PathBuf;

use binio::{Colors, Dumper};

use super::layout_loader::load_layout;
use super::{CliResult, in_file};

pub struct DumpArgs {
    pub layout_path: PathBuf,
    pub data_path: PathBuf,
    pub limit: usize,
    pub color: bool,
}

pub fn run(args: DumpArgs) -> CliResult<()> {
    print!("{}", render(&args)?);
    Ok(())
}

pub fn render(args: &DumpArgs) -> CliResult<String> {
    let format = load_layout(&args.layout_path)?;
    let context = format
        .open_file_read_only(&args.data_path)
        .map_err(in_file(&args.data_path))?;
    let out = Dumper::new(Colors::new(args.color))
        .with_limit(args.limit)
        .dump(&context.data())
        .map_err(in_file(&args.data_path))?;
    Ok(out)
}
