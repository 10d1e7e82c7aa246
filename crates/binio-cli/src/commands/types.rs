use std::path::PathBuf;

use binio::{Colors, dump_types};

use super::CliResult;
use super::layout_loader::load_layout;

pub struct TypesArgs {
    pub layout_path: PathBuf,
    pub color: bool,
}

pub fn run(args: TypesArgs) -> CliResult<()> {
    print!("{}", render(&args)?);
    Ok(())
}

pub fn render(args: &TypesArgs) -> CliResult<String> {
    let format = load_layout(&args.layout_path)?;
    Ok(dump_types(&format, Colors::new(args.color)))
}
