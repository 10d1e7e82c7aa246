use std::path::PathBuf;

use binio::{FieldPath, Value};

use super::layout_loader::load_layout;
use super::{CliResult, in_file};

pub struct GetArgs {
    pub layout_path: PathBuf,
    pub data_path: PathBuf,
    pub field_path: String,
}

pub fn run(args: GetArgs) -> CliResult<()> {
    println!("{}", read(&args)?);
    Ok(())
}

pub fn read(args: &GetArgs) -> CliResult<Value> {
    let path = FieldPath::parse(&args.field_path)?;
    let format = load_layout(&args.layout_path)?;
    let context = format
        .open_file_read_only(&args.data_path)
        .map_err(in_file(&args.data_path))?;
    let value = path
        .read_value(&context.data())
        .map_err(in_file(&args.data_path))?;
    Ok(value)
}
