use std::path::PathBuf;

use binio::{CollectionData, FieldPath, Value};
use log::debug;

use super::layout_loader::load_layout;
use super::{CliResult, in_file};

pub struct SetArgs {
    pub layout_path: PathBuf,
    pub data_path: PathBuf,
    pub field_path: String,
    pub value: String,
}

pub fn run(args: SetArgs) -> CliResult<()> {
    let value = write(&args)?;
    println!("{} = {value}", args.field_path);
    Ok(())
}

/// Store the value, flush it and sync the file. Returns the value as stored.
pub fn write(args: &SetArgs) -> CliResult<Value> {
    let path = FieldPath::parse(&args.field_path)?;
    let format = load_layout(&args.layout_path)?;
    let context = format
        .open_file(&args.data_path)
        .map_err(in_file(&args.data_path))?;

    let value = {
        let data = context.data();
        let value = path.write_value(&data, &args.value)?;
        data.flush().map_err(in_file(&args.data_path))?;
        value
    };
    debug!("wrote {value} to {} in {}", path, args.data_path.display());
    context.close().map_err(in_file(&args.data_path))?;
    Ok(value)
}
