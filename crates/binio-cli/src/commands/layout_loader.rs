use std::fs;
use std::path::Path;

use binio::DataFormat;
use log::info;

use super::{CliError, CliResult, in_file};

/// Read and build the format described by the JSON layout at `path`.
pub fn load_layout(path: &Path) -> CliResult<DataFormat> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let format = DataFormat::from_json(&json).map_err(in_file(path))?;
    info!(
        "layout '{}' from {}: root {}, {} byte order",
        format.name(),
        path.display(),
        format.root_type().name(),
        format.byte_order()
    );
    Ok(format)
}
