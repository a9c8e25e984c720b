use std::fs;
use std::path::Path;

use log::debug;

use crate::{Mapping, Result};

/// Compact JSON object, UTF-8, with non-ASCII text written as is.
pub fn to_json(mapping: &Mapping) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(mapping)?)
}

/// Replaces the file at `path` with `mapping`. Serialization happens before
/// the file is touched, so a failure leaves any previous file intact.
pub fn write_mapping(path: &Path, mapping: &Mapping) -> Result<()> {
    let bytes = to_json(mapping)?;
    fs::write(path, &bytes)?;
    debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
