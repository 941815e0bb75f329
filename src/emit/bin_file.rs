use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ConvertError;

/// Write `bits` verbatim to `path`, truncating any existing file.
pub fn write_bin_file(path: &Path, bits: &[u8]) -> Result<(), ConvertError> {
    let mut file = File::create(path).map_err(|source| ConvertError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(bits)
        .and_then(|()| file.flush())
        .map_err(|source| ConvertError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), bytes = bits.len(), "Wrote binary bitmap");
    Ok(())
}
