use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::ConvertError;

/// Hex literals per line in generated Go source.
pub const BYTES_PER_LINE: usize = 32;

/// Render `bits` as a Go source file declaring `var <variable> = []byte{...}`.
///
/// `generator` is named in the "Code generated ... DO NOT EDIT." marker so
/// Go tooling treats the file as generated. Every byte is written as
/// `0xNN, ` with a line break before each group of [`BYTES_PER_LINE`].
pub fn go_source(generator: &str, variable: &str, bits: &[u8]) -> String {
    // "0xNN, " is 6 chars; plus a newline and tab per line
    let mut out = String::with_capacity(96 + bits.len() * 6 + bits.len() / BYTES_PER_LINE * 2);

    out.push_str("// Code generated by ");
    out.push_str(generator);
    out.push_str(" DO NOT EDIT.\n\npackage main\n\nvar ");
    out.push_str(variable);
    out.push_str(" = []byte{");

    for (i, b) in bits.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            out.push_str("\n\t");
        }
        out.push_str(&format!("0x{b:02X}, "));
    }

    out.push_str("\n}\n");
    out
}

/// Write [`go_source`] to `path`.
pub fn write_go_file(
    path: &Path,
    generator: &str,
    variable: &str,
    bits: &[u8],
) -> Result<(), ConvertError> {
    let source = go_source(generator, variable, bits);

    let mut file = File::create(path).map_err(|source| ConvertError::OutputCreate {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(source.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| ConvertError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), variable, bytes = bits.len(), "Wrote Go source");
    Ok(())
}
