//! Output artifacts derived from a packed bitmap.
//!
//! - [`write_bin_file`]: raw bytes for `go:embed`
//! - [`write_go_file`]: Go source declaring a `[]byte` variable
//! - [`encode_base64`]: standard padded base64 for copy/paste

mod bin_file;
mod go_source;

pub use bin_file::write_bin_file;
pub use go_source::{go_source, write_go_file, BYTES_PER_LINE};

use base64::Engine;

/// Standard-alphabet, padded base64 of `bits`.
pub fn encode_base64(bits: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bits)
}
