//! Assertion helpers for tests.

use std::path::Path;

use base64::Engine;
use pretty_assertions::assert_eq;

use super::fixtures::parse_go_bytes;

/// Assert every byte equals `expected`
pub fn assert_all_bytes(bits: &[u8], expected: u8) {
    if let Some(pos) = bits.iter().position(|&b| b != expected) {
        panic!(
            "byte {} is 0x{:02X}, expected every byte to be 0x{:02X}",
            pos, bits[pos], expected
        );
    }
}

/// Assert the three artifacts all carry exactly `bits`
pub fn assert_artifacts_match(bits: &[u8], bin_path: &Path, go_path: &Path, base64: &str) {
    let bin = std::fs::read(bin_path).unwrap();
    assert_eq!(bin, bits, "binary file differs from bitmap");

    let go = std::fs::read_to_string(go_path).unwrap();
    assert_eq!(parse_go_bytes(&go), bits, "Go source differs from bitmap");

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(base64.trim())
        .unwrap();
    assert_eq!(decoded, bits, "base64 differs from bitmap");
}
