use std::path::{Path, PathBuf};

use eink_dither::BitBuffer;

use crate::emit::{encode_base64, write_bin_file, write_go_file};
use crate::error::ConvertError;
use crate::models::ImageProfile;
use crate::rendering::{decode_file, image_to_bits};

/// Result from a successful conversion
#[derive(Debug)]
pub struct Conversion {
    /// Packed bitmap
    pub bits: BitBuffer,
    /// Path of the raw `.bin` file
    pub bin_path: PathBuf,
    /// Path of the generated Go source
    pub go_path: PathBuf,
    /// Base64 of the bitmap, for stdout
    pub base64: String,
}

/// Converter that orchestrates decode → bitmap → emit
pub struct Converter {
    output_dir: PathBuf,
    generator: String,
}

impl Converter {
    /// `generator` is named in the "Code generated" marker of the Go file.
    pub fn new(output_dir: impl Into<PathBuf>, generator: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            generator: generator.into(),
        }
    }

    /// Convert the image at `input` and write both output files
    pub fn convert_file(
        &self,
        profile: ImageProfile,
        input: &Path,
    ) -> Result<Conversion, ConvertError> {
        std::fs::metadata(input).map_err(|source| ConvertError::InputMissing {
            path: input.to_path_buf(),
            source,
        })?;

        let canvas = decode_file(input)?;
        let bits = image_to_bits(&canvas, profile);

        tracing::info!(
            input = %input.display(),
            profile = %profile,
            bytes = bits.len(),
            "Converted image"
        );

        self.emit(profile, bits)
    }

    /// Write the Go source and binary file for `bits`, then base64 it
    pub fn emit(&self, profile: ImageProfile, bits: BitBuffer) -> Result<Conversion, ConvertError> {
        let go_path = self.output_dir.join(profile.go_file_name());
        write_go_file(
            &go_path,
            &self.generator,
            profile.variable_name(),
            bits.as_bytes(),
        )?;

        let bin_path = self.output_dir.join(profile.bin_file_name());
        write_bin_file(&bin_path, bits.as_bytes())?;

        let base64 = encode_base64(bits.as_bytes());

        Ok(Conversion {
            bits,
            bin_path,
            go_path,
            base64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_convert_missing_input_is_input_error() {
        let dir = tempfile::tempdir().unwrap();
        let converter = Converter::new(dir.path(), "inkbadge");

        let err = converter
            .convert_file(ImageProfile::Profile, &dir.path().join("nope.png"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert!(matches!(err, ConvertError::InputMissing { .. }));
        assert!(!dir.path().join("profile.bin").exists());
    }

    #[test]
    fn test_convert_garbage_input_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("garbage.png");
        std::fs::write(&input, b"not really a png").unwrap();
        let converter = Converter::new(dir.path(), "inkbadge");

        let err = converter
            .convert_file(ImageProfile::Splash, &input)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
        assert!(!dir.path().join("splash.bin").exists());
        assert!(!dir.path().join("splash-generated.go").exists());
    }

    #[test]
    fn test_emit_writes_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let converter = Converter::new(dir.path(), "inkbadge");
        let bits = BitBuffer::new(120, 128);

        let result = converter.emit(ImageProfile::Profile, bits).unwrap();
        assert_eq!(result.bin_path, dir.path().join("profile.bin"));
        assert_eq!(result.go_path, dir.path().join("profile-generated.go"));
        assert_eq!(std::fs::read(&result.bin_path).unwrap(), vec![0u8; 1920]);
    }

    #[test]
    fn test_emit_missing_output_dir_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let converter = Converter::new(dir.path().join("missing"), "inkbadge");

        let err = converter
            .emit(ImageProfile::Splash, BitBuffer::new(246, 128))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Output);
    }
}
