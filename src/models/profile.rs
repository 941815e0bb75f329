use clap::ValueEnum;

/// Target image presets for the badge firmware.
///
/// Dimensions are fixed by the firmware and not configurable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ImageProfile {
    /// Profile picture: 120x128
    Profile,
    /// Splash screen: 246x128
    Splash,
}

impl ImageProfile {
    pub const ALL: [Self; 2] = [Self::Profile, Self::Splash];

    /// Selector name, also used for output file and variable names
    pub fn name(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Splash => "splash",
        }
    }

    pub fn width(self) -> usize {
        match self {
            Self::Profile => 120,
            Self::Splash => 246,
        }
    }

    pub fn height(self) -> usize {
        128
    }

    /// Size of the packed bitmap in bytes
    pub fn packed_len(self) -> usize {
        eink_dither::packed_len(self.width(), self.height())
    }

    /// Name of the Go variable holding the bitmap
    pub fn variable_name(self) -> &'static str {
        self.name()
    }

    pub fn bin_file_name(self) -> String {
        format!("{}.bin", self.name())
    }

    pub fn go_file_name(self) -> String {
        format!("{}-generated.go", self.name())
    }
}

impl std::fmt::Display for ImageProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!((ImageProfile::Profile.width(), ImageProfile::Profile.height()), (120, 128));
        assert_eq!((ImageProfile::Splash.width(), ImageProfile::Splash.height()), (246, 128));
    }

    #[test]
    fn test_packed_len() {
        assert_eq!(ImageProfile::Profile.packed_len(), 1920);
        assert_eq!(ImageProfile::Splash.packed_len(), 3936);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ImageProfile::Profile.bin_file_name(), "profile.bin");
        assert_eq!(ImageProfile::Splash.go_file_name(), "splash-generated.go");
        assert_eq!(ImageProfile::Splash.variable_name(), "splash");
    }

    #[test]
    fn test_value_enum_names_match_selector() {
        for profile in ImageProfile::ALL {
            let value = profile.to_possible_value().unwrap();
            assert_eq!(value.get_name(), profile.name());
            assert_eq!(ImageProfile::from_str(profile.name(), false), Ok(profile));
        }
        assert!(ImageProfile::from_str("banner", false).is_err());
    }
}
