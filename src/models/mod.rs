pub mod profile;

pub use profile::ImageProfile;
