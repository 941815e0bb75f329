//! Test fixtures: source images written to disk.

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Write a single-color image and return its path
pub fn solid_image(dir: &Path, name: &str, size: u32, color: Rgba<u8>, format: ImageFormat) -> PathBuf {
    let path = dir.join(name);
    let img = RgbaImage::from_pixel(size, size, color);
    match format {
        // JPEG and BMP encoders want RGB
        ImageFormat::Jpeg | ImageFormat::Bmp => image::DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .save_with_format(&path, format)
            .unwrap(),
        _ => img.save_with_format(&path, format).unwrap(),
    }
    path
}

/// 50x50 solid PNG
pub fn solid_png(dir: &Path, color: Rgba<u8>) -> PathBuf {
    solid_image(dir, "solid.png", 50, color, ImageFormat::Png)
}

/// Black/white checkerboard PNG of the given size
pub fn checkerboard_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("checkerboard.png");
    let img = RgbaImage::from_fn(width, height, |x, y| if (x + y) % 2 == 0 { BLACK } else { WHITE });
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

/// Horizontal gray ramp PNG
pub fn gradient_png(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("gradient.png");
    let img = RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1)) as u8;
        Rgba([v, v, v, 255])
    });
    img.save_with_format(&path, ImageFormat::Png).unwrap();
    path
}

/// Parse every `0xNN` literal out of generated Go source
pub fn parse_go_bytes(source: &str) -> Vec<u8> {
    let start = source.find("[]byte{").expect("missing byte slice") + "[]byte{".len();
    let end = source.rfind('}').expect("missing closing brace");
    source[start..end]
        .split(',')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            let hex = tok.strip_prefix("0x").expect("missing 0x prefix");
            assert_eq!(hex.len(), 2, "literal {tok} is not two digits");
            assert_eq!(hex, hex.to_uppercase(), "literal {tok} is not uppercase");
            u8::from_str_radix(hex, 16).unwrap()
        })
        .collect()
}
