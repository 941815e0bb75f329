use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inkbadge::models::ImageProfile;
use inkbadge::services::Converter;

#[derive(Parser)]
#[command(name = "inkbadge")]
#[command(about = "Convert an image into a 1-bit bitmap for the e-ink badge firmware")]
struct Cli {
    /// Target image: "profile" (120x128) or "splash" (246x128)
    #[arg(value_enum)]
    profile: ImageProfile,

    /// Source image (PNG, JPEG, BMP or WebP)
    input: PathBuf,

    /// Directory for the generated .bin and .go files
    #[arg(short, long, env = "INKBADGE_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the base64 line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inkbadge=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Named in the "Code generated by ..." marker of the Go file
    let generator = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "inkbadge".to_string());

    let converter = Converter::new(&cli.output_dir, generator);
    let conversion = converter
        .convert_file(cli.profile, &cli.input)
        .with_context(|| {
            format!(
                "Failed to convert {} for {}",
                cli.input.display(),
                cli.profile
            )
        })?;

    tracing::info!(
        bin = %conversion.bin_path.display(),
        go = %conversion.go_path.display(),
        "Wrote bitmap files"
    );

    println!("{}", conversion.base64);
    Ok(())
}
