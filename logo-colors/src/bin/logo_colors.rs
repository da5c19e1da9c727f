use std::path::PathBuf;

use clap::Parser;
use logo_colors::{dominant_colors, ExtractorConfig};

/// Print the dominant colors of an image, most prevalent first
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Image to analyze
    image: Option<PathBuf>,

    /// Number of palette colors
    #[arg(long, short = 'n')]
    colors: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let defaults = ExtractorConfig::default();
    let config = ExtractorConfig {
        image_path: cli.image.unwrap_or(defaults.image_path),
        color_count: cli.colors.unwrap_or(defaults.color_count),
    };

    let colors = dominant_colors(&config.image_path, config.color_count);
    println!("Dominant Colors (RGB):");
    for color in &colors {
        println!("{}", color);
    }
}
