use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "webp_batch")]
#[command(about = "Batch-convert JPEG, PNG and GIF images in a directory tree to WebP")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every supported image under INPUT_DIR into OUTPUT_DIR as WebP
    Convert {
        /// Directory to read images from (searched recursively)
        input_directory: PathBuf,

        /// Directory to write WebP files to (mirrors the input tree)
        output_directory: PathBuf,

        /// WebP quality (0-100)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
        quality: Option<u8>,

        /// Use lossless WebP encoding
        #[arg(long)]
        lossless: bool,

        /// Maximum number of images converted at the same time
        #[arg(short, long)]
        threads: Option<usize>,

        /// JSON settings file (quality, lossless, threads)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Suppress progress output
        #[arg(long)]
        quiet: bool,
    },

    /// List the images that would be converted without converting them
    Scan {
        /// Directory to search for images
        input_directory: PathBuf,

        /// Show the mapped output path under this directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
